//! # Tabla de Content-Types
//!
//! Dos tablas separadas: documentos se tipan por extensión y las imágenes
//! solo cuando están dentro de la carpeta de imágenes. `.gif` se sirve como
//! `image/jpeg`, igual que `.jpg`.

/// Tabla extensión → MIME, construida una vez al arrancar
#[derive(Debug, Clone)]
pub struct ContentTypeTable {
    images_folder: String,
    documents: Vec<(&'static str, &'static str)>,
    images: Vec<(&'static str, &'static str)>,
}

impl ContentTypeTable {
    pub fn new(images_folder: &str) -> Self {
        Self {
            images_folder: images_folder.to_string(),
            documents: vec![
                ("html", "text/html;charset=utf-8"),
                ("css", "text/css"),
                ("js", "text/javascript; charset=UTF-8"),
                ("txt", "text/plain"),
            ],
            images: vec![
                ("ico", "image/x-icon"),
                ("gif", "image/jpeg"),
                ("png", "image/png"),
                ("jpg", "image/jpeg"),
            ],
        }
    }

    /// Resuelve el MIME de `filename` según la carpeta raíz del path
    ///
    /// Retorna `None` si la combinación carpeta/extensión no es conocida.
    ///
    /// # Ejemplo
    /// ```
    /// use rootweb::http::ContentTypeTable;
    ///
    /// let table = ContentTypeTable::new("imgs");
    /// assert_eq!(table.lookup("imgs", "a.gif"), Some("image/jpeg"));
    /// assert_eq!(table.lookup("css", "a.png"), None);
    /// ```
    pub fn lookup(&self, folder: &str, filename: &str) -> Option<&'static str> {
        let (_, extension) = filename.rsplit_once('.')?;

        let table = if folder == self.images_folder {
            &self.images
        } else {
            &self.documents
        };

        table
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, mime)| *mime)
    }
}

impl Default for ContentTypeTable {
    fn default() -> Self {
        Self::new("imgs")
    }
}
