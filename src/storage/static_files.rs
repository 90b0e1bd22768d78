//! # Servicio de Archivos Estáticos
//!
//! Resuelve `root + carpeta + archivo` y lee los bytes. No hay caché ni
//! sanitización de `..`: un path como `/../secret.txt` sale del document root.

use super::FileStore;
use std::path::PathBuf;
use std::sync::Arc;

/// Lookup de archivos bajo el document root
#[derive(Clone)]
pub struct StaticFileService {
    root: PathBuf,
    store: Arc<dyn FileStore>,
}

impl StaticFileService {
    pub fn new(root: impl Into<PathBuf>, store: Arc<dyn FileStore>) -> Self {
        Self {
            root: root.into(),
            store,
        }
    }

    /// Bytes de `root/folder/filename`, o `None` si no se puede leer
    ///
    /// `folder` es la parte de directorio del path (puede ser vacía).
    pub fn fetch(&self, folder: &str, filename: &str) -> Option<Vec<u8>> {
        let path = self.resolve(folder, filename);
        self.store.get(&path)
    }

    fn resolve(&self, folder: &str, filename: &str) -> PathBuf {
        let mut path = self.root.clone();
        if !folder.is_empty() {
            path.push(folder);
        }
        path.push(filename);
        path
    }
}

impl std::fmt::Debug for StaticFileService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticFileService")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DiskStore;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_fetch_root_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<h1>hi</h1>").unwrap();

        let service = StaticFileService::new(dir.path(), Arc::new(DiskStore));
        assert_eq!(service.fetch("", "index.html"), Some(b"<h1>hi</h1>".to_vec()));
    }

    #[test]
    fn test_fetch_nested_file() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("css")).unwrap();
        fs::write(dir.path().join("css/style.css"), "body{}").unwrap();

        let service = StaticFileService::new(dir.path(), Arc::new(DiskStore));
        assert_eq!(service.fetch("css", "style.css"), Some(b"body{}".to_vec()));
        assert_eq!(service.fetch("js", "style.css"), None);
    }

    #[test]
    fn test_fetch_missing() {
        let dir = tempdir().unwrap();
        let service = StaticFileService::new(dir.path(), Arc::new(DiskStore));

        assert_eq!(service.fetch("txt", "missing.txt"), None);
    }

    #[test]
    fn test_parent_segments_are_not_sanitized() {
        let outer = tempdir().unwrap();
        let root = outer.path().join("webroot");
        fs::create_dir_all(&root).unwrap();
        fs::write(outer.path().join("secret.txt"), "leak").unwrap();

        // Hueco conocido: `..` escapa del document root
        let service = StaticFileService::new(&root, Arc::new(DiskStore));
        assert_eq!(service.fetch("..", "secret.txt"), Some(b"leak".to_vec()));
    }
}
