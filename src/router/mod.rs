//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Mapea un request a archivos estáticos, a un endpoint calculado o a una
//! respuesta fija.
//!
//! ## Reglas (en orden)
//!
//! ```text
//! 1. ""  o "/"                 → /index.html
//! 2. target con "?"            → endpoints calculados
//! 3. último segmento reservado → moved (302) | forbidden (403) | error (500)
//! 4. carpeta + extensión       → content-type, o 404 si no se conoce
//! 5. archivo                   → 200 con sus bytes, o 404 si no existe
//! ```
//!
//! Las imágenes se tipan por carpeta (`imgs/`) y el resto por extensión;
//! esa asimetría es intencional.

use crate::endpoints::{Call, EndpointService};
use crate::http::{ContentTypeTable, Fixed, Reply, Request, Response};
use crate::storage::StaticFileService;

/// Documento servido para `/` y para el target vacío
pub const DEFAULT_DOCUMENT: &str = "/index.html";

/// Segmentos finales que cortocircuitan el routing
const KEYWORDS: [(&str, Fixed); 3] = [
    ("moved", Fixed::Moved),
    ("forbidden", Fixed::Forbidden),
    ("error", Fixed::InternalError),
];

/// Router con tablas fijas, construido una vez al arrancar
pub struct Router {
    content_types: ContentTypeTable,
    static_files: StaticFileService,
    endpoints: EndpointService,
}

impl Router {
    pub fn new(
        content_types: ContentTypeTable,
        static_files: StaticFileService,
        endpoints: EndpointService,
    ) -> Self {
        Self {
            content_types,
            static_files,
            endpoints,
        }
    }

    /// Decide la respuesta para un request ya validado
    ///
    /// # Ejemplo
    /// ```
    /// use rootweb::endpoints::EndpointService;
    /// use rootweb::http::{ContentTypeTable, Fixed, Reply, Request};
    /// use rootweb::router::Router;
    /// use rootweb::storage::{DiskStore, StaticFileService};
    /// use std::sync::Arc;
    ///
    /// let store = Arc::new(DiskStore);
    /// let router = Router::new(
    ///     ContentTypeTable::default(),
    ///     StaticFileService::new("./webroot", store.clone()),
    ///     EndpointService::new("./webroot/uploads", store),
    /// );
    ///
    /// let request = Request::parse(b"GET /forbidden HTTP/1.1\r\n\r\n").unwrap();
    /// assert_eq!(router.route(&request), Reply::Fixed(Fixed::Forbidden));
    /// ```
    pub fn route(&self, request: &Request) -> Reply {
        let target = request.target();
        let path = if target.is_empty() || target == "/" {
            DEFAULT_DOCUMENT
        } else {
            request.path()
        };

        if let Some(params) = request.query() {
            let call = Call {
                params,
                body: request.body(),
            };
            return self.endpoints.dispatch(request.method(), path, call);
        }

        let relative = path.strip_prefix('/').unwrap_or(path);
        let segments: Vec<&str> = relative.split('/').collect();
        let filename = segments.last().copied().unwrap_or("");

        if let Some((_, fixed)) = KEYWORDS.iter().find(|(keyword, _)| *keyword == filename) {
            return (*fixed).into();
        }

        let folder = segments[0];
        let Some(content_type) = self.content_types.lookup(folder, filename) else {
            tracing::debug!(path, "tipo de archivo no reconocido");
            return Fixed::NotFound.into();
        };

        let directory = segments[..segments.len() - 1].join("/");
        match self.static_files.fetch(&directory, filename) {
            Some(bytes) => Response::ok(content_type, bytes).into(),
            None => Fixed::NotFound.into(),
        }
    }
}
