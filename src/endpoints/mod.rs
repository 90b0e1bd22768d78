//! # Endpoints Calculados
//! src/endpoints/mod.rs
//!
//! Handlers que no leen archivos del document root. Se seleccionan por el
//! path antes del `?` y reciben el texto de parámetros crudo.
//!
//! | Path              | Método | Parámetros                    |
//! |-------------------|--------|-------------------------------|
//! | `/calculate-next` | GET    | `num=<int>`                   |
//! | `/calculate-area` | GET    | `height=<int>&width=<int>`    |
//! | `/image`          | GET    | `image-name=<nombre>`         |
//! | `/upload`         | POST   | `file-name=<nombre>` + body   |
//!
//! Cada endpoint exige que los parámetros empiecen exactamente con su clave;
//! cualquier otro orden es 400.

pub mod calculate;
pub mod files;

use crate::http::{Fixed, Method, Reply};
use crate::storage::FileStore;
use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Arc;

/// Datos de una llamada a un endpoint
#[derive(Debug, Clone, Copy)]
pub struct Call<'a> {
    /// Texto después del `?`, sin decodificar
    pub params: &'a str,

    /// Body del request (vacío en GET)
    pub body: &'a [u8],
}

/// Recursos compartidos por los handlers
#[derive(Clone)]
pub struct EndpointContext {
    /// Carpeta destino de `/upload` y origen de `/image`
    pub upload_root: PathBuf,
    pub store: Arc<dyn FileStore>,
}

/// Tipo de función handler
pub type Handler = fn(&EndpointContext, Call<'_>) -> Reply;

/// Entrada de la tabla de endpoints
#[derive(Clone, Copy)]
struct Endpoint {
    path: &'static str,
    method: Method,
    handler: Handler,
}

/// Servicio de endpoints calculados, con su tabla fija de rutas
pub struct EndpointService {
    context: EndpointContext,
    endpoints: Vec<Endpoint>,
}

impl EndpointService {
    /// Crea el servicio con los cuatro endpoints registrados
    pub fn new(upload_root: impl Into<PathBuf>, store: Arc<dyn FileStore>) -> Self {
        let mut service = Self {
            context: EndpointContext {
                upload_root: upload_root.into(),
                store,
            },
            endpoints: Vec::new(),
        };

        service.register("/calculate-next", Method::GET, calculate::next_handler);
        service.register("/calculate-area", Method::GET, calculate::area_handler);
        service.register("/image", Method::GET, files::image_handler);
        service.register("/upload", Method::POST, files::upload_handler);

        service
    }

    fn register(&mut self, path: &'static str, method: Method, handler: Handler) {
        self.endpoints.push(Endpoint {
            path,
            method,
            handler,
        });
    }

    /// Ejecuta el endpoint de `function`
    ///
    /// Un path desconocido, o un método que no corresponde, es 404.
    pub fn dispatch(&self, method: Method, function: &str, call: Call<'_>) -> Reply {
        let endpoint = self
            .endpoints
            .iter()
            .find(|endpoint| endpoint.path == function && endpoint.method == method);

        match endpoint {
            Some(endpoint) => (endpoint.handler)(&self.context, call),
            None => {
                tracing::debug!(function, method = method.as_str(), "endpoint desconocido");
                Fixed::NotFound.into()
            }
        }
    }
}

/// Valor de un parámetro que debe estar al inicio del texto
///
/// `key` incluye el `=`. El valor termina en el primer `&` y se decodifica;
/// retorna `None` si la clave no está al inicio o el valor no es UTF-8.
///
/// # Ejemplo
/// ```
/// use rootweb::endpoints::leading_param;
///
/// assert_eq!(leading_param("num=41&x=1", "num=").as_deref(), Some("41"));
/// assert_eq!(leading_param("x=1&num=41", "num="), None);
/// ```
pub fn leading_param<'a>(params: &'a str, key: &str) -> Option<Cow<'a, str>> {
    let rest = params.strip_prefix(key)?;
    let raw = rest.split('&').next().unwrap_or("");
    urlencoding::decode(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusCode;
    use crate::storage::DiskStore;
    use tempfile::tempdir;

    fn service(root: &std::path::Path) -> EndpointService {
        EndpointService::new(root, Arc::new(DiskStore))
    }

    fn get(params: &str) -> Call<'_> {
        Call { params, body: b"" }
    }

    #[test]
    fn test_dispatch_known_endpoint() {
        let dir = tempdir().unwrap();
        let reply = service(dir.path()).dispatch(Method::GET, "/calculate-next", get("num=1"));

        assert_eq!(reply.status(), StatusCode::Ok);
    }

    #[test]
    fn test_unknown_function_is_not_found() {
        let dir = tempdir().unwrap();
        let reply = service(dir.path()).dispatch(Method::GET, "/calculate-volume", get("num=1"));

        assert_eq!(reply, Reply::Fixed(Fixed::NotFound));
    }

    #[test]
    fn test_wrong_method_is_not_found() {
        let dir = tempdir().unwrap();
        let svc = service(dir.path());

        assert_eq!(
            svc.dispatch(Method::POST, "/calculate-next", get("num=1")),
            Reply::Fixed(Fixed::NotFound)
        );
        assert_eq!(
            svc.dispatch(Method::GET, "/upload", get("file-name=a.txt")),
            Reply::Fixed(Fixed::NotFound)
        );
    }

    #[test]
    fn test_leading_param() {
        assert_eq!(leading_param("num=5", "num=").as_deref(), Some("5"));
        assert_eq!(leading_param("num=", "num=").as_deref(), Some(""));
        assert_eq!(leading_param("num=a%20b&z", "num=").as_deref(), Some("a b"));
        assert_eq!(leading_param("numx=5", "num="), None);
        assert_eq!(leading_param("", "num="), None);
    }
}
