//! # Construcción de Respuestas HTTP
//!
//! Dos caminos:
//!
//! - [`Response`]: respuestas `200 OK` armadas por request. `Content-Length`
//!   siempre se calcula del body real.
//! - [`FixedResponses`]: plantillas de bytes para 302/400/403/404/500,
//!   renderizadas una sola vez al arrancar y compartidas por referencia.
//!
//! ## Formato de una respuesta 200
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 2\r\n
//! \r\n
//! 42
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```
//! use rootweb::http::Response;
//!
//! let response = Response::ok("text/plain", b"42".to_vec());
//! let bytes = response.to_bytes();
//! assert!(bytes.ends_with(b"\r\n\r\n42"));
//! ```

use super::StatusCode;

/// Representa una respuesta HTTP/1.1 armada por request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: StatusCode,

    /// Headers en orden de inserción (es el orden en el wire)
    headers: Vec<(String, String)>,

    body: Vec<u8>,
}

impl Response {
    /// Crea una respuesta sin headers ni body
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// `200 OK` con `Content-Type` y el body dado
    pub fn ok(content_type: &str, body: Vec<u8>) -> Self {
        Self::new(StatusCode::Ok)
            .with_header("Content-Type", content_type)
            .with_body(body)
    }

    /// Agrega un header; si ya existe se reemplaza conservando su posición
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.set_header(name, value);
        self
    }

    /// Establece el body y recalcula `Content-Length`
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        let length = self.body.len().to_string();
        self.set_header("Content-Length", &length);
        self
    }

    fn set_header(&mut self, name: &str, value: &str) {
        match self
            .headers
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// - Status line: `HTTP/1.1 200 OK\r\n`
    /// - Headers: `Header-Name: Value\r\n`
    /// - Línea vacía: `\r\n`
    /// - Body
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(64 + self.body.len());

        result.extend_from_slice(format!("HTTP/1.1 {}\r\n", self.status).as_bytes());

        for (name, value) in &self.headers {
            result.extend_from_slice(format!("{}: {}\r\n", name, value).as_bytes());
        }

        result.extend_from_slice(b"\r\n");
        result.extend_from_slice(&self.body);

        result
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene un header por nombre
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Respuestas que no dependen del request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixed {
    Moved,
    BadRequest,
    Forbidden,
    NotFound,
    InternalError,
}

impl Fixed {
    pub fn status(&self) -> StatusCode {
        match self {
            Fixed::Moved => StatusCode::MovedTemporarily,
            Fixed::BadRequest => StatusCode::BadRequest,
            Fixed::Forbidden => StatusCode::Forbidden,
            Fixed::NotFound => StatusCode::NotFound,
            Fixed::InternalError => StatusCode::InternalServerError,
        }
    }
}

/// Plantillas de bytes de las respuestas fijas
///
/// Se construyen una vez en el arranque; el body de error es
/// `<h1>{código} {razón}</h1>` sin `Content-Length`, y el 302 solo lleva
/// `Location`.
#[derive(Debug, Clone)]
pub struct FixedResponses {
    moved: Vec<u8>,
    bad_request: Vec<u8>,
    forbidden: Vec<u8>,
    not_found: Vec<u8>,
    internal_error: Vec<u8>,
}

impl FixedResponses {
    /// Renderiza todas las plantillas; `redirect_location` es el destino del 302
    pub fn new(redirect_location: &str) -> Self {
        Self {
            moved: format!(
                "HTTP/1.1 {}\r\nLocation: {}\r\n\r\n",
                StatusCode::MovedTemporarily,
                redirect_location
            )
            .into_bytes(),
            bad_request: Self::error_page(StatusCode::BadRequest),
            forbidden: Self::error_page(StatusCode::Forbidden),
            not_found: Self::error_page(StatusCode::NotFound),
            internal_error: Self::error_page(StatusCode::InternalServerError),
        }
    }

    fn error_page(status: StatusCode) -> Vec<u8> {
        format!("HTTP/1.1 {status}\r\n\r\n<h1>{status}</h1>").into_bytes()
    }

    /// Bytes exactos a escribir para una respuesta fija
    pub fn bytes(&self, fixed: Fixed) -> &[u8] {
        match fixed {
            Fixed::Moved => &self.moved,
            Fixed::BadRequest => &self.bad_request,
            Fixed::Forbidden => &self.forbidden,
            Fixed::NotFound => &self.not_found,
            Fixed::InternalError => &self.internal_error,
        }
    }
}

impl Default for FixedResponses {
    fn default() -> Self {
        Self::new("/index.html")
    }
}

/// Resultado del routing de un request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Respuesta 200 armada para este request
    Built(Response),

    /// Una de las plantillas fijas
    Fixed(Fixed),
}

impl Reply {
    pub fn status(&self) -> StatusCode {
        match self {
            Reply::Built(response) => response.status(),
            Reply::Fixed(fixed) => fixed.status(),
        }
    }

    /// Serializa la respuesta usando las plantillas compartidas
    pub fn to_bytes(&self, fixed: &FixedResponses) -> Vec<u8> {
        match self {
            Reply::Built(response) => response.to_bytes(),
            Reply::Fixed(kind) => fixed.bytes(*kind).to_vec(),
        }
    }
}

impl From<Fixed> for Reply {
    fn from(fixed: Fixed) -> Self {
        Reply::Fixed(fixed)
    }
}

impl From<Response> for Reply {
    fn from(response: Response) -> Self {
        Reply::Built(response)
    }
}
