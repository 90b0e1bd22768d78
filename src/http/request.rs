//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Parser mínimo: solo la request line decide si el request es válido.
//!
//! ## Formato aceptado
//!
//! ```text
//! GET /calculate-next?num=41 HTTP/1.1\r\n
//! Host: localhost:8080\r\n
//! \r\n
//! ```
//!
//! 1. **Request Line**: debe empezar con `GET ` o `POST` y terminar con `HTTP/1.1`
//! 2. **Headers**: se guardan solo para el framing del body (`Content-Length`)
//! 3. **Body**: lo agrega el loop de conexión en una segunda lectura

use thiserror::Error;

/// Versión de protocolo exigida al final de la request line
pub const PROTOCOL: &[u8] = b"HTTP/1.1";

/// Métodos HTTP soportados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Archivos estáticos y endpoints de consulta
    GET,

    /// POST - Solo `/upload`
    POST,
}

impl Method {
    /// Detecta el método por prefijo de 4 bytes de la request line
    fn from_request_line(line: &[u8]) -> Option<Self> {
        if line.starts_with(b"GET ") {
            Some(Method::GET)
        } else if line.starts_with(b"POST") {
            Some(Method::POST)
        } else {
            None
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
        }
    }
}

/// Errores que invalidan el request completo (400 y se cierra la conexión)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Buffer vacío
    #[error("Empty request")]
    EmptyRequest,

    /// La request line no empieza con `GET ` ni `POST`
    #[error("Unsupported HTTP method in request line: {0}")]
    UnsupportedMethod(String),

    /// La request line no termina con `HTTP/1.1`
    #[error("Request line does not end with HTTP/1.1: {0}")]
    InvalidHttpVersion(String),

    /// La request line no es UTF-8 válido
    #[error("Request line is not valid UTF-8")]
    InvalidEncoding,
}

/// Representa un request HTTP parseado
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,

    /// Target tal cual llegó (path + `?query`), puede ser vacío
    target: String,

    /// Path decodificado, sin query (ej: "/css/style.css")
    path: String,

    /// Texto crudo después del primer `?`, si lo hay
    query: Option<String>,

    /// Headers en orden de llegada; no se usan para routing
    headers: Vec<(String, String)>,

    body: Vec<u8>,
}

impl Request {
    /// Parsea el head de un request (request line + headers)
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use rootweb::http::Request;
    ///
    /// let raw = b"GET /calculate-next?num=10 HTTP/1.1\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.path(), "/calculate-next");
    /// assert_eq!(request.query(), Some("num=10"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        if buffer.is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        let mut lines = buffer.split_crlf();
        let request_line = lines.next().unwrap_or_default();

        let method = Method::from_request_line(request_line)
            .ok_or_else(|| ParseError::UnsupportedMethod(lossy(request_line)))?;

        if !request_line.ends_with(PROTOCOL) {
            return Err(ParseError::InvalidHttpVersion(lossy(request_line)));
        }

        let line = std::str::from_utf8(request_line).map_err(|_| ParseError::InvalidEncoding)?;

        // Segundo token; si falta el request sigue siendo válido con target vacío
        let target = line.split_whitespace().nth(1).unwrap_or("").to_string();
        let (path, query) = Self::split_target(&target);
        let headers = Self::parse_headers(lines);

        Ok(Request {
            method,
            target,
            path,
            query,
            headers,
            body: Vec::new(),
        })
    }

    /// Separa path y query, decodificando el path (%20 → espacio, etc.)
    fn split_target(target: &str) -> (String, Option<String>) {
        let (raw_path, query) = match target.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (target, None),
        };

        let path = urlencoding::decode(raw_path)
            .map(|decoded| decoded.into_owned())
            .unwrap_or_else(|_| raw_path.to_string());

        (path, query)
    }

    /// Cada header tiene formato "Name: Value"; líneas sin ':' se ignoran
    fn parse_headers<'a>(lines: impl Iterator<Item = &'a [u8]>) -> Vec<(String, String)> {
        let mut headers = Vec::new();

        for line in lines {
            // La línea vacía marca el fin de los headers
            if line.is_empty() {
                break;
            }

            let line = String::from_utf8_lossy(line);
            if let Some((name, value)) = line.split_once(':') {
                headers.push((name.trim().to_string(), value.trim().to_string()));
            }
        }

        headers
    }

    /// Adjunta el body leído en la segunda pasada del framer
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> Method {
        self.method
    }

    /// Target crudo (path + query)
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Obtiene el path decodificado
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Texto después del `?`, sin decodificar
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Busca un header sin distinguir mayúsculas
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// `Content-Length` declarado, si es un número válido
    pub fn content_length(&self) -> Option<usize> {
        self.header("Content-Length")?.parse().ok()
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Split por `\r\n` sobre bytes (el head puede no ser UTF-8)
trait SplitCrlf {
    fn split_crlf(&self) -> CrlfLines<'_>;
}

impl SplitCrlf for [u8] {
    fn split_crlf(&self) -> CrlfLines<'_> {
        CrlfLines { rest: Some(self) }
    }
}

struct CrlfLines<'a> {
    rest: Option<&'a [u8]>,
}

impl<'a> Iterator for CrlfLines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        match rest.windows(2).position(|w| w == b"\r\n") {
            Some(pos) => {
                self.rest = Some(&rest[pos + 2..]);
                Some(&rest[..pos])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_get() {
        let raw = b"GET / HTTP/1.1\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.target(), "/");
        assert_eq!(request.path(), "/");
        assert_eq!(request.query(), None);
    }

    #[test]
    fn test_parse_post() {
        let raw = b"POST /upload?file-name=a.txt HTTP/1.1\r\nContent-Length: 5\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.path(), "/upload");
        assert_eq!(request.query(), Some("file-name=a.txt"));
        assert_eq!(request.content_length(), Some(5));
    }

    #[test]
    fn test_query_split_on_first_question_mark() {
        let raw = b"GET /calculate-area?height=3&width=4?x HTTP/1.1\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.path(), "/calculate-area");
        assert_eq!(request.query(), Some("height=3&width=4?x"));
    }

    #[test]
    fn test_path_is_decoded() {
        let raw = b"GET /txt/my%20notes.txt HTTP/1.1\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.target(), "/txt/my%20notes.txt");
        assert_eq!(request.path(), "/txt/my notes.txt");
    }

    #[test]
    fn test_headers_case_insensitive() {
        let raw = b"GET / HTTP/1.1\r\nHost: localhost\r\ncontent-length: 12\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.header("host"), Some("localhost"));
        assert_eq!(request.content_length(), Some(12));
    }

    #[test]
    fn test_malformed_header_is_ignored() {
        let raw = b"GET / HTTP/1.1\r\nnot-a-header\r\nHost: x\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.header("Host"), Some("x"));
    }

    #[test]
    fn test_missing_target_is_valid_and_empty() {
        let raw = b"POSTHTTP/1.1\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.target(), "");
    }

    #[test]
    fn test_invalid_method() {
        let raw = b"PUT / HTTP/1.1\r\n\r\n";
        let result = Request::parse(raw);

        assert!(matches!(result, Err(ParseError::UnsupportedMethod(_))));
    }

    #[test]
    fn test_get_prefix_requires_space() {
        let raw = b"GETX / HTTP/1.1\r\n\r\n";
        assert!(matches!(
            Request::parse(raw),
            Err(ParseError::UnsupportedMethod(_))
        ));
    }

    #[test]
    fn test_invalid_version() {
        let raw = b"GET / HTTP/1.0\r\n\r\n";
        let result = Request::parse(raw);

        assert!(matches!(result, Err(ParseError::InvalidHttpVersion(_))));
    }

    #[test]
    fn test_missing_version() {
        let raw = b"GET /index.html\r\n\r\n";
        assert!(matches!(
            Request::parse(raw),
            Err(ParseError::InvalidHttpVersion(_))
        ));
    }

    #[test]
    fn test_empty_request() {
        assert_eq!(Request::parse(b"").unwrap_err(), ParseError::EmptyRequest);
    }

    #[test]
    fn test_with_body() {
        let request = Request::parse(b"POST /upload?file-name=x HTTP/1.1\r\n\r\n")
            .unwrap()
            .with_body(b"hello".to_vec());

        assert_eq!(request.body(), b"hello");
    }
}
