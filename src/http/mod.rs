//! # Módulo HTTP
//!
//! Implementa el subconjunto de HTTP/1.1 que usa el servidor, sin librerías
//! de alto nivel:
//!
//! - Framing de mensajes sobre la conexión (`framer`)
//! - Validación de la request line (`request`)
//! - Respuestas 200 y plantillas fijas (`response`)
//! - Content-types por extensión (`mime`)
//!
//! ### Formato de Request
//!
//! ```text
//! GET /path?query=value HTTP/1.1\r\n
//! Header-Name: Header-Value\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 2\r\n
//! \r\n
//! 42
//! ```

pub mod framer;    // Lectura de mensajes desde la conexión
pub mod mime;      // Tabla de content-types
pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use framer::{FrameError, FrameLimits, MessageReader};
pub use mime::ContentTypeTable;
pub use request::{Method, ParseError, Request};
pub use response::{Fixed, FixedResponses, Reply, Response};
pub use status::StatusCode;
