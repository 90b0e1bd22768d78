//! # rootweb
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo implementado sobre `std::net`: valida la request
//! line a mano, enruta a archivos estáticos o a un puñado de endpoints
//! calculados, y arma las respuestas byte a byte.
//!
//! ## Arquitectura
//!
//! ```text
//! framer → request → router → {static_files | endpoints} → response → socket
//! ```
//!
//! - `http`: framing, parsing, respuestas y content-types
//! - `router`: reglas de despacho
//! - `storage`: `FileStore` y archivos estáticos
//! - `endpoints`: calculate-next, calculate-area, image, upload
//! - `server`: accept loop y loop por conexión
//! - `config`, `logging`, `error`: ambiente
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use rootweb::config::Config;
//! use rootweb::server::Server;
//!
//! let server = Server::bind(Config::default()).expect("bind");
//! server.run().expect("accept loop");
//! ```

pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod logging;
pub mod router;
pub mod server;
pub mod storage;
