//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! 1. Escucha en un puerto (`tcp`)
//! 2. Acepta conexiones, un thread por conexión
//! 3. Por cada conexión: lee mensajes, enruta y escribe respuestas en orden
//!    (`connection`)

pub mod connection;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use connection::{handle_connection, ServerContext};
pub use tcp::Server;
