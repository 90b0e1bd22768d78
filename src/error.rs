//! # Errores del Servidor
//!
//! Solo fallos de arranque e infraestructura. Los errores de aplicación
//! (400, 404, ...) son respuestas, no `ServerError`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuración inválida
    #[error("invalid configuration: {0}")]
    Config(String),

    /// No se pudo crear la carpeta de uploads
    #[error("cannot prepare upload directory {path}: {source}")]
    UploadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Fallo al hacer bind del listener
    #[error("cannot bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
