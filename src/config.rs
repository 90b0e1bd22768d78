//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración por argumentos CLI y variables de entorno. Se construye una
//! vez al arrancar y no cambia después.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./rootweb --port 8080 \
//!   --doc-root ./webroot \
//!   --idle-timeout-ms 2000
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 DOC_ROOT=/srv/www ./rootweb
//! ```

use crate::http::FrameLimits;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Configuración del servidor HTTP/1.1
#[derive(Debug, Clone, Parser)]
#[command(name = "rootweb")]
#[command(about = "Servidor HTTP/1.1 mínimo: archivos estáticos, endpoints calculados y uploads")]
#[command(version)]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "8080", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "127.0.0.1", env = "HTTP_HOST")]
    pub host: String,

    // === Archivos ===

    /// Document root (index.html, css/, js/, txt/, imgs/)
    #[arg(long = "doc-root", default_value = "./webroot", env = "DOC_ROOT")]
    pub doc_root: PathBuf,

    /// Carpeta de uploads (por defecto <doc-root>/uploads)
    #[arg(long = "upload-dir", env = "UPLOAD_DIR")]
    pub upload_dir: Option<PathBuf>,

    /// Carpeta cuyos archivos se tipan con la tabla de imágenes
    #[arg(long = "images-folder", default_value = "imgs", env = "IMAGES_FOLDER")]
    pub images_folder: String,

    /// Destino del 302 de /moved
    #[arg(long = "redirect-location", default_value = "/index.html", env = "REDIRECT_LOCATION")]
    pub redirect_location: String,

    // === Conexiones ===

    /// Tiempo sin datos antes de cerrar la conexión, en milisegundos
    #[arg(long = "idle-timeout-ms", default_value = "2000", env = "IDLE_TIMEOUT_MS")]
    pub idle_timeout_ms: u64,

    /// Bytes por cada read() sobre el socket
    #[arg(long = "chunk-size", default_value = "4096", env = "CHUNK_SIZE")]
    pub chunk_size: usize,

    /// Tamaño máximo de request line + headers
    #[arg(long = "max-head-bytes", default_value = "65536", env = "MAX_HEAD_BYTES")]
    pub max_head_bytes: usize,

    /// Tamaño máximo del body de un upload
    #[arg(long = "max-body-bytes", default_value = "10485760", env = "MAX_BODY_BYTES")]
    pub max_body_bytes: usize,

    // === Logging ===

    /// Nivel de log (RUST_LOG tiene prioridad)
    #[arg(long = "log-level", default_value = "info", env = "LOG_LEVEL")]
    pub log_level: String,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use rootweb::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:8080");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Carpeta de uploads efectiva
    pub fn upload_root(&self) -> PathBuf {
        self.upload_dir
            .clone()
            .unwrap_or_else(|| self.doc_root.join("uploads"))
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_millis(self.idle_timeout_ms)
    }

    pub fn frame_limits(&self) -> FrameLimits {
        FrameLimits {
            chunk_size: self.chunk_size,
            max_head_bytes: self.max_head_bytes,
            max_body_bytes: self.max_body_bytes,
        }
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.idle_timeout_ms == 0 {
            return Err("Idle timeout must be > 0".to_string());
        }
        if self.chunk_size == 0 {
            return Err("Chunk size must be >= 1".to_string());
        }
        if self.max_head_bytes == 0 {
            return Err("Max head bytes must be >= 1".to_string());
        }
        if self.max_body_bytes == 0 {
            return Err("Max body bytes must be >= 1".to_string());
        }
        if self.images_folder.is_empty() || self.images_folder.contains('/') {
            return Err("Images folder must be a single path segment".to_string());
        }
        if !self.redirect_location.starts_with('/') {
            return Err("Redirect location must start with '/'".to_string());
        }

        Ok(())
    }

    /// Registra un resumen de la configuración
    pub fn print_summary(&self) {
        tracing::info!(address = %self.address(), "red");
        tracing::info!(
            doc_root = %self.doc_root.display(),
            upload_root = %self.upload_root().display(),
            images_folder = %self.images_folder,
            "archivos"
        );
        tracing::info!(
            idle_timeout_ms = self.idle_timeout_ms,
            chunk_size = self.chunk_size,
            max_head_bytes = self.max_head_bytes,
            max_body_bytes = self.max_body_bytes,
            "conexiones"
        );
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            doc_root: PathBuf::from("./webroot"),
            upload_dir: None,
            images_folder: "imgs".to_string(),
            redirect_location: "/index.html".to_string(),
            idle_timeout_ms: 2000,
            chunk_size: 4096,
            max_head_bytes: 64 * 1024,
            max_body_bytes: 10 * 1024 * 1024,
            log_level: "info".to_string(),
        }
    }
}
