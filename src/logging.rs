//! Inicialización de logs con `tracing-subscriber`.
//!
//! `RUST_LOG` tiene prioridad sobre el nivel de la configuración.

use tracing_subscriber::EnvFilter;

/// Instala el subscriber global; llamadas repetidas no hacen nada
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_thread_ids(true)
        .try_init();
}
