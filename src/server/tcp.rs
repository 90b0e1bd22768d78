//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Acepta conexiones y atiende cada una en su propio thread. Lo único que
//! comparten los threads es el `ServerContext` (solo lectura) y la carpeta de
//! uploads en disco.

use super::connection::{handle_connection, ServerContext};
use crate::config::Config;
use crate::error::{Result, ServerError};
use std::fs;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Servidor HTTP/1.1, un thread por conexión
pub struct Server {
    config: Config,
    context: Arc<ServerContext>,
    listener: TcpListener,
}

impl Server {
    /// Valida la configuración, prepara la carpeta de uploads y hace bind
    pub fn bind(config: Config) -> Result<Self> {
        config.validate().map_err(ServerError::Config)?;

        let upload_root = config.upload_root();
        fs::create_dir_all(&upload_root).map_err(|source| ServerError::UploadDir {
            path: upload_root.clone(),
            source,
        })?;

        let address = config.address();
        let listener = TcpListener::bind(&address).map_err(|source| ServerError::Bind {
            address: address.clone(),
            source,
        })?;

        tracing::info!(address = %address, "servidor escuchando");

        Ok(Self {
            context: Arc::new(ServerContext::from_config(&config)),
            config,
            listener,
        })
    }

    /// Dirección real del listener (útil con puerto 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Loop de accept; no retorna mientras el listener siga vivo
    pub fn run(&self) -> Result<()> {
        tracing::info!("modo concurrente: un thread por conexión");
        let idle_timeout = self.config.idle_timeout();

        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => self.spawn_worker(stream, idle_timeout),
                Err(e) => tracing::warn!(error = %e, "error al aceptar conexión"),
            }
        }

        Ok(())
    }

    fn spawn_worker(&self, stream: TcpStream, idle_timeout: Duration) {
        let peer = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        if let Err(e) = stream.set_read_timeout(Some(idle_timeout)) {
            tracing::warn!(peer = %peer, error = %e, "no se pudo configurar el timeout");
            return;
        }

        tracing::debug!(peer = %peer, "nueva conexión");
        let context = Arc::clone(&self.context);

        thread::spawn(move || {
            let span = tracing::info_span!("conn", peer = %peer);
            let _guard = span.enter();

            match handle_connection(stream, &context) {
                Ok(served) => tracing::debug!(served, "conexión cerrada"),
                Err(e) => tracing::warn!(error = %e, "conexión terminada con error"),
            }
        });
    }
}
