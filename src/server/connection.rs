//! # Loop por Conexión
//! src/server/connection.rs
//!
//! Cada conexión procesa sus requests en orden estricto: una respuesta por
//! request, escrita antes de leer el siguiente. La conexión termina cuando el
//! peer cierra, se agota el idle timeout, o llega un request inválido (400).

use crate::config::Config;
use crate::endpoints::EndpointService;
use crate::http::{
    ContentTypeTable, Fixed, FixedResponses, FrameError, FrameLimits, MessageReader, Method,
    Reply, Request,
};
use crate::router::Router;
use crate::storage::{DiskStore, FileStore, StaticFileService};
use std::io::{self, Read, Write};
use std::sync::Arc;
use std::time::Instant;

/// Estado compartido de solo lectura entre todas las conexiones
pub struct ServerContext {
    pub router: Router,
    pub fixed: FixedResponses,
    pub limits: FrameLimits,
}

impl ServerContext {
    /// Construye tablas, plantillas y servicios a partir de la configuración
    pub fn from_config(config: &Config) -> Self {
        Self::with_store(config, Arc::new(DiskStore))
    }

    /// Igual que `from_config` pero con otro `FileStore`
    pub fn with_store(config: &Config, store: Arc<dyn FileStore>) -> Self {
        let router = Router::new(
            ContentTypeTable::new(&config.images_folder),
            StaticFileService::new(&config.doc_root, Arc::clone(&store)),
            EndpointService::new(config.upload_root(), store),
        );

        Self {
            router,
            fixed: FixedResponses::new(&config.redirect_location),
            limits: config.frame_limits(),
        }
    }
}

/// Atiende una conexión hasta que termine
///
/// Retorna la cantidad de requests respondidos. Los errores de I/O que no
/// son timeout se propagan; el caller cierra la conexión.
pub fn handle_connection<S: Read + Write>(stream: S, ctx: &ServerContext) -> io::Result<usize> {
    let mut reader = MessageReader::new(stream, ctx.limits);
    let mut served = 0;

    loop {
        let head = match reader.read_message() {
            Ok(head) if head.is_empty() => {
                tracing::debug!("peer cerró la conexión");
                break;
            }
            Ok(head) => head,
            Err(e) => {
                close_on_frame_error(reader.get_mut(), e, ctx)?;
                break;
            }
        };

        let start = Instant::now();

        let request = match Request::parse(&head) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "request inválido, cerrando conexión");
                write_reply(reader.get_mut(), &Reply::Fixed(Fixed::BadRequest), ctx)?;
                break;
            }
        };

        let request = if request.method() == Method::POST || request.content_length().is_some() {
            match reader.read_body(request.content_length()) {
                Ok(body) => request.with_body(body),
                Err(e) => {
                    close_on_frame_error(reader.get_mut(), e, ctx)?;
                    break;
                }
            }
        } else {
            request
        };

        let reply = ctx.router.route(&request);
        write_reply(reader.get_mut(), &reply, ctx)?;
        served += 1;

        tracing::info!(
            method = request.method().as_str(),
            uri = request.target(),
            status = reply.status().as_u16(),
            latency_ms = start.elapsed().as_secs_f64() * 1000.0,
            "request atendido"
        );
    }

    Ok(served)
}

/// Decide qué hacer con un error de framing antes de cerrar
fn close_on_frame_error<W: Write>(
    stream: &mut W,
    error: FrameError,
    ctx: &ServerContext,
) -> io::Result<()> {
    if error.is_malformed() {
        tracing::warn!(error = %error, "mensaje fuera de límites, cerrando conexión");
        return write_reply(stream, &Reply::Fixed(Fixed::BadRequest), ctx);
    }

    if error.is_timeout() {
        tracing::debug!("idle timeout, cerrando conexión");
        return Ok(());
    }

    match error {
        FrameError::Io(e) => Err(e),
        other => {
            tracing::debug!(error = %other, "conexión interrumpida");
            Ok(())
        }
    }
}

fn write_reply<W: Write>(stream: &mut W, reply: &Reply, ctx: &ServerContext) -> io::Result<()> {
    match reply {
        Reply::Fixed(fixed) => stream.write_all(ctx.fixed.bytes(*fixed))?,
        Reply::Built(response) => stream.write_all(&response.to_bytes())?,
    }
    stream.flush()
}
