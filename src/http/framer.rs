//! # Framing de Mensajes
//! src/http/framer.rs
//!
//! Lee bytes de la conexión hasta tener un head completo (`\r\n\r\n`) o hasta
//! que el peer cierre. Un `read()` puede devolver menos bytes de los pedidos,
//! así que nunca se asume que una lectura equivale a un mensaje.
//!
//! Los bytes leídos de más quedan en el buffer interno: son el body del
//! request actual o el inicio del siguiente.

use std::io::{self, Read};
use thiserror::Error;

const HEAD_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Límites de lectura por conexión
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLimits {
    /// Tamaño de cada `read()`
    pub chunk_size: usize,

    /// Máximo de bytes antes de encontrar `\r\n\r\n`
    pub max_head_bytes: usize,

    /// Máximo de bytes de body aceptados
    pub max_body_bytes: usize,
}

impl Default for FrameLimits {
    fn default() -> Self {
        Self {
            chunk_size: 4096,
            max_head_bytes: 64 * 1024,
            max_body_bytes: 10 * 1024 * 1024,
        }
    }
}

/// Errores de framing
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("request head exceeds {limit} bytes")]
    HeadTooLarge { limit: usize },

    #[error("request body of {declared} bytes exceeds {limit} bytes")]
    BodyTooLarge { declared: usize, limit: usize },

    #[error("peer closed after {received} of {expected} body bytes")]
    UnexpectedEof { expected: usize, received: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl FrameError {
    /// El request es inválido (400) y no un problema de transporte
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            FrameError::HeadTooLarge { .. } | FrameError::BodyTooLarge { .. }
        )
    }

    /// Se agotó el idle timeout del socket
    pub fn is_timeout(&self) -> bool {
        match self {
            FrameError::Io(e) => {
                matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut)
            }
            _ => false,
        }
    }
}

/// Lector de mensajes sobre una conexión
pub struct MessageReader<S> {
    stream: S,
    buffer: Vec<u8>,
    limits: FrameLimits,
}

impl<S: Read> MessageReader<S> {
    pub fn new(stream: S, limits: FrameLimits) -> Self {
        Self {
            stream,
            buffer: Vec::new(),
            limits,
        }
    }

    /// Lee hasta completar un head
    ///
    /// Retorna el head incluyendo `\r\n\r\n`. Si el peer cierra antes, retorna
    /// lo acumulado; un vector vacío significa que el peer se desconectó.
    pub fn read_message(&mut self) -> Result<Vec<u8>, FrameError> {
        let mut scanned = 0;

        loop {
            if let Some(pos) = find(&self.buffer[scanned..], HEAD_TERMINATOR) {
                let end = scanned + pos + HEAD_TERMINATOR.len();
                let rest = self.buffer.split_off(end);
                return Ok(std::mem::replace(&mut self.buffer, rest));
            }

            if self.buffer.len() > self.limits.max_head_bytes {
                return Err(FrameError::HeadTooLarge {
                    limit: self.limits.max_head_bytes,
                });
            }

            // El terminador puede quedar partido entre dos lecturas
            scanned = self.buffer.len().saturating_sub(HEAD_TERMINATOR.len() - 1);

            if self.read_chunk()? == 0 {
                return Ok(std::mem::take(&mut self.buffer));
            }
        }
    }

    /// Segunda pasada para el body
    ///
    /// Con `Content-Length` lee exactamente esa cantidad. Sin él, el body es
    /// lo que ya llegó detrás del head; si no llegó nada todavía, se hace una
    /// lectura más. EOF o timeout en esa lectura equivalen a body vacío.
    pub fn read_body(&mut self, declared: Option<usize>) -> Result<Vec<u8>, FrameError> {
        let limit = self.limits.max_body_bytes;

        let Some(expected) = declared else {
            if self.buffer.is_empty() {
                match self.read_chunk() {
                    Ok(_) => {}
                    Err(e) if e.is_timeout() => {}
                    Err(e) => return Err(e),
                }
            }
            if self.buffer.len() > limit {
                return Err(FrameError::BodyTooLarge {
                    declared: self.buffer.len(),
                    limit,
                });
            }
            return Ok(std::mem::take(&mut self.buffer));
        };

        if expected > limit {
            return Err(FrameError::BodyTooLarge {
                declared: expected,
                limit,
            });
        }

        while self.buffer.len() < expected {
            if self.read_chunk()? == 0 {
                return Err(FrameError::UnexpectedEof {
                    expected,
                    received: self.buffer.len(),
                });
            }
        }

        let rest = self.buffer.split_off(expected);
        Ok(std::mem::replace(&mut self.buffer, rest))
    }

    fn read_chunk(&mut self) -> Result<usize, FrameError> {
        let mut chunk = vec![0u8; self.limits.chunk_size];
        loop {
            match self.stream.read(&mut chunk) {
                Ok(n) => {
                    self.buffer.extend_from_slice(&chunk[..n]);
                    return Ok(n);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Acceso a la conexión para escribir respuestas
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.stream
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
