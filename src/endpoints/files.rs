//! # Endpoints de Archivos
//!
//! - /upload: guarda el body en la carpeta de uploads
//! - /image: devuelve un archivo subido
//!
//! Los nombres no se sanitizan; un nombre con `..` o `/` se resuelve tal cual
//! relativo a la carpeta de uploads.

use super::{leading_param, Call, EndpointContext};
use crate::http::{Fixed, Reply, Response};

/// Handler para /image?image-name=NOMBRE
///
/// El contenido se devuelve como `text/plain`, sin importar qué sea.
pub fn image_handler(ctx: &EndpointContext, call: Call<'_>) -> Reply {
    let name = match leading_param(call.params, "image-name=") {
        Some(name) if !name.is_empty() => name,
        _ => return Fixed::BadRequest.into(),
    };

    let path = ctx.upload_root.join(&*name);
    match ctx.store.get(&path) {
        Some(bytes) => Response::ok("text/plain", bytes).into(),
        None => Fixed::NotFound.into(),
    }
}

/// Handler para POST /upload?file-name=NOMBRE
///
/// Sobrescribe cualquier archivo con el mismo nombre. Responde 200 sin body.
pub fn upload_handler(ctx: &EndpointContext, call: Call<'_>) -> Reply {
    let name = match leading_param(call.params, "file-name=") {
        Some(name) if !name.is_empty() => name,
        _ => return Fixed::BadRequest.into(),
    };

    if call.body.is_empty() {
        return Fixed::BadRequest.into();
    }

    let path = ctx.upload_root.join(&*name);
    match ctx.store.put(&path, call.body) {
        Ok(()) => {
            tracing::info!(file = %path.display(), bytes = call.body.len(), "upload guardado");
            Response::ok("text/plain", Vec::new()).into()
        }
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "no se pudo guardar el upload");
            Fixed::InternalError.into()
        }
    }
}
