//! # Almacenamiento de Archivos
//! src/storage/mod.rs
//!
//! Contrato mínimo sobre el disco: `get(path)` devuelve los bytes o nada,
//! `put(path, bytes)` sobrescribe. El resto del servidor no toca `std::fs`.

pub mod static_files;

pub use static_files::StaticFileService;

use std::fs;
use std::io;
use std::path::Path;

/// Almacén de bytes direccionado por path
pub trait FileStore: Send + Sync {
    /// Lee el archivo completo; cualquier fallo cuenta como ausente
    fn get(&self, path: &Path) -> Option<Vec<u8>>;

    /// Escribe el archivo completo, reemplazando el anterior
    fn put(&self, path: &Path, bytes: &[u8]) -> io::Result<()>;
}

/// `FileStore` sobre el sistema de archivos local
///
/// `put` no es atómico: dos uploads simultáneos al mismo nombre terminan con
/// el contenido del último que escribe.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskStore;

impl FileStore for DiskStore {
    fn get(&self, path: &Path) -> Option<Vec<u8>> {
        match fs::read(path) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "archivo no disponible");
                None
            }
        }
    }

    fn put(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        fs::write(path, bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_put_then_get() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.bin");

        DiskStore.put(&path, &[1, 2, 3]).unwrap();
        assert_eq!(DiskStore.get(&path), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_put_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");

        DiskStore.put(&path, b"first version").unwrap();
        DiskStore.put(&path, b"second").unwrap();
        assert_eq!(DiskStore.get(&path), Some(b"second".to_vec()));
    }

    #[test]
    fn test_missing_file_is_absent() {
        let dir = tempdir().unwrap();
        assert_eq!(DiskStore.get(&dir.path().join("nope")), None);
    }

    #[test]
    fn test_directory_is_absent() {
        let dir = tempdir().unwrap();
        assert_eq!(DiskStore.get(dir.path()), None);
    }

    #[test]
    fn test_put_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("a.txt");
        assert!(DiskStore.put(&path, b"x").is_err());
    }
}
