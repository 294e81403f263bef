//! # Local Filesystem Backend

use std::fs;
use std::path::PathBuf;

use super::backend::BlobBackend;
use super::errors::{MediaError, MediaResult};

/// Local filesystem blob backend
#[derive(Debug)]
pub struct LocalBackend {
    root: PathBuf,
}

impl LocalBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn full_path(&self, path: &str) -> MediaResult<PathBuf> {
        // Canonical paths are relative and never climb out of the root
        if path.is_empty() || path.starts_with('/') || path.split('/').any(|seg| seg == "..") {
            return Err(MediaError::InvalidPath(path.to_string()));
        }
        Ok(self.root.join(path))
    }
}

impl BlobBackend for LocalBackend {
    fn write(&self, path: &str, data: &[u8]) -> MediaResult<()> {
        let full_path = self.full_path(path)?;

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|e| MediaError::Io(e.to_string()))?;
        }

        fs::write(&full_path, data).map_err(|e| MediaError::Io(e.to_string()))
    }

    fn read(&self, path: &str) -> MediaResult<Vec<u8>> {
        let full_path = self.full_path(path)?;

        fs::read(&full_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MediaError::NotFound(path.to_string())
            } else {
                MediaError::Io(e.to_string())
            }
        })
    }

    fn delete(&self, path: &str) -> MediaResult<()> {
        let full_path = self.full_path(path)?;

        fs::remove_file(&full_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MediaError::NotFound(path.to_string())
            } else {
                MediaError::Io(e.to_string())
            }
        })
    }

    fn exists(&self, path: &str) -> MediaResult<bool> {
        Ok(self.full_path(path)?.exists())
    }
}
