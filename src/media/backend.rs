//! # Blob Backend Trait

use super::errors::MediaResult;

/// Backend trait for blob storage
pub trait BlobBackend: Send + Sync + std::fmt::Debug {
    /// Write data to path
    fn write(&self, path: &str, data: &[u8]) -> MediaResult<()>;

    /// Read blob at path
    fn read(&self, path: &str) -> MediaResult<Vec<u8>>;

    /// Delete blob at path
    fn delete(&self, path: &str) -> MediaResult<()>;

    /// Check if path exists
    fn exists(&self, path: &str) -> MediaResult<bool>;
}
