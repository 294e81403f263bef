//! # Media Errors

use thiserror::Error;

/// Result type for media operations
pub type MediaResult<T> = Result<T, MediaError>;

/// Errors from image upload and blob handling
#[derive(Debug, Clone, Error)]
pub enum MediaError {
    #[error("Image not found: {0}")]
    NotFound(String),

    #[error("Invalid image path: {0}")]
    InvalidPath(String),

    #[error("Empty upload")]
    EmptyUpload,

    #[error("I/O error: {0}")]
    Io(String),
}

impl MediaError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            MediaError::NotFound(_) => 404,
            MediaError::InvalidPath(_) | MediaError::EmptyUpload => 400,
            MediaError::Io(_) => 500,
        }
    }
}
