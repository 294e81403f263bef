//! # Catalog Errors

use thiserror::Error;

use crate::store::StoreError;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors from the CRUD services over the document store
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The requested record does not exist
    #[error("{kind} not found")]
    NotFound { kind: &'static str },

    /// The backing store failed
    #[error("Store error: {source}")]
    Store {
        #[from]
        source: StoreError,
    },
}

impl CatalogError {
    pub fn not_found(kind: &'static str) -> Self {
        CatalogError::NotFound { kind }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::NotFound { .. } => 404,
            CatalogError::Store { source } => source.status_code(),
        }
    }
}
