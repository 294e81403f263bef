//! # Document Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by a backing document store
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Requested document does not exist
    #[error("Document not found: {collection}/{id}")]
    NotFound { collection: String, id: String },

    /// Store is unreachable or refused the connection
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The store rejected the operation
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Anything else that went wrong inside the store
    #[error("Internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Construct a NotFound error for a collection/id pair
    pub fn not_found(collection: &str, id: &str) -> Self {
        StoreError::NotFound {
            collection: collection.to_string(),
            id: id.to_string(),
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::NotFound { .. } => 404,
            StoreError::Unavailable(_) => 503,
            StoreError::PermissionDenied(_) => 403,
            StoreError::Internal(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(StoreError::not_found("products", "p1").status_code(), 404);
        assert_eq!(StoreError::Unavailable("down".into()).status_code(), 503);
        assert_eq!(StoreError::Internal("oops".into()).status_code(), 500);
    }

    #[test]
    fn test_not_found_message_names_document() {
        let err = StoreError::not_found("contacts", "c42");
        assert!(err.to_string().contains("contacts/c42"));
    }
}
