//! # Query Planner Errors

use thiserror::Error;

use crate::store::StoreError;

/// Result type for planner operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors surfaced by the product query planner.
///
/// Every store failure aborts the whole operation; callers branch on the
/// variant and its source, not on message text.
#[derive(Debug, Clone, Error)]
pub enum QueryError {
    /// A backing-store query failed
    #[error("Error fetching products: {source}")]
    Store {
        #[source]
        source: StoreError,
    },
}

impl From<StoreError> for QueryError {
    fn from(source: StoreError) -> Self {
        QueryError::Store { source }
    }
}

impl QueryError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            QueryError::Store { source } => source.status_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_prefix_and_cause() {
        let err = QueryError::from(StoreError::Unavailable("connection refused".into()));
        let msg = err.to_string();
        assert!(msg.starts_with("Error fetching products:"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_status_code_follows_cause() {
        let err = QueryError::from(StoreError::PermissionDenied("rules".into()));
        assert_eq!(err.status_code(), 403);
    }
}
