//! # Document Store
//!
//! Abstraction over the backing document database: document CRUD by id,
//! equality/range queries with single-field ordering, cursor-based
//! `start_after` pagination, and counting. All consistency guarantees are
//! delegated to the implementation behind the trait.

pub mod document;
pub mod errors;
pub mod filter;
pub mod memory;
pub mod query;

use serde_json::{Map, Value};

pub use document::Document;
pub use errors::{StoreError, StoreResult};
pub use filter::{prefix_range, Filter, FilterOp, HIGH_SENTINEL};
pub use memory::MemoryStore;
pub use query::{FindQuery, OrderBy};

/// Capabilities the backend must provide.
///
/// The store is constructed once at startup and shared as
/// `Arc<dyn DocumentStore>`; nothing in the crate reaches for a global.
pub trait DocumentStore: Send + Sync {
    /// Run a read query and return the matching documents in order
    fn find(&self, collection: &str, query: &FindQuery) -> StoreResult<Vec<Document>>;

    /// Count documents matching the filter set (empty set counts everything)
    fn count(&self, collection: &str, filters: &[Filter]) -> StoreResult<usize>;

    /// Fetch a single document by id
    fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Document>>;

    /// Insert a document, assigning it a fresh id
    fn insert(&self, collection: &str, fields: Map<String, Value>) -> StoreResult<Document>;

    /// Overlay fields onto a document, creating it if absent
    fn merge_update(
        &self,
        collection: &str,
        id: &str,
        fields: Map<String, Value>,
    ) -> StoreResult<Document>;

    /// Delete a document by id (absent documents are a no-op)
    fn delete(&self, collection: &str, id: &str) -> StoreResult<()>;
}
