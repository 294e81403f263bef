//! # Find Queries
//!
//! The read-query shape a document store accepts: a filter set, an optional
//! single-field ordering, a bound, and an optional cursor to resume after.

use serde::{Deserialize, Serialize};

use super::filter::Filter;

/// Single-field ordering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: String,
    pub ascending: bool,
}

impl OrderBy {
    /// Ascending order on a field
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: true,
        }
    }

    /// Descending order on a field
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: false,
        }
    }
}

/// A read query against one collection.
///
/// `start_after` holds the id of the last document already consumed; the
/// store resumes strictly after it within the filtered, ordered sequence.
/// Offset-skip is not part of this interface.
#[derive(Debug, Clone, Default)]
pub struct FindQuery {
    pub filters: Vec<Filter>,
    pub order_by: Option<OrderBy>,
    pub limit: Option<usize>,
    pub start_after: Option<String>,
}

impl FindQuery {
    /// Create a query with the given filter set
    pub fn filtered(filters: Vec<Filter>) -> Self {
        Self {
            filters,
            ..Default::default()
        }
    }

    /// Attach an ordering
    pub fn order_by(mut self, order: OrderBy) -> Self {
        self.order_by = Some(order);
        self
    }

    /// Bound the result count
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Resume strictly after the document with the given id
    pub fn start_after(mut self, cursor: impl Into<String>) -> Self {
        self.start_after = Some(cursor.into());
        self
    }
}
