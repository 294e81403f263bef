//! # Product Query Parameters
//!
//! Parses the listing query string into a structured request. Parsing is
//! lenient: anything non-numeric or non-positive collapses to the default
//! rather than failing the request.

use std::collections::HashMap;

use serde::Serialize;

/// Default page when absent or unparseable
pub const DEFAULT_PAGE: usize = 1;

/// Default page size when absent or unparseable
pub const DEFAULT_LIMIT: usize = 10;

/// Default sort field
pub const DEFAULT_SORT_BY: &str = "title";

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Asc,
    #[serde(rename = "desc")]
    Desc,
}

impl SortOrder {
    pub fn is_ascending(self) -> bool {
        self == SortOrder::Asc
    }
}

/// A parsed product listing request
#[derive(Debug, Clone, Serialize)]
pub struct ProductQuery {
    /// 1-based page number
    pub page: usize,

    /// Page size
    pub limit: usize,

    /// Field to sort on (single field only)
    pub sort_by: String,

    /// Sort direction
    pub sort_order: SortOrder,

    /// Optional title prefix filter
    pub title: Option<String>,

    /// Optional category equality filter
    pub category: Option<String>,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort_by: DEFAULT_SORT_BY.to_string(),
            sort_order: SortOrder::Asc,
            title: None,
            category: None,
        }
    }
}

impl ProductQuery {
    /// Parse query parameters from the raw query-string map
    pub fn parse(params: &HashMap<String, String>) -> Self {
        let mut query = ProductQuery::default();

        for (key, value) in params {
            match key.as_str() {
                "page" => query.page = parse_positive(value, DEFAULT_PAGE),
                "limit" => query.limit = parse_positive(value, DEFAULT_LIMIT),
                "sortBy" => {
                    if !value.trim().is_empty() {
                        query.sort_by = value.trim().to_string();
                    }
                }
                "sortOrder" => {
                    if value.eq_ignore_ascii_case("desc") {
                        query.sort_order = SortOrder::Desc;
                    }
                }
                "title" => {
                    if !value.is_empty() {
                        query.title = Some(value.clone());
                    }
                }
                "category" => {
                    if !value.is_empty() {
                        query.category = Some(value.clone());
                    }
                }
                _ => {} // Unknown parameters are ignored
            }
        }

        query
    }

    /// Offset implied by the page/limit pair. Saturates so an absurd page
    /// number degrades into an empty page instead of overflowing.
    pub fn skip(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

/// Coerce possibly-string input into a positive integer
fn parse_positive(value: &str, default: usize) -> usize {
    match value.trim().parse::<usize>() {
        Ok(n) if n >= 1 => n,
        _ => default,
    }
}
