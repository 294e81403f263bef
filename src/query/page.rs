//! # Paginated Result Shapes

use serde::Serialize;

use crate::catalog::product::Product;

use super::params::{ProductQuery, SortOrder};

/// Pagination descriptor.
///
/// Invariants: `skip == (page-1)*limit`, `total_pages == ceil(total/limit)`,
/// `has_next_page == page < total_pages`, `has_prev_page == page > 1`.
#[derive(Debug, Clone, Serialize)]
pub struct Pagination {
    /// Count of documents in the filtered result set
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub skip: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
    #[serde(rename = "hasNextPage")]
    pub has_next_page: bool,
    #[serde(rename = "hasPrevPage")]
    pub has_prev_page: bool,
}

impl Pagination {
    /// Derive the full descriptor from the total and the request
    pub fn compute(total: usize, page: usize, limit: usize) -> Self {
        let total_pages = total.div_ceil(limit);
        Self {
            total,
            page,
            limit,
            skip: page.saturating_sub(1).saturating_mul(limit),
            total_pages,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
        }
    }
}

/// Echo of the filters that were active for a page
#[derive(Debug, Clone, Serialize)]
pub struct AppliedFilters {
    pub title: Option<String>,
    pub category: Option<String>,
}

/// Echo of the ordering that was applied
#[derive(Debug, Clone, Serialize)]
pub struct AppliedSorting {
    #[serde(rename = "sortBy")]
    pub sort_by: String,
    #[serde(rename = "sortOrder")]
    pub sort_order: SortOrder,
}

/// One page of products plus its metadata
#[derive(Debug, Clone, Serialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub pagination: Pagination,
    pub filters: AppliedFilters,
    pub sorting: AppliedSorting,
}

impl ProductPage {
    /// Assemble a page for the given request
    pub fn assemble(products: Vec<Product>, total: usize, query: &ProductQuery) -> Self {
        Self {
            products,
            pagination: Pagination::compute(total, query.page, query.limit),
            filters: AppliedFilters {
                title: query.title.clone(),
                category: query.category.clone(),
            },
            sorting: AppliedSorting {
                sort_by: query.sort_by.clone(),
                sort_order: query.sort_order,
            },
        }
    }
}
