//! # Product Listing Query
//!
//! Request parsing, pagination arithmetic, and the planner that turns a
//! listing request into backing-store queries.

pub mod errors;
pub mod page;
pub mod params;
pub mod planner;

pub use errors::{QueryError, QueryResult};
pub use page::{Pagination, ProductPage};
pub use params::{ProductQuery, SortOrder};
pub use planner::QueryPlanner;
