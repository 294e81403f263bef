//! # Catalog Services
//!
//! CRUD services over the document store for products, contacts, and
//! product leads.

pub mod contacts;
pub mod errors;
pub mod leads;
pub mod product;
pub mod products;

pub use contacts::ContactService;
pub use errors::{CatalogError, CatalogResult};
pub use leads::LeadService;
pub use product::Product;
pub use products::ProductService;
