//! stallcraft - storefront backend: product catalog, contacts, product
//! leads, auth, and image upload over a pluggable document store

pub mod auth;
pub mod catalog;
pub mod config;
pub mod http;
pub mod media;
pub mod observability;
pub mod query;
pub mod store;
