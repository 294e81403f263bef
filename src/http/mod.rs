//! # HTTP Layer
//!
//! Axum routers, the response envelope, and the error funnel that turns
//! module errors into status codes.

pub mod auth_routes;
pub mod contact_routes;
pub mod errors;
pub mod lead_routes;
pub mod media_routes;
pub mod product_routes;
pub mod response;
pub mod server;

pub use errors::ApiError;
pub use server::{AppState, HttpServer};
