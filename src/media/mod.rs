//! # Media Storage
//!
//! Blob backend abstraction, signed read URLs, and the product image
//! service. Images are addressed by canonical path; URLs are derived from
//! paths, never the other way around.

pub mod backend;
pub mod errors;
pub mod image;
pub mod local;
pub mod signed_url;

pub use backend::BlobBackend;
pub use errors::{MediaError, MediaResult};
pub use image::{ImageService, StoredImage};
pub use local::LocalBackend;
pub use signed_url::SignedUrlGenerator;
