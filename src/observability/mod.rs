//! # Observability
//!
//! Structured logging for server lifecycle and request failures.

pub mod logger;

pub use logger::{Logger, Severity};
