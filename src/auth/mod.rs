//! # Authentication
//!
//! User accounts, Argon2id password hashing, stateless JWT access tokens,
//! and one-shot password-reset tokens. Users live in the `_users`
//! collection of the document store.

pub mod crypto;
pub mod errors;
pub mod jwt;
pub mod service;
pub mod user;

pub use errors::{AuthError, AuthResult};
pub use jwt::{JwtConfig, JwtManager};
pub use service::{AuthService, LoginOutcome, UserProfile};
pub use user::{User, UserRepository};
