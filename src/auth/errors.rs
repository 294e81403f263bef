//! # Auth Errors

use thiserror::Error;

use crate::store::StoreError;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication errors
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Login failed (generic so the response never leaks whether the
    /// email exists)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Email already registered
    #[error("Email is already registered")]
    EmailAlreadyExists,

    /// Password failed the policy
    #[error("Password does not meet requirements: {0}")]
    WeakPassword(String),

    /// Bearer token missing, malformed, expired, or badly signed
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Reset token unknown, already used, or expired
    #[error("Invalid or expired reset token")]
    InvalidResetToken,

    /// Password hashing failed
    #[error("Internal error: password hashing failed")]
    HashingFailed,

    /// The user store failed
    #[error("Storage error: {source}")]
    Store {
        #[from]
        source: StoreError,
    },
}

impl AuthError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::WeakPassword(_) => 400,
            AuthError::InvalidCredentials
            | AuthError::InvalidToken
            | AuthError::InvalidResetToken => 401,
            AuthError::EmailAlreadyExists => 409,
            AuthError::HashingFailed => 500,
            AuthError::Store { source } => source.status_code(),
        }
    }
}
