//! # API Error Funnel
//!
//! Maps module errors onto the error envelope. Status codes come from the
//! typed error variants; nothing inspects message text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::auth::AuthError;
use crate::catalog::CatalogError;
use crate::media::MediaError;
use crate::query::QueryError;

use super::response;

/// An error ready to leave the HTTP layer
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    detail: String,
}

impl ApiError {
    fn new(status_code: u16, message: &str, detail: String) -> Self {
        Self {
            status: StatusCode::from_u16(status_code)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            message: message.to_string(),
            detail,
        }
    }

    /// A 400 for request-shape problems caught before any service call
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::new(400, "Validation failed", detail.into())
    }

    /// A 401 for requests without a usable bearer token
    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new(401, "Unauthorized", detail.into())
    }

    pub fn catalog(message: &str, err: CatalogError) -> Self {
        Self::new(err.status_code(), message, err.to_string())
    }

    pub fn query(message: &str, err: QueryError) -> Self {
        Self::new(err.status_code(), message, err.to_string())
    }

    pub fn auth(message: &str, err: AuthError) -> Self {
        Self::new(err.status_code(), message, err.to_string())
    }

    pub fn media(message: &str, err: MediaError) -> Self {
        Self::new(err.status_code(), message, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        response::error(self.status, &self.message, &self.detail)
    }
}
