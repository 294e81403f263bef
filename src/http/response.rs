//! # Response Envelope
//!
//! Every endpoint answers with the same shape:
//! `{"status": "success", "message": ..., "data": ...}` on success,
//! `{"status": "error", "message": ..., "error": ...}` on failure.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::json;

/// Success envelope
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: &'static str,
    pub message: String,
    pub data: T,
}

/// Build a 200 success response
pub fn success<T: Serialize>(data: T, message: &str) -> Response {
    success_with_status(data, message, StatusCode::OK)
}

/// Build a success response with an explicit status code
pub fn success_with_status<T: Serialize>(data: T, message: &str, status: StatusCode) -> Response {
    let body = Envelope {
        status: "success",
        message: message.to_string(),
        data,
    };
    (status, Json(body)).into_response()
}

/// Build an error response
pub fn error(status: StatusCode, message: &str, detail: &str) -> Response {
    let body = json!({
        "status": "error",
        "message": message,
        "error": detail,
    });
    (status, Json(body)).into_response()
}

/// Build the 404 envelope used by the route fallback
pub fn not_found(message: &str) -> Response {
    let body = json!({
        "status": "error",
        "message": message,
    });
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let envelope = Envelope {
            status: "success",
            message: "Product fetched successfully".to_string(),
            data: json!({"id": "p1"}),
        };
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["data"]["id"], "p1");
    }
}
