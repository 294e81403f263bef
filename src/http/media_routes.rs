//! # Media Routes
//!
//! Serves stored image blobs. Reads require the token and expiry minted
//! into the blob's signed URL at upload time.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;

use super::errors::ApiError;
use super::server::AppState;

/// Create media routes
pub fn media_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/*path", get(read_media_handler))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct ReadParams {
    #[serde(default)]
    token: String,
    #[serde(default)]
    expires: i64,
}

async fn read_media_handler(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
    Query(params): Query<ReadParams>,
) -> Result<Response, ApiError> {
    let bytes = state
        .images
        .read_verified(&path, &params.token, params.expires)
        .map_err(|e| ApiError::media("Error fetching image", e))?;

    let headers = [(header::CONTENT_TYPE, content_type_for(&path))];
    Ok((headers, bytes).into_response())
}

/// Content type from the path extension; anything unrecognized is served
/// as raw bytes
fn content_type_for(path: &str) -> &'static str {
    let ext = path
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
