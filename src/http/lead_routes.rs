//! # Product Lead Routes

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{Map, Value};

use super::errors::ApiError;
use super::response::{success, success_with_status};
use super::server::AppState;

/// Create product lead routes
pub fn lead_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(create_lead_handler))
        .route("/", get(list_leads_handler))
        .route("/:id", get(get_lead_handler))
        .route("/:id", put(update_lead_handler))
        .route("/:id", delete(delete_lead_handler))
        .with_state(state)
}

fn object_fields(body: Value) -> Result<Map<String, Value>, ApiError> {
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(ApiError::validation("Request body must be a JSON object")),
    }
}

async fn create_lead_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    let lead = state
        .leads
        .create(object_fields(body)?)
        .map_err(|e| ApiError::catalog("Error creating productLead", e))?;

    Ok(success_with_status(
        lead,
        "ProductLead created successfully",
        StatusCode::CREATED,
    ))
}

async fn list_leads_handler(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let leads = state
        .leads
        .list_all()
        .map_err(|e| ApiError::catalog("Error fetching productLeads", e))?;

    Ok(success(leads, "ProductLeads fetched successfully"))
}

async fn get_lead_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let lead = state
        .leads
        .get(&id)
        .map_err(|e| ApiError::catalog("Error fetching productLead", e))?;

    Ok(success(lead, "ProductLead fetched successfully"))
}

async fn update_lead_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    let lead = state
        .leads
        .update(&id, object_fields(body)?)
        .map_err(|e| ApiError::catalog("Error updating productLead", e))?;

    Ok(success(lead, "ProductLead updated successfully"))
}

async fn delete_lead_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let deleted = state
        .leads
        .delete(&id)
        .map_err(|e| ApiError::catalog("Error deleting productLead", e))?;

    Ok(success(
        serde_json::json!({ "id": deleted }),
        "ProductLead deleted successfully",
    ))
}
