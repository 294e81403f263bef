//! # Contact Routes

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

/// Create contact routes
pub fn contact_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(create_contact_handler))
        .route("/", get(list_contacts_handler))
        .route("/:id", get(get_contact_handler))
        .route("/email/:email", get(get_by_email_handler))
        .route("/phone/:phone", get(get_by_phone_handler))
        .route("/:id", put(update_contact_handler))
        .route("/:id", delete(delete_contact_handler))
        .with_state(state)
}

/// Require a JSON object body and return its fields
fn object_fields(body: Value) -> Result<Map<String, Value>, ApiError> {
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(ApiError::validation("Request body must be a JSON object")),
    }
}

async fn create_contact_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    let contact = state
        .contacts
        .create(object_fields(body)?)
        .map_err(|e| ApiError::catalog("Error creating contact", e))?;

    Ok(success_with_status(
        contact,
        "Contact created successfully",
        StatusCode::CREATED,
    ))
}

async fn list_contacts_handler(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let contacts = state
        .contacts
        .list_all()
        .map_err(|e| ApiError::catalog("Error fetching contacts", e))?;

    Ok(success(contacts, "Contacts fetched successfully"))
}

async fn get_contact_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let contact = state
        .contacts
        .get(&id)
        .map_err(|e| ApiError::catalog("Error fetching contact", e))?;

    Ok(success(contact, "Contact fetched successfully"))
}

async fn get_by_email_handler(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
) -> Result<Response, ApiError> {
    let contact = state
        .contacts
        .get_by_email(&email)
        .map_err(|e| ApiError::catalog("Error fetching contact by email", e))?;

    Ok(success(contact, "Contact fetched successfully"))
}

async fn get_by_phone_handler(
    State(state): State<Arc<AppState>>,
    Path(phone): Path<String>,
) -> Result<Response, ApiError> {
    let contact = state
        .contacts
        .get_by_phone(&phone)
        .map_err(|e| ApiError::catalog("Error fetching contact by phone", e))?;

    Ok(success(contact, "Contact fetched successfully"))
}

async fn update_contact_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    let contact = state
        .contacts
        .update(&id, object_fields(body)?)
        .map_err(|e| ApiError::catalog("Error updating contact", e))?;

    Ok(success(contact, "Contact updated successfully"))
}

async fn delete_contact_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let deleted = state
        .contacts
        .delete(&id)
        .map_err(|e| ApiError::catalog("Error deleting contact", e))?;

    Ok(success(
        serde_json::json!({ "id": deleted }),
        "Contact deleted successfully",
    ))
}
