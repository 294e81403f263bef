//! # Product Routes
//!
//! Listing goes through the query planner; create and update accept
//! multipart form data with an optional `image` file alongside the product
//! fields.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::Response,
    routing::{delete, get, post, put},
    Router,
};
use serde_json::{Map, Value};

use crate::media::MediaError;
use crate::query::ProductQuery;

use super::errors::ApiError;
use super::response::{success, success_with_status};
use super::server::AppState;

/// Create product routes
pub fn product_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list_products_handler))
        .route("/", post(create_product_handler))
        .route("/:id", get(get_product_handler))
        .route("/:id", put(update_product_handler))
        .route("/:id", delete(delete_product_handler))
        .with_state(state)
}

/// A multipart body split into product fields and an optional image file
struct ProductForm {
    fields: Map<String, Value>,
    image: Option<(String, Vec<u8>)>,
}

/// Pull product fields and the optional image out of a multipart body
async fn read_product_form(mut multipart: Multipart) -> Result<ProductForm, ApiError> {
    let mut fields = Map::new();
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::validation(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == "image" && field.file_name().is_some() {
            let file_name = field.file_name().unwrap_or("image").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::validation(e.to_string()))?;
            image = Some((file_name, data.to_vec()));
        } else if !name.is_empty() {
            let text = field
                .text()
                .await
                .map_err(|e| ApiError::validation(e.to_string()))?;
            fields.insert(name, coerce_form_value(&text));
        }
    }

    Ok(ProductForm { fields, image })
}

/// Coerce a form text value into the most specific JSON value
fn coerce_form_value(value: &str) -> Value {
    if value == "null" {
        return Value::Null;
    }
    if value == "true" {
        return Value::Bool(true);
    }
    if value == "false" {
        return Value::Bool(false);
    }
    if let Ok(n) = value.parse::<i64>() {
        return Value::Number(n.into());
    }
    if let Ok(n) = value.parse::<f64>() {
        if let Some(num) = serde_json::Number::from_f64(n) {
            return Value::Number(num);
        }
    }
    Value::String(value.to_string())
}

async fn list_products_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    let query = ProductQuery::parse(&params);

    let page = state
        .products
        .list(&query)
        .map_err(|e| ApiError::query("Error fetching products", e))?;

    Ok(success(page, "Products fetched successfully"))
}

async fn get_product_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let product = state
        .products
        .get(&id)
        .map_err(|e| ApiError::catalog("Error fetching product", e))?;

    Ok(success(product, "Product fetched successfully"))
}

async fn create_product_handler(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut form = read_product_form(multipart).await?;

    if let Some((file_name, data)) = form.image {
        let stored = state
            .images
            .upload(&file_name, &data)
            .map_err(|e| ApiError::media("Error uploading image", e))?;
        form.fields
            .insert("imageUrl".to_string(), Value::String(stored.url));
        form.fields
            .insert("imagePath".to_string(), Value::String(stored.path));
    }

    let product = state
        .products
        .create(form.fields)
        .map_err(|e| ApiError::catalog("Error creating product", e))?;

    Ok(success_with_status(
        product,
        "Product created successfully",
        StatusCode::CREATED,
    ))
}

async fn update_product_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut form = read_product_form(multipart).await?;

    if let Some((file_name, data)) = form.image {
        // The canonical path stored on the product is what gets deleted;
        // the URL is never parsed
        let old_path = state
            .products
            .get(&id)
            .ok()
            .and_then(|p| p.image_path);

        let stored = state
            .images
            .replace(old_path.as_deref(), &file_name, &data)
            .map_err(|e| ApiError::media("Error replacing image", e))?;
        form.fields
            .insert("imageUrl".to_string(), Value::String(stored.url));
        form.fields
            .insert("imagePath".to_string(), Value::String(stored.path));
    }

    let product = state
        .products
        .update(&id, form.fields)
        .map_err(|e| ApiError::catalog("Error updating product", e))?;

    Ok(success(product, "Product updated successfully"))
}

async fn delete_product_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    // The stored image blob goes with the product record
    if let Ok(product) = state.products.get(&id) {
        if let Some(path) = product.image_path {
            match state.images.delete(&path) {
                Ok(()) | Err(MediaError::NotFound(_)) => {}
                Err(err) => return Err(ApiError::media("Error deleting image", err)),
            }
        }
    }

    let deleted = state
        .products
        .delete(&id)
        .map_err(|e| ApiError::catalog("Error deleting product", e))?;

    Ok(success(
        serde_json::json!({ "id": deleted }),
        "Product deleted successfully",
    ))
}
