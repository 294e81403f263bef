//! # Auth Routes
//!
//! Registration, login, password reset, and profile endpoints. Request
//! validation happens here so the auth service only sees well-formed input.

use std::sync::{Arc, OnceLock};

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::Response,
    routing::{get, post, put},
    Json, Router,
};
use regex::Regex;
use serde::Deserialize;
use serde_json::json;

use crate::auth::crypto::MIN_PASSWORD_LENGTH;

use super::errors::ApiError;
use super::response::{success, success_with_status};
use super::server::AppState;

/// Create authentication routes
pub fn auth_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
        .route("/reset-password", post(reset_password_handler))
        .route("/reset-password/confirm", post(confirm_reset_handler))
        .route("/profile", put(update_profile_handler))
        .route("/me", get(current_user_handler))
        .route("/status", get(status_handler))
        .route("/refresh", get(refresh_handler))
        .with_state(state)
}

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

fn validate_email(email: &str) -> Result<(), ApiError> {
    if email_regex().is_match(email) {
        Ok(())
    } else {
        Err(ApiError::validation("Invalid email format"))
    }
}

fn validate_password(password: &str) -> Result<(), ApiError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::validation(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

/// Pull the bearer token out of the Authorization header
fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::unauthorized("Missing or invalid authorization header"))
}

#[derive(Debug, Deserialize)]
struct RegisterRequest {
    email: Option<String>,
    password: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResetPasswordRequest {
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ConfirmResetRequest {
    token: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpdateProfileRequest {
    name: Option<String>,
}

async fn register_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterRequest>,
) -> Result<Response, ApiError> {
    let email = body
        .email
        .as_deref()
        .ok_or_else(|| ApiError::validation("Name, email, and password are required"))?;
    let password = body
        .password
        .as_deref()
        .ok_or_else(|| ApiError::validation("Name, email, and password are required"))?;
    let name = body
        .name
        .ok_or_else(|| ApiError::validation("Name, email, and password are required"))?;

    validate_email(email)?;
    validate_password(password)?;

    let profile = state
        .auth
        .register(email, password, Some(name))
        .map_err(|e| ApiError::auth("Error creating user", e))?;

    Ok(success_with_status(
        profile,
        "User created successfully",
        StatusCode::CREATED,
    ))
}

async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    let email = body
        .email
        .as_deref()
        .ok_or_else(|| ApiError::validation("Email and password are required"))?;
    let password = body
        .password
        .as_deref()
        .ok_or_else(|| ApiError::validation("Email and password are required"))?;

    let outcome = state
        .auth
        .login(email, password)
        .map_err(|e| ApiError::auth("Error logging in", e))?;

    Ok(success(outcome, "Login successful"))
}

async fn logout_handler() -> Response {
    // Tokens are stateless; the client discards its copy
    success(json!({}), "Logout successful")
}

async fn reset_password_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ResetPasswordRequest>,
) -> Result<Response, ApiError> {
    let email = body
        .email
        .as_deref()
        .ok_or_else(|| ApiError::validation("Email is required"))?;
    validate_email(email)?;

    state
        .auth
        .reset_password(email)
        .map_err(|e| ApiError::auth("Error requesting password reset", e))?;

    Ok(success(json!({}), "Password reset email sent"))
}

async fn confirm_reset_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ConfirmResetRequest>,
) -> Result<Response, ApiError> {
    let token = body
        .token
        .as_deref()
        .ok_or_else(|| ApiError::validation("Token and password are required"))?;
    let password = body
        .password
        .as_deref()
        .ok_or_else(|| ApiError::validation("Token and password are required"))?;
    validate_password(password)?;

    state
        .auth
        .confirm_reset(token, password)
        .map_err(|e| ApiError::auth("Error resetting password", e))?;

    Ok(success(json!({}), "Password reset successfully"))
}

async fn update_profile_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Response, ApiError> {
    let token = bearer_token(&headers)?;
    let name = body
        .name
        .ok_or_else(|| ApiError::validation("Name is required"))?;

    let profile = state
        .auth
        .update_profile(token, name)
        .map_err(|e| ApiError::auth("Error updating profile", e))?;

    Ok(success(profile, "Profile updated successfully"))
}

async fn current_user_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let token = bearer_token(&headers)?;

    let profile = state
        .auth
        .current_user(token)
        .map_err(|e| ApiError::auth("Error fetching user", e))?;

    Ok(success(profile, "User fetched successfully"))
}

async fn status_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let token = bearer_token(&headers)?;

    let profile = state
        .auth
        .current_user(token)
        .map_err(|e| ApiError::auth("Error checking auth status", e))?;

    Ok(success(profile, "User is authenticated"))
}

async fn refresh_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let token = bearer_token(&headers)?;

    let outcome = state
        .auth
        .refresh(token)
        .map_err(|e| ApiError::auth("Error refreshing token", e))?;

    Ok(success(outcome, "Token refreshed successfully"))
}
