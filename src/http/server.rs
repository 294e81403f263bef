//! # HTTP Server
//!
//! Wires the services into nested routers, applies CORS, and serves the
//! API. Route handlers share one `AppState`; nothing reaches for a global
//! handle.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::auth::{AuthService, JwtConfig};
use crate::catalog::{ContactService, LeadService, ProductService};
use crate::config::AppConfig;
use crate::media::{ImageService, LocalBackend, SignedUrlGenerator};
use crate::observability::logger::{Logger, Severity};
use crate::store::DocumentStore;

use super::auth_routes::auth_routes;
use super::contact_routes::contact_routes;
use super::lead_routes::lead_routes;
use super::media_routes::media_routes;
use super::product_routes::product_routes;
use super::response;

/// Shared state for all route handlers
pub struct AppState {
    pub products: ProductService,
    pub contacts: ContactService,
    pub leads: LeadService,
    pub auth: AuthService,
    pub images: ImageService<LocalBackend>,
}

impl AppState {
    /// Build the full service stack over one document store
    pub fn new(config: &AppConfig, store: Arc<dyn DocumentStore>) -> Self {
        let jwt_config = JwtConfig {
            secret: config.jwt_secret.clone(),
            ..JwtConfig::default()
        };

        let images = ImageService::new(
            LocalBackend::new(config.storage_dir.clone()),
            SignedUrlGenerator::new(config.media_secret.as_bytes(), config.base_url.clone()),
        );

        Self {
            products: ProductService::new(Arc::clone(&store)),
            contacts: ContactService::new(Arc::clone(&store)),
            leads: LeadService::new(Arc::clone(&store)),
            auth: AuthService::new(store, jwt_config),
            images,
        }
    }
}

/// HTTP server for the storefront API
pub struct HttpServer {
    config: AppConfig,
    router: Router,
}

impl HttpServer {
    pub fn new(config: AppConfig, state: Arc<AppState>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    fn build_router(config: &AppConfig, state: Arc<AppState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(health_handler))
            .nest("/v1/products", product_routes(Arc::clone(&state)))
            .nest("/v1/contacts", contact_routes(Arc::clone(&state)))
            .nest("/v1/productLeads", lead_routes(Arc::clone(&state)))
            .nest("/v1/media", media_routes(Arc::clone(&state)))
            .nest("/v1/auth", auth_routes(state))
            .fallback(|| async { response::not_found("Route not found") })
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|_| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid socket address: {}", self.config.socket_addr()),
            )
        })?;

        Logger::log(
            Severity::Info,
            "server_started",
            &[("addr", &addr.to_string())],
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

async fn health_handler() -> axum::response::Response {
    response::success(serde_json::json!({ "status": "ok" }), "Service healthy")
}
