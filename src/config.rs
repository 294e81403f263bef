//! # Application Configuration
//!
//! Bind address, CORS origins, secrets, and the image storage root.
//! Values come from `STALLCRAFT_*` environment variables with sensible
//! development defaults; the CLI can override the address fields.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (empty = permissive, for development)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// JWT signing secret
    #[serde(default = "default_secret")]
    pub jwt_secret: String,

    /// Secret for signing media read URLs
    #[serde(default = "default_secret")]
    pub media_secret: String,

    /// Base URL used when generating media read URLs
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Root directory for stored image blobs
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_secret() -> String {
    "CHANGE_THIS_SECRET_IN_PRODUCTION".to_string()
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_storage_dir() -> PathBuf {
    std::env::temp_dir().join("stallcraft_media")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            jwt_secret: default_secret(),
            media_secret: default_secret(),
            base_url: default_base_url(),
            storage_dir: default_storage_dir(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("STALLCRAFT_HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("STALLCRAFT_PORT") {
            if let Ok(port) = port.parse() {
                config.port = port;
            }
        }
        if let Ok(origins) = std::env::var("STALLCRAFT_CORS_ORIGINS") {
            config.cors_origins = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Ok(secret) = std::env::var("STALLCRAFT_JWT_SECRET") {
            config.jwt_secret = secret;
        }
        if let Ok(secret) = std::env::var("STALLCRAFT_MEDIA_SECRET") {
            config.media_secret = secret;
        }
        if let Ok(base_url) = std::env::var("STALLCRAFT_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(dir) = std::env::var("STALLCRAFT_STORAGE_DIR") {
            config.storage_dir = PathBuf::from(dir);
        }

        config
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
