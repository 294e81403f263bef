//! stallcraft entry point
//!
//! Loads configuration from the environment, applies CLI overrides, and
//! starts the HTTP server. Errors go to stderr with a non-zero exit.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use stallcraft::config::AppConfig;
use stallcraft::http::{AppState, HttpServer};
use stallcraft::observability::logger::{Logger, Severity};
use stallcraft::store::MemoryStore;

/// stallcraft - storefront backend server
#[derive(Parser, Debug)]
#[command(name = "stallcraft")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host to bind to (overrides STALLCRAFT_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides STALLCRAFT_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Root directory for stored image blobs (overrides STALLCRAFT_STORAGE_DIR)
    #[arg(long)]
    storage_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env();
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(storage_dir) = cli.storage_dir {
        config.storage_dir = storage_dir;
    }

    let store = Arc::new(MemoryStore::new());
    let state = Arc::new(AppState::new(&config, store));
    let server = HttpServer::new(config, state);

    if let Err(e) = server.start().await {
        Logger::log_stderr(
            Severity::Error,
            "server_failed",
            &[("error", &e.to_string())],
        );
        std::process::exit(1);
    }
}
