//! Share Gallery Server — public share pages and image galleries
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use sharegallery_api::AppState;
use sharegallery_core::config::AppConfig;
use sharegallery_core::error::AppError;
use sharegallery_service::{GalleryService, ManifestShareStore};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("SHAREGALLERY_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Share Gallery v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Load shares ──────────────────────────────────────
    let store = ManifestShareStore::load(&config.gallery.manifest_path).await?;

    // ── Step 2: Initialize services ──────────────────────────────
    let gallery_service = Arc::new(GalleryService::new(
        Arc::new(store),
        config.gallery.clone(),
    ));

    // ── Step 3: Build and start HTTP server ──────────────────────
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let state = AppState::new(Arc::new(config.clone()), gallery_service);

    sharegallery_api::app::serve(&config, state, shutdown_signal(grace)).await?;

    tracing::info!("Share Gallery stopped");
    Ok(())
}

/// Resolves on Ctrl+C, then arms a watchdog that exits the process if
/// in-flight requests do not drain within `grace`.
async fn shutdown_signal(grace: Duration) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received, draining connections...");

    tokio::spawn(async move {
        tokio::time::sleep(grace).await;
        tracing::warn!("Graceful shutdown timed out after {:?}", grace);
        std::process::exit(1);
    });
}
