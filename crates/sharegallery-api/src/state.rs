//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sharegallery_core::config::AppConfig;
use sharegallery_service::gallery::GalleryService;

/// Application state passed to every Axum handler via `State<AppState>`.
///
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Gallery page builder
    pub gallery_service: Arc<GalleryService>,
}

impl AppState {
    /// Creates the state from its parts.
    pub fn new(config: Arc<AppConfig>, gallery_service: Arc<GalleryService>) -> Self {
        Self {
            config,
            gallery_service,
        }
    }
}
