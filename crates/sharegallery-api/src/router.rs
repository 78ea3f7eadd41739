//! Route definitions for the Share Gallery HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{Router, middleware as axum_middleware, routing::get};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and request logging.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new().merge(share_routes()).merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Public share pages
fn share_routes() -> Router<AppState> {
    Router::new()
        .route("/shares/{share_id}", get(handlers::share::get_share))
        .route(
            "/shares/{share_id}/gallery",
            get(handlers::share::get_gallery),
        )
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
