//! # sharegallery-api
//!
//! HTTP API layer for Share Gallery built on Axum.
//!
//! Provides the share overview and gallery endpoints, middleware (CORS,
//! compression, request logging), DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;
