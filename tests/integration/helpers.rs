//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use sharegallery_api::AppState;
use sharegallery_core::config::AppConfig;
use sharegallery_entity::file::FileRecord;
use sharegallery_entity::share::Share;
use sharegallery_service::{GalleryService, ManifestShareStore};

/// Test application context
pub struct TestApp {
    /// The Axum app for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create a test application serving the fixture shares
    pub fn new() -> Self {
        Self::with_shares(fixture_shares())
    }

    /// Create a test application serving the given shares
    pub fn with_shares(shares: Vec<Share>) -> Self {
        let config = AppConfig::default();
        let store = ManifestShareStore::from_shares(shares);
        let gallery_service = Arc::new(GalleryService::new(
            Arc::new(store),
            config.gallery.clone(),
        ));
        let state = AppState::new(Arc::new(config), gallery_service);

        Self {
            router: sharegallery_api::build_app(state),
        }
    }

    /// Make a GET request to the test app
    pub async fn get(&self, path: &str) -> TestResponse {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

/// Build a share with the given id and file names; file ids are `f0`, `f1`, ...
pub fn share(id: &str, names: &[&str]) -> Share {
    Share {
        id: id.to_string(),
        name: None,
        description: None,
        files: names
            .iter()
            .enumerate()
            .map(|(i, name)| FileRecord::new(format!("f{i}"), *name, "1024"))
            .collect(),
        expiration: None,
        removed: false,
        private: false,
    }
}

/// Shares used by most tests
pub fn fixture_shares() -> Vec<Share> {
    let mut holiday = share(
        "holiday",
        &[
            "itinerary.pdf",
            "holiday.zip",
            "holiday.zip/beach/day2/sunset.png",
            "holiday.zip/beach/day2/waves.jpg",
            "holiday.zip/city/museum.png",
            "holiday.zip/cover.png",
            "holiday.zip/notes.txt",
        ],
    );
    holiday.name = Some("Summer Holiday".to_string());
    holiday.description = Some("Two weeks by the sea".to_string());

    let mut removed = share("removed", &["a.png"]);
    removed.removed = true;

    let mut private = share("private", &["a.png"]);
    private.private = true;

    vec![holiday, removed, private, share("plain", &["report.pdf"])]
}
