//! Integration tests for the gallery endpoint.

mod helpers;

use axum::http::StatusCode;
use serde_json::Value;

fn section_paths(body: &Value) -> Vec<String> {
    body["data"]["sections"]
        .as_array()
        .expect("sections array")
        .iter()
        .map(|s| s["path"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_gallery_groups_all_images() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/shares/holiday/gallery").await;
    assert_eq!(response.status, StatusCode::OK);

    // The archive folder holds a file of its own (cover.png), so it is
    // not merged into its children.
    assert_eq!(
        section_paths(&response.body),
        vec![
            "holiday.zip",
            "holiday.zip/beach/day2",
            "holiday.zip/city",
        ]
    );

    let download_all = &response.body["data"]["download_all"];
    assert_eq!(download_all["name"], "holiday.zip");
    assert_eq!(download_all["url"], "/api/shares/holiday/files/f1");
}

#[tokio::test]
async fn test_gallery_collapses_and_orders_folders() {
    let app = helpers::TestApp::with_shares(vec![helpers::share(
        "s",
        &["b/x.png", "trip/day1/img.png", "a.png", "a/y.png", "readme.md"],
    )]);

    let response = app.get("/api/shares/s/gallery").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(section_paths(&response.body), vec!["", "a", "b", "trip/day1"]);

    let root = &response.body["data"]["sections"][0]["files"];
    assert_eq!(root.as_array().unwrap().len(), 1);
    assert_eq!(root[0]["name"], "a.png");
    assert_eq!(response.body["data"]["download_all"], Value::Null);
}

#[tokio::test]
async fn test_gallery_without_images() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/shares/plain/gallery").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(section_paths(&response.body).is_empty());
}

#[tokio::test]
async fn test_gallery_of_private_share() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/shares/private/gallery").await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
