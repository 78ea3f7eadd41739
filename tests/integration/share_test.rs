//! Integration tests for the share overview endpoint.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_share_overview() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/shares/holiday").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    let data = &response.body["data"];
    assert_eq!(data["share"]["title"], "Summer Holiday");
    assert_eq!(data["share"]["description"], "Two weeks by the sea");

    let names: Vec<&str> = data["files"]
        .as_array()
        .expect("files array")
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["itinerary.pdf", "holiday.zip"]);

    assert_eq!(data["summary"]["file_count"], 2);
    assert_eq!(data["summary"]["total_size_bytes"], 2048);
    assert_eq!(data["summary"]["total_size_human"], "2.0 KiB");
    assert_eq!(data["summary"]["download_all"], true);
}

#[tokio::test]
async fn test_share_overview_archive_gallery() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/shares/holiday").await;
    let archives = response.body["data"]["archives"]
        .as_array()
        .expect("archives array");
    assert_eq!(archives.len(), 1);
    assert_eq!(archives[0]["archive"]["name"], "holiday.zip");
    assert_eq!(archives[0]["archive"]["url"], "/api/shares/holiday/files/f1");

    let paths: Vec<&str> = archives[0]["sections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["", "beach/day2", "city"]);

    let day2 = &archives[0]["sections"][1]["files"];
    assert_eq!(day2[0]["name"], "holiday.zip/beach/day2/sunset.png");
    assert_eq!(day2[1]["name"], "holiday.zip/beach/day2/waves.jpg");
}

#[tokio::test]
async fn test_share_without_archives() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/shares/plain").await;
    assert_eq!(response.status, StatusCode::OK);

    let data = &response.body["data"];
    assert_eq!(data["share"]["title"], "plain");
    assert_eq!(data["summary"]["download_all"], false);
    assert_eq!(data["archives"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_unknown_share() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/shares/nope").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_removed_share() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/shares/removed").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "SHARE_REMOVED");
}

#[tokio::test]
async fn test_private_share() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/shares/private").await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "PRIVATE_SHARE");
}

#[tokio::test]
async fn test_blank_share_id() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/shares/%20").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}
