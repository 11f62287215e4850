//! Notification filtering and mutation tests.

mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::Value;

fn ids(body: &Value) -> Vec<String> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}

// ===========================================================================
// Listing
// ===========================================================================

#[tokio::test]
async fn list_is_scoped_to_role() {
    let app = TestApp::new();
    app.login_as("station@metro.example").await;

    let resp = app.get("/notifications").await;
    assert_eq!(resp.status, StatusCode::OK);
    let body = resp.json();

    assert_eq!(ids(&body), vec!["1", "3"]);
    assert_eq!(body["unread_count"], 1);
    assert_eq!(body["badge"], "1");
    assert_eq!(body["counts"]["all"], 2);
    assert_eq!(body["counts"]["high"], 1);
    assert_eq!(body["counts"]["critical"], 0);
    assert!(body["items"][0]["age"].as_str().is_some_and(|age| !age.is_empty()));
    assert_eq!(body["items"][0]["priority"], "high");
}

#[tokio::test]
async fn filter_modes() {
    let app = TestApp::new();
    app.login_as("maintenance@metro.example").await;

    assert_eq!(ids(&app.get("/notifications?filter=all").await.json()), vec!["1", "2"]);
    assert_eq!(ids(&app.get("/notifications?filter=unread").await.json()), vec!["1", "2"]);
    assert_eq!(ids(&app.get("/notifications?filter=high").await.json()), vec!["1"]);
    assert_eq!(ids(&app.get("/notifications?filter=critical").await.json()), vec!["2"]);

    // The compliance-only reminder never shows up for maintenance.
    let compliance_only = app.get("/notifications?filter=unread").await.json();
    assert!(!ids(&compliance_only).contains(&"4".to_string()));
}

#[tokio::test]
async fn invalid_filter_is_rejected() {
    let app = TestApp::new();
    app.login_as("station@metro.example").await;

    let resp = app.get("/notifications?filter=urgent").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn counts_endpoint() {
    let app = TestApp::new();
    app.login_as("compliance@metro.example").await;

    let resp = app.get("/notifications/counts").await;
    assert_eq!(resp.status, StatusCode::OK);
    let body = resp.json();
    assert_eq!(body["all"], 2);
    assert_eq!(body["unread"], 1);
    assert_eq!(body["badge"], "1");
}

// ===========================================================================
// Mutations
// ===========================================================================

#[tokio::test]
async fn mark_read_and_unread() {
    let app = TestApp::new();
    app.login_as("maintenance@metro.example").await;

    let resp = app.post("/notifications/2/read").await;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);
    assert_eq!(ids(&app.get("/notifications?filter=unread").await.json()), vec!["1"]);

    let resp = app.post("/notifications/2/unread").await;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);
    assert_eq!(app.get("/notifications").await.json()["unread_count"], 2);
}

#[tokio::test]
async fn unknown_notification_is_not_found() {
    let app = TestApp::new();
    app.login_as("maintenance@metro.example").await;

    for resp in [
        app.post("/notifications/99/read").await,
        app.post("/notifications/99/unread").await,
        app.delete("/notifications/99").await,
    ] {
        assert_eq!(resp.status, StatusCode::NOT_FOUND);
        assert_eq!(resp.error_message(), "notification not found");
    }
    assert_eq!(ids(&app.get("/notifications").await.json()), vec!["1", "2"]);
}

#[tokio::test]
async fn delete_is_permanent() {
    let app = TestApp::new();
    app.login_as("maintenance@metro.example").await;

    assert_eq!(app.delete("/notifications/1").await.status, StatusCode::NO_CONTENT);
    assert_eq!(ids(&app.get("/notifications").await.json()), vec!["2"]);
    assert_eq!(app.delete("/notifications/1").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn mark_all_read_covers_every_role() {
    let app = TestApp::new();
    app.login_as("station@metro.example").await;

    let resp = app.post("/notifications/read-all").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json()["updated"], 3);

    for email in [
        "maintenance@metro.example",
        "station@metro.example",
        "compliance@metro.example",
        "board@metro.example",
    ] {
        app.login_as(email).await;
        let body = app.get("/notifications?filter=unread").await.json();
        assert!(ids(&body).is_empty(), "{}", email);
        assert_eq!(body["badge"], "");
    }
}
