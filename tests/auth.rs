//! Session lifecycle and protected route tests.

mod common;

use axum::http::StatusCode;
use common::{test_config, TestApp, PASSWORD};
use metro_kms::app::auth::{AuthService, SESSION_KEY};
use serde_json::json;

// ===========================================================================
// Login
// ===========================================================================

#[tokio::test]
async fn login_infers_role_from_email() {
    let app = TestApp::new();

    let cases = [
        ("maintenance.lead@metro.example", "maintenance_engineer"),
        ("station.desk@metro.example", "station_controller"),
        ("compliance@metro.example", "compliance_officer"),
        ("ceo@metro.example", "executive"),
    ];

    for (email, role) in cases {
        let user = app.login_as(email).await;
        assert_eq!(user["role"], role, "{}", email);
        assert_eq!(user["email"], email);
        assert_eq!(user["id"], "1");
        assert_eq!(user["name"], "John Doe");
        assert_eq!(user["department"], "Operations");
    }
}

#[tokio::test]
async fn login_requires_email_and_password() {
    let app = TestApp::new();

    let resp = app
        .post_json("/auth/login", json!({ "email": "", "password": PASSWORD }))
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.error_message(), "email and password are required");

    let resp = app
        .post_json("/auth/login", json!({ "email": "ops@metro.example", "password": "  " }))
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_persists_session_record() {
    let app = TestApp::new();
    app.login_as("station@metro.example").await;

    let raw = app
        .state
        .storage
        .get_item(SESSION_KEY)
        .await
        .unwrap()
        .expect("session record missing");
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored["role"], "station_controller");
}

// ===========================================================================
// Signup
// ===========================================================================

#[tokio::test]
async fn signup_uses_submitted_profile() {
    let app = TestApp::new();

    let resp = app
        .post_json(
            "/auth/signup",
            json!({
                "name": "Priya Nair",
                "email": "priya@metro.example",
                "role": "compliance_officer",
                "department": "Audit",
                "password": PASSWORD
            }),
        )
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    let body = resp.json();
    assert_eq!(body["name"], "Priya Nair");
    assert_eq!(body["role"], "compliance_officer");
    assert_eq!(body["department"], "Audit");
    assert!(body["id"].as_str().unwrap().parse::<i128>().is_ok());

    let me = app.get("/auth/me").await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.json()["email"], "priya@metro.example");
}

#[tokio::test]
async fn signup_rejects_blank_name() {
    let app = TestApp::new();

    let resp = app
        .post_json(
            "/auth/signup",
            json!({
                "name": " ",
                "email": "x@metro.example",
                "role": "executive",
                "department": "Board"
            }),
        )
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert!(app.get("/auth/me").await.status == StatusCode::UNAUTHORIZED);
}

// ===========================================================================
// Logout and protected routes
// ===========================================================================

#[tokio::test]
async fn protected_routes_require_session() {
    let app = TestApp::new();

    for path in [
        "/auth/me",
        "/dashboard",
        "/navigation",
        "/notifications",
        "/documents",
        "/search?q=safety",
        "/graph",
        "/uploads",
    ] {
        let resp = app.get(path).await;
        assert_eq!(resp.status, StatusCode::UNAUTHORIZED, "{}", path);
        assert_eq!(resp.error_message(), "not authenticated");
    }
}

#[tokio::test]
async fn logout_ends_session_and_clears_record() {
    let app = TestApp::new();
    app.login_as("ops@metro.example").await;
    assert_eq!(app.get("/auth/me").await.status, StatusCode::OK);

    let resp = app.post("/auth/logout").await;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);

    assert_eq!(app.get("/auth/me").await.status, StatusCode::UNAUTHORIZED);
    assert!(app.state.storage.get_item(SESSION_KEY).await.unwrap().is_none());

    // Logging out twice is harmless.
    assert_eq!(app.post("/auth/logout").await.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn restart_restores_persisted_user() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);

    let first = TestApp::with_config(config.clone(), dir);
    first.login_as("maintenance@metro.example").await;

    // A second instance over the same storage file starts signed out.
    let second = TestApp::with_config(config, tempfile::tempdir().unwrap());
    assert_eq!(second.get("/auth/me").await.status, StatusCode::UNAUTHORIZED);

    let restored = AuthService::new(
        second.state.storage.clone(),
        second.state.session.clone(),
        second.state.simulated_latency,
    )
    .restore()
    .await
    .unwrap()
    .expect("user should be restored");
    assert_eq!(restored.email, "maintenance@metro.example");

    let me = second.get("/auth/me").await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.json()["role"], "maintenance_engineer");
}

#[tokio::test]
async fn corrupt_session_record_is_ignored() {
    let app = TestApp::new();
    app.state
        .storage
        .set_item(SESSION_KEY, "{not json".to_string())
        .await
        .unwrap();

    let restored = AuthService::new(
        app.state.storage.clone(),
        app.state.session.clone(),
        app.state.simulated_latency,
    )
    .restore()
    .await
    .unwrap();

    assert!(restored.is_none());
    assert_eq!(app.get("/auth/me").await.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::new();
    let resp = app.get("/health").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json()["status"], "ok");
}

#[tokio::test]
async fn login_recovers_from_corrupt_storage_file() {
    let app = TestApp::new();
    tokio::fs::write(&app.config.storage_path, b"not json")
        .await
        .unwrap();
    assert_eq!(app.get("/health").await.json()["status"], "degraded");

    let user = app.login_as("station@metro.example").await;
    assert_eq!(user["role"], "station_controller");
    assert_eq!(app.get("/health").await.json()["status"], "ok");

    let raw = app
        .state
        .storage
        .get_item(SESSION_KEY)
        .await
        .unwrap()
        .expect("session record missing");
    assert!(raw.contains("station@metro.example"));
}
