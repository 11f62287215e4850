#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::time::Duration;
use tempfile::TempDir;
use tower::ServiceExt;

use metro_kms::config::AppConfig;
use metro_kms::AppState;

pub const PASSWORD: &str = "password123";

// ---------------------------------------------------------------------------
// TestApp: one fresh seeded instance per test
// ---------------------------------------------------------------------------

pub struct TestApp {
    router: Router,
    pub state: AppState,
    pub config: AppConfig,
    _dir: TempDir,
}

pub struct TestResponse {
    pub status: StatusCode,
    body_bytes: bytes::Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body_bytes).unwrap_or(Value::Null)
    }

    pub fn error_message(&self) -> String {
        self.json()["error"].as_str().unwrap_or("").to_string()
    }
}

pub fn test_config(dir: &TempDir) -> AppConfig {
    AppConfig {
        http_addr: "127.0.0.1:0".into(),
        storage_path: dir.path().join("kms_storage.json"),
        simulated_latency: Duration::ZERO,
        upload_tick: Duration::from_millis(1),
        upload_progress_step: 25,
        upload_max_bytes: 1024 * 1024,
        cors_allow_any_origin: false,
    }
}

impl TestApp {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        Self::with_config(test_config(&dir), dir)
    }

    pub fn with_config(config: AppConfig, dir: TempDir) -> Self {
        let state = AppState::from_config(&config);
        let router = metro_kms::http::router(state.clone());

        TestApp {
            router,
            state,
            config,
            _dir: dir,
        }
    }

    // ------------------------------------------------------------------
    // Low-level request helper
    // ------------------------------------------------------------------
    pub async fn request(&self, method: Method, path: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder()
            .method(method)
            .uri(path)
            .header("host", "localhost");

        let request = if let Some(body) = body {
            builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap()
        } else {
            builder.body(Body::empty()).unwrap()
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("oneshot failed");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("failed to collect body")
            .to_bytes();

        TestResponse { status, body_bytes }
    }

    // ------------------------------------------------------------------
    // Convenience HTTP helpers
    // ------------------------------------------------------------------
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str) -> TestResponse {
        self.request(Method::POST, path, None).await
    }

    pub async fn post_json(&self, path: &str, body: Value) -> TestResponse {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn patch_json(&self, path: &str, body: Value) -> TestResponse {
        self.request(Method::PATCH, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request(Method::DELETE, path, None).await
    }

    // ------------------------------------------------------------------
    // Test data helpers
    // ------------------------------------------------------------------

    /// Log in through the API; the role follows from the email.
    pub async fn login_as(&self, email: &str) -> Value {
        let resp = self
            .post_json(
                "/auth/login",
                json!({ "email": email, "password": PASSWORD }),
            )
            .await;
        assert_eq!(resp.status, StatusCode::OK, "login failed: {}", resp.error_message());
        resp.json()
    }

    /// Register files and wait until none of them is still uploading.
    pub async fn upload_and_settle(&self, files: Value) -> Vec<Value> {
        let resp = self.post_json("/uploads", json!({ "files": files })).await;
        assert_eq!(resp.status, StatusCode::OK, "upload failed: {}", resp.error_message());
        self.settle_uploads().await
    }

    /// Poll the upload list until every entry is terminal.
    pub async fn settle_uploads(&self) -> Vec<Value> {
        for _ in 0..500 {
            let items = self.get("/uploads").await.json()["items"]
                .as_array()
                .cloned()
                .unwrap_or_default();
            if items.iter().all(|item| item["status"] != "uploading") {
                return items;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("uploads never settled");
    }
}
