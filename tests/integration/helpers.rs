//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use authhub_api::{build_app, build_state};
use authhub_core::config::AppConfig;

const WORKSPACE: &str = env!("CARGO_MANIFEST_DIR");

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application with password checking on.
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Create a test application after adjusting the test config.
    pub async fn with_config(adjust: impl FnOnce(&mut AppConfig)) -> Self {
        let mut config = AppConfig::load_from(format!("{WORKSPACE}/tests/fixtures/test_config.toml"))
            .expect("Failed to load test config");

        config.auth.private_key_path = fixture_key("private.pem");
        config.auth.public_key_path = fixture_key("public.pem");
        adjust(&mut config);

        let state = build_state(config.clone())
            .await
            .expect("Failed to build app state");

        Self {
            router: build_app(state),
            config,
        }
    }

    /// POST a JSON value.
    pub async fn post_json(&self, path: &str, body: Value) -> TestResponse {
        self.send("POST", path, body.to_string()).await
    }

    /// POST a raw text body.
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        self.send("POST", path, body.to_string()).await
    }

    /// GET a path.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.send("GET", path, String::new()).await
    }

    /// Register credentials, asserting success.
    pub async fn register(&self, email: &str, password: &str) -> Value {
        let response = self
            .post_json(
                "/signin",
                serde_json::json!({ "email": email, "password": password }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "signin failed: {}", response.text);
        response.body
    }

    /// Log in, asserting success, and return the token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post_json(
                "/login",
                serde_json::json!({ "email": email, "password": password }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {}", response.text);
        response.text
    }

    async fn send(&self, method: &str, path: &str, body: String) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
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

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, text, body }
    }
}

/// Absolute path of a fixture key.
pub fn fixture_key(name: &str) -> String {
    format!("{WORKSPACE}/tests/fixtures/keys/{name}")
}

/// Response captured from the router
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Raw body text
    pub text: String,
    /// Parsed JSON body, `Null` when the body is not JSON
    pub body: Value,
}

impl TestResponse {
    /// The uniform error body's `reason`.
    pub fn reason(&self) -> &str {
        self.body["reason"].as_str().unwrap_or_default()
    }
}
