//! Integration tests for registration and login.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use authhub_api::build_state;
use authhub_core::config::AppConfig;
use authhub_core::error::ErrorKind;

#[tokio::test]
async fn test_signin_success() {
    let app = helpers::TestApp::new().await;

    let response = app
        .post_json("/signin", json!({ "email": "a@b.com", "password": "x" }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["credentials"]["email"], "a@b.com");
    assert_eq!(response.body["active"], true);
    assert_eq!(response.body["banned"], false);
    assert!(response.body["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(response.body["credentials"].get("password").is_none());
    assert!(response.body["credentials"].get("secret_hash").is_none());
}

#[tokio::test]
async fn test_signin_duplicate() {
    let app = helpers::TestApp::new().await;
    app.register("a@b.com", "x").await;

    for password in ["x", "different"] {
        let response = app
            .post_json("/signin", json!({ "email": "a@b.com", "password": password }))
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.body,
            json!({ "error": "Bad Request", "reason": "User already exist" })
        );
    }
}

#[tokio::test]
async fn test_signin_missing_fields() {
    let app = helpers::TestApp::new().await;

    let response = app
        .post_json("/signin", json!({ "email": "", "password": "" }))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({
            "error": "Bad Request",
            "reason": "Login fields value are missing: ['email', 'password']"
        })
    );

    let response = app.post_json("/signin", json!({ "email": "a@b.com" })).await;
    assert_eq!(
        response.reason(),
        "Login fields value are missing: ['password']"
    );
}

#[tokio::test]
async fn test_signin_unparseable_body() {
    let app = helpers::TestApp::new().await;

    let response = app.post_raw("/signin", "not json").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.reason(), "Cant retrive credentials");
}

#[tokio::test]
async fn test_login_success_returns_raw_token() {
    let app = helpers::TestApp::new().await;
    app.register("a@b.com", "x").await;

    let response = app
        .post_json("/login", json!({ "email": "a@b.com", "password": "x" }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text.split('.').count(), 3);
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = helpers::TestApp::new().await;

    let response = app
        .post_json("/login", json!({ "email": "ghost@b.com", "password": "x" }))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.reason(),
        "Error during retrieving user from storage"
    );
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = helpers::TestApp::new().await;
    app.register("a@b.com", "x").await;

    let response = app
        .post_json("/login", json!({ "email": "a@b.com", "password": "y" }))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.reason(),
        "Error during retrieving user from storage"
    );
}

#[tokio::test]
async fn test_login_without_password_check() {
    let app = helpers::TestApp::with_config(|config| config.auth.verify_password = false).await;
    app.register("a@b.com", "x").await;

    let response = app
        .post_json("/login", json!({ "email": "a@b.com", "password": "y" }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = helpers::TestApp::new().await;

    let response = app.post_json("/login", json!({})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.reason(),
        "Login fields value are missing: ['email', 'password']"
    );
}

#[tokio::test]
async fn test_startup_fails_with_mismatched_keys() {
    let mut config = AppConfig::default();
    config.auth.private_key_path = helpers::fixture_key("private.pem");
    config.auth.public_key_path = helpers::fixture_key("other_public.pem");

    let err = build_state(config).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::KeyLoad);
}

#[tokio::test]
async fn test_startup_fails_with_missing_keys() {
    let mut config = AppConfig::default();
    config.auth.private_key_path = helpers::fixture_key("absent.pem");
    config.auth.public_key_path = helpers::fixture_key("public.pem");

    let err = build_state(config).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::KeyLoad);
}
