//! Integration tests for logout, introspection, and token refresh.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_register_login_introspect() {
    let app = helpers::TestApp::new().await;
    let identity = app.register("a@b.com", "x").await;
    let token = app.login("a@b.com", "x").await;

    let response = app.post_raw("/sso", &token).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], identity["id"]);
    assert_eq!(response.body["active"], true);
    assert_eq!(response.body["banned"], false);
    assert_eq!(response.body["token_valid"], true);

    let claims = response.body["claims"].as_array().expect("claims array");
    let keys: Vec<&str> = claims.iter().filter_map(|c| c["key"].as_str()).collect();
    assert_eq!(keys, vec!["exp", "iat", "jti", "sub"]);

    let sub = claims.iter().find(|c| c["key"] == "sub").expect("sub claim");
    assert_eq!(sub["value"], identity["id"]);
}

#[tokio::test]
async fn test_sso_for_unknown_token() {
    let app = helpers::TestApp::new().await;

    let response = app.post_raw("/sso", "never.issued.token").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Unauthorized");
    assert_eq!(response.reason(), "User not logged in");
}

#[tokio::test]
async fn test_logout_then_sso() {
    let app = helpers::TestApp::new().await;
    app.register("a@b.com", "x").await;
    let token = app.login("a@b.com", "x").await;

    let response = app.post_raw("/logout", &token).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.is_empty());

    let response = app.post_raw("/sso", &token).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_with_trailing_newline_is_a_different_token() {
    let app = helpers::TestApp::new().await;
    app.register("a@b.com", "x").await;
    let token = app.login("a@b.com", "x").await;

    let response = app.post_raw("/logout", &format!("{token}\n")).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.reason(), "User not Logged in");

    let response = app.post_raw("/sso", &token).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_logout_unknown_token() {
    let app = helpers::TestApp::new().await;

    let response = app.post_raw("/logout", "never.issued.token").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.reason(), "User not Logged in");
}

#[tokio::test]
async fn test_two_logins_give_independent_sessions() {
    let app = helpers::TestApp::new().await;
    app.register("a@b.com", "x").await;
    let first = app.login("a@b.com", "x").await;
    let second = app.login("a@b.com", "x").await;
    assert_ne!(first, second);

    assert_eq!(app.post_raw("/logout", &first).await.status, StatusCode::OK);
    assert_eq!(app.post_raw("/sso", &second).await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_token_from_other_instance_is_not_logged_in() {
    let issuer = helpers::TestApp::new().await;
    issuer.register("a@b.com", "x").await;
    let token = issuer.login("a@b.com", "x").await;

    let other = helpers::TestApp::new().await;
    let response = other.post_raw("/sso", &token).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_invalid() {
    let app = helpers::TestApp::with_config(|config| {
        config.auth.token_ttl_minutes = 0;
        config.auth.leeway_seconds = 0;
    })
    .await;
    app.register("a@b.com", "x").await;
    let token = app.login("a@b.com", "x").await;

    let response = app.post_raw("/sso", &token).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.reason(), "Token in invalid");
}

#[tokio::test]
async fn test_refresh_rotates_token() {
    let app = helpers::TestApp::new().await;
    app.register("a@b.com", "x").await;
    let old = app.login("a@b.com", "x").await;

    let response = app.post_raw("/refresh", &old).await;
    assert_eq!(response.status, StatusCode::OK);
    let new = response.text;
    assert_ne!(new, old);

    assert_eq!(app.post_raw("/sso", &old).await.status, StatusCode::UNAUTHORIZED);

    let response = app.post_raw("/sso", &new).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["token_valid"], true);
}

#[tokio::test]
async fn test_refresh_unknown_token() {
    let app = helpers::TestApp::new().await;

    let response = app.post_raw("/refresh", "never.issued.token").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.reason(), "User not logged in");
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body["version"].is_string());
}
