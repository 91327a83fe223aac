//! Route definitions for the AuthHub HTTP API.

use axum::Router;
use axum::routing::{get, post};

use crate::handlers;
use crate::state::AppState;

/// Builds the router with every route bound to the state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(auth_routes())
        .merge(health_routes())
        .with_state(state)
}

/// Credential and token endpoints.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signin", post(handlers::auth::signin))
        .route("/login", post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout))
        .route("/sso", post(handlers::auth::sso))
        .route("/refresh", post(handlers::auth::refresh))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
