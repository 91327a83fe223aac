//! Auth handlers: signin, login, logout, sso, refresh.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::{read_credentials, read_token};
use crate::dto::response::{IdentityResponse, IntrospectionResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /signin
pub async fn signin(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<IdentityResponse>, ApiError> {
    let credentials = read_credentials(&body)?;
    let identity = state.auth_service.register(credentials).await?;
    Ok(Json(IdentityResponse::from(identity)))
}

/// POST /login
pub async fn login(State(state): State<AppState>, body: Bytes) -> Result<String, ApiError> {
    let credentials = read_credentials(&body)?;
    Ok(state.auth_service.login(credentials).await?)
}

/// POST /logout
pub async fn logout(State(state): State<AppState>, body: Bytes) -> Result<StatusCode, ApiError> {
    let token = read_token(&body)?;
    state.auth_service.logout(&token).await?;
    Ok(StatusCode::OK)
}

/// POST /sso
pub async fn sso(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<IntrospectionResponse>, ApiError> {
    let token = read_token(&body)?;
    let report = state.auth_service.introspect(&token).await?;
    Ok(Json(IntrospectionResponse::from(report)))
}

/// POST /refresh
pub async fn refresh(State(state): State<AppState>, body: Bytes) -> Result<String, ApiError> {
    let token = read_token(&body)?;
    Ok(state.auth_service.refresh(&token).await?)
}
