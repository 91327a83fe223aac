//! # authhub-api
//!
//! HTTP API layer for AuthHub built on Axum.
//!
//! Provides the credential and token endpoints, middleware (CORS, request
//! logging), DTOs, and the mapping from [`AppError`](authhub_core::AppError)
//! to the uniform `{error, reason}` response body.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use error::ApiError;
pub use state::AppState;
