//! Application state shared across all handlers.

use std::sync::Arc;

use authhub_core::config::AppConfig;
use authhub_service::AuthService;

/// Passed to every Axum handler via `State<AppState>`; cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Auth workflows.
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Creates the state from its parts.
    pub fn new(config: AppConfig, auth_service: AuthService) -> Self {
        Self {
            config: Arc::new(config),
            auth_service: Arc::new(auth_service),
        }
    }
}
