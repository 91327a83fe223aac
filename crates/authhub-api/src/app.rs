//! Application builder: wires key chain, stores, and workflows into state,
//! then router + middleware into an Axum app.

use std::sync::Arc;

use axum::Router;
use axum::middleware as axum_middleware;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use authhub_auth::credentials::PasswordHasher;
use authhub_auth::jwt::JwtTokenizer;
use authhub_auth::keys::FileKeyChainProvider;
use authhub_core::config::AppConfig;
use authhub_core::error::AppError;
use authhub_core::result::AppResult;
use authhub_service::AuthService;
use authhub_store::{MemorySessionLedger, MemoryUserDirectory};

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(request_logging))
}

/// Loads the key chain and constructs every shared component.
///
/// Fails with a `KeyLoad` error when the configured key pair is unusable and
/// with a `Configuration` error when the token lifetime is out of range.
pub async fn build_state(config: AppConfig) -> AppResult<AppState> {
    let provider = FileKeyChainProvider::from_config(&config.auth);
    let chain = provider.initialize_key_chain().await?;

    let tokenizer = Arc::new(JwtTokenizer::new(chain, &config.auth)?);
    let directory = Arc::new(MemoryUserDirectory::new());
    let ledger = Arc::new(MemorySessionLedger::new());
    let hasher = Arc::new(PasswordHasher::new());

    let auth_service = AuthService::new(
        tokenizer,
        directory,
        ledger,
        hasher,
        config.auth.verify_password,
    );

    info!(
        token_ttl_minutes = config.auth.token_ttl_minutes,
        verify_password = config.auth.verify_password,
        "Auth service ready"
    );

    Ok(AppState::new(config, auth_service))
}

/// Runs the AuthHub server until Ctrl-C or SIGTERM.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    let addr = config.server.bind_address();
    let state = build_state(config).await?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(address = %addr, "AuthHub server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("AuthHub server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    info!("Shutdown signal received");
}
