//! AuthHub Server: credential registration, token issuance, and session
//! introspection over HTTP.
//!
//! Main entry point that loads configuration, initializes logging, and
//! starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use authhub_core::config::AppConfig;
use authhub_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    tracing::info!("Starting AuthHub v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = authhub_api::run_server(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from `AUTHHUB_CONFIG` when set, otherwise from
/// `config/default.toml` overlaid with `config/{AUTHHUB_ENV}.toml`.
fn load_configuration() -> Result<AppConfig, AppError> {
    if let Ok(path) = std::env::var("AUTHHUB_CONFIG") {
        return AppConfig::load_from(path);
    }

    let env = std::env::var("AUTHHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
