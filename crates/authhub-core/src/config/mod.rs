//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field carries a default so a missing file still
//! yields a usable configuration.

pub mod app;
pub mod auth;
pub mod logging;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Prefix for environment variable overrides, e.g. `AUTHHUB_SERVER__PORT`.
const ENV_PREFIX: &str = "AUTHHUB";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Signing key and token settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the conventional `config/` directory.
    ///
    /// Merges `config/default.toml` with an environment-specific overlay
    /// `config/{env}.toml` and environment variables prefixed with `AUTHHUB_`.
    /// Both files are optional.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false));

        Self::finish(builder)
    }

    /// Load configuration from an explicit file, still honouring
    /// environment variable overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AppError::configuration(format!(
                "Configuration file '{}' does not exist",
                path.display()
            )));
        }

        let builder = config::Config::builder().add_source(config::File::from(path));

        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, AppError> {
        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
