//! Loads the key chain from disk once and caches it for the process lifetime.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::info;

use authhub_core::config::AuthConfig;
use authhub_core::error::{AppError, ErrorKind};
use authhub_core::result::AppResult;

use super::chain::KeyChain;

/// Reads PEM key files and hands out a shared [`KeyChain`].
#[derive(Debug)]
pub struct FileKeyChainProvider {
    private_key_path: PathBuf,
    public_key_path: PathBuf,
    chain: OnceCell<Arc<KeyChain>>,
}

impl FileKeyChainProvider {
    /// Creates a provider for the given key file paths. Nothing is read yet.
    pub fn new(private_key_path: impl Into<PathBuf>, public_key_path: impl Into<PathBuf>) -> Self {
        Self {
            private_key_path: private_key_path.into(),
            public_key_path: public_key_path.into(),
            chain: OnceCell::new(),
        }
    }

    /// Creates a provider for the paths in the auth configuration.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.private_key_path, &config.public_key_path)
    }

    /// Returns the key chain, loading it on first use.
    ///
    /// A failed load leaves the cell empty, so nothing partial is cached.
    pub async fn initialize_key_chain(&self) -> AppResult<Arc<KeyChain>> {
        self.chain
            .get_or_try_init(|| self.load())
            .await
            .map(Arc::clone)
    }

    async fn load(&self) -> AppResult<Arc<KeyChain>> {
        let private_pem = read_pem(&self.private_key_path, "private").await?;
        let public_pem = read_pem(&self.public_key_path, "public").await?;

        let chain = KeyChain::from_pem(&private_pem, &public_pem)?;

        info!(
            private_key = %self.private_key_path.display(),
            public_key = %self.public_key_path.display(),
            "Key chain loaded"
        );

        Ok(Arc::new(chain))
    }
}

async fn read_pem(path: &Path, half: &str) -> AppResult<Vec<u8>> {
    tokio::fs::read(path).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::KeyLoad,
            format!("Failed to read {half} key '{}': {e}", path.display()),
            e,
        )
    })
}
