//! In-memory session ledger using a Tokio mutex for single-node deployments.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use authhub_core::error::AppError;
use authhub_core::result::AppResult;

use super::store::SessionLedger;

/// In-memory session ledger.
///
/// Every operation runs under a single lock acquisition, so check-and-remove
/// and old→new replacement are atomic with respect to other requests.
#[derive(Debug, Default)]
pub struct MemorySessionLedger {
    /// Tokens currently considered logged in.
    live: Mutex<HashSet<String>>,
}

impl MemorySessionLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }
}

fn duplicate_session() -> AppError {
    AppError::duplicate_session("Suggested token already stored in session")
}

#[async_trait]
impl SessionLedger for MemorySessionLedger {
    async fn record_token(&self, token: &str) -> AppResult<()> {
        let mut live = self.live.lock().await;

        if !live.insert(token.to_string()) {
            warn!("Attempted to record a token that is already live");
            return Err(duplicate_session());
        }

        debug!(live = live.len(), "Token recorded");
        Ok(())
    }

    async fn replace_token(&self, old: &str, new: &str) -> AppResult<()> {
        let mut live = self.live.lock().await;

        if live.remove(old) {
            live.insert(new.to_string());
            debug!(live = live.len(), "Token replaced");
            return Ok(());
        }

        if !live.insert(new.to_string()) {
            return Err(duplicate_session());
        }

        debug!(live = live.len(), "Replacement target absent, token recorded");
        Ok(())
    }

    async fn is_live(&self, token: &str) -> bool {
        self.live.lock().await.contains(token)
    }

    async fn revoke_token(&self, token: &str) -> AppResult<()> {
        let mut live = self.live.lock().await;

        if live.remove(token) {
            debug!(live = live.len(), "Token revoked");
            Ok(())
        } else {
            Err(AppError::not_found("Token has not been found for deleting"))
        }
    }

    async fn len(&self) -> usize {
        self.live.lock().await.len()
    }
}
