//! Session ledger trait.

use async_trait::async_trait;

use authhub_core::result::AppResult;

/// Tracks which issued tokens are currently live.
///
/// A token is live iff the ledger holds an entry for its exact string.
#[async_trait]
pub trait SessionLedger: Send + Sync + 'static {
    /// Records a newly issued token.
    ///
    /// Fails with `DuplicateSession` if the token is already recorded.
    async fn record_token(&self, token: &str) -> AppResult<()>;

    /// Atomically swaps `old` for `new`.
    ///
    /// If `old` is not recorded this behaves exactly like
    /// [`record_token`](Self::record_token) for `new`.
    async fn replace_token(&self, old: &str, new: &str) -> AppResult<()>;

    /// Returns `true` if the token is recorded.
    async fn is_live(&self, token: &str) -> bool;

    /// Removes a token.
    ///
    /// Fails with `NotFound` if the token is not recorded.
    async fn revoke_token(&self, token: &str) -> AppResult<()>;

    /// Number of live tokens.
    async fn len(&self) -> usize;
}
