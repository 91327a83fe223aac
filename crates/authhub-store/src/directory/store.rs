//! User directory trait.

use async_trait::async_trait;

use authhub_core::result::AppResult;
use authhub_entity::identity::Identity;

/// Stores identities and answers credential and identity lookups.
///
/// Lookups return owned copies: mutating a returned [`Identity`] never
/// changes what the directory holds.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Returns `true` if an identity is registered under `login`.
    async fn exists(&self, login: &str) -> bool;

    /// Inserts a new identity.
    ///
    /// Fails with `DuplicateIdentity` if the login is already taken.
    async fn insert(&self, identity: Identity) -> AppResult<()>;

    /// Finds an identity by login email.
    ///
    /// Fails with `NotFound` if no identity uses that login.
    async fn find_by_login(&self, login: &str) -> AppResult<Identity>;

    /// Finds an identity by its string identifier.
    ///
    /// Fails with `MalformedId` if `id` does not parse, and with `NotFound`
    /// if it parses but is unknown.
    async fn find_by_id(&self, id: &str) -> AppResult<Identity>;

    /// Number of registered identities.
    async fn len(&self) -> usize;
}
