//! In-memory user directory backed by `DashMap`.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::{debug, warn};

use authhub_core::error::{AppError, ErrorKind};
use authhub_core::result::AppResult;
use authhub_core::types::UserId;
use authhub_entity::identity::Identity;

use super::store::UserDirectory;

/// In-memory identity store for single-node deployments.
///
/// Identities are keyed by login email; a secondary index maps ids to
/// logins. Uniqueness of the login is decided atomically through the
/// primary map's entry API.
#[derive(Debug, Default)]
pub struct MemoryUserDirectory {
    /// Identities keyed by login email.
    by_login: DashMap<String, Identity>,
    /// Login email keyed by identity id.
    login_by_id: DashMap<UserId, String>,
}

impl MemoryUserDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserDirectory for MemoryUserDirectory {
    async fn exists(&self, login: &str) -> bool {
        self.by_login.contains_key(login)
    }

    async fn insert(&self, identity: Identity) -> AppResult<()> {
        match self.by_login.entry(identity.email().to_string()) {
            Entry::Occupied(_) => {
                warn!(login = %identity.email(), "Rejected duplicate identity");
                Err(AppError::duplicate_identity("User already exist"))
            }
            Entry::Vacant(slot) => {
                self.login_by_id
                    .insert(identity.id, identity.email().to_string());
                debug!(user_id = %identity.id, "Identity stored");
                slot.insert(identity);
                Ok(())
            }
        }
    }

    async fn find_by_login(&self, login: &str) -> AppResult<Identity> {
        self.by_login
            .get(login)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found("No user found"))
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Identity> {
        let user_id: UserId = id.parse().map_err(|e| {
            AppError::with_source(
                ErrorKind::MalformedId,
                format!("Malformed identity id '{id}'"),
                e,
            )
        })?;

        // Clone the login out so the index guard is released before the
        // primary map is touched.
        let login = self
            .login_by_id
            .get(&user_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found("No user found"))?;

        self.find_by_login(&login).await
    }

    async fn len(&self) -> usize {
        self.by_login.len()
    }
}
