//! Identity entity model.

use serde::{Deserialize, Serialize};

use authhub_core::types::UserId;

use super::credentials::StoredCredentials;

/// A registered identity.
///
/// Serializes as `{"id", "credentials": {"email"}, "active", "banned"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique, immutable identifier.
    pub id: UserId,
    /// Login email and hashed secret.
    pub credentials: StoredCredentials,
    /// Whether the account is active.
    pub active: bool,
    /// Whether the account is banned.
    pub banned: bool,
}

impl Identity {
    /// Creates a freshly registered identity: new id, active, not banned.
    pub fn new(email: impl Into<String>, secret_hash: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            credentials: StoredCredentials {
                email: email.into(),
                secret_hash: secret_hash.into(),
            },
            active: true,
            banned: false,
        }
    }

    /// Returns the login email.
    pub fn email(&self) -> &str {
        &self.credentials.email
    }

    /// Returns the stored secret hash.
    pub fn secret_hash(&self) -> &str {
        &self.credentials.secret_hash
    }
}
