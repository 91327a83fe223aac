//! Credential value objects.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Email and password pair submitted on registration and login.
///
/// Missing JSON fields deserialize as empty strings so that validation can
/// report every absent field at once.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Login email.
    #[serde(default)]
    pub email: String,
    /// Plaintext password as submitted.
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    /// Creates a credential pair.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Credential material kept on an [`Identity`](super::Identity).
///
/// The secret is an Argon2id PHC string and is never serialized.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredentials {
    /// Login email, unique across identities.
    pub email: String,
    /// Argon2id hash of the password.
    #[serde(default, skip_serializing)]
    pub secret_hash: String,
}

impl fmt::Debug for StoredCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredCredentials")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
