//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Signing keys and token lifetime configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Path to the PEM-encoded RSA private key used for signing.
    #[serde(default = "default_private_key_path")]
    pub private_key_path: String,
    /// Path to the PEM-encoded RSA public key used for verification.
    #[serde(default = "default_public_key_path")]
    pub public_key_path: String,
    /// Lifetime of an issued token in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
    /// Clock skew tolerated when checking expiry, in seconds.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
    /// Whether login compares the supplied password with the stored hash.
    ///
    /// Defaults to `true`, including when the key is absent from the file.
    /// When disabled, any registered email receives a token.
    #[serde(default = "default_true")]
    pub verify_password: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            private_key_path: default_private_key_path(),
            public_key_path: default_public_key_path(),
            token_ttl_minutes: default_token_ttl(),
            leeway_seconds: default_leeway(),
            verify_password: default_true(),
        }
    }
}

fn default_private_key_path() -> String {
    "keys/private.pem".to_string()
}

fn default_public_key_path() -> String {
    "keys/public.pem".to_string()
}

fn default_token_ttl() -> u64 {
    60
}

fn default_leeway() -> u64 {
    5
}

fn default_true() -> bool {
    true
}
