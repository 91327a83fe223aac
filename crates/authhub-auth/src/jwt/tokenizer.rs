//! The token seam used by the auth workflows.

use std::sync::Arc;

use chrono::{Duration, Utc};

use authhub_core::config::AuthConfig;
use authhub_core::error::AppError;
use authhub_core::result::AppResult;
use authhub_entity::identity::Identity;

use super::claims::VerifiedToken;
use super::decoder::JwtDecoder;
use super::encoder::JwtEncoder;
use crate::keys::KeyChain;

/// Issues and verifies bearer tokens.
pub trait Tokenizer: Send + Sync + 'static {
    /// Issues a signed token whose subject is the identity's id.
    fn issue_token(&self, identity: &Identity) -> AppResult<String>;

    /// Verifies a token's algorithm and signature and extracts its claims.
    fn verify_token(&self, token: &str) -> AppResult<VerifiedToken>;
}

/// [`Tokenizer`] signing PS512 JWTs with one RSA key chain.
#[derive(Debug, Clone)]
pub struct JwtTokenizer {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
}

impl JwtTokenizer {
    /// Creates a tokenizer using the configured lifetime and leeway.
    ///
    /// Fails when `token_ttl_minutes` would put `exp` past the representable
    /// calendar.
    pub fn new(chain: Arc<KeyChain>, config: &AuthConfig) -> AppResult<Self> {
        let ttl = i64::try_from(config.token_ttl_minutes)
            .ok()
            .and_then(Duration::try_minutes)
            .filter(|ttl| Utc::now().checked_add_signed(*ttl).is_some())
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "auth.token_ttl_minutes {} is out of range",
                    config.token_ttl_minutes
                ))
            })?;

        Ok(Self::with_lifetime(chain, ttl, config.leeway_seconds))
    }

    /// Creates a tokenizer with an explicit lifetime, which may be negative.
    pub fn with_lifetime(chain: Arc<KeyChain>, ttl: Duration, leeway_seconds: u64) -> Self {
        Self {
            encoder: JwtEncoder::new(Arc::clone(&chain), ttl),
            decoder: JwtDecoder::new(chain, leeway_seconds),
        }
    }
}

impl Tokenizer for JwtTokenizer {
    fn issue_token(&self, identity: &Identity) -> AppResult<String> {
        self.encoder.encode(identity)
    }

    fn verify_token(&self, token: &str) -> AppResult<VerifiedToken> {
        self.decoder.decode(token)
    }
}
