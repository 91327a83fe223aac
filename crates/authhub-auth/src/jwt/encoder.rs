//! Token creation.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{Header, encode};

use authhub_core::error::{AppError, ErrorKind};
use authhub_core::result::AppResult;
use authhub_core::types::TokenId;
use authhub_entity::identity::Identity;

use super::claims::TokenClaims;
use crate::keys::{KeyChain, SIGNING_ALGORITHM};

/// Signs PS512 tokens with the key chain's private key.
#[derive(Debug, Clone)]
pub struct JwtEncoder {
    /// Shared key pair.
    chain: Arc<KeyChain>,
    /// Token lifetime.
    ttl: Duration,
}

impl JwtEncoder {
    /// Creates an encoder issuing tokens that live for `ttl`.
    pub fn new(chain: Arc<KeyChain>, ttl: Duration) -> Self {
        Self { chain, ttl }
    }

    /// Issues a token for the identity.
    pub fn encode(&self, identity: &Identity) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::signing("Token expiry is out of range"))?;
        let claims = TokenClaims {
            sub: identity.id,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: TokenId::new(),
        };

        encode(
            &Header::new(SIGNING_ALGORITHM),
            &claims,
            self.chain.encoding_key(),
        )
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Signing,
                format!("Failed to sign token: {e}"),
                e,
            )
        })
    }
}
