//! Token payload and verification outcome.

use serde::{Deserialize, Serialize};

use authhub_core::types::{TokenId, UserId};
use authhub_entity::token::Claim;

/// Payload written into every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the identity the token was issued to.
    pub sub: UserId,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Unique token id, keeps same-second tokens distinct.
    pub jti: TokenId,
}

/// Result of verifying a token whose signature checked out.
///
/// An expired token or one without a subject still verifies; `valid` is
/// `false` in that case and callers must check it.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedToken {
    /// Signature good, not expired, subject present.
    pub valid: bool,
    /// The `sub` claim, when present and non-empty.
    pub subject: Option<String>,
    /// Every payload claim, ordered by key.
    pub claims: Vec<Claim>,
}
