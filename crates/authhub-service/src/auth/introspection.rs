//! What an introspection reveals about a live token.

use serde::Serialize;

use authhub_core::types::UserId;
use authhub_entity::token::Claim;

/// Identity state and claims behind a live, valid token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntrospectionReport {
    /// The token's subject.
    pub id: UserId,
    /// Whether the account is active.
    pub active: bool,
    /// Whether the account is banned.
    pub banned: bool,
    /// Outcome of token verification.
    pub token_valid: bool,
    /// Every claim in the token payload, ordered by key.
    pub claims: Vec<Claim>,
}
