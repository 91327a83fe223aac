//! Response DTOs.

use serde::{Deserialize, Serialize};

use authhub_core::types::UserId;
use authhub_entity::identity::Identity;
use authhub_entity::token::Claim;
use authhub_service::IntrospectionReport;

/// Public part of an identity's credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsResponse {
    /// Login email.
    pub email: String,
}

/// Registered identity, without its secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityResponse {
    /// Identity id.
    pub id: UserId,
    /// Login credentials.
    pub credentials: CredentialsResponse,
    /// Whether the account is active.
    pub active: bool,
    /// Whether the account is banned.
    pub banned: bool,
}

impl From<Identity> for IdentityResponse {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            credentials: CredentialsResponse {
                email: identity.credentials.email,
            },
            active: identity.active,
            banned: identity.banned,
        }
    }
}

/// `POST /sso` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntrospectionResponse {
    /// Token subject.
    pub id: UserId,
    /// Whether the account is active.
    pub active: bool,
    /// Whether the account is banned.
    pub banned: bool,
    /// Outcome of token verification.
    pub token_valid: bool,
    /// Token claims as `{key, value}` pairs.
    pub claims: Vec<Claim>,
}

impl From<IntrospectionReport> for IntrospectionResponse {
    fn from(report: IntrospectionReport) -> Self {
        Self {
            id: report.id,
            active: report.active,
            banned: report.banned,
            token_valid: report.token_valid,
            claims: report.claims,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Application version.
    pub version: String,
}
