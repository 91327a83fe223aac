//! Auth workflows: each operation is a linear, fail-fast pipeline over the
//! tokenizer, the user directory, and the session ledger.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use authhub_auth::credentials::{CredentialsValidator, PasswordHasher};
use authhub_auth::jwt::{Tokenizer, VerifiedToken, fingerprint};
use authhub_core::error::{AppError, ErrorKind};
use authhub_core::result::AppResult;
use authhub_entity::identity::{Credentials, Identity};
use authhub_store::{SessionLedger, UserDirectory};

use super::introspection::IntrospectionReport;

const USER_EXISTS: &str = "User already exist";
const LOOKUP_FAILED: &str = "Error during retrieving user from storage";
const TOKEN_GENERATION_FAILED: &str = "Error during token generation";
const LOGOUT_NOT_LOGGED_IN: &str = "User not Logged in";
const NOT_LOGGED_IN: &str = "User not logged in";
const TOKEN_INVALID: &str = "Token in invalid";
const USER_NOT_FOUND: &str = "User not found";

/// Orchestrates registration, token issuance, and session tracking.
pub struct AuthService {
    /// Issues and verifies tokens.
    tokenizer: Arc<dyn Tokenizer>,
    /// Registered identities.
    directory: Arc<dyn UserDirectory>,
    /// Tokens currently logged in.
    ledger: Arc<dyn SessionLedger>,
    /// Secret hashing.
    hasher: Arc<PasswordHasher>,
    /// Required-field checks.
    validator: CredentialsValidator,
    /// Whether login checks the password against the stored hash.
    verify_password: bool,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("verify_password", &self.verify_password)
            .finish_non_exhaustive()
    }
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        tokenizer: Arc<dyn Tokenizer>,
        directory: Arc<dyn UserDirectory>,
        ledger: Arc<dyn SessionLedger>,
        hasher: Arc<PasswordHasher>,
        verify_password: bool,
    ) -> Self {
        Self {
            tokenizer,
            directory,
            ledger,
            hasher,
            validator: CredentialsValidator::new(),
            verify_password,
        }
    }

    /// Registers a new identity.
    ///
    /// The returned identity is active, not banned, and carries the hashed
    /// secret rather than the submitted password.
    pub async fn register(&self, credentials: Credentials) -> AppResult<Identity> {
        self.validator.validate(&credentials)?;

        if self.directory.exists(&credentials.email).await {
            warn!(login = %credentials.email, "Registration rejected: login taken");
            return Err(AppError::duplicate_identity(USER_EXISTS));
        }

        let secret_hash = self.hasher.hash_password(&credentials.password)?;
        let identity = Identity::new(credentials.email, secret_hash);

        // A concurrent registration may still win between the check and the
        // insert; the directory reports that as a duplicate too.
        self.directory.insert(identity.clone()).await?;

        info!(user_id = %identity.id, login = %identity.email(), "Identity registered");

        Ok(identity)
    }

    /// Exchanges credentials for a token and records it as logged in.
    pub async fn login(&self, credentials: Credentials) -> AppResult<String> {
        self.validator.validate(&credentials)?;

        let identity = self
            .directory
            .find_by_login(&credentials.email)
            .await
            .map_err(|e| {
                debug!(login = %credentials.email, error = %e, "Login lookup failed");
                AppError::with_source(ErrorKind::NotFound, LOOKUP_FAILED, e)
            })?;

        if self.verify_password
            && !self
                .hasher
                .verify_password(&credentials.password, identity.secret_hash())?
        {
            warn!(user_id = %identity.id, "Login rejected: password mismatch");
            return Err(AppError::not_found(LOOKUP_FAILED));
        }

        let token = self.issue(&identity)?;
        self.ledger.record_token(&token).await?;

        info!(
            user_id = %identity.id,
            token = %fingerprint(&token),
            "Login successful"
        );

        Ok(token)
    }

    /// Ends the session of a logged-in token.
    pub async fn logout(&self, token: &str) -> AppResult<()> {
        if !self.ledger.is_live(token).await {
            return Err(AppError::unauthorized(LOGOUT_NOT_LOGGED_IN));
        }

        // Another logout may remove the entry first; its NotFound is surfaced.
        self.ledger.revoke_token(token).await?;

        info!(token = %fingerprint(token), "Logout successful");
        Ok(())
    }

    /// Resolves a logged-in token to its identity and claims.
    pub async fn introspect(&self, token: &str) -> AppResult<IntrospectionReport> {
        if !self.ledger.is_live(token).await {
            return Err(AppError::unauthorized(NOT_LOGGED_IN));
        }

        let verified = self
            .tokenizer
            .verify_token(token)
            .map_err(|e| AppError::with_source(ErrorKind::Validation, e.message.clone(), e))?;

        if !verified.valid {
            debug!(token = %fingerprint(token), "Introspection of an invalid token");
            return Err(AppError::validation(TOKEN_INVALID));
        }

        let identity = self.resolve_subject(&verified).await?;

        Ok(IntrospectionReport {
            id: identity.id,
            active: identity.active,
            banned: identity.banned,
            token_valid: verified.valid,
            claims: verified.claims,
        })
    }

    /// Swaps a logged-in token for a freshly issued one.
    ///
    /// The old token leaves the ledger in the same step the new one enters it.
    pub async fn refresh(&self, token: &str) -> AppResult<String> {
        if !self.ledger.is_live(token).await {
            return Err(AppError::unauthorized(NOT_LOGGED_IN));
        }

        let verified = self.tokenizer.verify_token(token).map_err(|e| {
            debug!(error = %e, "Refresh of an unverifiable token");
            AppError::with_source(ErrorKind::Validation, TOKEN_INVALID, e)
        })?;

        if !verified.valid {
            return Err(AppError::validation(TOKEN_INVALID));
        }

        let identity = self.resolve_subject(&verified).await?;
        let fresh = self.issue(&identity)?;

        self.ledger.replace_token(token, &fresh).await?;

        info!(
            user_id = %identity.id,
            old_token = %fingerprint(token),
            token = %fingerprint(&fresh),
            "Token refreshed"
        );

        Ok(fresh)
    }

    fn issue(&self, identity: &Identity) -> AppResult<String> {
        self.tokenizer.issue_token(identity).map_err(|e| {
            error!(user_id = %identity.id, error = %e, "Token signing failed");
            AppError::with_source(ErrorKind::Signing, TOKEN_GENERATION_FAILED, e)
        })
    }

    async fn resolve_subject(&self, verified: &VerifiedToken) -> AppResult<Identity> {
        let Some(subject) = verified.subject.as_deref() else {
            return Err(AppError::validation(USER_NOT_FOUND));
        };

        self.directory.find_by_id(subject).await.map_err(|e| {
            if e.is(ErrorKind::MalformedId) {
                warn!(subject = %subject, "Token subject is not an identity id");
            } else {
                warn!(subject = %subject, "Token subject has no identity");
            }
            AppError::with_source(ErrorKind::Validation, USER_NOT_FOUND, e)
        })
    }
}
