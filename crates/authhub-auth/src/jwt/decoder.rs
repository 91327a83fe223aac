//! Token verification.

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Validation, decode, decode_header};
use serde_json::{Map, Value};

use authhub_core::error::{AppError, ErrorKind};
use authhub_core::result::AppResult;
use authhub_entity::token::Claim;

use super::claims::VerifiedToken;
use crate::keys::{KeyChain, SIGNING_ALGORITHM};

/// Verifies PS512 tokens against the key chain's public key.
#[derive(Clone)]
pub struct JwtDecoder {
    /// Shared key pair.
    chain: Arc<KeyChain>,
    /// Signature-only validation; expiry is judged separately.
    validation: Validation,
    /// Clock skew tolerated on `exp`, in seconds.
    leeway_seconds: i64,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("algorithms", &self.validation.algorithms)
            .field("leeway_seconds", &self.leeway_seconds)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a decoder that tolerates `leeway_seconds` of clock skew.
    pub fn new(chain: Arc<KeyChain>, leeway_seconds: u64) -> Self {
        let mut validation = Validation::new(SIGNING_ALGORITHM);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Self {
            chain,
            validation,
            leeway_seconds: i64::try_from(leeway_seconds).unwrap_or(i64::MAX),
        }
    }

    /// Verifies the signature and extracts the claims.
    ///
    /// Errors mean the token is not ours: unparseable, signed with another
    /// algorithm, or signed with another key. Expiry is reported through
    /// [`VerifiedToken::valid`].
    pub fn decode(&self, token: &str) -> AppResult<VerifiedToken> {
        let header = decode_header(token).map_err(|e| {
            AppError::with_source(
                ErrorKind::Verification,
                format!("Malformed token: {e}"),
                e,
            )
        })?;

        if header.alg != SIGNING_ALGORITHM {
            return Err(AppError::verification(format!(
                "Unsupported token algorithm {:?}",
                header.alg
            )));
        }

        let data = decode::<Map<String, Value>>(token, self.chain.decoding_key(), &self.validation)
            .map_err(|e| {
                let message = match e.kind() {
                    JwtErrorKind::InvalidSignature => "Token signature is invalid".to_string(),
                    _ => format!("Token verification failed: {e}"),
                };
                AppError::with_source(ErrorKind::Verification, message, e)
            })?;

        let payload = data.claims;

        let subject = payload
            .get("sub")
            .and_then(Value::as_str)
            .filter(|sub| !sub.is_empty())
            .map(str::to_string);

        let now = Utc::now().timestamp();
        let unexpired = payload
            .get("exp")
            .and_then(Value::as_f64)
            .is_some_and(|exp| exp + self.leeway_seconds as f64 > now as f64);

        let claims = payload
            .into_iter()
            .map(|(key, value)| Claim::new(key, value))
            .collect();

        Ok(VerifiedToken {
            valid: unexpired && subject.is_some(),
            subject,
            claims,
        })
    }
}
