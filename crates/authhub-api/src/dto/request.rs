//! Request DTOs and body readers.

use axum::body::Bytes;
use serde::Deserialize;

use authhub_core::error::{AppError, ErrorKind};
use authhub_core::result::AppResult;
use authhub_entity::identity::Credentials;

/// Body of `POST /signin` and `POST /login`.
///
/// Absent fields read as empty so the workflow can name every missing one.
#[derive(Deserialize)]
pub struct CredentialsRequest {
    /// Login email.
    #[serde(default)]
    pub email: String,
    /// Plaintext password.
    #[serde(default)]
    pub password: String,
}

impl From<CredentialsRequest> for Credentials {
    fn from(req: CredentialsRequest) -> Self {
        Credentials::new(req.email, req.password)
    }
}

/// Parses a credentials JSON body regardless of `Content-Type`.
pub fn read_credentials(body: &Bytes) -> AppResult<Credentials> {
    serde_json::from_slice::<CredentialsRequest>(body)
        .map(Credentials::from)
        .map_err(|e| AppError::with_source(ErrorKind::Validation, "Cant retrive credentials", e))
}

/// Reads a raw token body verbatim.
///
/// Surrounding whitespace is part of the token, so `"tok\n"` never matches a
/// session recorded as `"tok"`.
pub fn read_token(body: &Bytes) -> AppResult<String> {
    std::str::from_utf8(body)
        .map(str::to_string)
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Validation,
                "Didn't get token form request body",
                e,
            )
        })
}
