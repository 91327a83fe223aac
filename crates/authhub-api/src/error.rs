//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use authhub_core::error::{AppError, ErrorKind};

/// Response body for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Category: `Bad Request`, `Unauthorized`, or `Internal Server Error`.
    pub error: String,
    /// Human-readable detail.
    pub reason: String,
}

/// An [`AppError`] on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// HTTP status for the wrapped error.
    pub fn status(&self) -> StatusCode {
        match self.0.kind {
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Validation
            | ErrorKind::DuplicateIdentity
            | ErrorKind::DuplicateSession
            | ErrorKind::NotFound
            | ErrorKind::MalformedId
            | ErrorKind::Verification
            | ErrorKind::Signing => StatusCode::BAD_REQUEST,
            ErrorKind::KeyLoad | ErrorKind::Configuration | ErrorKind::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(kind = %self.0.kind, error = %self.0.message, "Internal server error");
        } else {
            tracing::debug!(kind = %self.0.kind, reason = %self.0.message, "Request rejected");
        }

        let body = ErrorBody {
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            reason: self.0.message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(err: AppError) -> (StatusCode, ErrorBody) {
        let response = ApiError::from(err).into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_unauthorized_body() {
        let (status, body) = render(AppError::unauthorized("User not Logged in")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body,
            ErrorBody {
                error: "Unauthorized".to_string(),
                reason: "User not Logged in".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_business_failures_are_bad_request() {
        for err in [
            AppError::validation("Token in invalid"),
            AppError::duplicate_identity("User already exist"),
            AppError::not_found("Error during retrieving user from storage"),
            AppError::signing("Error during token generation"),
        ] {
            let reason = err.message.clone();
            let (status, body) = render(err).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body.error, "Bad Request");
            assert_eq!(body.reason, reason);
        }
    }

    #[tokio::test]
    async fn test_infrastructure_failures_are_internal() {
        for err in [
            AppError::new(ErrorKind::KeyLoad, "missing key"),
            AppError::configuration("bad config"),
            AppError::internal("Password hashing failed"),
        ] {
            let (status, body) = render(err).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body.error, "Internal Server Error");
        }
    }
}
