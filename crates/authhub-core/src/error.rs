//! Unified application error types for AuthHub.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. The transport layer decides how each
//! [`ErrorKind`] is presented to callers.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Input was missing or malformed, or a token failed validation.
    Validation,
    /// An identity with the same login already exists.
    DuplicateIdentity,
    /// The token is already recorded in the session ledger.
    DuplicateSession,
    /// The requested identity or session does not exist.
    NotFound,
    /// An identity identifier could not be parsed.
    MalformedId,
    /// The request is well-formed but the caller is not authenticated.
    Unauthorized,
    /// The signing key pair could not be loaded.
    KeyLoad,
    /// A token could not be signed.
    Signing,
    /// A token could not be parsed or its signature did not verify.
    Verification,
    /// A configuration error occurred.
    Configuration,
    /// An internal server error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "VALIDATION"),
            Self::DuplicateIdentity => write!(f, "DUPLICATE_IDENTITY"),
            Self::DuplicateSession => write!(f, "DUPLICATE_SESSION"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::MalformedId => write!(f, "MALFORMED_ID"),
            Self::Unauthorized => write!(f, "UNAUTHORIZED"),
            Self::KeyLoad => write!(f, "KEY_LOAD"),
            Self::Signing => write!(f, "SIGNING"),
            Self::Verification => write!(f, "VERIFICATION"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout AuthHub.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a duplicate-identity error.
    pub fn duplicate_identity(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateIdentity, message)
    }

    /// Create a duplicate-session error.
    pub fn duplicate_session(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateSession, message)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// Create a signing error.
    pub fn signing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Signing, message)
    }

    /// Create a verification error.
    pub fn verification(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Verification, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Returns `true` if this error has the given kind.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}
