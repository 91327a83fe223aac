//! Required-field checks for submitted credentials.

use authhub_core::error::AppError;
use authhub_core::result::AppResult;
use authhub_entity::identity::Credentials;

/// Rejects credential pairs with empty fields.
///
/// Strength rules are out of scope; only presence is checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialsValidator;

impl CredentialsValidator {
    /// Creates a validator.
    pub fn new() -> Self {
        Self
    }

    /// Succeeds when both email and password are non-empty.
    ///
    /// Otherwise every missing field is named, in `email`, `password` order.
    pub fn validate(&self, credentials: &Credentials) -> AppResult<()> {
        let missing: Vec<String> = [
            ("email", credentials.email.is_empty()),
            ("password", credentials.password.is_empty()),
        ]
        .into_iter()
        .filter(|(_, empty)| *empty)
        .map(|(field, _)| format!("'{field}'"))
        .collect();

        if missing.is_empty() {
            return Ok(());
        }

        Err(AppError::validation(format!(
            "Login fields value are missing: [{}]",
            missing.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use authhub_core::error::ErrorKind;

    use super::*;

    fn message(email: &str, password: &str) -> String {
        CredentialsValidator::new()
            .validate(&Credentials::new(email, password))
            .unwrap_err()
            .message
    }

    #[test]
    fn test_complete_credentials_pass() {
        assert!(
            CredentialsValidator::new()
                .validate(&Credentials::new("a@b.com", "x"))
                .is_ok()
        );
    }

    #[test]
    fn test_both_missing() {
        assert_eq!(
            message("", ""),
            "Login fields value are missing: ['email', 'password']"
        );
    }

    #[test]
    fn test_single_missing() {
        assert_eq!(message("", "x"), "Login fields value are missing: ['email']");
        assert_eq!(
            message("a@b.com", ""),
            "Login fields value are missing: ['password']"
        );
    }

    #[test]
    fn test_kind_is_validation() {
        let err = CredentialsValidator::new()
            .validate(&Credentials::default())
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
