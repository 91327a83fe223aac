//! The signing/verification key pair.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use authhub_core::error::{AppError, ErrorKind};
use authhub_core::result::AppResult;

/// The only algorithm tokens are signed and verified with (RSASSA-PSS, SHA-512).
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::PS512;

/// Payload of the token signed while checking that a key pair matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SelfCheckClaims {
    sub: String,
    exp: i64,
}

/// A matched RSA key pair.
///
/// Immutable once built. The private half signs tokens, the public half
/// verifies them.
#[derive(Clone)]
pub struct KeyChain {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for KeyChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyChain")
            .field("algorithm", &SIGNING_ALGORITHM)
            .finish_non_exhaustive()
    }
}

impl KeyChain {
    /// Builds a key chain from PEM-encoded RSA keys.
    ///
    /// The private key may be PKCS#1 or PKCS#8, the public key SPKI or
    /// PKCS#1. A self-check token is signed and verified before the chain is
    /// returned, so a pair whose halves do not belong together is rejected.
    pub fn from_pem(private_pem: &[u8], public_pem: &[u8]) -> AppResult<Self> {
        let encoding_key = EncodingKey::from_rsa_pem(private_pem).map_err(|e| {
            AppError::with_source(
                ErrorKind::KeyLoad,
                format!("Invalid RSA private key: {e}"),
                e,
            )
        })?;

        let decoding_key = DecodingKey::from_rsa_pem(public_pem).map_err(|e| {
            AppError::with_source(
                ErrorKind::KeyLoad,
                format!("Invalid RSA public key: {e}"),
                e,
            )
        })?;

        let chain = Self {
            encoding_key,
            decoding_key,
        };
        chain.self_check()?;

        Ok(chain)
    }

    /// Key used to sign tokens.
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    /// Key used to verify tokens.
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }

    fn self_check(&self) -> AppResult<()> {
        let claims = SelfCheckClaims {
            sub: "key-chain-self-check".to_string(),
            exp: Utc::now().timestamp() + 60,
        };

        let token = encode(&Header::new(SIGNING_ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::KeyLoad,
                    format!("Private key cannot sign {SIGNING_ALGORITHM:?} tokens: {e}"),
                    e,
                )
            })?;

        decode::<SelfCheckClaims>(
            &token,
            &self.decoding_key,
            &Validation::new(SIGNING_ALGORITHM),
        )
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::KeyLoad,
                format!("Public key does not match private key: {e}"),
                e,
            )
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIVATE_PEM: &[u8] = include_bytes!("../../../../tests/fixtures/keys/private.pem");
    const PUBLIC_PEM: &[u8] = include_bytes!("../../../../tests/fixtures/keys/public.pem");
    const OTHER_PUBLIC_PEM: &[u8] =
        include_bytes!("../../../../tests/fixtures/keys/other_public.pem");

    #[test]
    fn test_matching_pair_loads() {
        let chain = KeyChain::from_pem(PRIVATE_PEM, PUBLIC_PEM);
        assert!(chain.is_ok());
    }

    #[test]
    fn test_mismatched_pair_rejected() {
        let err = KeyChain::from_pem(PRIVATE_PEM, OTHER_PUBLIC_PEM).unwrap_err();
        assert_eq!(err.kind, ErrorKind::KeyLoad);
    }

    #[test]
    fn test_garbage_rejected() {
        let err = KeyChain::from_pem(b"not a key", PUBLIC_PEM).unwrap_err();
        assert_eq!(err.kind, ErrorKind::KeyLoad);

        let err = KeyChain::from_pem(PRIVATE_PEM, b"").unwrap_err();
        assert_eq!(err.kind, ErrorKind::KeyLoad);
    }

    #[test]
    fn test_debug_hides_key_material() {
        let chain = KeyChain::from_pem(PRIVATE_PEM, PUBLIC_PEM).unwrap();
        let rendered = format!("{chain:?}");
        assert!(rendered.contains("PS512"));
        assert!(!rendered.contains("BEGIN"));
    }
}
