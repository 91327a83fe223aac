//! # authhub-auth
//!
//! Token and credential primitives for AuthHub.
//!
//! ## Modules
//!
//! - `keys`: RSA key chain loading and caching
//! - `jwt`: PS512 token issuance and verification behind the [`Tokenizer`] trait
//! - `credentials`: required-field validation and Argon2id secret hashing

pub mod credentials;
pub mod jwt;
pub mod keys;

pub use credentials::{CredentialsValidator, PasswordHasher};
pub use jwt::{JwtTokenizer, Tokenizer, VerifiedToken};
pub use keys::{FileKeyChainProvider, KeyChain};
