//! Credential validation and secret hashing.

pub mod hasher;
pub mod validator;

pub use hasher::PasswordHasher;
pub use validator::CredentialsValidator;
