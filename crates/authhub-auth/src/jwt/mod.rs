//! PS512 token issuance and verification.

pub mod claims;
pub mod decoder;
pub mod encoder;
pub mod fingerprint;
pub mod tokenizer;

pub use claims::{TokenClaims, VerifiedToken};
pub use decoder::JwtDecoder;
pub use encoder::JwtEncoder;
pub use fingerprint::fingerprint;
pub use tokenizer::{JwtTokenizer, Tokenizer};
