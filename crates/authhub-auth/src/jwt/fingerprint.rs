//! Short, non-reversible token labels for log output.

use sha2::{Digest, Sha256};

/// Number of digest bytes rendered into a fingerprint.
const FINGERPRINT_BYTES: usize = 6;

/// Returns the first bytes of the token's SHA-256 digest as lowercase hex.
pub fn fingerprint(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    digest[..FINGERPRINT_BYTES]
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}
