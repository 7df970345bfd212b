//! Hex-encoded SHA-2 digests.

use sha2::{Digest, Sha256, Sha512};

/// Length of a lowercase hex SHA-256 digest
pub const SHA256_HEX_LEN: usize = 64;

/// Length of a lowercase hex SHA-512 digest
pub const SHA512_HEX_LEN: usize = 128;

/// SHA-256 of `value`, rendered as lowercase hex
pub fn sha256_hex(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}

/// SHA-512 of `value`, rendered as lowercase hex
pub fn sha512_hex(value: &str) -> String {
    let mut hasher = Sha512::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}
