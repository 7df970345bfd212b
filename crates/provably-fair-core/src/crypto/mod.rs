//! Cryptographic primitives for provably fair rounds.
//!
//! This module provides:
//! - SHA-256 / SHA-512 hex digests shared by every commitment
//! - SeedHash and SeedGenerator for seed commitments
//! - Nonce, NonceHash and NonceSequence for per-round counters

mod hash;
mod nonce;
mod seed;

pub use hash::{sha256_hex, sha512_hex, SHA256_HEX_LEN, SHA512_HEX_LEN};
pub use nonce::{generate_nonce, Nonce, NonceHash, NonceSequence, NONCE_START};
pub use seed::{generate_seed_commitment, SeedGenerator, SeedHash};
