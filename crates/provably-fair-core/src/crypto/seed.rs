//! Seed commitments.

use super::hash::{sha256_hex, SHA256_HEX_LEN};
use crate::error::InvalidSeedHash;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// SHA-256 commitment to a seed, as 64 lowercase hex characters.
///
/// The hash is what gets published before the round and what later feeds
/// the number derivation; the raw seed behind it is only revealed once the
/// round is over.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeedHash(String);

impl SeedHash {
    /// Commit to a seed supplied by a party, e.g. a participant's own string
    pub fn commit(seed: &str) -> Self {
        Self(sha256_hex(seed))
    }

    /// Get the hex string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for SeedHash {
    type Err = InvalidSeedHash;

    /// Accept an already published commitment
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let well_formed = s.len() == SHA256_HEX_LEN
            && s.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'));
        if well_formed {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidSeedHash(s.to_string()))
        }
    }
}

impl TryFrom<String> for SeedHash {
    type Error = InvalidSeedHash;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SeedHash> for String {
    fn from(hash: SeedHash) -> Self {
        hash.0
    }
}

impl AsRef<str> for SeedHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SeedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let short = self.0.get(..16).unwrap_or(self.0.as_str());
        write!(f, "SeedHash({})", short)
    }
}

impl fmt::Display for SeedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Draw a fresh seed from `rng` and return its commitment.
///
/// The seed is a non-negative integer in `[0, i64::MAX]`; its decimal
/// rendering is what gets hashed.
pub fn generate_seed_commitment<R: RngCore + ?Sized>(rng: &mut R) -> SeedHash {
    let seed: i64 = rng.gen_range(0..=i64::MAX);
    SeedHash(sha256_hex(&seed.to_string()))
}

/// Seed generator owning its random source.
///
/// Use one generator per thread; nothing is shared between instances.
pub struct SeedGenerator<R> {
    rng: R,
}

impl SeedGenerator<StdRng> {
    /// Create a generator seeded from the operating system.
    ///
    /// # Panics
    ///
    /// Panics if the OS entropy source is unavailable. A seed drawn without
    /// entropy would be predictable, so there is no fallback.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: RngCore> SeedGenerator<R> {
    /// Create a generator over an injected random source
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a new seed commitment
    pub fn generate(&mut self) -> SeedHash {
        generate_seed_commitment(&mut self.rng)
    }
}
