//! Per-round nonces and their SHA-512 commitments.

use super::hash::sha512_hex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// First nonce counter of a session
pub const NONCE_START: u64 = 1;

/// SHA-512 of a nonce's decimal string, as 128 lowercase hex characters
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NonceHash(String);

impl NonceHash {
    /// Get the hex string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NonceHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NonceHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let short = self.0.get(..16).unwrap_or(self.0.as_str());
        write!(f, "NonceHash({})", short)
    }
}

impl fmt::Display for NonceHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A round's nonce: the raw counter and its hash.
///
/// Only `hash` may be published before the round completes. The raw
/// counter increments predictably and would let observers anticipate
/// future rounds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nonce {
    /// Counter position within the session
    pub counter: u64,
    /// Decimal rendering of `counter`
    pub value: String,
    /// SHA-512 of `value`
    pub hash: NonceHash,
}

/// Build the nonce for `counter`
pub fn generate_nonce(counter: u64) -> Nonce {
    let value = counter.to_string();
    let hash = NonceHash(sha512_hex(&value));
    Nonce {
        counter,
        value,
        hash,
    }
}

/// In-memory nonce counter for a single session.
///
/// Counters strictly increase and are never handed out twice by the same
/// sequence. Surviving restarts requires the caller to persist
/// [`NonceSequence::peek`] and resume with [`NonceSequence::starting_at`].
#[derive(Clone, Debug)]
pub struct NonceSequence {
    next: Option<u64>,
}

impl NonceSequence {
    /// Start a sequence at [`NONCE_START`]
    pub fn new() -> Self {
        Self::starting_at(NONCE_START)
    }

    /// Resume a sequence at `counter`
    pub fn starting_at(counter: u64) -> Self {
        Self {
            next: Some(counter),
        }
    }

    /// Counter the next call to `next_nonce` will use, if any remain
    pub fn peek(&self) -> Option<u64> {
        self.next
    }

    /// Take the next nonce, or `None` once the counter space is exhausted
    pub fn next_nonce(&mut self) -> Option<Nonce> {
        let counter = self.next?;
        self.next = counter.checked_add(1);
        Some(generate_nonce(counter))
    }
}

impl Default for NonceSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for NonceSequence {
    type Item = Nonce;

    fn next(&mut self) -> Option<Nonce> {
        self.next_nonce()
    }
}
