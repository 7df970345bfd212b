//! Deterministic fair number derivation.

use crate::crypto::sha512_hex;
use crate::error::{FairnessError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Separator placed between the three derivation inputs
pub const SEPARATOR: &str = "_";

/// Number of leading hex characters of the digest that become the number
pub const PREFIX_LEN: usize = 8;

/// Largest value derivation can produce (eight hex digits)
pub const FAIR_NUMBER_MAX: i64 = 0xFFFF_FFFF;

/// Outcome seed of a round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FairNumber(i64);

impl FairNumber {
    /// Wrap a previously published number, e.g. for verification
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for FairNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derive the fair number for a round.
///
/// Hashes `server_seed_client_seed_nonce_hash` with SHA-512 and parses the
/// first [`PREFIX_LEN`] hex characters of the digest as base 16. The result
/// is always in `[0, FAIR_NUMBER_MAX]`.
pub fn derive_fair_number(
    server_seed: &str,
    client_seed: &str,
    nonce_hash: &str,
) -> Result<FairNumber> {
    let input = [server_seed, client_seed, nonce_hash].join(SEPARATOR);
    let digest = sha512_hex(&input);
    // hex digest is ASCII and always longer than the prefix
    let number = parse_prefix(&digest[..PREFIX_LEN])?;
    debug!(prefix = &digest[..PREFIX_LEN], %number, "derived fair number");
    Ok(number)
}

fn parse_prefix(prefix: &str) -> Result<FairNumber> {
    i64::from_str_radix(prefix, 16)
        .map(FairNumber)
        .map_err(|source| FairnessError::Parse {
            prefix: prefix.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::generate_nonce;

    #[test]
    fn test_golden_value() {
        // sha512("abc_def_1") starts with d4bcfe43
        let number = derive_fair_number("abc", "def", "1").unwrap();

        assert_eq!(number, FairNumber::new(0xd4bc_fe43));
        assert_eq!(number.value(), 3_569_155_651);
    }

    #[test]
    fn test_golden_value_with_hashed_nonce() {
        let nonce = generate_nonce(1);
        let number = derive_fair_number("abc", "def", nonce.hash.as_str()).unwrap();

        assert_eq!(number.value(), 4_230_594_505);
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let first = derive_fair_number("server", "client", "nonce").unwrap();
        for _ in 0..10 {
            assert_eq!(derive_fair_number("server", "client", "nonce").unwrap(), first);
        }
    }

    #[test]
    fn test_swapping_seeds_changes_result() {
        let forward = derive_fair_number("abc", "def", "1").unwrap();
        let swapped = derive_fair_number("def", "abc", "1").unwrap();

        assert_eq!(swapped.value(), 3_228_410_094);
        assert_ne!(forward, swapped);
    }

    #[test]
    fn test_output_within_range() {
        for counter in 0..200u64 {
            let nonce = generate_nonce(counter);
            let number = derive_fair_number("server", "client", nonce.hash.as_str()).unwrap();
            assert!((0..=FAIR_NUMBER_MAX).contains(&number.value()));
        }
    }

    #[test]
    fn test_empty_inputs_still_derive() {
        // "__" is a valid input; separators are always present
        assert!(derive_fair_number("", "", "").is_ok());
        assert_ne!(
            derive_fair_number("", "", "").unwrap(),
            derive_fair_number("_", "", "").unwrap()
        );
    }

    #[test]
    fn test_parse_prefix_extremes() {
        assert_eq!(parse_prefix("00000000").unwrap().value(), 0);
        assert_eq!(parse_prefix("ffffffff").unwrap().value(), FAIR_NUMBER_MAX);
    }

    #[test]
    fn test_parse_prefix_rejects_non_hex() {
        let err = parse_prefix("zzzzzzzz").unwrap_err();

        match err {
            FairnessError::Parse { prefix, .. } => assert_eq!(prefix, "zzzzzzzz"),
        }
    }
}
