//! Error types for fair number derivation.

use std::num::ParseIntError;
use thiserror::Error;

/// Errors from fair number derivation and verification
#[derive(Debug, Error)]
pub enum FairnessError {
    #[error("Digest prefix {prefix:?} is not valid base-16")]
    Parse {
        prefix: String,
        #[source]
        source: ParseIntError,
    },
}

pub type Result<T> = std::result::Result<T, FairnessError>;

/// A string that is not a published seed commitment
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Seed hash must be 64 lowercase hex characters, got {0:?}")]
pub struct InvalidSeedHash(pub String);
