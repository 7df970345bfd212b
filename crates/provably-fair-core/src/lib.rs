//! Provably Fair Core Library
//!
//! This crate provides the commit-reveal primitives and the deterministic
//! number derivation used to prove that a round's outcome was not chosen
//! by either party.

pub mod crypto;
pub mod error;
pub mod fairness;
pub mod round;

pub use crypto::{
    generate_nonce, generate_seed_commitment, Nonce, NonceHash, NonceSequence, SeedGenerator,
    SeedHash,
};
pub use error::{FairnessError, InvalidSeedHash, Result};
pub use fairness::{derive_fair_number, verify, FairNumber};
pub use round::{Round, RoundId, RoundReceipt};
