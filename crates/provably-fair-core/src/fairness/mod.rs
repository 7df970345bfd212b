//! Fair number derivation and verification.
//!
//! The derivation input is `server_seed + "_" + client_seed + "_" + nonce_hash`.
//! Argument order, separator, digest and prefix length are all part of the
//! protocol: changing any of them breaks verification against other
//! implementations.

mod derive;
mod verify;

pub use derive::{derive_fair_number, FairNumber, FAIR_NUMBER_MAX, PREFIX_LEN, SEPARATOR};
pub use verify::verify;
