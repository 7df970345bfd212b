//! Verification of a published fair number.

use super::derive::{derive_fair_number, FairNumber};
use crate::error::Result;
use tracing::{debug, warn};

/// Recompute the fair number from revealed inputs and compare it with the
/// claimed one.
///
/// Returns `Ok(false)` when the claim does not match. A derivation failure
/// is returned as `Err`: the round could not be checked at all, which is
/// not the same as a failed check.
pub fn verify(
    server_seed: &str,
    client_seed: &str,
    nonce_hash: &str,
    claimed: FairNumber,
) -> Result<bool> {
    let expected = derive_fair_number(server_seed, client_seed, nonce_hash)?;
    if expected == claimed {
        debug!(%claimed, "fair number verified");
        Ok(true)
    } else {
        warn!(%claimed, %expected, "fair number does not match revealed inputs");
        Ok(false)
    }
}
