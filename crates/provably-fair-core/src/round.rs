//! A complete provably fair round and its audit receipt.

use crate::crypto::{Nonce, NonceHash, SeedGenerator, SeedHash};
use crate::error::Result;
use crate::fairness::{derive_fair_number, verify, FairNumber};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;
use uuid::Uuid;

/// Unique round identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(Uuid);

impl RoundId {
    /// Create a new random round ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RoundId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundId({})", self.0)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One round: both seeds, the nonce and the number derived from them
#[derive(Clone, Debug)]
pub struct Round {
    id: RoundId,
    server_seed: SeedHash,
    client_seed: SeedHash,
    nonce: Nonce,
    number: FairNumber,
}

impl Round {
    /// Derive the round's number from already committed inputs
    pub fn new(server_seed: SeedHash, client_seed: SeedHash, nonce: Nonce) -> Result<Self> {
        let number = derive_fair_number(
            server_seed.as_str(),
            client_seed.as_str(),
            nonce.hash.as_str(),
        )?;
        let id = RoundId::new();
        info!(round = %id, nonce = nonce.counter, %number, "round derived");
        Ok(Self {
            id,
            server_seed,
            client_seed,
            nonce,
            number,
        })
    }

    /// Generate both seeds locally (server first, then client) and derive
    /// the round's number
    pub fn play<R: RngCore>(generator: &mut SeedGenerator<R>, nonce: Nonce) -> Result<Self> {
        let server_seed = generator.generate();
        let client_seed = generator.generate();
        Self::new(server_seed, client_seed, nonce)
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    pub fn server_seed(&self) -> &SeedHash {
        &self.server_seed
    }

    pub fn client_seed(&self) -> &SeedHash {
        &self.client_seed
    }

    pub fn nonce(&self) -> &Nonce {
        &self.nonce
    }

    pub fn number(&self) -> FairNumber {
        self.number
    }

    /// Record of the round for publishing after it completes
    pub fn receipt(&self) -> RoundReceipt {
        RoundReceipt {
            round_id: self.id,
            server_seed: self.server_seed.clone(),
            client_seed: self.client_seed.clone(),
            nonce: self.nonce.counter,
            nonce_hash: self.nonce.hash.clone(),
            number: self.number,
        }
    }
}

/// Everything an auditor needs to re-derive a round's number
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReceipt {
    pub round_id: RoundId,
    pub server_seed: SeedHash,
    pub client_seed: SeedHash,
    pub nonce: u64,
    pub nonce_hash: NonceHash,
    pub number: FairNumber,
}

impl RoundReceipt {
    /// Check the recorded number against the recorded inputs
    pub fn verify(&self) -> Result<bool> {
        verify(
            self.server_seed.as_str(),
            self.client_seed.as_str(),
            self.nonce_hash.as_str(),
            self.number,
        )
    }
}
