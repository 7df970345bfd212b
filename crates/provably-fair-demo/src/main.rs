//! Provably Fair Demo
//!
//! Plays rounds the way an operator and participant would: both commit to
//! seeds, the session hands out nonces, each round's number is derived and
//! then verified from the revealed inputs. Receipts are printed as JSON
//! lines on stdout.
//!
//! Environment:
//! - `NONCE_START` - first nonce counter (default 1)
//! - `ROUNDS` - number of rounds to play (default 1)
//! - `CLIENT_SEED` - participant-supplied seed, committed before use;
//!   generated locally when unset
//! - `LOG_LEVEL` - tracing filter directive (default info)

use provably_fair_core::{crypto::NONCE_START, NonceSequence, Round, SeedGenerator, SeedHash};
use rand::RngCore;
use std::process::ExitCode;
use std::str::FromStr;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Debug)]
struct Config {
    nonce_start: u64,
    rounds: usize,
    client_seed: Option<String>,
}

impl Config {
    fn from_env() -> Result<Self, String> {
        Self::from_values(
            std::env::var("NONCE_START").ok(),
            std::env::var("ROUNDS").ok(),
            std::env::var("CLIENT_SEED").ok(),
        )
    }

    fn from_values(
        nonce_start: Option<String>,
        rounds: Option<String>,
        client_seed: Option<String>,
    ) -> Result<Self, String> {
        Ok(Self {
            nonce_start: parse_setting("NONCE_START", nonce_start, NONCE_START)?,
            rounds: parse_setting("ROUNDS", rounds, 1)?,
            client_seed: client_seed.filter(|s| !s.is_empty()),
        })
    }
}

/// Only an unset variable falls back to `default`. A malformed nonce
/// counter must not silently restart the session at an already used nonce.
fn parse_setting<T: FromStr>(name: &str, raw: Option<String>, default: T) -> Result<T, String> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| format!("{} has invalid value {:?}", name, value)),
    }
}

/// Commitment to the participant's seed: a supplied seed is hashed, never
/// published raw
fn client_seed_commitment<R: RngCore>(
    supplied: Option<&str>,
    generator: &mut SeedGenerator<R>,
) -> SeedHash {
    match supplied {
        Some(seed) => SeedHash::commit(seed),
        None => generator.generate(),
    }
}

fn main() -> ExitCode {
    let filter = std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|v| EnvFilter::try_new(v).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Seeds are committed once per session, before any nonce is consumed
    let mut generator = SeedGenerator::from_entropy();
    let server_seed = generator.generate();
    let client_seed = client_seed_commitment(config.client_seed.as_deref(), &mut generator);
    info!("Server seed hash: {}", server_seed);
    info!("Client seed hash: {}", client_seed);

    let mut session = NonceSequence::starting_at(config.nonce_start);
    let mut failures = 0usize;

    for _ in 0..config.rounds {
        let Some(nonce) = session.next_nonce() else {
            error!("Nonce counter exhausted");
            return ExitCode::FAILURE;
        };
        info!("Nonce {} hash: {}", nonce.counter, nonce.hash);

        let round = match Round::new(server_seed.clone(), client_seed.clone(), nonce) {
            Ok(round) => round,
            Err(e) => {
                error!("Derivation failed: {}", e);
                return ExitCode::FAILURE;
            }
        };

        let receipt = round.receipt();
        match receipt.verify() {
            Ok(true) => info!("Round {} verified: {}", receipt.round_id, receipt.number),
            Ok(false) => {
                error!("Round {} failed verification", receipt.round_id);
                failures += 1;
            }
            Err(e) => {
                error!("Round {} could not be verified: {}", receipt.round_id, e);
                return ExitCode::FAILURE;
            }
        }

        match serde_json::to_string(&receipt) {
            Ok(line) => println!("{}", line),
            Err(e) => {
                error!("Failed to encode receipt: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use provably_fair_core::crypto::{sha256_hex, SHA256_HEX_LEN};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_unset_settings_use_defaults() {
        let config = Config::from_values(None, None, None).unwrap();

        assert_eq!(config.nonce_start, NONCE_START);
        assert_eq!(config.rounds, 1);
        assert_eq!(config.client_seed, None);
    }

    #[test]
    fn test_valid_settings() {
        let config = Config::from_values(
            Some("41".to_string()),
            Some(" 3 ".to_string()),
            Some("my lucky seed".to_string()),
        )
        .unwrap();

        assert_eq!(config.nonce_start, 41);
        assert_eq!(config.rounds, 3);
        assert_eq!(config.client_seed.as_deref(), Some("my lucky seed"));
    }

    #[test]
    fn test_malformed_nonce_start_is_rejected() {
        let err = Config::from_values(Some("41x".to_string()), None, None).unwrap_err();

        assert!(err.contains("NONCE_START"));
        assert!(Config::from_values(Some(String::new()), None, None).is_err());
        assert!(Config::from_values(Some("-1".to_string()), None, None).is_err());
    }

    #[test]
    fn test_malformed_rounds_is_rejected() {
        let err = Config::from_values(None, Some("abc".to_string()), None).unwrap_err();

        assert!(err.contains("ROUNDS"));
    }

    #[test]
    fn test_supplied_client_seed_is_committed() {
        let mut generator = SeedGenerator::new(StdRng::seed_from_u64(1));

        let seed = client_seed_commitment(Some("my lucky seed"), &mut generator);

        assert_eq!(seed.as_str().len(), SHA256_HEX_LEN);
        assert_eq!(seed.as_str(), sha256_hex("my lucky seed"));
        assert!(!seed.to_string().contains("lucky"));
    }

    #[test]
    fn test_missing_client_seed_is_generated() {
        let mut generator = SeedGenerator::new(StdRng::seed_from_u64(1));
        let expected = SeedGenerator::new(StdRng::seed_from_u64(1)).generate();

        assert_eq!(client_seed_commitment(None, &mut generator), expected);
    }
}
