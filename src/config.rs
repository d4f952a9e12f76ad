//! Configuration for the Pentaprint fingerprinting library.

use crate::digest::DigestAlgorithm;
use crate::fingerprint::Strategy;
use crate::STRATEGY_COUNT;
use serde::{Deserialize, Serialize};

/// Main configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Fingerprint generation configuration.
    pub fingerprint: FingerprintConfig,

    /// Mock ledger configuration.
    pub ledger: LedgerConfig,
}

/// Fingerprint generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FingerprintConfig {
    /// Digest algorithm per strategy slot, in strategy order.
    ///
    /// Default: SHA-256 for the first four slots, MD5 for the frequency
    /// slot. The MD5 divergence mirrors the reference fingerprint protocol
    /// and is an explicit per-slot selection, not an implementation detail.
    pub algorithms: [DigestAlgorithm; STRATEGY_COUNT],

    /// Compute the five strategies on the rayon thread pool.
    ///
    /// The strategies share no mutable state, so this is safe for any input;
    /// it only pays off for large texts. Default: false.
    pub parallel: bool,
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            algorithms: [
                DigestAlgorithm::Sha256,
                DigestAlgorithm::Sha256,
                DigestAlgorithm::Sha256,
                DigestAlgorithm::Sha256,
                DigestAlgorithm::Md5,
            ],
            parallel: false,
        }
    }
}

impl FingerprintConfig {
    /// Returns the digest algorithm configured for a strategy slot.
    #[inline]
    pub fn algorithm(&self, strategy: Strategy) -> DigestAlgorithm {
        self.algorithms[strategy.index()]
    }
}

/// Mock ledger configuration.
///
/// Defaults mirror an Arbitrum One transaction shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Network name recorded in receipts.
    /// Default: "Arbitrum".
    pub network: String,

    /// Chain id recorded in transaction requests.
    /// Default: 42161 (Arbitrum One).
    pub chain_id: u64,

    /// Contract address transactions are sent to.
    pub contract: String,

    /// Gas limit for simulated transactions.
    /// Default: 100,000.
    pub gas_limit: u64,

    /// Gas price in wei for simulated transactions.
    /// Default: 1.5 gwei.
    pub gas_price: u64,

    /// Seed for the ledger's pseudo-random source.
    /// Default: None (entropy). Set for deterministic simulations.
    pub seed: Option<u64>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            network: "Arbitrum".to_string(),
            chain_id: 42_161,
            contract: "0xAB89F7D91245316D7f9D3d8324dA8Cbd17EE69a0".to_string(),
            gas_limit: 100_000,
            gas_price: 1_500_000_000,
            seed: None,
        }
    }
}
