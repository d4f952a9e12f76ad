//! Mock ledger sink for fingerprint sets.
//!
//! Simulates submitting a fingerprint set as a ledger transaction: it builds
//! a transaction request carrying the concatenated digests, derives a
//! transaction hash from the serialized request, and fabricates a receipt.
//! Nothing leaves the process; there is no network, no signing, and no
//! persistent state. The fingerprint core does not depend on this module.

use crate::config::LedgerConfig;
use crate::error::Result;
use crate::fingerprint::FingerprintSet;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};

/// A simulated transaction request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// Destination contract address.
    pub to: String,
    /// Simulated sender address.
    pub from: String,
    /// Calldata: `0x` followed by the five digests with their own `0x`
    /// prefixes stripped.
    pub data: String,
    /// Transferred value, always zero.
    pub value: String,
    /// Gas limit as a hex quantity.
    pub gas_limit: String,
    /// Gas price as a hex quantity.
    pub gas_price: String,
    /// Chain id.
    pub chain_id: u64,
    /// Simulated account nonce.
    pub nonce: u64,
    /// Unix timestamp (seconds).
    pub timestamp: u64,
}

/// A simulated transaction receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// Transaction hash: `0x` + 64 hex characters.
    pub transaction_hash: String,
    /// Network name from the ledger configuration.
    pub network: String,
    /// Simulated block number.
    pub block_number: u64,
    /// Confirmation count, always 1.
    pub confirmations: u32,
    /// Submission status, always "success".
    pub status: String,
    /// Unix timestamp (seconds) of the simulated inclusion.
    pub timestamp: u64,
    /// Simulated gas consumption.
    pub gas_used: u64,
    /// Effective gas price as a hex quantity.
    pub effective_gas_price: String,
}

/// Mock ledger that consumes fingerprint sets.
///
/// All randomness (sender address, nonce, block number, gas jitter) comes
/// from one seedable PRNG so a fixed seed plus a fixed timestamp gives a
/// fully reproducible submission.
pub struct MockLedger {
    config: LedgerConfig,
    rng: ChaCha8Rng,
}

impl MockLedger {
    /// Creates a ledger from configuration, seeding the PRNG from
    /// `config.seed` or entropy.
    pub fn new(config: LedgerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Creates a ledger with default configuration.
    pub fn default_config() -> Self {
        Self::new(LedgerConfig::default())
    }

    /// Submits a fingerprint set, timestamping it with the current time.
    pub fn submit(&mut self, fingerprints: &FingerprintSet) -> Result<TransactionReceipt> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        self.submit_at(fingerprints, timestamp)
    }

    /// Submits a fingerprint set with an explicit timestamp.
    ///
    /// Deterministic given the ledger's seed, the fingerprints, and the
    /// timestamp.
    pub fn submit_at(
        &mut self,
        fingerprints: &FingerprintSet,
        timestamp: u64,
    ) -> Result<TransactionReceipt> {
        let request = self.build_request(fingerprints, timestamp)?;
        let serialized = serde_json::to_string(&request)?;

        let mut hasher = Sha256::new();
        hasher.update(serialized.as_bytes());
        let transaction_hash = format!("0x{}", hex::encode(hasher.finalize()));

        log::info!(
            "Simulated submission of {} byte calldata to {} (tx {})",
            (request.data.len() - 2) / 2,
            self.config.network,
            transaction_hash
        );

        Ok(TransactionReceipt {
            transaction_hash,
            network: self.config.network.clone(),
            block_number: 15_000_000 + self.rng.gen_range(0..1_000_000),
            confirmations: 1,
            status: "success".to_string(),
            timestamp,
            gas_used: 85_000 + self.rng.gen_range(0..20_000),
            effective_gas_price: request.gas_price,
        })
    }

    fn build_request(
        &mut self,
        fingerprints: &FingerprintSet,
        timestamp: u64,
    ) -> Result<TransactionRequest> {
        let mut sender = [0u8; 20];
        self.rng.fill(&mut sender[..]);

        let mut data = String::from("0x");
        for digest in fingerprints.as_slice() {
            data.push_str(digest.trim_start_matches("0x"));
        }

        Ok(TransactionRequest {
            to: self.config.contract.clone(),
            from: format!("0x{}", hex::encode(sender)),
            data,
            value: "0x0".to_string(),
            gas_limit: format!("0x{:x}", self.config.gas_limit),
            gas_price: format!("0x{:x}", self.config.gas_price),
            chain_id: self.config.chain_id,
            nonce: self.rng.gen_range(0..1000),
            timestamp,
        })
    }
}
