//! Pluggable cryptographic digest provider.
//!
//! Feature strings are hashed with real digest functions from the `sha2` and
//! `md5` crates. The provider is an injected capability so callers can swap
//! in a different backend (or a recording fake in tests).

use crate::error::PentaprintError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Digest algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    /// SHA-256 (64 hex characters).
    Sha256,
    /// MD5 (32 hex characters).
    Md5,
}

impl DigestAlgorithm {
    /// Returns the canonical lowercase name of the algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Md5 => "md5",
        }
    }

    /// Number of hex characters in a digest (after the `0x` prefix).
    pub fn hex_len(&self) -> usize {
        match self {
            DigestAlgorithm::Sha256 => 64,
            DigestAlgorithm::Md5 => 32,
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = PentaprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(DigestAlgorithm::Sha256),
            "md5" => Ok(DigestAlgorithm::Md5),
            other => Err(PentaprintError::InvalidInput(format!(
                "Unknown digest algorithm: {} (expected sha256 or md5)",
                other
            ))),
        }
    }
}

/// Trait for digest providers.
///
/// Implementations must be pure: the same `(algorithm, feature)` pair always
/// yields the same digest string.
pub trait DigestProvider {
    /// Hashes a feature string, returning lowercase hex prefixed with `0x`.
    fn digest_hex(&self, algorithm: DigestAlgorithm, feature: &str) -> String;
}

/// Default digest provider backed by the `sha2` and `md5` crates.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDigest;

impl DigestProvider for StandardDigest {
    fn digest_hex(&self, algorithm: DigestAlgorithm, feature: &str) -> String {
        match algorithm {
            DigestAlgorithm::Sha256 => {
                let mut hasher = Sha256::new();
                hasher.update(feature.as_bytes());
                format!("0x{}", hex::encode(hasher.finalize()))
            }
            DigestAlgorithm::Md5 => {
                format!("0x{:x}", md5::compute(feature.as_bytes()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        let provider = StandardDigest;
        // SHA-256 of the empty string.
        assert_eq!(
            provider.digest_hex(DigestAlgorithm::Sha256, ""),
            "0xe3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_md5_known_vector() {
        let provider = StandardDigest;
        // MD5 of the empty string.
        assert_eq!(
            provider.digest_hex(DigestAlgorithm::Md5, ""),
            "0xd41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[test]
    fn test_digest_lengths() {
        let provider = StandardDigest;
        for algorithm in [DigestAlgorithm::Sha256, DigestAlgorithm::Md5] {
            let digest = provider.digest_hex(algorithm, "abc");
            assert!(digest.starts_with("0x"));
            assert_eq!(digest.len(), 2 + algorithm.hex_len());
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "sha256".parse::<DigestAlgorithm>().unwrap(),
            DigestAlgorithm::Sha256
        );
        assert_eq!(
            "SHA-256".parse::<DigestAlgorithm>().unwrap(),
            DigestAlgorithm::Sha256
        );
        assert_eq!("md5".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Md5);
        assert!("blake3".parse::<DigestAlgorithm>().is_err());
    }
}
