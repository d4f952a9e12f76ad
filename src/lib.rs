//! # Pentaprint - Multi-Strategy Text Fingerprinting
//!
//! Pentaprint derives an ordered set of five fingerprint digests from a
//! single input text. Each digest is produced by a distinct feature-extraction
//! strategy over the same normalized text, then hashed with a real
//! cryptographic digest function.
//!
//! ## Overview
//!
//! The five strategies, in their fixed output order:
//!
//! 1. **Full-text** - the normalized text verbatim (whole-content identity)
//! 2. **Structural** - the sequence of word lengths (document shape)
//! 3. **Lexical** - word prefixes with a position signal (prefix patterns)
//! 4. **Sampling** - salted first and last quarters (boundary content)
//! 5. **Frequency** - sorted character counts (order-invariant content)
//!
//! All strategies read the same normalized text (whitespace trimmed, internal
//! runs collapsed to single spaces), so the five fingerprints are always
//! derived from an identical token stream.
//!
//! ## Quick Start
//!
//! ```rust
//! use pentaprint::{FingerprintGenerator, Strategy};
//!
//! let generator = FingerprintGenerator::default_config();
//! let set = generator.generate("The quick brown fox");
//!
//! // Five hex digests, each prefixed with 0x
//! assert_eq!(set.len(), 5);
//! assert!(set.get(Strategy::FullText).starts_with("0x"));
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`text`] - Whitespace normalization and word splitting
//! - [`fingerprint`] - The five strategies and the generator
//! - [`digest`] - Pluggable cryptographic digest provider
//! - [`ledger`] - Mock transaction sink consuming fingerprint sets
//!
//! The fingerprint core has no dependency on the ledger module; the ledger is
//! one possible consumer of a [`FingerprintSet`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod digest;
pub mod error;
pub mod fingerprint;
pub mod ledger;
pub mod text;

// Re-export commonly used types
pub use config::{Config, FingerprintConfig, LedgerConfig};
pub use digest::{DigestAlgorithm, DigestProvider, StandardDigest};
pub use error::{PentaprintError, Result};
pub use fingerprint::{FingerprintGenerator, FingerprintSet, Strategy};
pub use ledger::{MockLedger, TransactionReceipt, TransactionRequest};
pub use text::Normalizer;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of fingerprint strategies (and output slots).
pub const STRATEGY_COUNT: usize = 5;

/// Salt appended to the sampling strategy's feature string.
///
/// This is a versioned protocol constant, not a secret: implementations that
/// need cross-compatible sampling fingerprints must agree on it.
pub const SAMPLING_SALT: &str = "SALT_VALUE_1";

/// Separator between the first-quarter and last-quarter word slices in the
/// sampling strategy's feature string.
pub const SAMPLING_SEPARATOR: &str = "::MIDDLE::";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_constants() {
        assert_eq!(STRATEGY_COUNT, 5);
        assert_eq!(SAMPLING_SALT, "SALT_VALUE_1");
        assert_eq!(SAMPLING_SEPARATOR, "::MIDDLE::");
    }
}
