//! The fingerprint generator and its output set.

use crate::config::FingerprintConfig;
use crate::digest::{DigestProvider, StandardDigest};
use crate::fingerprint::Strategy;
use crate::text::Normalizer;
use crate::STRATEGY_COUNT;
use rayon::prelude::*;
use serde::Serialize;

/// An ordered set of exactly five fingerprint digests, one per strategy.
///
/// Slot order is fixed to [`Strategy::ALL`] and never changes; each slot is
/// a deterministic pure function of the input text alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FingerprintSet {
    digests: [String; STRATEGY_COUNT],
}

impl FingerprintSet {
    fn new(digests: [String; STRATEGY_COUNT]) -> Self {
        Self { digests }
    }

    /// Returns the digest for a strategy.
    pub fn get(&self, strategy: Strategy) -> &str {
        &self.digests[strategy.index()]
    }

    /// Returns all digests in strategy order.
    pub fn as_slice(&self) -> &[String] {
        &self.digests
    }

    /// Iterates over `(strategy, digest)` pairs in strategy order.
    pub fn iter(&self) -> impl Iterator<Item = (Strategy, &str)> {
        Strategy::ALL
            .into_iter()
            .map(move |s| (s, self.digests[s.index()].as_str()))
    }

    /// Number of digests. Always [`STRATEGY_COUNT`].
    pub fn len(&self) -> usize {
        self.digests.len()
    }

    /// Always false; a set holds exactly five digests.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Consumes the set, returning the digests in strategy order.
    pub fn into_digests(self) -> [String; STRATEGY_COUNT] {
        self.digests
    }
}

/// Generates five fingerprint digests from one input text.
///
/// The generator normalizes the input once, builds each strategy's feature
/// string from the shared normalized form, and hashes the feature strings
/// with the injected digest provider. Generation is a pure function of the
/// input: no side effects, no randomness, no shared mutable state.
pub struct FingerprintGenerator<D = StandardDigest> {
    config: FingerprintConfig,
    normalizer: Normalizer,
    provider: D,
}

impl FingerprintGenerator<StandardDigest> {
    /// Creates a generator with the given configuration and the standard
    /// digest provider.
    pub fn new(config: FingerprintConfig) -> Self {
        Self::with_provider(config, StandardDigest)
    }

    /// Creates a generator with default configuration.
    pub fn default_config() -> Self {
        Self::new(FingerprintConfig::default())
    }
}

impl<D: DigestProvider + Sync> FingerprintGenerator<D> {
    /// Creates a generator with a custom digest provider.
    pub fn with_provider(config: FingerprintConfig, provider: D) -> Self {
        Self {
            config,
            normalizer: Normalizer::new(),
            provider,
        }
    }

    /// Generates the fingerprint set for `text`.
    ///
    /// Total over any string, including empty and whitespace-only input:
    /// empty normalized text yields the degenerate word sequence `[""]` and
    /// every strategy still produces a well-formed digest.
    pub fn generate(&self, text: &str) -> FingerprintSet {
        let normalized = self.normalizer.normalize(text);
        let words = self.normalizer.words(&normalized);

        let compute = |strategy: &Strategy| {
            let feature = strategy.feature(&normalized, &words);
            self.provider
                .digest_hex(self.config.algorithm(*strategy), &feature)
        };

        // Each strategy owns its output slot by index, so completion order
        // never affects slot order.
        let mut digests: [String; STRATEGY_COUNT] = Default::default();
        if self.config.parallel {
            for (index, digest) in Strategy::ALL
                .par_iter()
                .map(|s| (s.index(), compute(s)))
                .collect::<Vec<_>>()
            {
                digests[index] = digest;
            }
        } else {
            for strategy in &Strategy::ALL {
                digests[strategy.index()] = compute(strategy);
            }
        }

        FingerprintSet::new(digests)
    }

    /// Returns the generator's configuration.
    pub fn config(&self) -> &FingerprintConfig {
        &self.config
    }
}
