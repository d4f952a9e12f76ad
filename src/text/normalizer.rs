//! Whitespace normalization for preprocessing.

/// Text normalizer that trims and collapses whitespace.
///
/// Normalization is intentionally minimal: leading and trailing whitespace is
/// removed and internal whitespace runs are collapsed to single spaces.
/// Every fingerprint strategy reads the same normalized form, so all five
/// fingerprints are derived from an identical token stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer;

impl Normalizer {
    /// Creates a new normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Normalizes text: trims and collapses internal whitespace runs to
    /// single spaces.
    ///
    /// Whitespace is detected per Unicode code point, so tabs, newlines, and
    /// non-ASCII spaces all collapse. Normalization is idempotent.
    pub fn normalize(&self, text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Splits normalized text into its word sequence.
    ///
    /// Words are the substrings between single spaces, in source order.
    /// Empty normalized text yields a sequence containing one empty token,
    /// never an empty sequence.
    pub fn words<'a>(&self, normalized: &'a str) -> Vec<&'a str> {
        normalized.split(' ').collect()
    }
}
