//! The five feature-extraction strategies.
//!
//! Each strategy turns the shared normalized text (or its word sequence)
//! into a feature string. Feature strings are what get hashed; they are the
//! cross-implementation compatibility surface, so their construction is
//! exact and all per-character operations work on code points.

use crate::{SAMPLING_SALT, SAMPLING_SEPARATOR, STRATEGY_COUNT};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A fingerprint strategy, identified by its fixed output slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Slot 0: normalized text verbatim. Whole-content identity.
    FullText,
    /// Slot 1: word lengths in sequence. Document shape independent of the
    /// actual words; texts with identical word-length sequences collide here
    /// by design.
    Structural,
    /// Slot 2: word prefixes with a period-10 position signal.
    Lexical,
    /// Slot 3: salted first and last word quarters. Boundary content with
    /// the middle deliberately excluded.
    Sampling,
    /// Slot 4: sorted character frequencies. Invariant under reordering of
    /// the text's characters.
    Frequency,
}

impl Strategy {
    /// All strategies in their fixed output order.
    pub const ALL: [Strategy; STRATEGY_COUNT] = [
        Strategy::FullText,
        Strategy::Structural,
        Strategy::Lexical,
        Strategy::Sampling,
        Strategy::Frequency,
    ];

    /// Output slot index of this strategy.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Canonical kebab-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::FullText => "full-text",
            Strategy::Structural => "structural",
            Strategy::Lexical => "lexical",
            Strategy::Sampling => "sampling",
            Strategy::Frequency => "frequency",
        }
    }

    /// Builds this strategy's feature string.
    ///
    /// `normalized` must be the normalized text and `words` its word
    /// sequence; both come from [`crate::text::Normalizer`]. For empty input
    /// `words` is `[""]` and every strategy produces a degenerate but
    /// well-formed feature string.
    pub fn feature(&self, normalized: &str, words: &[&str]) -> String {
        match self {
            Strategy::FullText => normalized.to_string(),
            Strategy::Structural => structural_feature(words),
            Strategy::Lexical => lexical_feature(words),
            Strategy::Sampling => sampling_feature(words),
            Strategy::Frequency => frequency_feature(normalized),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Each word's character count as decimal digits, concatenated without
/// separators.
fn structural_feature(words: &[&str]) -> String {
    let mut feature = String::new();
    for word in words {
        feature.push_str(&word.chars().count().to_string());
    }
    feature
}

/// For each word at index i: its first min(3, len) characters followed by
/// `i % 10`. The repeating positional signal separates repeated short
/// prefixes at different offsets.
fn lexical_feature(words: &[&str]) -> String {
    let mut feature = String::new();
    for (index, word) in words.iter().enumerate() {
        feature.extend(word.chars().take(3));
        feature.push_str(&(index % 10).to_string());
    }
    feature
}

/// First quarter of the words, the separator literal, the last quarter, and
/// the protocol salt. Quarter boundaries use floor division; below four
/// words the slices may be empty or overlap, which is accepted.
fn sampling_feature(words: &[&str]) -> String {
    let n = words.len();
    let first_quarter = words[..n / 4].join(" ");
    let last_quarter = words[n * 3 / 4..].join(" ");

    let mut feature = String::with_capacity(
        first_quarter.len() + SAMPLING_SEPARATOR.len() + last_quarter.len() + SAMPLING_SALT.len(),
    );
    feature.push_str(&first_quarter);
    feature.push_str(SAMPLING_SEPARATOR);
    feature.push_str(&last_quarter);
    feature.push_str(SAMPLING_SALT);
    feature
}

/// `<char><count>` pairs over the normalized text (spaces included), in
/// ascending code-point order.
fn frequency_feature(normalized: &str) -> String {
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    for ch in normalized.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }

    let mut feature = String::new();
    for (ch, count) in counts {
        feature.push(ch);
        feature.push_str(&count.to_string());
    }
    feature
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_order() {
        for (i, strategy) in Strategy::ALL.iter().enumerate() {
            assert_eq!(strategy.index(), i);
        }
    }

    #[test]
    fn test_structural() {
        assert_eq!(structural_feature(&["aa", "bb", "cc"]), "222");
        assert_eq!(structural_feature(&["a", "bbbb", "cc"]), "142");
        // Ten-plus character words contribute multi-digit lengths.
        assert_eq!(structural_feature(&["abcdefghijk"]), "11");
    }

    #[test]
    fn test_structural_counts_code_points() {
        // 5 code points, more than 5 bytes.
        assert_eq!(structural_feature(&["héllo"]), "5");
    }

    #[test]
    fn test_lexical() {
        assert_eq!(lexical_feature(&["aa", "bb", "cc"]), "aa0bb1cc2");
        // Prefixes are capped at three characters.
        assert_eq!(lexical_feature(&["alpha", "be"]), "alp0be1");
    }

    #[test]
    fn test_lexical_position_wraps_at_ten() {
        let words: Vec<&str> = std::iter::repeat("x").take(12).collect();
        let feature = lexical_feature(&words);
        assert!(feature.ends_with("x9x0x1"));
    }

    #[test]
    fn test_sampling_three_words() {
        // floor(3/4) = 0, floor(9/4) = 2: empty first quarter, last word only.
        assert_eq!(
            sampling_feature(&["aa", "bb", "cc"]),
            format!("::MIDDLE::cc{}", SAMPLING_SALT)
        );
    }

    #[test]
    fn test_sampling_eight_words() {
        let words = ["w0", "w1", "w2", "w3", "w4", "w5", "w6", "w7"];
        assert_eq!(
            sampling_feature(&words),
            format!("w0 w1::MIDDLE::w6 w7{}", SAMPLING_SALT)
        );
    }

    #[test]
    fn test_sampling_single_word_overlaps() {
        // n = 1: first quarter empty, last quarter is the whole sequence.
        assert_eq!(
            sampling_feature(&["solo"]),
            format!("::MIDDLE::solo{}", SAMPLING_SALT)
        );
    }

    #[test]
    fn test_frequency_sorted_by_code_point() {
        // Space (0x20) sorts before the letters.
        assert_eq!(frequency_feature("ba ab"), " 1a2b2");
    }

    #[test]
    fn test_frequency_order_invariance() {
        assert_eq!(frequency_feature("aa bb cc"), frequency_feature("cc bb aa"));
    }

    #[test]
    fn test_frequency_multibyte() {
        assert_eq!(frequency_feature("éé"), "é2");
    }

    #[test]
    fn test_empty_input_features() {
        // Empty normalized text has the degenerate word sequence [""].
        let words = vec![""];
        assert_eq!(Strategy::FullText.feature("", &words), "");
        assert_eq!(Strategy::Structural.feature("", &words), "0");
        assert_eq!(Strategy::Lexical.feature("", &words), "0");
        assert_eq!(
            Strategy::Sampling.feature("", &words),
            format!("::MIDDLE::{}", SAMPLING_SALT)
        );
        assert_eq!(Strategy::Frequency.feature("", &words), "");
    }
}
