//! Text processing module for whitespace normalization and word splitting.

mod normalizer;

pub use normalizer::Normalizer;
