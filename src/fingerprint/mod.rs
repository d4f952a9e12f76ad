//! Fingerprint generation: five feature-extraction strategies and the
//! generator that runs them.

mod generator;
mod strategy;

pub use generator::{FingerprintGenerator, FingerprintSet};
pub use strategy::Strategy;
