//! Detect module: Guess the character encoding of raw bytes
//!
//! The detector is a seam: the normalizer only depends on the
//! [`EncodingDetector`] trait, and [`ChardetngDetector`] is the
//! default implementation.

mod chardet;
mod detection;

pub use chardet::ChardetngDetector;
pub use detection::{Detection, DetectionSource};

/// Capability that guesses the encoding of a byte buffer
pub trait EncodingDetector {
    /// Return the most likely encoding of `bytes`, or an undetectable result
    fn detect(&self, bytes: &[u8]) -> Detection;
}

#[cfg(test)]
mod tests;
