//! Normalize module: Rewrite a file as UTF-8 without BOM
//!
//! Reads a file, asks an [`EncodingDetector`](crate::detect::EncodingDetector)
//! for its encoding and, unless it is already UTF-8 without a BOM (or cannot
//! be determined), decodes it, optionally converts CRLF to LF, and writes it
//! back in place.

mod error;
mod normalizer;
mod outcome;
mod transcode;

use std::path::Path;

pub use error::NormalizeError;
pub use normalizer::{ConversionRequest, Normalizer};
pub use outcome::{Conversion, Outcome, SkipReason};
pub use transcode::UTF8_BOM;

/// Normalize a single file with the default detector
///
/// # Errors
/// Returns an error if the file cannot be read or written, or if its bytes
/// are not valid in the detected encoding.
pub fn normalize(path: &Path, universal_endline: bool) -> Result<Outcome, NormalizeError> {
    let request = ConversionRequest::new(path).with_universal_endline(universal_endline);
    Normalizer::new().normalize(&request)
}

#[cfg(test)]
mod tests;
