//! File normalizer: detect, decode, rewrite

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::transcode::transcode;
use super::{Conversion, NormalizeError, Outcome, SkipReason};
use crate::detect::{ChardetngDetector, EncodingDetector};
use crate::path::resolve_path;

/// A single file to normalize and its line-ending policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub path: PathBuf,
    /// Replace CRLF with LF while rewriting
    pub universal_endline: bool,
}

impl ConversionRequest {
    /// Create a request that also normalizes line endings
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            universal_endline: true,
        }
    }

    #[must_use]
    pub fn with_universal_endline(mut self, universal_endline: bool) -> Self {
        self.universal_endline = universal_endline;
        self
    }
}

/// Rewrites files as UTF-8 without BOM
#[derive(Debug, Clone)]
pub struct Normalizer<D = ChardetngDetector> {
    detector: D,
    dry_run: bool,
}

impl Normalizer {
    /// Create a normalizer using the `chardetng` detector
    #[must_use]
    pub fn new() -> Self {
        Self::with_detector(ChardetngDetector::new())
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: EncodingDetector> Normalizer<D> {
    /// Create a normalizer using a custom detector
    #[must_use]
    pub fn with_detector(detector: D) -> Self {
        Self {
            detector,
            dry_run: false,
        }
    }

    /// Report conversions without writing anything
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    #[must_use]
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Normalize one file in place
    ///
    /// Files that are already UTF-8 without BOM, or whose encoding cannot
    /// be determined, are never written.
    ///
    /// # Errors
    /// Returns [`NormalizeError::Io`] if the file cannot be resolved, read
    /// or written, and [`NormalizeError::Decode`] if its bytes are invalid in
    /// the detected encoding. Nothing is written on error.
    pub fn normalize(&self, request: &ConversionRequest) -> Result<Outcome, NormalizeError> {
        let path = resolve_path(&request.path).map_err(|e| NormalizeError::io(&request.path, e))?;
        let raw = fs::read(&path).map_err(|e| NormalizeError::io(&path, e))?;

        let detection = self.detector.detect(&raw);
        let Some(encoding) = detection.encoding else {
            debug!("Skipping {}: encoding undetectable", path.display());
            return Ok(Outcome::Unchanged(SkipReason::Undetectable));
        };
        if detection.is_target() {
            debug!("Skipping {}: already UTF-8", path.display());
            return Ok(Outcome::Unchanged(SkipReason::AlreadyTarget));
        }

        let transcoded = transcode(&raw, encoding, detection.bom_len, request.universal_endline)
            .ok_or_else(|| NormalizeError::Decode {
                path: path.clone(),
                encoding: encoding.name(),
            })?;

        if self.dry_run {
            info!("Would convert {} ({} -> UTF-8)", path.display(), detection);
        } else {
            write_file(&path, &transcoded.bytes)?;
            info!("Converted {} ({} -> UTF-8)", path.display(), detection);
        }

        Ok(Outcome::Converted(Conversion {
            path,
            from: encoding.name(),
            bom_stripped: transcoded.bom_stripped,
            line_endings_normalized: transcoded.line_endings_normalized,
        }))
    }
}

/// Truncate and overwrite; not atomic
fn write_file(path: &Path, bytes: &[u8]) -> Result<(), NormalizeError> {
    fs::write(path, bytes).map_err(|e| NormalizeError::io(path, e))
}
