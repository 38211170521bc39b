//! Outcome of normalizing a file

use std::path::PathBuf;

use serde::Serialize;

/// Why a file was left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Already UTF-8 without a byte-order mark
    AlreadyTarget,
    /// The detector could not determine an encoding
    Undetectable,
}

/// Details of a rewritten file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub path: PathBuf,
    /// Name of the detected source encoding
    pub from: &'static str,
    pub bom_stripped: bool,
    /// Number of CRLF pairs replaced with LF
    pub line_endings_normalized: usize,
}

/// Result of normalizing a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Unchanged(SkipReason),
    Converted(Conversion),
}

impl Outcome {
    #[must_use]
    pub const fn is_converted(&self) -> bool {
        matches!(self, Self::Converted(_))
    }
}
