//! Batch run report

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::normalize::{Conversion, NormalizeError, SkipReason};

/// A file that could not be normalized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Summary of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub converted: Vec<Conversion>,
    pub already_target: usize,
    pub undetectable: usize,
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    pub(crate) fn record_converted(&mut self, conversion: Conversion) {
        self.converted.push(conversion);
    }

    pub(crate) fn record_unchanged(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::AlreadyTarget => self.already_target += 1,
            SkipReason::Undetectable => self.undetectable += 1,
        }
    }

    pub(crate) fn record_failure(&mut self, path: &Path, error: &NormalizeError) {
        self.failures.push(FileFailure {
            path: path.to_path_buf(),
            reason: error.to_string(),
        });
    }

    /// Number of files that failed
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Number of files visited
    #[must_use]
    pub fn total(&self) -> usize {
        self.converted.len() + self.already_target + self.undetectable + self.failed()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Render the report as pretty-printed JSON
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
