//! Batch configuration: which trees to walk and how to rewrite files
//!
//! A configuration can be assembled in code or loaded from a JSON file:
//!
//! ```json
//! {
//!   "targets": [
//!     { "root": "include", "extension": "h" },
//!     { "root": "src", "extension": "cpp" }
//!   ],
//!   "universal_endline": false
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scanner::Target;

/// Errors that can occur while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No targets configured")]
    NoTargets,
}

/// Configuration for a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub targets: Vec<Target>,
    /// Replace CRLF with LF in converted files
    pub universal_endline: bool,
    /// Skip files excluded by `.gitignore`
    pub respect_gitignore: bool,
    /// Stop at the first file that fails
    pub fail_fast: bool,
    /// Report conversions without writing
    pub dry_run: bool,
}

impl BatchConfig {
    #[must_use]
    pub fn new(targets: Vec<Target>) -> Self {
        Self {
            targets,
            ..Self::default()
        }
    }

    /// Load a configuration from a JSON file
    ///
    /// Relative target roots are resolved against the file's directory.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.resolve_roots(base))
    }

    /// Resolve relative target roots against `base`
    #[must_use]
    pub fn resolve_roots(mut self, base: &Path) -> Self {
        self.targets = self
            .targets
            .into_iter()
            .map(|t| t.relative_to(base))
            .collect();
        self
    }

    /// Append more targets
    #[must_use]
    pub fn with_targets(mut self, targets: impl IntoIterator<Item = Target>) -> Self {
        self.targets.extend(targets);
        self
    }

    #[must_use]
    pub fn with_universal_endline(mut self, universal_endline: bool) -> Self {
        self.universal_endline = universal_endline;
        self
    }

    #[must_use]
    pub fn with_gitignore(mut self, respect_gitignore: bool) -> Self {
        self.respect_gitignore = respect_gitignore;
        self
    }

    #[must_use]
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Check that the configuration can be run
    ///
    /// # Errors
    /// Returns [`ConfigError::NoTargets`] if the target list is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.targets.is_empty() {
            return Err(ConfigError::NoTargets);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
