//! Scan targets: a root directory and a file extension

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing a `ROOT:EXT` target argument
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid target '{0}': expected ROOT:EXT, e.g. include:h")]
pub struct TargetParseError(pub String);

/// A directory to walk and the extension of the files to process in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub root: PathBuf,
    /// Extension without the leading dot
    #[serde(deserialize_with = "deserialize_extension")]
    pub extension: String,
}

impl Target {
    /// Create a target; a leading `.` on the extension is dropped
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, extension: impl AsRef<str>) -> Self {
        Self {
            root: root.into(),
            extension: clean_extension(extension.as_ref()),
        }
    }

    /// Whether `path` has a file name ending in `.<extension>`
    ///
    /// The match is case-sensitive and the name must be longer than the
    /// suffix, so `.h` alone does not match `h`.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        let suffix = format!(".{}", self.extension);
        name.len() > suffix.len() && name.ends_with(&suffix)
    }

    /// Resolve a relative root against `base`
    #[must_use]
    pub fn relative_to(mut self, base: &Path) -> Self {
        if self.root.is_relative() {
            self.root = base.join(&self.root);
        }
        self
    }
}

impl FromStr for Target {
    type Err = TargetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once(':') {
            Some((root, ext)) if !root.is_empty() && !clean_extension(ext).is_empty() => {
                Ok(Self::new(root, ext))
            }
            _ => Err(TargetParseError(s.to_string())),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.root.display(), self.extension)
    }
}

fn clean_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_string()
}

fn deserialize_extension<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(clean_extension(&raw))
}
