//! Errors raised while normalizing a file

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while normalizing a single file
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid {encoding}", .path.display())]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },
}

impl NormalizeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Path of the file the error refers to
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Decode { path, .. } => path,
        }
    }

    /// Underlying I/O error kind, e.g. `NotFound` or `PermissionDenied`
    #[must_use]
    pub fn kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Io { source, .. } => Some(source.kind()),
            Self::Decode { .. } => None,
        }
    }
}
