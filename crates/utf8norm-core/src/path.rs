//! Path resolution: user-home expansion and canonicalization

use std::io;
use std::path::{Path, PathBuf};

/// Expand a leading `~` to the value of `HOME`
///
/// Only `~` on its own and `~/...` are expanded; `~user` forms and paths
/// without a tilde are returned as-is, as is everything when `HOME` is unset.
#[must_use]
pub fn expand_home(path: &Path) -> PathBuf {
    let Some(home) = std::env::var_os("HOME") else {
        return path.to_path_buf();
    };

    match path.strip_prefix("~") {
        Ok(rest) if rest.as_os_str().is_empty() => PathBuf::from(home),
        Ok(rest) => PathBuf::from(home).join(rest),
        Err(_) => path.to_path_buf(),
    }
}

/// Resolve a user-supplied path to its canonical absolute form
///
/// Expands `~`, then resolves `.`/`..` segments and symbolic links.
///
/// # Errors
/// Returns an I/O error if the path does not exist or cannot be accessed.
pub fn resolve_path(path: &Path) -> io::Result<PathBuf> {
    dunce::canonicalize(expand_home(path))
}
