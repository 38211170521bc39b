//! File walker: Discovers target files in directory trees

use std::path::PathBuf;

use ignore::WalkBuilder;
use tracing::warn;

use super::Target;

/// Scanner for discovering files to normalize
#[derive(Debug)]
pub struct Scanner {
    targets: Vec<Target>,
    respect_gitignore: bool,
}

impl Scanner {
    /// Create a new scanner over the given targets
    #[must_use]
    pub fn new(targets: Vec<Target>) -> Self {
        Self {
            targets,
            respect_gitignore: false,
        }
    }

    /// Skip files excluded by `.gitignore` rules
    #[must_use]
    pub fn with_gitignore(mut self, respect_gitignore: bool) -> Self {
        self.respect_gitignore = respect_gitignore;
        self
    }

    /// Scan all targets in order and return matching files
    ///
    /// Hidden files and directories are skipped. Missing roots are logged
    /// and produce no files.
    pub fn scan(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.targets.iter().flat_map(|target| self.scan_target(target))
    }

    fn scan_target<'a>(&'a self, target: &'a Target) -> Box<dyn Iterator<Item = PathBuf> + 'a> {
        if !target.root.is_dir() {
            warn!("Skipping target {}: not a directory", target);
            return Box::new(std::iter::empty());
        }

        let walker = WalkBuilder::new(&target.root)
            .hidden(true)
            .ignore(false)
            .parents(self.respect_gitignore)
            .git_ignore(self.respect_gitignore)
            .git_global(self.respect_gitignore)
            .git_exclude(self.respect_gitignore)
            .require_git(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        Box::new(
            walker
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
                .map(ignore::DirEntry::into_path)
                .filter(move |path| target.matches(path)),
        )
    }

    /// Get the configured targets
    #[must_use]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }
}
