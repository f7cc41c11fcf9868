use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, TorifyError};

/// Decides which root-relative entries the scanner descends into or yields.
pub trait FileFilter {
    fn should_include(&self, relative_path: &Path) -> bool;
}

/// Drops entries matching any `--exclude` pattern.
///
/// Patterns are globs relative to the scanned root; a leading `/` is ignored,
/// so `/drafts` and `drafts` both prune the `drafts` directory.
pub struct ExcludeFilter {
    patterns: GlobSet,
}

impl ExcludeFilter {
    /// # Errors
    /// Returns an error if any pattern is not a valid glob.
    pub fn new(exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let trimmed = pattern.trim().trim_start_matches('/');
            if trimmed.is_empty() {
                continue;
            }
            let glob = Glob::new(trimmed).map_err(|e| TorifyError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let patterns = builder.build().map_err(|e| TorifyError::InvalidPattern {
            pattern: "combined patterns".to_string(),
            source: e,
        })?;

        Ok(Self { patterns })
    }

    fn is_excluded(&self, relative_path: &Path) -> bool {
        self.patterns.is_match(relative_path)
    }
}

impl FileFilter for ExcludeFilter {
    fn should_include(&self, relative_path: &Path) -> bool {
        !self.is_excluded(relative_path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
