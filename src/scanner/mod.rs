//! Recursive enumeration of the audited tree.

mod filter;

pub use filter::{ExcludeFilter, FileFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, TorifyError};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Every regular file under `root`, or `root` itself when it is a file.
    ///
    /// # Errors
    /// Returns an error if any entry cannot be read; a partial listing is never returned.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Walks a tree depth-first, following symlinks, with children sorted by name.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn is_included(&self, root: &Path, path: &Path) -> bool {
        match path.strip_prefix(root) {
            Ok(relative) => self.filter.should_include(relative),
            Err(_) => true,
        }
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let walker = WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || self.is_included(root, entry.path()));

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|source| TorifyError::Traversal {
                path: source.path().unwrap_or(root).to_path_buf(),
                source,
            })?;

            let file_type = entry.file_type();
            if file_type.is_file() {
                files.push(entry.into_path());
            } else if !file_type.is_dir() {
                tracing::debug!(path = %entry.path().display(), "skipping non-regular file");
            }
        }

        Ok(files)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
