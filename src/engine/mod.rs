//! Runs the selected rules over every file of a tree.
//!
//! Files fan out across the rayon pool and so do the rules applicable to each
//! file. Every fan-out collects in submission order and only returns once all
//! branches finished; the first error aborts the whole run.

mod report;

pub use report::{FileOutcome, Outcome, RunReport};

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::{Result, TorifyError};
use crate::rule::{CompleteViolation, Rule, RuleContext};
use crate::scanner::{DirectoryScanner, ExcludeFilter, FileScanner};

pub struct Engine<'r> {
    root: PathBuf,
    rules: Vec<&'r Rule>,
    context: RuleContext<'r>,
}

impl<'r> Engine<'r> {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, rules: Vec<&'r Rule>, context: RuleContext<'r>) -> Self {
        Self {
            root: root.into(),
            rules,
            context,
        }
    }

    /// Walk the root and run every applicable rule on every file.
    ///
    /// # Errors
    /// Returns the first traversal, I/O or rule error; no partial report is produced.
    pub fn run(&self) -> Result<RunReport<'r>> {
        let filter = ExcludeFilter::new(&self.context.options.exclude)?;
        let files = DirectoryScanner::new(filter).scan(&self.root)?;
        tracing::debug!(
            files = files.len(),
            rules = self.rules.len(),
            fix = self.context.options.fix,
            "starting run"
        );
        self.run_files(&files)
    }

    /// Run on an already enumerated file list.
    ///
    /// # Errors
    /// Returns the first I/O or rule error.
    pub fn run_files(&self, files: &[PathBuf]) -> Result<RunReport<'r>> {
        let outcomes = files
            .par_iter()
            .map(|path| self.handle_file(path))
            .collect::<Result<Vec<_>>>()?;

        Ok(RunReport::collect(outcomes))
    }

    fn handle_file(&self, path: &Path) -> Result<FileOutcome<'r>> {
        let relative = self.relative_path(path);
        let applicable: Vec<&'r Rule> = self
            .rules
            .iter()
            .copied()
            .filter(|rule| rule.applies_to(&relative))
            .collect();

        let outcomes = applicable
            .par_iter()
            .map(|&rule| execute(rule, path, &self.context))
            .collect::<Result<Vec<_>>>()?;

        Ok(FileOutcome {
            path: path.to_path_buf(),
            outcomes,
        })
    }

    /// Path of `path` below the root. A root that is itself a file maps to its name.
    fn relative_path(&self, path: &Path) -> PathBuf {
        match path.strip_prefix(&self.root) {
            Ok(relative) if !relative.as_os_str().is_empty() => relative.to_path_buf(),
            _ => path
                .file_name()
                .map_or_else(|| path.to_path_buf(), PathBuf::from),
        }
    }
}

/// Run one rule on one file, in fix mode when requested and supported, else in check mode.
///
/// # Errors
/// Returns an error if the file cannot be read or written, or the rule fails.
pub fn execute<'r>(rule: &'r Rule, path: &Path, context: &RuleContext<'_>) -> Result<Outcome<'r>> {
    if context.options.fix
        && let Some(fix) = rule.fix
    {
        let contents = read_file(path)?;
        let fixed = fix(context, path, &contents)?;
        let changed = fixed != contents;
        if changed {
            fs::write(path, &fixed).map_err(|source| TorifyError::FileWrite {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!(rule = rule.id, path = %path.display(), "fixed");
        }
        return Ok(Outcome::Fixed { changed });
    }

    let Some(check) = rule.check else {
        tracing::trace!(rule = rule.id, path = %path.display(), "nothing to run");
        return Ok(Outcome::Skipped);
    };

    let contents = read_file(path)?;
    let violations = check(context, path, &contents)?;
    Ok(Outcome::Checked(
        violations
            .into_iter()
            .map(|violation| CompleteViolation::new(violation, path, rule))
            .collect(),
    ))
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| TorifyError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
