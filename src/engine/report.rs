use std::path::PathBuf;

use crate::rule::CompleteViolation;

/// What happened when one rule met one file. Exactly one variant per invocation.
#[derive(Debug)]
pub enum Outcome<'r> {
    Checked(Vec<CompleteViolation<'r>>),
    Fixed { changed: bool },
    /// Fix-only rule in check mode.
    Skipped,
}

#[derive(Debug)]
pub struct FileOutcome<'r> {
    pub path: PathBuf,
    pub outcomes: Vec<Outcome<'r>>,
}

/// Flattened result of a run.
///
/// Violations keep traversal order, then rule order within a file.
#[derive(Debug, Default)]
pub struct RunReport<'r> {
    pub violations: Vec<CompleteViolation<'r>>,
    pub files_scanned: usize,
    pub checks_run: usize,
    pub fixes_run: usize,
    pub files_changed: usize,
}

impl<'r> RunReport<'r> {
    #[must_use]
    pub fn collect(files: Vec<FileOutcome<'r>>) -> Self {
        let mut report = Self {
            files_scanned: files.len(),
            ..Self::default()
        };

        for file in files {
            let mut changed = false;
            for outcome in file.outcomes {
                match outcome {
                    Outcome::Checked(violations) => {
                        report.checks_run += 1;
                        report.violations.extend(violations);
                    }
                    Outcome::Fixed { changed: wrote } => {
                        report.fixes_run += 1;
                        changed |= wrote;
                    }
                    Outcome::Skipped => {}
                }
            }
            if changed {
                report.files_changed += 1;
            }
        }

        report
    }

    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
