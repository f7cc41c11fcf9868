//! The rule contract shared by the engine and every concrete rule.
//!
//! A [`Rule`] is a capability record: identity, applicability conditions, and
//! two optional operation slots. The engine decides what to run by checking
//! which slots are present, so adding a rule never touches traversal or
//! reporting code.

mod applicability;
mod selector;

pub use applicability::{RunOn, matches};
pub use selector::{select, unknown_rule_ids};

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::RunOptions;
use crate::error::Result;
use crate::fetch::Fetcher;

/// How a rule behaves when nobody configured it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultMode {
    Disabled,
    Fix,
    Warn,
    Error,
}

impl DefaultMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Fix => "fix",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for DefaultMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed check, located inside a file but not yet tied to one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub line: Option<usize>,
    pub column: Option<usize>,
    pub message: String,
}

impl Violation {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            line: None,
            column: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn at(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

/// A violation annotated with the file it was found in and the rule that found it.
#[derive(Debug, Clone)]
pub struct CompleteViolation<'r> {
    pub path: PathBuf,
    pub rule: &'r Rule,
    pub line: Option<usize>,
    pub column: Option<usize>,
    pub message: String,
}

impl<'r> CompleteViolation<'r> {
    #[must_use]
    pub fn new(violation: Violation, path: &Path, rule: &'r Rule) -> Self {
        Self {
            path: path.to_path_buf(),
            rule,
            line: violation.line,
            column: violation.column,
            message: violation.message,
        }
    }
}

/// Everything a rule operation may consult besides the file itself.
#[derive(Clone, Copy)]
pub struct RuleContext<'a> {
    pub options: &'a RunOptions,
    pub fetcher: &'a Fetcher,
}

impl<'a> RuleContext<'a> {
    #[must_use]
    pub const fn new(options: &'a RunOptions, fetcher: &'a Fetcher) -> Self {
        Self { options, fetcher }
    }
}

/// Inspect `contents` of the file at `path` and report violations.
pub type CheckFn = fn(&RuleContext<'_>, &Path, &[u8]) -> Result<Vec<Violation>>;

/// Return the rewritten `contents` of the file at `path`.
pub type FixFn = fn(&RuleContext<'_>, &Path, &[u8]) -> Result<Vec<u8>>;

pub struct Rule {
    pub id: &'static str,
    pub description: &'static str,
    pub default: DefaultMode,
    /// All conditions must hold for the rule to run on a file.
    pub run_on: Vec<RunOn>,
    pub check: Option<CheckFn>,
    pub fix: Option<FixFn>,
}

impl Rule {
    #[must_use]
    pub fn applies_to(&self, relative_path: &Path) -> bool {
        matches(&self.run_on, relative_path)
    }

    #[must_use]
    pub const fn is_fixable(&self) -> bool {
        self.fix.is_some()
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("default", &self.default)
            .field("run_on", &self.run_on)
            .field("check", &self.check.is_some())
            .field("fix", &self.fix.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
