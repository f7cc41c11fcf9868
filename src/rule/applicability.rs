use std::path::{Component, Path};

/// One applicability condition.
///
/// A condition with both lists set is satisfied when either list matches.
/// A condition with neither list set never matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOn {
    /// Extensions without the leading dot, compared case-sensitively.
    pub file_extensions: Vec<String>,
    /// Root-relative paths with a leading `/`, e.g. `/robots.txt`.
    pub file_paths: Vec<String>,
}

impl RunOn {
    #[must_use]
    pub fn extensions(extensions: &[&str]) -> Self {
        Self {
            file_extensions: extensions.iter().map(ToString::to_string).collect(),
            file_paths: Vec::new(),
        }
    }

    #[must_use]
    pub fn paths(paths: &[&str]) -> Self {
        Self {
            file_extensions: Vec::new(),
            file_paths: paths.iter().map(ToString::to_string).collect(),
        }
    }

    #[must_use]
    pub fn with_paths(mut self, paths: &[&str]) -> Self {
        self.file_paths.extend(paths.iter().map(ToString::to_string));
        self
    }

    fn is_satisfied(&self, rooted: &str, extension: Option<&str>) -> bool {
        if self.file_paths.iter().any(|p| p == rooted) {
            return true;
        }

        extension.is_some_and(|ext| self.file_extensions.iter().any(|e| e == ext))
    }
}

/// Whether a rule with `conditions` runs on the file at `relative_path`.
///
/// `relative_path` is relative to the audited root. Every condition must hold;
/// an empty list applies everywhere.
#[must_use]
pub fn matches(conditions: &[RunOn], relative_path: &Path) -> bool {
    if conditions.is_empty() {
        return true;
    }

    let rooted = rooted_path(relative_path);
    let extension = relative_path.extension().and_then(|ext| ext.to_str());

    conditions
        .iter()
        .all(|condition| condition.is_satisfied(&rooted, extension))
}

/// `sub/page.htm` -> `/sub/page.htm`, with `/` separators on every platform.
fn rooted_path(relative_path: &Path) -> String {
    let mut rooted = String::new();
    for component in relative_path.components() {
        if let Component::Normal(part) = component {
            rooted.push('/');
            rooted.push_str(&part.to_string_lossy());
        }
    }
    rooted
}

#[cfg(test)]
#[path = "applicability_tests.rs"]
mod tests;
