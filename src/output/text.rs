use std::fmt::Write;

use crate::engine::RunReport;
use crate::error::Result;
use crate::rule::{CompleteViolation, DefaultMode};

use super::{ColorMode, OutputFormatter, ansi};

/// One `path:line:column [rule] message` line per violation.
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: mode.stdout_colors(),
            verbose,
        }
    }

    #[cfg(test)]
    pub const fn plain(verbose: u8) -> Self {
        Self {
            use_colors: false,
            verbose,
        }
    }

    #[cfg(test)]
    pub const fn colored() -> Self {
        Self {
            use_colors: true,
            verbose: 0,
        }
    }

    fn rule_tag(&self, violation: &CompleteViolation<'_>) -> String {
        let tag = format!("[{}]", violation.rule.id);
        if !self.use_colors {
            return tag;
        }

        let color = match violation.rule.default {
            DefaultMode::Error => ansi::RED,
            DefaultMode::Warn => ansi::YELLOW,
            DefaultMode::Fix | DefaultMode::Disabled => ansi::CYAN,
        };
        format!("{color}{tag}{}", ansi::RESET)
    }

    fn format_violation(&self, violation: &CompleteViolation<'_>, output: &mut String) {
        let line = violation.line.map(|l| l.to_string()).unwrap_or_default();
        let column = violation.column.map(|c| c.to_string()).unwrap_or_default();
        let _ = writeln!(
            output,
            "{}:{line}:{column} {} {}",
            violation.path.display(),
            self.rule_tag(violation),
            violation.message
        );
    }

    fn format_summary(report: &RunReport<'_>, output: &mut String) {
        let _ = writeln!(
            output,
            "\n{} file(s) scanned, {} check(s), {} fix(es), {} file(s) changed, {} violation(s)",
            report.files_scanned,
            report.checks_run,
            report.fixes_run,
            report.files_changed,
            report.violations.len()
        );
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &RunReport<'_>) -> Result<String> {
        let mut output = String::new();
        for violation in &report.violations {
            self.format_violation(violation, &mut output);
        }

        if self.verbose > 0 {
            Self::format_summary(report, &mut output);
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
