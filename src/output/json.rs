use serde::Serialize;

use crate::engine::RunReport;
use crate::error::Result;
use crate::rule::{CompleteViolation, DefaultMode};

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    violations: Vec<JsonViolation<'a>>,
}

#[derive(Serialize)]
struct Summary {
    files: usize,
    violations: usize,
    fixes: usize,
}

#[derive(Serialize)]
struct JsonViolation<'a> {
    path: String,
    line: Option<usize>,
    column: Option<usize>,
    rule: &'a str,
    severity: DefaultMode,
    message: &'a str,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &RunReport<'_>) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                files: report.files_scanned,
                violations: report.violations.len(),
                fixes: report.files_changed,
            },
            violations: report.violations.iter().map(convert_violation).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_violation<'a>(violation: &'a CompleteViolation<'_>) -> JsonViolation<'a> {
    JsonViolation {
        path: violation.path.display().to_string(),
        line: violation.line,
        column: violation.column,
        rule: violation.rule.id,
        severity: violation.rule.default,
        message: &violation.message,
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
