use std::fmt::Write;

use serde::Serialize;

use crate::cli::Cli;
use crate::output::OutputFormat;
use crate::rule::{DefaultMode, Rule};
use crate::rules::all_rules;
use crate::{EXIT_ERROR, EXIT_SUCCESS};

use super::context::{color_choice_to_mode, report_error, write_output};

#[derive(Serialize)]
struct RuleEntry<'a> {
    id: &'a str,
    description: &'a str,
    default: DefaultMode,
    fixable: bool,
}

#[must_use]
pub fn run_list_rules(cli: &Cli) -> i32 {
    let rules = all_rules();
    let result = format_rule_list(&rules, cli.format)
        .and_then(|output| write_output(cli.output.as_deref(), &output, false));

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e, color_choice_to_mode(cli.color));
            EXIT_ERROR
        }
    }
}

/// Describe every registered rule.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn format_rule_list(rules: &[Rule], format: OutputFormat) -> crate::Result<String> {
    match format {
        OutputFormat::Json => {
            let entries: Vec<_> = rules
                .iter()
                .map(|rule| RuleEntry {
                    id: rule.id,
                    description: rule.description,
                    default: rule.default,
                    fixable: rule.is_fixable(),
                })
                .collect();
            Ok(serde_json::to_string_pretty(&entries)?)
        }
        OutputFormat::Text => {
            let mut output = String::new();
            for rule in rules {
                let fixable = if rule.is_fixable() { ", fixable" } else { "" };
                let _ = writeln!(
                    output,
                    "{} ({}{fixable})\n  {}",
                    rule.id, rule.default, rule.description
                );
            }
            Ok(output)
        }
    }
}
