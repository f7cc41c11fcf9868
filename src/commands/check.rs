use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{KnownOnionLocations, LoadResult, RunOptions};
use crate::engine::{Engine, RunReport};
use crate::error::{Result, TorifyError};
use crate::fetch::{Fetcher, ReqwestClient};
use crate::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter, print_warning,
};
use crate::rule::{Rule, RuleContext, select, unknown_rule_ids};
use crate::rules::all_rules;
use crate::{EXIT_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS};

use super::context::{color_choice_to_mode, load_config, report_error, write_output};

#[must_use]
pub fn run_check(cli: &Cli) -> i32 {
    match run_check_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            report_error(&e, color_choice_to_mode(cli.color));
            EXIT_ERROR
        }
    }
}

/// Load configuration, build the HTTP client and run.
///
/// # Errors
/// Returns configuration, traversal, I/O and rule errors.
pub fn run_check_impl(cli: &Cli) -> Result<i32> {
    let loaded = load_config(cli.config.as_deref(), cli.no_config)?;
    let options = build_run_options(cli, &loaded)?;

    let fetch = &loaded.config.fetch;
    let client = ReqwestClient::new(fetch.timeout())?;
    let mut fetcher = Fetcher::new(Box::new(client), fetch.retry_policy());
    if let Some(user_agent) = &fetch.user_agent {
        fetcher = fetcher.with_user_agent(user_agent.clone());
    }

    let rules = all_rules();
    run_check_with_context(cli, &rules, &options, &fetcher)
}

/// Run against an injected rule registry and fetcher.
///
/// # Errors
/// Returns traversal, I/O and rule errors, or a configuration error when no path was given.
pub fn run_check_with_context(
    cli: &Cli,
    rules: &[Rule],
    options: &RunOptions,
    fetcher: &Fetcher,
) -> Result<i32> {
    let root = resolve_root(cli.path.as_deref())?;

    if !cli.quiet {
        let color = color_choice_to_mode(cli.color);
        for id in unknown_rule_ids(rules, &options.rules)
            .into_iter()
            .chain(unknown_rule_ids(rules, &options.ignore))
        {
            print_warning(
                color,
                &format!("unknown rule id `{id}`"),
                Some("run with --list-rules to see available rules"),
            );
        }
    }

    let selected = select(rules, &options.rules, &options.ignore);
    let engine = Engine::new(root, selected, RuleContext::new(options, fetcher));
    let report = engine.run()?;

    let output = format_output(
        cli.format,
        &report,
        color_choice_to_mode(cli.color),
        cli.verbose,
    )?;
    write_output(cli.output.as_deref(), &output, cli.quiet)?;

    Ok(determine_exit_code(&report))
}

/// Merge CLI flags over the loaded configuration.
///
/// Non-empty CLI lists replace the configured ones. A known-locations file
/// given on the command line is relative to the working directory; one named
/// in the config file is relative to that file.
///
/// # Errors
/// Returns an error if the known-locations file cannot be read or parsed.
pub fn build_run_options(cli: &Cli, loaded: &LoadResult) -> Result<RunOptions> {
    let config = &loaded.config;
    let pick = |from_cli: &[String], from_config: &[String]| {
        if from_cli.is_empty() {
            from_config.to_vec()
        } else {
            from_cli.to_vec()
        }
    };

    let known_onion_locations = match (&cli.known_onion_locations, &config.known_onion_locations)
    {
        (Some(path), _) => KnownOnionLocations::load(path)?,
        (None, Some(path)) => KnownOnionLocations::load(&loaded.resolve_path(path))?,
        (None, None) => KnownOnionLocations::default(),
    };
    tracing::debug!(
        entries = known_onion_locations.len(),
        "known onion locations"
    );

    Ok(RunOptions {
        fix: cli.fix,
        rules: pick(&cli.rules, &config.rules),
        ignore: pick(&cli.ignore, &config.ignore),
        exclude: pick(&cli.exclude, &config.exclude),
        known_onion_locations,
    })
}

fn resolve_root(path: Option<&Path>) -> Result<PathBuf> {
    let path = path.ok_or_else(|| TorifyError::Config("a site path is required".to_string()))?;
    if !path.exists() {
        return Err(TorifyError::Config(format!(
            "path does not exist: {}",
            path.display()
        )));
    }
    Ok(dunce::canonicalize(path)?)
}

/// Render the report in the requested format.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_output(
    format: OutputFormat,
    report: &RunReport<'_>,
    color_mode: ColorMode,
    verbose: u8,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

#[must_use]
pub fn determine_exit_code(report: &RunReport<'_>) -> i32 {
    if report.has_violations() {
        EXIT_VIOLATIONS
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
