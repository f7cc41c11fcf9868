use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "torify-site")]
#[command(
    author,
    version,
    about = "Audit a static site and steer its links to onion services"
)]
#[command(long_about = "Walks a static-site tree and runs every applicable rule on every file.\n\
    Rules flag clearnet links whose sites also serve an onion service, and can rewrite them in place with --fix.\n\n\
    Exit codes:\n  \
    0 - No violations\n  \
    1 - Violations found\n  \
    2 - Configuration or runtime error")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Site root directory, or a single file
    #[arg(required_unless_present = "list_rules")]
    pub path: Option<PathBuf>,

    /// Rewrite files instead of reporting violations
    #[arg(short, long)]
    pub fix: bool,

    /// Only run these rules (comma-separated ids)
    #[arg(short, long, value_delimiter = ',')]
    pub rules: Vec<String>,

    /// Never run these rules (comma-separated ids)
    #[arg(short, long, value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Skip these root-relative paths (comma-separated globs)
    #[arg(short, long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// JSON file mapping clearnet origins to onion origins
    #[arg(long)]
    pub known_onion_locations: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Output format [possible values: text, json]
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the available rules and exit
    #[arg(long)]
    pub list_rules: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
