use std::fs;
use std::path::Path;

use crate::cli::ColorChoice;
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::error::TorifyError;
use crate::output::{ColorMode, print_error_full};

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load the configuration an invocation asked for.
///
/// `--no-config` wins over `--config`.
///
/// # Errors
/// Returns an error if a config file exists but cannot be read or parsed.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Write the report to `output_path`, or to stdout unless `quiet`.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

/// Print an aborting error with its detail and help lines.
pub fn report_error(error: &TorifyError, color: ColorMode) {
    print_error_full(
        color,
        error.error_type(),
        &error.to_string(),
        error.detail().as_deref(),
        error.suggestion(),
    );
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
