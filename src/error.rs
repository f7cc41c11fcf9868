use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TorifyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to traverse {path}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Rule '{rule}' failed on {path}: {message}")]
    Rule {
        rule: String,
        path: PathBuf,
        message: String,
    },

    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Failed to load known onion locations from {path}")]
    KnownLocations {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid exclude pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl TorifyError {
    /// Short category label used as the heading of top-level error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_)
            | Self::KnownLocations { .. }
            | Self::InvalidPattern { .. }
            | Self::TomlParse(_) => "Configuration error",
            Self::Traversal { .. } => "Traversal error",
            Self::FileRead { .. } | Self::FileWrite { .. } | Self::Io(_) => "IO error",
            Self::Rule { .. } => "Rule error",
            Self::Fetch { .. } => "Network error",
            Self::JsonSerialize(_) => "Output error",
        }
    }

    /// Underlying cause, if any, rendered for the detail line of error output.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Traversal { source, .. } => Some(source.to_string()),
            Self::FileRead { source, .. } | Self::FileWrite { source, .. } => {
                Some(source.to_string())
            }
            Self::KnownLocations { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Actionable hint for the help line of error output.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::KnownLocations { .. } => {
                Some("the file must be a JSON object mapping clearnet origins to onion origins")
            }
            Self::InvalidPattern { .. } => Some("exclude entries use glob syntax, e.g. drafts/**"),
            Self::Traversal { .. } => Some("check permissions or exclude the path with --exclude"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TorifyError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
