use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::fetch::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY, DEFAULT_TIMEOUT, RetryPolicy};

/// Contents of `.torify-site.toml`.
///
/// Every list here is replaced, not extended, by a non-empty CLI counterpart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Rule allow-list. Empty means every registered rule.
    #[serde(default)]
    pub rules: Vec<String>,

    /// Rule deny-list, applied after `rules`.
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Root-relative glob patterns of files and directories to skip.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// JSON file mapping clearnet origins to onion origins.
    /// Relative paths resolve against the directory holding the config file.
    #[serde(default)]
    pub known_onion_locations: Option<PathBuf>,

    #[serde(default)]
    pub fetch: FetchConfig,
}

/// Network fetch settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FetchConfig {
    /// Additional attempts after the first failed one.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

impl FetchConfig {
    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            delay: Duration::from_millis(self.retry_delay_ms),
        }
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

const fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

#[allow(clippy::cast_possible_truncation)] // 5000 ms fits in u64
const fn default_retry_delay_ms() -> u64 {
    DEFAULT_RETRY_DELAY.as_millis() as u64
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
