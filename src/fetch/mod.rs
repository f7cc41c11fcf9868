//! HTTP probing with a fixed retry contract.
//!
//! Rules use this to ask a clearnet site whether it advertises an onion
//! service through the `Onion-Location` response header. The engine itself
//! never fetches anything.

use std::thread;
use std::time::Duration;

use crate::error::{Result, TorifyError};

pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(5);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Tor Browser's user agent, so requests look like the visitors the site serves.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; rv:115.0) Gecko/20100101 Firefox/115.0";

pub const ONION_LOCATION_HEADER: &str = "onion-location";

/// The parts of an HTTP response rules care about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub onion_location: Option<String>,
}

/// HTTP client abstraction for dependency injection.
pub trait HttpClient: Send + Sync {
    /// Perform a GET request.
    ///
    /// Non-2xx statuses are still responses; only transport failures are errors.
    ///
    /// # Errors
    /// Returns [`TorifyError::Fetch`] when no response could be obtained.
    fn get(&self, url: &str, user_agent: &str) -> Result<FetchResponse>;
}

/// Production HTTP client using reqwest.
#[derive(Debug)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// # Errors
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TorifyError::Config(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[cfg(not(tarpaulin_include))]
impl HttpClient for ReqwestClient {
    fn get(&self, url: &str, user_agent: &str) -> Result<FetchResponse> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, user_agent)
            .send()
            .map_err(|e| {
                let message = if e.is_timeout() {
                    "request timed out".to_string()
                } else if e.is_connect() {
                    "connection failed".to_string()
                } else {
                    e.to_string()
                };
                TorifyError::Fetch {
                    url: url.to_string(),
                    message,
                }
            })?;

        let onion_location = response
            .headers()
            .get(ONION_LOCATION_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        Ok(FetchResponse {
            status: response.status().as_u16(),
            onion_location,
        })
    }
}

/// Attempt once, then retry up to `max_retries` more times with `delay` in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            delay: DEFAULT_RETRY_DELAY,
        }
    }
}

impl RetryPolicy {
    /// Run `attempt` until it succeeds or retries are exhausted.
    ///
    /// # Errors
    /// Returns the error of the final attempt.
    pub fn run<T>(&self, mut attempt: impl FnMut() -> Result<T>) -> Result<T> {
        let mut retries = 0;
        loop {
            match attempt() {
                Ok(value) => return Ok(value),
                Err(e) if retries < self.max_retries => {
                    retries += 1;
                    tracing::debug!(
                        error = %e,
                        retry = retries,
                        max_retries = self.max_retries,
                        "fetch failed, retrying"
                    );
                    if !self.delay.is_zero() {
                        thread::sleep(self.delay);
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// A client bundled with the retry policy and user agent every request uses.
pub struct Fetcher {
    client: Box<dyn HttpClient>,
    policy: RetryPolicy,
    user_agent: String,
}

impl Fetcher {
    #[must_use]
    pub fn new(client: Box<dyn HttpClient>, policy: RetryPolicy) -> Self {
        Self {
            client,
            policy,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// GET `url` under the retry policy.
    ///
    /// # Errors
    /// Returns the last transport error once every attempt has failed.
    pub fn fetch(&self, url: &str) -> Result<FetchResponse> {
        tracing::debug!(url, "probing for onion location");
        self.policy.run(|| self.client.get(url, &self.user_agent))
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
