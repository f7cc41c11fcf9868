//! Scripted HTTP clients shared by unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::error::{Result, TorifyError};

use super::{FetchResponse, Fetcher, HttpClient, RetryPolicy};

/// Answers from a fixed table; unknown URLs get a header-less 200.
#[derive(Default)]
pub struct MockHttpClient {
    onion_locations: HashMap<String, String>,
    failing: bool,
    failures_before_success: usize,
    call_count: AtomicUsize,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request fails.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// The first `count` requests fail, later ones succeed.
    pub fn flaky(count: usize) -> Self {
        Self {
            failures_before_success: count,
            ..Self::default()
        }
    }

    pub fn with_onion(mut self, url: &str, onion: &str) -> Self {
        self.onion_locations.insert(url.to_string(), onion.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl HttpClient for MockHttpClient {
    fn get(&self, url: &str, _user_agent: &str) -> Result<FetchResponse> {
        let call = self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.failing || call < self.failures_before_success {
            return Err(TorifyError::Fetch {
                url: url.to_string(),
                message: "connection refused".to_string(),
            });
        }

        Ok(FetchResponse {
            status: 200,
            onion_location: self.onion_locations.get(url).cloned(),
        })
    }
}

impl HttpClient for std::sync::Arc<MockHttpClient> {
    fn get(&self, url: &str, user_agent: &str) -> Result<FetchResponse> {
        self.as_ref().get(url, user_agent)
    }
}

/// Default retry count without the wait.
pub const fn instant_retries() -> RetryPolicy {
    RetryPolicy {
        max_retries: super::DEFAULT_MAX_RETRIES,
        delay: Duration::ZERO,
    }
}

pub fn fetcher(client: MockHttpClient) -> Fetcher {
    Fetcher::new(Box::new(client), instant_retries())
}

/// A fetcher whose client the test keeps a handle on for call counting.
pub fn shared_fetcher(client: &std::sync::Arc<MockHttpClient>) -> Fetcher {
    Fetcher::new(Box::new(std::sync::Arc::clone(client)), instant_retries())
}
