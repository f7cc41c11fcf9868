use std::collections::HashMap;
use std::path::Path;

use reqwest::Url;
use serde::Deserialize;

use crate::error::{Result, TorifyError};

/// User-supplied table of clearnet origins and their onion equivalents.
///
/// Keys may be full origins (`https://example.com`) or bare hosts
/// (`example.com`). Keys are stored lowercased without a trailing `/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "HashMap<String, String>")]
pub struct KnownOnionLocations {
    locations: HashMap<String, String>,
}

impl From<HashMap<String, String>> for KnownOnionLocations {
    fn from(raw: HashMap<String, String>) -> Self {
        let mut known = Self::default();
        for (origin, onion) in raw {
            known.insert(&origin, onion);
        }
        known
    }
}

impl KnownOnionLocations {
    /// Read the JSON file at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a JSON object of strings.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| TorifyError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| TorifyError::KnownLocations {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn insert(&mut self, origin: &str, onion: impl Into<String>) {
        self.locations.insert(normalize_key(origin), onion.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// The onion origin registered for `url`, looked up by origin first, then by host.
    #[must_use]
    pub fn lookup(&self, url: &Url) -> Option<&str> {
        let origin = url.origin().ascii_serialization();
        self.locations
            .get(&origin)
            .or_else(|| {
                url.host_str()
                    .and_then(|host| self.locations.get(&host.to_ascii_lowercase()))
            })
            .map(String::as_str)
    }
}

fn normalize_key(origin: &str) -> String {
    origin.trim().trim_end_matches('/').to_ascii_lowercase()
}

#[cfg(test)]
#[path = "known_locations_tests.rs"]
mod tests;
