use super::KnownOnionLocations;

/// Resolved settings for one run, shared read-only with every rule invocation.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Rewrite files instead of reporting violations.
    pub fix: bool,
    pub rules: Vec<String>,
    pub ignore: Vec<String>,
    pub exclude: Vec<String>,
    pub known_onion_locations: KnownOnionLocations,
}
