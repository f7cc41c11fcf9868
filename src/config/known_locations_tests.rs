use std::fs;

use reqwest::Url;
use tempfile::TempDir;

use super::*;

fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
}

#[test]
fn lookup_by_origin() {
    let mut known = KnownOnionLocations::default();
    known.insert("http://example.com", "http://exampleonion.onion");
    assert_eq!(
        known.lookup(&url("http://example.com/page")),
        Some("http://exampleonion.onion")
    );
}

#[test]
fn origin_lookup_is_scheme_sensitive() {
    let mut known = KnownOnionLocations::default();
    known.insert("https://example.com", "http://exampleonion.onion");
    assert_eq!(known.lookup(&url("http://example.com/")), None);
}

#[test]
fn lookup_falls_back_to_bare_host() {
    let mut known = KnownOnionLocations::default();
    known.insert("example.com", "http://exampleonion.onion");
    assert_eq!(
        known.lookup(&url("https://example.com/")),
        Some("http://exampleonion.onion")
    );
}

#[test]
fn keys_are_normalized() {
    let mut known = KnownOnionLocations::default();
    known.insert("HTTP://Example.com/", "http://exampleonion.onion");
    assert_eq!(
        known.lookup(&url("http://example.com")),
        Some("http://exampleonion.onion")
    );
}

#[test]
fn non_default_port_is_part_of_origin() {
    let mut known = KnownOnionLocations::default();
    known.insert("http://example.com", "http://exampleonion.onion");
    known.insert("http://example.com:8080", "http://otheronion.onion");
    assert_eq!(
        known.lookup(&url("http://example.com:8080/")),
        Some("http://otheronion.onion")
    );
}

#[test]
fn deserializes_from_json_object() {
    let known: KnownOnionLocations =
        serde_json::from_str(r#"{"example.com": "http://exampleonion.onion"}"#).unwrap();
    assert_eq!(known.len(), 1);
    assert!(known.lookup(&url("http://example.com")).is_some());
}

#[test]
fn load_reads_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("onions.json");
    fs::write(&path, r#"{"http://example.com": "http://exampleonion.onion"}"#).unwrap();

    let known = KnownOnionLocations::load(&path).unwrap();
    assert_eq!(known.len(), 1);
}

#[test]
fn load_rejects_non_object_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("onions.json");
    fs::write(&path, r#"["example.com"]"#).unwrap();

    let err = KnownOnionLocations::load(&path).unwrap_err();
    assert!(matches!(err, TorifyError::KnownLocations { .. }));
}

#[test]
fn load_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = KnownOnionLocations::load(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, TorifyError::FileRead { .. }));
}
