use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = TorifyError::Config("unknown key".to_string());
    assert_eq!(err.to_string(), "Configuration error: unknown key");
}

#[test]
fn error_display_file_read() {
    let err = TorifyError::FileRead {
        path: PathBuf::from("index.html"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("index.html"));
}

#[test]
fn error_display_rule_names_rule_and_path() {
    let err = TorifyError::Rule {
        rule: "prefer-onion-services-a-href".to_string(),
        path: PathBuf::from("/site/index.html"),
        message: "boom".to_string(),
    };
    let text = err.to_string();
    assert!(text.contains("prefer-onion-services-a-href"));
    assert!(text.contains("/site/index.html"));
    assert!(text.contains("boom"));
}

#[test]
fn error_display_fetch() {
    let err = TorifyError::Fetch {
        url: "http://example.com".to_string(),
        message: "connection refused".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Failed to fetch http://example.com: connection refused"
    );
}

#[test]
fn error_type_groups_configuration_errors() {
    assert_eq!(
        TorifyError::Config("x".to_string()).error_type(),
        "Configuration error"
    );
    let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
    assert_eq!(
        TorifyError::TomlParse(toml_err).error_type(),
        "Configuration error"
    );
}

#[test]
fn error_type_for_io_errors() {
    let err = TorifyError::FileWrite {
        path: PathBuf::from("robots.txt"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.error_type(), "IO error");
    assert_eq!(err.detail().as_deref(), Some("denied"));
}

#[test]
fn known_locations_error_has_suggestion() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = TorifyError::KnownLocations {
        path: PathBuf::from("onions.json"),
        source,
    };
    assert!(err.suggestion().is_some());
    assert!(err.detail().is_some());
}

#[test]
fn config_error_has_no_detail() {
    let err = TorifyError::Config("x".to_string());
    assert!(err.detail().is_none());
    assert!(err.suggestion().is_none());
}
