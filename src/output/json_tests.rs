use std::path::Path;

use serde_json::Value;

use super::*;
use crate::rule::{Rule, Violation};

fn make_rule() -> Rule {
    Rule {
        id: "prefer-onion-services-robots-txt-sitemap",
        description: "test rule",
        default: DefaultMode::Warn,
        run_on: Vec::new(),
        check: None,
        fix: None,
    }
}

fn parse(report: &RunReport<'_>) -> Value {
    let output = JsonFormatter.format(report).unwrap();
    serde_json::from_str(&output).unwrap()
}

#[test]
fn empty_report_has_zeroed_summary() {
    let json = parse(&RunReport::default());
    assert_eq!(json["summary"]["files"], 0);
    assert_eq!(json["summary"]["violations"], 0);
    assert_eq!(json["summary"]["fixes"], 0);
    assert_eq!(json["violations"].as_array().unwrap().len(), 0);
}

#[test]
fn violation_fields_are_serialized() {
    let rule = make_rule();
    let report = RunReport {
        files_scanned: 4,
        violations: vec![CompleteViolation::new(
            Violation::new("Failed to fetch http://example.com/sitemap.xml.").at(2, 10),
            Path::new("/site/robots.txt"),
            &rule,
        )],
        ..RunReport::default()
    };

    let json = parse(&report);

    assert_eq!(json["summary"]["files"], 4);
    assert_eq!(json["summary"]["violations"], 1);
    let violation = &json["violations"][0];
    assert_eq!(violation["path"], "/site/robots.txt");
    assert_eq!(violation["line"], 2);
    assert_eq!(violation["column"], 10);
    assert_eq!(violation["rule"], "prefer-onion-services-robots-txt-sitemap");
    assert_eq!(violation["severity"], "warn");
    assert_eq!(
        violation["message"],
        "Failed to fetch http://example.com/sitemap.xml."
    );
}

#[test]
fn missing_location_is_null() {
    let rule = make_rule();
    let report = RunReport {
        violations: vec![CompleteViolation::new(
            Violation::new("msg"),
            Path::new("/site/robots.txt"),
            &rule,
        )],
        ..RunReport::default()
    };

    let json = parse(&report);

    assert!(json["violations"][0]["line"].is_null());
    assert!(json["violations"][0]["column"].is_null());
}

#[test]
fn fixes_count_changed_files() {
    let report = RunReport {
        files_scanned: 3,
        fixes_run: 5,
        files_changed: 2,
        ..RunReport::default()
    };

    let json = parse(&report);

    assert_eq!(json["summary"]["fixes"], 2);
}
