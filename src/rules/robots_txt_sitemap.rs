//! `prefer-onion-services-robots-txt-sitemap`: the sitemap should be advertised on the onion service.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::rule::{DefaultMode, Rule, RuleContext, RunOn, Violation};

use super::line_column;
use super::onion::{OnionResolution, clearnet_message, resolve_onion, unreachable_message};

pub const ID: &str = "prefer-onion-services-robots-txt-sitemap";

static SITEMAP_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Sitemap:[ \t]*(\S+)").expect("Invalid regex"));

#[must_use]
pub fn rule() -> Rule {
    Rule {
        id: ID,
        description: "Prefer onion services over clearnet domains on robots.txt sitemap.",
        default: DefaultMode::Warn,
        run_on: vec![RunOn::paths(&["/robots.txt"])],
        check: Some(check),
        fix: Some(fix),
    }
}

/// Each sitemap URL with its byte span.
fn sitemaps(text: &str) -> impl Iterator<Item = regex::Match<'_>> {
    SITEMAP_LINE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
}

/// Resolve each distinct sitemap URL once.
fn resolve_all<'t>(
    context: &RuleContext<'_>,
    text: &'t str,
) -> HashMap<&'t str, OnionResolution> {
    let mut resolved = HashMap::new();
    for url in sitemaps(text) {
        resolved
            .entry(url.as_str())
            .or_insert_with(|| resolve_onion(context, url.as_str()));
    }
    resolved
}

fn check(context: &RuleContext<'_>, _path: &Path, contents: &[u8]) -> Result<Vec<Violation>> {
    let text = String::from_utf8_lossy(contents);
    let resolved = resolve_all(context, &text);

    Ok(sitemaps(&text)
        .filter_map(|url| {
            let message = match resolved.get(url.as_str())? {
                OnionResolution::Onion(onion) => clearnet_message(url.as_str(), onion),
                OnionResolution::Unreachable => unreachable_message(url.as_str()),
                OnionResolution::NotApplicable | OnionResolution::NoOnion => return None,
            };
            let (line, column) = line_column(&text, url.start());
            Some(Violation::new(message).at(line, column))
        })
        .collect())
}

fn fix(context: &RuleContext<'_>, path: &Path, contents: &[u8]) -> Result<Vec<u8>> {
    let Ok(text) = std::str::from_utf8(contents) else {
        tracing::warn!(path = %path.display(), "not valid UTF-8, leaving untouched");
        return Ok(contents.to_vec());
    };
    let resolved = resolve_all(context, text);

    let mut fixed = String::with_capacity(text.len());
    let mut last = 0;
    for url in sitemaps(text) {
        if let Some(OnionResolution::Onion(onion)) = resolved.get(url.as_str()) {
            fixed.push_str(&text[last..url.start()]);
            fixed.push_str(onion);
            last = url.end();
        }
    }
    fixed.push_str(&text[last..]);

    Ok(fixed.into_bytes())
}

#[cfg(test)]
#[path = "robots_txt_sitemap_tests.rs"]
mod tests;
