//! `prefer-onion-services-a-href`: anchors should link to onion services when one exists.

use std::collections::HashMap;
use std::ops::Range;
use std::path::Path;
use std::sync::LazyLock;

use rayon::prelude::*;
use regex::Regex;

use crate::error::Result;
use crate::rule::{DefaultMode, Rule, RuleContext, RunOn, Violation};

use super::line_column;
use super::onion::{OnionResolution, clearnet_message, resolve_onion, unreachable_message};

pub const ID: &str = "prefer-onion-services-a-href";

/// Attributes of an open tag. Quoted values are kept whole, so a `>` inside one
/// does not end the tag.
const ATTRIBUTES: &str = r#"(?:\s(?:[^>"']|"[^"]*"|'[^']*')*)?"#;

/// One left-to-right pass over the document. Comments, `<script>`/`<style>` bodies
/// and non-anchor tags are consumed whole, so anchors inside them never match.
static MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        concat!(
            r"(?is)<!--.*?(?:-->|\z)",
            r"|<script{attrs}>.*?(?:</script\s*>|\z)",
            r"|<style{attrs}>.*?(?:</style\s*>|\z)",
            r"|(?P<anchor><a{attrs}>)",
            r"|</?[a-z][^\s/>]*{attrs}/?>",
        ),
        attrs = ATTRIBUTES
    ))
    .expect("Invalid regex")
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("Invalid regex")
});

#[must_use]
pub fn rule() -> Rule {
    Rule {
        id: ID,
        description: "Prefer onion services over clearnet domains on links.",
        default: DefaultMode::Warn,
        run_on: vec![RunOn::extensions(&["html", "htm"])],
        check: Some(check),
        fix: Some(fix),
    }
}

/// The `href` of one anchor: decoded value and byte span of the raw value.
#[derive(Debug, PartialEq, Eq)]
struct Href {
    value: String,
    span: Range<usize>,
}

fn find_hrefs(html: &str) -> Vec<Href> {
    MARKUP
        .captures_iter(html)
        .filter_map(|caps| caps.name("anchor"))
        .filter_map(|tag| href_of(tag.as_str(), tag.start()))
        .collect()
}

/// The first `href` attribute of an anchor tag found at `offset`.
fn href_of(tag: &str, offset: usize) -> Option<Href> {
    let body = tag.get(2..tag.len() - 1)?;
    let caps = ATTRIBUTE
        .captures_iter(body)
        .find(|caps| caps[1].eq_ignore_ascii_case("href"))?;
    let raw = caps.get(2).or_else(|| caps.get(3)).or_else(|| caps.get(4))?;
    let start = offset + 2 + raw.start();
    Some(Href {
        value: decode_entities(raw.as_str()),
        span: start..start + raw.len(),
    })
}

/// Resolve each distinct href once, fetching concurrently.
fn resolve_all<'h>(
    context: &RuleContext<'_>,
    hrefs: &'h [Href],
) -> HashMap<&'h str, OnionResolution> {
    let mut unique: Vec<&str> = hrefs.iter().map(|href| href.value.as_str()).collect();
    unique.sort_unstable();
    unique.dedup();

    unique
        .par_iter()
        .map(|&href| (href, resolve_onion(context, href)))
        .collect()
}

fn check(context: &RuleContext<'_>, _path: &Path, contents: &[u8]) -> Result<Vec<Violation>> {
    let html = String::from_utf8_lossy(contents);
    let hrefs = find_hrefs(&html);
    let resolved = resolve_all(context, &hrefs);

    Ok(hrefs
        .iter()
        .filter_map(|href| {
            let message = match resolved.get(href.value.as_str())? {
                OnionResolution::Onion(onion) => clearnet_message(&href.value, onion),
                OnionResolution::Unreachable => unreachable_message(&href.value),
                OnionResolution::NotApplicable | OnionResolution::NoOnion => return None,
            };
            let (line, column) = line_column(&html, href.span.start);
            Some(Violation::new(message).at(line, column))
        })
        .collect())
}

fn fix(context: &RuleContext<'_>, path: &Path, contents: &[u8]) -> Result<Vec<u8>> {
    let Ok(html) = std::str::from_utf8(contents) else {
        tracing::warn!(path = %path.display(), "not valid UTF-8, leaving untouched");
        return Ok(contents.to_vec());
    };
    let hrefs = find_hrefs(html);
    let resolved = resolve_all(context, &hrefs);

    let mut fixed = String::with_capacity(html.len());
    let mut last = 0;
    for href in &hrefs {
        if let Some(OnionResolution::Onion(onion)) = resolved.get(href.value.as_str()) {
            fixed.push_str(&html[last..href.span.start]);
            fixed.push_str(&escape_attribute(onion));
            last = href.span.end;
        }
    }
    fixed.push_str(&html[last..]);

    Ok(fixed.into_bytes())
}

fn decode_entities(value: &str) -> String {
    value
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
#[path = "html_a_href_tests.rs"]
mod tests;
