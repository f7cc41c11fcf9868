//! The built-in rule registry.

mod html_a_href;
mod onion;
mod robots_txt_sitemap;

pub use onion::{
    IGNORED_DOMAINS, OnionResolution, clearnet_message, resolve_onion, unreachable_message,
};

use crate::rule::Rule;

/// Every rule this build knows about, in reporting order.
#[must_use]
pub fn all_rules() -> Vec<Rule> {
    vec![html_a_href::rule(), robots_txt_sitemap::rule()]
}

/// 1-based line and column (in characters) of byte `offset` in `text`.
fn line_column(text: &str, offset: usize) -> (usize, usize) {
    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
