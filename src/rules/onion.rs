use reqwest::Url;

use crate::rule::RuleContext;

/// Hosts whose onion redirects are not worth following.
pub const IGNORED_DOMAINS: &[&str] = &["twitter.com"];

/// Outcome of looking for the onion equivalent of one link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnionResolution {
    /// Fragment, relative, non-http or already onion link, or an unparsable URL.
    NotApplicable,
    /// Reachable, but no onion service is advertised.
    NoOnion,
    Onion(String),
    /// Every fetch attempt failed.
    Unreachable,
}

/// Message for a link that should point at its onion service.
#[must_use]
pub fn clearnet_message(href: &str, onion: &str) -> String {
    format!("Using clearnet domain {href} instead of onion service {onion}.")
}

/// Message for a link whose site could not be fetched.
#[must_use]
pub fn unreachable_message(href: &str) -> String {
    format!("Failed to fetch {href}.")
}

/// Find the onion equivalent of `href`, from the known-location table or a live fetch.
#[must_use]
pub fn resolve_onion(context: &RuleContext<'_>, href: &str) -> OnionResolution {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') || href.starts_with('/') {
        return OnionResolution::NotApplicable;
    }

    if !has_scheme(href) {
        tracing::debug!(href, "skipping document-relative link");
        return OnionResolution::NotApplicable;
    }

    let url = match Url::parse(href) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!(href, error = %e, "skipping unparsable URL");
            return OnionResolution::NotApplicable;
        }
    };

    if !matches!(url.scheme(), "http" | "https") {
        return OnionResolution::NotApplicable;
    }

    let Some(host) = url.host_str() else {
        return OnionResolution::NotApplicable;
    };
    if host.ends_with(".onion") || IGNORED_DOMAINS.iter().any(|domain| host.contains(domain)) {
        return OnionResolution::NotApplicable;
    }

    if let Some(onion_origin) = context.options.known_onion_locations.lookup(&url) {
        return OnionResolution::Onion(translate(href, &url, onion_origin));
    }

    match context.fetcher.fetch(url.as_str()) {
        Ok(response) => response
            .onion_location
            .map_or(OnionResolution::NoOnion, OnionResolution::Onion),
        Err(e) => {
            tracing::warn!(href, error = %e, "giving up on onion lookup");
            OnionResolution::Unreachable
        }
    }
}

/// Whether `href` starts with an RFC 3986 scheme such as `https:` or `mailto:`.
fn has_scheme(href: &str) -> bool {
    let Some((scheme, _)) = href.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Move `href` onto `onion_origin`, keeping everything after the origin.
fn translate(href: &str, url: &Url, onion_origin: &str) -> String {
    let onion_origin = onion_origin.trim().trim_end_matches('/');
    let base = if onion_origin.contains("://") {
        onion_origin.to_string()
    } else {
        format!("{}://{onion_origin}", url.scheme())
    };

    let origin = url.origin().ascii_serialization();
    let tail = href.strip_prefix(origin.as_str()).map_or_else(
        || {
            let mut tail = url.path().to_string();
            if let Some(query) = url.query() {
                tail.push('?');
                tail.push_str(query);
            }
            if let Some(fragment) = url.fragment() {
                tail.push('#');
                tail.push_str(fragment);
            }
            tail
        },
        ToString::to_string,
    );

    format!("{base}{tail}")
}

#[cfg(test)]
#[path = "onion_tests.rs"]
mod tests;
