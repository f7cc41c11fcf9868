use std::sync::Arc;

use super::*;
use crate::config::RunOptions;
use crate::fetch::test_fixtures::{MockHttpClient, shared_fetcher};

fn options_with(origin: &str, onion: &str) -> RunOptions {
    let mut options = RunOptions::default();
    options.known_onion_locations.insert(origin, onion);
    options
}

fn resolve(options: &RunOptions, client: &Arc<MockHttpClient>, href: &str) -> OnionResolution {
    let fetcher = shared_fetcher(client);
    let context = RuleContext::new(options, &fetcher);
    resolve_onion(&context, href)
}

#[test]
fn skips_fragment_and_site_relative_links() {
    let client = Arc::new(MockHttpClient::new());
    let options = RunOptions::default();
    for href in ["", "#top", "/about.html", "  "] {
        assert_eq!(
            resolve(&options, &client, href),
            OnionResolution::NotApplicable
        );
    }
    assert_eq!(client.call_count(), 0);
}

#[test]
fn skips_document_relative_links() {
    let client = Arc::new(MockHttpClient::new());
    let options = RunOptions::default();
    assert_eq!(
        resolve(&options, &client, "about.html"),
        OnionResolution::NotApplicable
    );
    assert_eq!(
        resolve(&options, &client, "page.html?time=12:30"),
        OnionResolution::NotApplicable
    );
    assert_eq!(client.call_count(), 0);
}

#[test]
fn skips_non_http_schemes() {
    let client = Arc::new(MockHttpClient::new());
    let options = RunOptions::default();
    assert_eq!(
        resolve(&options, &client, "mailto:me@example.com"),
        OnionResolution::NotApplicable
    );
    assert_eq!(
        resolve(&options, &client, "ftp://example.com/file"),
        OnionResolution::NotApplicable
    );
    assert_eq!(client.call_count(), 0);
}

#[test]
fn skips_unparsable_urls() {
    let client = Arc::new(MockHttpClient::new());
    let options = RunOptions::default();
    assert_eq!(
        resolve(&options, &client, "http://exa mple.com/"),
        OnionResolution::NotApplicable
    );
    assert_eq!(client.call_count(), 0);
}

#[test]
fn skips_onion_and_ignored_hosts() {
    let client = Arc::new(MockHttpClient::new());
    let options = RunOptions::default();
    assert_eq!(
        resolve(&options, &client, "http://exampleonion.onion/"),
        OnionResolution::NotApplicable
    );
    assert_eq!(
        resolve(&options, &client, "https://twitter.com/someone"),
        OnionResolution::NotApplicable
    );
    assert_eq!(
        resolve(&options, &client, "https://mobile.twitter.com/someone"),
        OnionResolution::NotApplicable
    );
    assert_eq!(client.call_count(), 0);
}

#[test]
fn known_location_skips_network() {
    let client = Arc::new(MockHttpClient::failing());
    let options = options_with("example.com", "http://exampleonion.onion");
    assert_eq!(
        resolve(&options, &client, "http://example.com"),
        OnionResolution::Onion("http://exampleonion.onion".to_string())
    );
    assert_eq!(client.call_count(), 0);
}

#[test]
fn known_location_keeps_path_query_and_fragment() {
    let client = Arc::new(MockHttpClient::new());
    let options = options_with("https://example.com", "http://exampleonion.onion/");
    assert_eq!(
        resolve(&options, &client, "https://example.com/blog/post?id=1#comments"),
        OnionResolution::Onion("http://exampleonion.onion/blog/post?id=1#comments".to_string())
    );
}

#[test]
fn known_bare_onion_host_takes_link_scheme() {
    let client = Arc::new(MockHttpClient::new());
    let options = options_with("example.com", "exampleonion.onion");
    assert_eq!(
        resolve(&options, &client, "https://example.com/feed.xml"),
        OnionResolution::Onion("https://exampleonion.onion/feed.xml".to_string())
    );
}

#[test]
fn fetch_returns_advertised_onion_location() {
    let client = Arc::new(
        MockHttpClient::new().with_onion("https://example.com/", "http://exampleonion.onion/"),
    );
    let options = RunOptions::default();
    assert_eq!(
        resolve(&options, &client, "https://example.com"),
        OnionResolution::Onion("http://exampleonion.onion/".to_string())
    );
    assert_eq!(client.call_count(), 1);
}

#[test]
fn fetch_without_header_is_no_onion() {
    let client = Arc::new(MockHttpClient::new());
    let options = RunOptions::default();
    assert_eq!(
        resolve(&options, &client, "https://example.com/"),
        OnionResolution::NoOnion
    );
}

#[test]
fn exhausted_retries_are_unreachable() {
    let client = Arc::new(MockHttpClient::failing());
    let options = RunOptions::default();
    assert_eq!(
        resolve(&options, &client, "https://example.com/"),
        OnionResolution::Unreachable
    );
    assert_eq!(client.call_count(), 4);
}

#[test]
fn has_scheme_detects_schemes() {
    assert!(has_scheme("https://example.com"));
    assert!(has_scheme("mailto:someone@example.com"));
    assert!(has_scheme("svn+ssh://host/repo"));
    assert!(!has_scheme("about.html"));
    assert!(!has_scheme("1http://example.com"));
    assert!(!has_scheme("dir/page.html?a=b:c"));
}

#[test]
fn messages_match_report_wording() {
    assert_eq!(
        clearnet_message("http://example.com", "http://exampleonion.onion"),
        "Using clearnet domain http://example.com instead of onion service http://exampleonion.onion."
    );
    assert_eq!(
        unreachable_message("http://example.com/sitemap.xml"),
        "Failed to fetch http://example.com/sitemap.xml."
    );
}
