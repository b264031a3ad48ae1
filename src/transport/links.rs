//! Navigation link handling
//!
//! Parses RFC 5988 `Link` response headers into a relation map and reduces
//! advertised absolute URLs to transport-relative locators.

use std::collections::HashMap;

/// Relation name of the next-page link
pub const REL_NEXT: &str = "next";

/// Relation name of the last-page link
pub const REL_LAST: &str = "last";

/// Parse a `Link` header into a relation -> URL map.
///
/// Header format: `<url>; rel="next", <url>; rel="prev"`. Entries without
/// both a URL and a relation are ignored.
pub fn parse_link_header(header: &str) -> HashMap<String, String> {
    let mut links = HashMap::new();

    for part in header.split(',') {
        let part = part.trim();
        let mut url = None;
        let mut rel = None;

        for segment in part.split(';') {
            let segment = segment.trim();
            if segment.starts_with('<') && segment.ends_with('>') {
                url = Some(&segment[1..segment.len() - 1]);
            } else if let Some(stripped) = segment.strip_prefix("rel=") {
                rel = Some(stripped.trim_matches('"').trim_matches('\''));
            }
        }

        if let (Some(url), Some(rel)) = (url, rel) {
            links.insert(rel.to_string(), url.to_string());
        }
    }

    links
}

/// Reduce an advertised absolute URL to a locator the transport accepts.
///
/// Strips the exact base-URL prefix, yielding a relative locator. A URL
/// that does not carry the base prefix is kept verbatim; transports accept
/// absolute URLs as locators.
pub fn reduce_locator(url: &str, base_url: &str) -> String {
    match url.strip_prefix(base_url) {
        Some(rest) => rest.to_string(),
        None => url.to_string(),
    }
}
