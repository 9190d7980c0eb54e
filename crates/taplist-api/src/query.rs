//! Single query-parameter extraction from a page URL.
//!
//! Used for the `apikey` override: when the hosting page's URL carries
//! `?apikey=...`, that value replaces the configured key for sandbox
//! testing.

use percent_encoding::percent_decode_str;

/// Extracts the value of a named query parameter from a page URL.
///
/// Decodes `+` as a space and percent-escapes as UTF-8. Returns `None`
/// when the parameter is absent or its value is empty, so callers can fall
/// back to a default with `unwrap_or`.
#[must_use]
pub fn page_url_param(page_url: &str, key: &str) -> Option<String> {
    let query_start = page_url.find('?')? + 1;
    let query = &page_url[query_start..];
    // Drop any fragment anchor trailing the query string.
    let query = query.split('#').next().unwrap_or(query);

    let needle = format!("{key}=");
    for pair in query.split('&') {
        if let Some(raw) = pair.strip_prefix(needle.as_str()) {
            if raw.is_empty() {
                return None;
            }
            let plus_decoded = raw.replace('+', " ");
            return Some(
                percent_decode_str(&plus_decoded)
                    .decode_utf8_lossy()
                    .into_owned(),
            );
        }
    }
    None
}
