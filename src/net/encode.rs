//! Percent-encoding for URL path segments and query components.

#[cfg(test)]
#[path = "encode_test.rs"]
mod encode_test;

use percent_encoding::{AsciiSet, CONTROLS, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters that must be escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Everything except RFC 3986 unreserved characters.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Encode a value for use as one path segment (`/tag/<segment>`).
#[must_use]
pub fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, SEGMENT).to_string()
}

/// Encode a value for a query string (`?q=<component>`).
#[must_use]
pub fn component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/// Decode a percent-encoded value; `+` is treated as a space as in form data.
#[must_use]
pub fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Decode one path segment. Unlike `decode`, `+` is kept literally.
#[must_use]
pub fn decode_segment(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

/// Render `key=value` pairs as `?k=v&...`, or an empty string for no pairs.
#[must_use]
pub fn query_string(pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let joined = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", component(k), component(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("?{joined}")
}

/// Parse `a=1&b=2` (leading `#` or `?` ignored) into decoded pairs.
#[must_use]
pub fn parse_pairs(raw: &str) -> Vec<(String, String)> {
    raw.trim_start_matches(['#', '?'])
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once('=') {
            Some((k, v)) => (decode(k), decode(v)),
            None => (decode(part), String::new()),
        })
        .collect()
}
