//! Default link URI sanitizer.

const PROTOCOLS: &[&str] = &["http", "https", "mailto", "tel"];

/// Replacement for URIs with a disallowed scheme.
pub const BLOCKED_URI: &str = "javascript:void(0)";

/// Passes relative URIs and `http`, `https`, `mailto`, `tel` links.
///
/// Anything else with a scheme becomes [`BLOCKED_URI`]. The input is
/// trimmed first.
pub fn uri_transformer(uri: &str) -> String {
    let url = uri.trim();

    if url.starts_with('#') || url.starts_with('/') {
        return url.to_string();
    }

    let Some(colon) = url.find(':') else {
        return url.to_string();
    };

    let allowed_scheme = PROTOCOLS
        .iter()
        .any(|protocol| colon == protocol.len() && url[..colon].eq_ignore_ascii_case(protocol));
    if allowed_scheme {
        return url.to_string();
    }

    // A colon in the query or fragment is not a scheme separator.
    let after = |marker: char| url.find(marker).is_some_and(|index| colon > index);
    if after('?') || after('#') {
        return url.to_string();
    }

    BLOCKED_URI.to_string()
}
