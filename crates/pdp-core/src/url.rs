//! URL splitting utilities
//!
//! Isolates the bare host of a URL-like string and keeps the scheme and path
//! as pass-through metadata. No validation is done: query strings, ports and
//! userinfo stay wherever the split leaves them.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::UrlSplit;

/// Scheme prefix: a word character, anything (non-greedy), then `://` or `:///`.
static SCHEME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(\w.*?):/{2,3}").expect("Failed to compile scheme regex")
});

// =============================================================================
// Scheme Extraction
// =============================================================================

/// Extract the scheme and the position right after its separator.
#[inline]
pub fn extract_scheme(url: &str) -> Option<(&str, usize)> {
    let caps = SCHEME_RE.captures(url)?;
    let scheme = caps.get(1)?.as_str();
    let end = caps.get(0)?.end();
    Some((scheme, end))
}

// =============================================================================
// Full Split
// =============================================================================

/// Split a URL-like string into scheme, host and path.
///
/// ```
/// use pdp_core::url::split_url;
///
/// let split = split_url("http://www.example.com/path/to/page");
/// assert_eq!(split.scheme.as_deref(), Some("http"));
/// assert_eq!(split.host, "www.example.com");
/// assert_eq!(split.path.as_deref(), Some("/path/to/page"));
/// ```
pub fn split_url(url: &str) -> UrlSplit {
    let (scheme, rest) = match extract_scheme(url) {
        Some((scheme, end)) => (Some(scheme.to_string()), &url[end..]),
        None => (None, url),
    };

    let (host, path) = match rest.find('/') {
        Some(pos) => (&rest[..pos], Some(&rest[pos..])),
        None => (rest, None),
    };

    UrlSplit {
        scheme,
        host: host.to_string(),
        path: path.filter(|p| p.len() > 1).map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_scheme() {
        assert_eq!(extract_scheme("https://example.com"), Some(("https", 8)));
        assert_eq!(extract_scheme("HTTP://example.com"), Some(("HTTP", 7)));
        assert_eq!(extract_scheme("file:///etc/hosts"), Some(("file", 8)));
        assert_eq!(extract_scheme("example.com"), None);
        assert_eq!(extract_scheme("mailto:someone@example.com"), None);
        assert_eq!(extract_scheme("://example.com"), None);
    }

    #[test]
    fn test_scheme_is_non_greedy() {
        let split = split_url("http://example.com/redirect?to=https://other.org");
        assert_eq!(split.scheme.as_deref(), Some("http"));
        assert_eq!(split.host, "example.com");
        assert_eq!(split.path.as_deref(), Some("/redirect?to=https://other.org"));
    }

    #[test]
    fn test_split_full_url() {
        let split = split_url("http://www.example.com/path/to/page");
        assert_eq!(split.scheme.as_deref(), Some("http"));
        assert_eq!(split.host, "www.example.com");
        assert_eq!(split.path.as_deref(), Some("/path/to/page"));
    }

    #[test]
    fn test_split_bare_host() {
        let split = split_url("example.com");
        assert_eq!(split.scheme, None);
        assert_eq!(split.host, "example.com");
        assert_eq!(split.path, None);
    }

    #[test]
    fn test_trivial_path_dropped() {
        assert_eq!(split_url("https://example.com/").path, None);
        assert_eq!(split_url("example.com/").path, None);
        assert_eq!(split_url("example.com/a").path.as_deref(), Some("/a"));
    }

    #[test]
    fn test_host_without_scheme_with_path() {
        let split = split_url("www.example.com/index.html");
        assert_eq!(split.scheme, None);
        assert_eq!(split.host, "www.example.com");
        assert_eq!(split.path.as_deref(), Some("/index.html"));
    }
}
