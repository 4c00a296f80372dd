// src/uri_utils.rs
//! URL redaction helpers.
//!
//! Every rewritten error message goes through [`strip_query`], which operates
//! on an owned copy. Callers may reuse their request URL after a failed send,
//! so the original must never be modified in place.

use url::Url;

/// Return a copy of `url` with the query component removed.
///
/// Scheme, host, port, path and fragment are preserved; the leading `?`
/// disappears together with the query.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use queryless::uri_utils::strip_query;
///
/// let url = Url::parse("https://host/path?user=hello&password=secret").unwrap();
/// assert_eq!(strip_query(&url).as_str(), "https://host/path");
/// ```
pub fn strip_query(url: &Url) -> Url {
    let mut stripped = url.clone();
    stripped.set_query(None);
    stripped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_removes_query_and_question_mark() {
        let url = Url::parse("http://10.0.0.1:9000/path?user=hello&password=super-secret").unwrap();
        let stripped = strip_query(&url);
        assert_eq!(stripped.as_str(), "http://10.0.0.1:9000/path");
        assert!(!stripped.as_str().contains('?'));
    }

    #[test]
    fn test_strip_preserves_non_query_components() {
        let url = Url::parse("https://user@host:8443/a/b?k=v#frag").unwrap();
        let stripped = strip_query(&url);
        assert_eq!(stripped.scheme(), "https");
        assert_eq!(stripped.host_str(), Some("host"));
        assert_eq!(stripped.port(), Some(8443));
        assert_eq!(stripped.path(), "/a/b");
        assert_eq!(stripped.fragment(), Some("frag"));
        assert_eq!(stripped.query(), None);
    }

    #[test]
    fn test_strip_without_query_is_identity() {
        let url = Url::parse("http://host/path").unwrap();
        assert_eq!(strip_query(&url), url);
    }

    #[test]
    fn test_strip_empty_query() {
        // A bare trailing '?' still counts as a query component.
        let url = Url::parse("http://host/path?").unwrap();
        assert_eq!(strip_query(&url).as_str(), "http://host/path");
    }

    #[test]
    fn test_strip_does_not_mutate_original() {
        let url = Url::parse("http://host/path?token=abc").unwrap();
        let _ = strip_query(&url);
        assert_eq!(url.query(), Some("token=abc"));
    }
}
