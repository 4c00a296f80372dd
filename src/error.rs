// src/error.rs
//
//! Error type returned by [`Client::send`](crate::client::Client::send),
//! plus the transport-error classification it relies on.

use thiserror::Error as ThisError;
use tracing::debug;
use url::Url;

use crate::uri_utils::strip_query;

/// Error returned when a send fails.
///
/// Only transport failures are rewritten; anything else keeps its original
/// rendering so callers see exactly what the underlying sender reported.
#[derive(Debug, ThisError)]
pub enum Error {
    /// A transport-level failure (connect, timeout, redirect policy, request
    /// dispatch), re-rendered so the URL carries no query string.
    #[error("sending request: {op} {url}: {source}")]
    Transport {
        /// Operation label, the HTTP verb with only its first letter
        /// capitalized (`GET` becomes `Get`).
        op: String,
        /// Request URL with the query component removed.
        url: Url,
        source: reqwest::Error,
    },

    /// Any sender failure not classifiable as a transport error, passed
    /// through unchanged.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Classify a sender failure and rewrite it when it is a transport error
    /// carrying a URL. Everything else falls through untouched.
    pub(crate) fn from_send_failure(op: String, err: reqwest::Error) -> Self {
        match err.url() {
            Some(url) if is_transport_error(&err) => {
                let url = strip_query(url);
                debug!(op = %op, kind = error_kind(&err), "rewriting transport error");
                // Strip the URL out of the cause as well, so its own
                // rendering cannot re-leak the query string. Causes nested
                // below it are left alone.
                Error::Transport {
                    op,
                    url,
                    source: err.without_url(),
                }
            }
            _ => Error::Http(err),
        }
    }

    /// The URL attached to this error, if any. For a rewritten transport
    /// error this is the redacted copy, never the original.
    pub fn url(&self) -> Option<&Url> {
        match self {
            Error::Transport { url, .. } => Some(url),
            Error::Http(err) => err.url(),
        }
    }

    /// True when this error was rewritten from a transport failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }
}

/// Whether a sender failure counts as a transport error: it failed before or
/// during the transfer itself and reports which URL it was for. Status,
/// body-decode and builder failures keep their original shape.
pub fn is_transport_error(err: &reqwest::Error) -> bool {
    err.url().is_some()
        && (err.is_connect() || err.is_timeout() || err.is_redirect() || err.is_request())
}

fn error_kind(err: &reqwest::Error) -> &'static str {
    if err.is_timeout() {
        "timeout"
    } else if err.is_connect() {
        "connect"
    } else if err.is_redirect() {
        "redirect"
    } else {
        "request"
    }
}
