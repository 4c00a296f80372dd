// src/client.rs
//
// Copyright, 2025.  Signal65 / Futurum Group.
//
//! Query-redacting wrapper around a `reqwest` sender.

use once_cell::sync::Lazy;
use reqwest::{Method, Response};

use crate::config::HttpClientConfig;
use crate::error::Error;

// Process-wide default sender, shared by every `Client` built without an
// explicit `reqwest::Client`. Constructed exactly like a plain default
// client, so the only observable difference from using reqwest directly is
// the error rewrite.
static DEFAULT_HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Request accepted by [`Client`].
///
/// A newtype rather than an alias so a request built for the query-redacting
/// path cannot be handed to a bare `reqwest::Client` by accident, and a bare
/// request cannot be sent here without an explicit wrap.
#[derive(Debug)]
pub struct Request(pub reqwest::Request);

impl Request {
    pub fn new(inner: reqwest::Request) -> Self {
        Request(inner)
    }

    /// The wrapped outbound request.
    pub fn inner(&self) -> &reqwest::Request {
        &self.0
    }
}

impl From<reqwest::Request> for Request {
    fn from(inner: reqwest::Request) -> Self {
        Request(inner)
    }
}

/// HTTP client whose failed requests never report query-string parameters.
///
/// Cheap to clone and safe to share across tasks; concurrency safety is
/// inherited from the underlying `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct Client {
    http: Option<reqwest::Client>,
}

impl Client {
    /// Client backed by the process-wide default sender.
    pub fn new() -> Self {
        Client { http: None }
    }

    /// Client backed by a caller-configured sender.
    pub fn with_http_client(http: reqwest::Client) -> Self {
        Client { http: Some(http) }
    }

    /// Client backed by a sender built from `config`.
    pub fn with_config(config: &HttpClientConfig) -> anyhow::Result<Self> {
        Ok(Self::with_http_client(config.build()?))
    }

    fn http_client(&self) -> &reqwest::Client {
        self.http.as_ref().unwrap_or(&DEFAULT_HTTP_CLIENT)
    }

    /// Send the request and await completion.
    ///
    /// Successful responses come back untouched and are never inspected; a
    /// non-2xx status is not an error at this layer. A transport failure is
    /// rewritten as [`Error::Transport`], whose message reads
    /// `sending request: <op> <url-without-query>: <cause>`. Any other
    /// failure passes through unchanged as [`Error::Http`].
    pub async fn send(&self, request: Request) -> Result<Response, Error> {
        let Request(inner) = request;
        // The sender's error does not carry the operation label, so capture
        // it from the request before dispatch.
        let op = op_label(inner.method());
        self.http_client()
            .execute(inner)
            .await
            .map_err(|err| Error::from_send_failure(op, err))
    }
}

/// Operation label used in rewritten error messages: the HTTP verb with only
/// its first letter capitalized (`GET` becomes `Get`).
fn op_label(method: &Method) -> String {
    let verb = method.as_str();
    let mut label = String::with_capacity(verb.len());
    let mut chars = verb.chars();
    if let Some(first) = chars.next() {
        label.extend(first.to_uppercase());
        label.extend(chars.flat_map(|c| c.to_lowercase()));
    }
    label
}
