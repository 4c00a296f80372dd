// src/config.rs
//
//! Sender configuration for callers that want more than the default client.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::ClientBuilder;

/// Configuration for the underlying sender.
///
/// `Default` mirrors reqwest's own defaults where it has them, so a client
/// built from an untouched config behaves like the process-wide default
/// sender apart from pool sizing details.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Connection establishment timeout; `None` waits indefinitely.
    pub connect_timeout: Option<Duration>,
    /// Whole-request timeout, from connect through the end of the body.
    pub request_timeout: Option<Duration>,
    /// How long idle pooled connections are kept around.
    pub pool_idle_timeout: Option<Duration>,
    /// Maximum number of idle connections per host.
    pub max_idle_connections_per_host: usize,
    /// TCP keepalive probe interval.
    pub tcp_keepalive: Option<Duration>,
    /// Disable Nagle's algorithm for lower latency.
    pub tcp_nodelay: bool,
    /// Allow HTTP/2 via ALPN; when off the sender speaks HTTP/1.1 only.
    pub enable_http2: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            request_timeout: None,
            pool_idle_timeout: Some(Duration::from_secs(90)),
            max_idle_connections_per_host: usize::MAX,
            tcp_keepalive: None,
            tcp_nodelay: true,
            enable_http2: true,
        }
    }
}

impl HttpClientConfig {
    /// Short timeouts and a bounded pool, for callers talking to nearby
    /// services that prefer failing fast over waiting out a dead peer.
    pub fn fail_fast() -> Self {
        Self {
            connect_timeout: Some(Duration::from_secs(5)),
            request_timeout: Some(Duration::from_secs(30)),
            pool_idle_timeout: Some(Duration::from_secs(60)),
            max_idle_connections_per_host: 32,
            tcp_keepalive: Some(Duration::from_secs(30)),
            tcp_nodelay: true,
            enable_http2: true,
        }
    }

    /// Build a `reqwest::Client` from this configuration.
    pub fn build(&self) -> Result<reqwest::Client> {
        let mut builder = ClientBuilder::new()
            .pool_max_idle_per_host(self.max_idle_connections_per_host)
            .pool_idle_timeout(self.pool_idle_timeout)
            .tcp_nodelay(self.tcp_nodelay)
            .use_rustls_tls();

        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(keepalive) = self.tcp_keepalive {
            builder = builder.tcp_keepalive(keepalive);
        }
        if !self.enable_http2 {
            builder = builder.http1_only();
        }

        builder.build().context("Failed to build HTTP client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds() {
        let config = HttpClientConfig::default();
        assert!(config.build().is_ok());
    }

    #[test]
    fn test_fail_fast_config_builds() {
        let config = HttpClientConfig::fail_fast();
        assert!(config.connect_timeout.is_some());
        assert!(config.request_timeout.is_some());
        assert!(config.build().is_ok());
    }

    #[test]
    fn test_http1_only_builds() {
        let config = HttpClientConfig {
            enable_http2: false,
            ..HttpClientConfig::default()
        };
        assert!(config.build().is_ok());
    }
}
