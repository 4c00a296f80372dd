// src/lib.rs
//
// Copyright, 2025.  Signal65 / Futurum Group.
//
// Crate root — public re-exports.

//! HTTP client wrapper that keeps query-string parameters out of error
//! messages.
//!
//! Some APIs, for better or worse, carry credentials in query-string
//! parameters. When a request fails, the usual error message echoes the full
//! request URL, query included, and from there the secret leaks into logs and
//! bug reports. [`Client`] wraps an ordinary sender and rewrites transport
//! errors so that scheme, host and path survive but the query does not.
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use queryless::{Client, Request};
//!
//! let req = reqwest::Client::new()
//!     .get("https://api.example.com/v1/items?api_key=hunter2")
//!     .build()?;
//!
//! let client = Client::new();
//! match client.send(Request::new(req)).await {
//!     Ok(resp) => println!("status: {}", resp.status()),
//!     Err(err) => eprintln!("{err}"), // no `api_key=hunter2` in here
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod uri_utils;

pub use client::{Client, Request};
pub use config::HttpClientConfig;
pub use error::{Error, is_transport_error};
pub use uri_utils::strip_query;
