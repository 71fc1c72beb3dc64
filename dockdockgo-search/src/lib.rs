//! # dockdockgo-search
//!
//! Typed client for the DockDockGo search API.
//!
//! A [`SearchQuery`] (text, page, limit) becomes a single
//! `GET {base}/search?q=…&page=…&limit=…`; the JSON body comes back as a
//! [`SearchResponse`] or the call fails with a [`SearchError`].
//!
//! ## Design
//!
//! - One request per call: no retries, no timeout, no cancellation
//! - Queries are validated locally first; invalid ones never reach the network
//! - Error bodies are decoded so the service's own message reaches the user
//! - Queries are logged only at trace level

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;

pub use client::SearchClient;
pub use config::ClientConfig;
pub use error::{Result, SearchError};
pub use types::{ErrorResponse, SearchQuery, SearchResponse, SearchResult};
