//! HTTP plumbing: the shared [`reqwest::Client`] and request URL construction.

use crate::config::ClientConfig;
use crate::error::SearchError;
use crate::types::ValidatedQuery;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use url::Url;

/// User-Agent sent when the config does not override it.
pub const DEFAULT_USER_AGENT: &str = concat!("dockdockgo/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] for talking to the search service.
///
/// The client has:
/// - `Accept: application/json` on every request
/// - the configured User-Agent (or [`DEFAULT_USER_AGENT`])
/// - gzip decompression
/// - no request timeout; a call waits until the service answers
///
/// # Errors
///
/// Returns [`SearchError::Config`] if the client cannot be constructed.
pub fn build_client(config: &ClientConfig) -> Result<reqwest::Client, SearchError> {
    let user_agent = config
        .user_agent
        .as_deref()
        .unwrap_or(DEFAULT_USER_AGENT);

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .user_agent(user_agent)
        .default_headers(headers)
        .build()
        .map_err(|e| SearchError::Config(format!("failed to build HTTP client: {e}")))
}

/// Build `{base}/search?q=…&page=…&limit=…`.
///
/// Any path prefix on `base` is kept; a trailing slash does not produce an
/// empty segment. Existing query parameters on `base` are dropped.
pub fn search_url(base: &Url, query: &ValidatedQuery) -> Result<Url, SearchError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| SearchError::Config(format!("base URL {base} cannot be a base")))?
        .pop_if_empty()
        .push("search");
    url.set_query(None);
    url.set_fragment(None);
    url.query_pairs_mut().extend_pairs(query.query_pairs());
    Ok(url)
}
