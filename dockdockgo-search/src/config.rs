//! Client configuration: where the search service lives and how to reach it.
//!
//! The base URL is resolved once, at startup. [`DEFAULT_BASE_URL`] is fixed
//! at compile time from `DOCKDOCKGO_DEFAULT_API_BASE` (falling back to a local
//! development server); [`BASE_URL_ENV`] overrides it at runtime.

use crate::error::SearchError;
use url::Url;

/// Environment variable that overrides the base URL at startup.
pub const BASE_URL_ENV: &str = "DOCKDOCKGO_API_BASE";

/// Base URL used when nothing overrides it.
pub const DEFAULT_BASE_URL: &str = match option_env!("DOCKDOCKGO_DEFAULT_API_BASE") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Configuration for a [`SearchClient`](crate::SearchClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the search service, e.g. `https://search.example.com/api`.
    /// The client appends `/search`.
    pub base_url: String,
    /// Custom User-Agent. If `None`, `dockdockgo/<version>` is sent.
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set a custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Validates this configuration and returns the parsed base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the base URL is not an absolute
    /// `http` or `https` URL.
    pub fn validate(&self) -> Result<Url, SearchError> {
        let url = Url::parse(self.base_url.trim()).map_err(|e| {
            SearchError::Config(format!("invalid base URL {:?}: {e}", self.base_url))
        })?;
        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(SearchError::Config(format!(
                    "base URL must use http or https, got {other:?}"
                )));
            }
        }
        if url.cannot_be_a_base() {
            return Err(SearchError::Config(format!(
                "base URL {:?} cannot be used as a base",
                self.base_url
            )));
        }
        Ok(url)
    }
}

/// Pick the base URL: environment override, then configured value, then the
/// compiled-in default. Blank values are ignored.
pub fn resolve_base_url(env_value: Option<&str>, configured: Option<&str>) -> String {
    [env_value, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .unwrap_or(DEFAULT_BASE_URL)
        .to_owned()
}
