//! The query client: one GET per search, typed response or typed error.

use crate::config::ClientConfig;
use crate::error::SearchError;
use crate::http::{build_client, search_url};
use crate::types::{ErrorResponse, SearchQuery, SearchResponse};
use serde::Deserialize;
use url::Url;

/// Client for the `/search` endpoint.
///
/// Each call to [`SearchClient::search`] performs exactly one request. There
/// are no retries, timeouts or cancellation.
#[derive(Clone)]
pub struct SearchClient {
    base_url: Url,
    client: reqwest::Client,
}

impl std::fmt::Debug for SearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchClient")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl SearchClient {
    /// Create a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the base URL is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, SearchError> {
        let base_url = config.validate()?;
        let client = build_client(config)?;
        Ok(Self { base_url, client })
    }

    /// The validated base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Run one search.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Validation`] if the query fails local checks (no
    ///   request is sent)
    /// - [`SearchError::Network`] if the request cannot be delivered
    /// - [`SearchError::Http`] on a non-2xx status
    /// - [`SearchError::Parse`] if a 2xx body is not a valid response
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, SearchError> {
        let validated = query.validate()?;
        let url = search_url(&self.base_url, &validated)?;

        tracing::trace!(
            query = validated.text(),
            page = validated.page(),
            limit = validated.limit(),
            "sending search request"
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SearchError::Network(format!("search request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable error body still yields the status fallback.
            let body = response.text().await.unwrap_or_default();
            let err = map_http_error(status, &body);
            tracing::debug!(status = status.as_u16(), error = %err, "search request rejected");
            return Err(err);
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Network(format!("failed to read response body: {e}")))?;
        let parsed: SearchResponse = serde_json::from_str(&body)
            .map_err(|e| SearchError::Parse(format!("invalid search response: {e}")))?;

        for violation in parsed.invariant_violations() {
            tracing::warn!(%violation, "search response breaks an invariant");
        }
        tracing::debug!(
            results = parsed.results.len(),
            total = parsed.total,
            page = parsed.page,
            "search request succeeded"
        );

        Ok(parsed)
    }
}

/// Body shape of the backend framework's HTTP exceptions: `{"detail": {...}}`.
#[derive(Deserialize)]
struct DetailEnvelope {
    detail: ErrorResponse,
}

/// Map a non-success status and its body to [`SearchError::Http`].
///
/// The message comes from an [`ErrorResponse`] body (top-level or under
/// `detail`). If neither parses, or the message is blank, it falls back to
/// `HTTP error! status: {code}`.
pub fn map_http_error(status: reqwest::StatusCode, body: &str) -> SearchError {
    let parsed = parse_error_body(body);
    let code = parsed.as_ref().map(|e| e.error.clone()).filter(|c| !c.is_empty());
    let message = parsed
        .map(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));

    SearchError::Http {
        status: status.as_u16(),
        code,
        message,
    }
}

fn parse_error_body(body: &str) -> Option<ErrorResponse> {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .or_else(|| {
            serde_json::from_str::<DetailEnvelope>(body)
                .ok()
                .map(|envelope| envelope.detail)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn error_body_message_is_used() {
        let err = map_http_error(
            StatusCode::NOT_FOUND,
            r#"{"error":"not_found","message":"no results","status":404}"#,
        );
        assert_eq!(err.message(), "no results");
        assert_eq!(err.status(), Some(404));
        assert!(matches!(err, SearchError::Http { code: Some(ref c), .. } if c == "not_found"));
    }

    #[test]
    fn detail_envelope_is_recognised() {
        let err = map_http_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"detail":{"error":"Internal Server Error","message":"search failed","status":500}}"#,
        );
        assert_eq!(err.message(), "search failed");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn unparseable_body_falls_back_to_status() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>");
        assert_eq!(err.message(), "HTTP error! status: 502");
        assert!(matches!(err, SearchError::Http { code: None, .. }));
    }

    #[test]
    fn blank_message_falls_back_to_status() {
        let err = map_http_error(
            StatusCode::BAD_REQUEST,
            r#"{"error":"bad_request","message":"  ","status":400}"#,
        );
        assert_eq!(err.message(), "HTTP error! status: 400");
    }

    #[test]
    fn validation_detail_list_falls_back_to_status() {
        let err = map_http_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail":[{"loc":["query","q"],"msg":"field required","type":"value_error.missing"}]}"#,
        );
        assert_eq!(err.message(), "HTTP error! status: 422");
    }

    #[test]
    fn new_rejects_invalid_base_url() {
        let err = SearchClient::new(&ClientConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
    }

    #[test]
    fn debug_shows_base_url() {
        let client = SearchClient::new(&ClientConfig::new("http://localhost:8000")).expect("client");
        assert!(format!("{client:?}").contains("localhost:8000"));
    }

    #[tokio::test]
    async fn blank_query_never_hits_the_network() {
        // Port 9 (discard) is never contacted because validation fails first.
        let client = SearchClient::new(&ClientConfig::new("http://127.0.0.1:9")).expect("client");
        let err = client.search(&SearchQuery::new("   ")).await.unwrap_err();
        assert!(matches!(err, SearchError::Validation(_)));
    }
}
