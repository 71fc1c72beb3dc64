//! Wire types for the search API and the query sent to it.

use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Page used when a query does not name one.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when a query does not name one.
pub const DEFAULT_LIMIT: u32 = 10;
/// Largest page size the search service accepts.
pub const MAX_LIMIT: u32 = 100;
/// Longest query text (in characters, after trimming) the service accepts.
pub const MAX_QUERY_CHARS: usize = 500;

/// Message for an empty or whitespace-only query.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search query";

/// User-supplied search text plus pagination parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-form query text. Surrounding whitespace is trimmed before sending.
    pub query: String,
    /// 1-indexed page number; `None` means [`DEFAULT_PAGE`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size; `None` means [`DEFAULT_LIMIT`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl SearchQuery {
    /// Create a query for the first page with the default page size.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: None,
            limit: None,
        }
    }

    /// Set the page number.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Check the query against the bounds the service enforces and normalize it.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Validation`] when the trimmed text is empty or
    /// too long, the page is 0, or the limit is outside `1..=MAX_LIMIT`.
    pub fn validate(&self) -> Result<ValidatedQuery, SearchError> {
        let text = self.query.trim();
        if text.is_empty() {
            return Err(SearchError::Validation(EMPTY_QUERY_MESSAGE.into()));
        }
        if text.chars().count() > MAX_QUERY_CHARS {
            return Err(SearchError::Validation(format!(
                "Search query must be at most {MAX_QUERY_CHARS} characters"
            )));
        }

        let page = self.page.unwrap_or(DEFAULT_PAGE);
        if page == 0 {
            return Err(SearchError::Validation(
                "Page number must be at least 1".into(),
            ));
        }

        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        if limit == 0 || limit > MAX_LIMIT {
            return Err(SearchError::Validation(format!(
                "Results per page must be between 1 and {MAX_LIMIT}"
            )));
        }

        Ok(ValidatedQuery {
            text: text.to_owned(),
            page,
            limit,
        })
    }
}

/// A query that passed [`SearchQuery::validate`], with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuery {
    text: String,
    page: u32,
    limit: u32,
}

impl ValidatedQuery {
    /// Trimmed query text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Requested page (>= 1).
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Requested page size (1..=MAX_LIMIT).
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Query-string parameters in wire order: `q`, `page`, `limit`.
    pub fn query_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("q", self.text.clone()),
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

/// One scored document returned by the search service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Identifier, unique within one response.
    pub id: String,
    /// Title of the document.
    pub title: String,
    /// Short description or snippet.
    pub description: String,
    /// Link to the document.
    pub url: String,
    /// Relevance score in `[0, 1]`.
    pub score: f64,
    /// ISO-8601 publication timestamp, when known.
    #[serde(
        default,
        alias = "published_at",
        skip_serializing_if = "Option::is_none"
    )]
    pub published_at: Option<String>,
}

impl SearchResult {
    /// Score as a whole percentage, as shown on the result badge.
    pub fn score_percent(&self) -> u32 {
        (self.score.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}

/// One page of results for a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Results on this page, in ranked order.
    pub results: Vec<SearchResult>,
    /// Total matches across all pages.
    pub total: u64,
    /// Echo of the requested page (1-indexed).
    pub page: u32,
    /// Echo of the requested page size.
    pub limit: u32,
    /// Echo of the normalized query text.
    pub query: String,
}

impl SearchResponse {
    /// Number of pages: `ceil(total / limit)`. Zero when `limit` is zero.
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.limit))
    }

    /// Whether a page after this one exists.
    pub fn has_next_page(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }

    /// Whether a page before this one exists.
    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    /// The query that fetches `page` of the same search.
    pub fn query_for_page(&self, page: u32) -> SearchQuery {
        SearchQuery::new(self.query.clone())
            .with_page(page)
            .with_limit(self.limit)
    }

    /// Describe every response invariant this value breaks.
    ///
    /// An empty vector means the response is well-formed.
    pub fn invariant_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        if self.page == 0 {
            violations.push("page must be at least 1".to_owned());
        }
        if self.results.len() > self.limit as usize {
            violations.push(format!(
                "{} results exceed limit {}",
                self.results.len(),
                self.limit
            ));
        }
        let mut seen = HashSet::new();
        for result in &self.results {
            if !seen.insert(result.id.as_str()) {
                violations.push(format!("duplicate result id {:?}", result.id));
            }
            if !(0.0..=1.0).contains(&result.score) {
                violations.push(format!(
                    "score {} of result {:?} outside [0, 1]",
                    result.score, result.id
                ));
            }
        }
        violations
    }
}

/// Error body returned by the search service on non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// HTTP status code.
    pub status: u16,
}
