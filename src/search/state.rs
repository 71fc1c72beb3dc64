//! View state of the search page.

use dockdockgo_search::{SearchQuery, SearchResponse};
use serde::Serialize;

/// Coarse phase of the search page, for rendering decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    /// Nothing searched yet, or results were cleared.
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest search returned a page of results.
    Success,
    /// The latest search failed.
    Failure,
}

/// Everything the result list needs to render.
///
/// Holds at most one of results or error; `Loading` keeps the query being
/// fetched so pagination keeps working while a page is in flight.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// Initial state.
    #[default]
    Idle,
    /// Waiting on the search service.
    Loading {
        /// The query being fetched.
        query: SearchQuery,
    },
    /// Results of the latest search.
    Success(SearchResponse),
    /// User-facing message of the latest failure.
    Failure(String),
}

impl ViewState {
    /// The coarse phase of this state.
    pub fn phase(&self) -> SearchPhase {
        match self {
            Self::Idle => SearchPhase::Idle,
            Self::Loading { .. } => SearchPhase::Loading,
            Self::Success(_) => SearchPhase::Success,
            Self::Failure(_) => SearchPhase::Failure,
        }
    }

    /// Current results, if the latest search succeeded.
    pub fn results(&self) -> Option<&SearchResponse> {
        match self {
            Self::Success(response) => Some(response),
            _ => None,
        }
    }

    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Current error message, if the latest search failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response() -> SearchResponse {
        SearchResponse {
            results: Vec::new(),
            total: 0,
            page: 1,
            limit: 10,
            query: "rust".into(),
        }
    }

    #[test]
    fn default_is_idle() {
        let state = ViewState::default();
        assert_eq!(state.phase(), SearchPhase::Idle);
        assert!(state.results().is_none());
        assert!(state.error().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn loading_has_no_results_or_error() {
        let state = ViewState::Loading {
            query: SearchQuery::new("rust"),
        };
        assert!(state.is_loading());
        assert!(state.results().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn success_exposes_results() {
        let state = ViewState::Success(response());
        assert_eq!(state.phase(), SearchPhase::Success);
        assert_eq!(state.results().map(|r| r.query.as_str()), Some("rust"));
        assert!(state.error().is_none());
    }

    #[test]
    fn failure_exposes_message() {
        let state = ViewState::Failure("no results".into());
        assert_eq!(state.phase(), SearchPhase::Failure);
        assert_eq!(state.error(), Some("no results"));
        assert!(state.results().is_none());
    }

    #[test]
    fn phase_serializes_snake_case() {
        let json = serde_json::to_string(&SearchPhase::Loading).expect("serialize");
        assert_eq!(json, "\"loading\"");
    }
}
