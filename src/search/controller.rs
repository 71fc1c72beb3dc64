//! The search page's view-state controller.
//!
//! [`SearchController`] owns the [`ViewState`] and exposes the actions the
//! search form and pagination trigger. Every action takes a fresh request id;
//! a search may only write state while its id is still the latest. An older
//! search that resolves after a newer one was issued (or after
//! [`clear_results`](SearchController::clear_results)) is discarded, so the
//! most recently issued action always determines what is shown.

use super::backend::SearchBackend;
use super::state::ViewState;
use dockdockgo_search::SearchQuery;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::debug;

/// What happened to a search once it finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The search's result (or error) is now the current state.
    Applied,
    /// A later action superseded this search; its result was dropped.
    Superseded,
}

/// Owns the search view state and drives its transitions.
pub struct SearchController<B> {
    backend: B,
    state: watch::Sender<ViewState>,
    latest_request: AtomicU64,
}

impl<B> std::fmt::Debug for SearchController<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchController")
            .field("state", &*self.state.borrow())
            .field("latest_request", &self.latest_request.load(Ordering::SeqCst))
            .finish()
    }
}

impl<B: SearchBackend> SearchController<B> {
    /// Create a controller in the `Idle` state.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: watch::Sender::new(ViewState::Idle),
            latest_request: AtomicU64::new(0),
        }
    }

    /// The backend searches are sent to.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// A receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Run a search and record its outcome.
    ///
    /// An invalid query (blank text, bad page or limit) moves straight to
    /// `Failure` without contacting the backend. Otherwise the state becomes
    /// `Loading`, then `Success` or `Failure` when the backend answers,
    /// unless a later action superseded this one in the meantime.
    pub async fn search(&self, query: SearchQuery) -> SearchOutcome {
        let request_id = self.next_request_id();

        if let Err(e) = query.validate() {
            debug!(request_id, error = %e, "search rejected locally");
            return self.apply(request_id, ViewState::Failure(e.message().to_owned()));
        }

        if self.apply(
            request_id,
            ViewState::Loading {
                query: query.clone(),
            },
        ) == SearchOutcome::Superseded
        {
            return SearchOutcome::Superseded;
        }

        let next = match self.backend.search(&query).await {
            Ok(response) => ViewState::Success(response),
            Err(e) => {
                debug!(request_id, error = %e, "search failed");
                ViewState::Failure(e.message().to_owned())
            }
        };
        self.apply(request_id, next)
    }

    /// Re-run the current search for another page.
    ///
    /// Uses the query and page size of the current results (or of the search
    /// in flight). Returns `None` without doing anything when there is no
    /// current search.
    pub async fn change_page(&self, page: u32) -> Option<SearchOutcome> {
        let query = match &*self.state.borrow() {
            ViewState::Success(response) => response.query_for_page(page),
            ViewState::Loading { query } => query.clone().with_page(page),
            ViewState::Idle | ViewState::Failure(_) => return None,
        };
        Some(self.search(query).await)
    }

    /// Move to the next page, if the current results have one.
    pub async fn next_page(&self) -> Option<SearchOutcome> {
        let page = self
            .state
            .borrow()
            .results()
            .filter(|r| r.has_next_page())
            .and_then(|r| r.page.checked_add(1))?;
        self.change_page(page).await
    }

    /// Move to the previous page, if the current results have one.
    pub async fn previous_page(&self) -> Option<SearchOutcome> {
        let page = self
            .state
            .borrow()
            .results()
            .filter(|r| r.has_previous_page())
            .and_then(|r| r.page.checked_sub(1))?;
        self.change_page(page).await
    }

    /// Reset to `Idle`. Any search still in flight is superseded.
    pub fn clear_results(&self) {
        let request_id = self.next_request_id();
        debug!(request_id, "clearing results");
        self.state.send_replace(ViewState::Idle);
    }

    fn next_request_id(&self) -> u64 {
        self.latest_request.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Write `next` if `request_id` is still the latest action.
    ///
    /// The id check runs under the watch channel's lock so a concurrent
    /// action cannot slip in between the check and the write.
    fn apply(&self, request_id: u64, next: ViewState) -> SearchOutcome {
        let applied = self.state.send_if_modified(|state| {
            if self.latest_request.load(Ordering::SeqCst) != request_id {
                return false;
            }
            *state = next;
            true
        });
        if applied {
            SearchOutcome::Applied
        } else {
            debug!(request_id, "dropping superseded search result");
            SearchOutcome::Superseded
        }
    }
}
