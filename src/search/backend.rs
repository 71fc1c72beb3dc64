//! The seam between the view-state controller and whatever answers searches.

use async_trait::async_trait;
use dockdockgo_search::{SearchClient, SearchError, SearchQuery, SearchResponse};

/// Something that can answer a [`SearchQuery`].
///
/// [`SearchClient`] is the production implementation; tests substitute
/// scripted backends to control when and how each call resolves.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Run one search.
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, SearchError>;
}

#[async_trait]
impl SearchBackend for SearchClient {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, SearchError> {
        SearchClient::search(self, query).await
    }
}
