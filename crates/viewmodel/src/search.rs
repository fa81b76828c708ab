//! Search-pagination controller.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::session::SearchSession;
use crate::traits::SearchGateway;

/// Fallback copy for transport failures, matching the host app's strings.
const SEARCH_FAILED: &str = "Failed to search movies";
const LOAD_MORE_FAILED: &str = "Failed to load more movies";

#[derive(Debug, Default)]
struct ControllerState {
    session: Option<SearchSession>,
    loading: bool,
    error: Option<String>,
}

/// Owns the paged result set for the current query.
///
/// At most one page request is in flight per controller: `load_next_page`
/// is a no-op while `loading` is set, and a new `start_search` supersedes
/// whatever is outstanding. A response is applied only if its originating
/// query still matches the active session; anything else is discarded.
///
/// Locks are never held across a gateway await — state is read, the request
/// runs, and the result is applied under a fresh lock behind the staleness
/// check.
pub struct SearchController {
    gateway: Arc<dyn SearchGateway>,
    state: RwLock<ControllerState>,
}

impl SearchController {
    pub fn new(gateway: Arc<dyn SearchGateway>) -> Self {
        Self {
            gateway,
            state: RwLock::new(ControllerState::default()),
        }
    }

    pub async fn session(&self) -> Option<SearchSession> {
        self.state.read().await.session.clone()
    }

    pub async fn loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    pub(crate) async fn snapshot(&self) -> (Option<SearchSession>, bool, Option<String>) {
        let state = self.state.read().await;
        (state.session.clone(), state.loading, state.error.clone())
    }

    /// Start a fresh session for `query` and fetch its first page.
    ///
    /// A blank query is silently ignored. The session is reset to empty
    /// before the request goes out, so the presentation layer never shows
    /// the previous query's results under the new query.
    pub async fn start_search(&self, query: &str) {
        let query = query.trim().to_string();
        if query.is_empty() {
            return;
        }

        {
            let mut state = self.state.write().await;
            state.session = Some(SearchSession::new(&query));
            state.loading = true;
            state.error = None;
        }

        let result = self.gateway.search(&query, 1).await;

        let mut state = self.state.write().await;
        if !state.session.as_ref().is_some_and(|s| s.query() == query) {
            tracing::debug!("Discarding stale page 1 response for '{query}'");
            return;
        }
        state.loading = false;
        match result {
            Ok(page) => {
                if let Some(session) = state.session.as_mut() {
                    session.apply_first_page(page);
                }
            }
            Err(e) => {
                tracing::warn!("Search '{query}' failed: {e}");
                state.error = Some(e.user_message(SEARCH_FAILED));
            }
        }
    }

    /// Request the page after the last merged one and append it.
    ///
    /// No-op while a request is in flight, when no session exists, or when
    /// the session is exhausted. On failure the page counter is untouched,
    /// so the next call re-requests the same page.
    pub async fn load_next_page(&self) {
        let (query, next_page) = {
            let mut state = self.state.write().await;
            if state.loading {
                return;
            }
            let Some(session) = state.session.as_ref() else {
                return;
            };
            if session.exhausted() {
                return;
            }
            let pending = (session.query().to_string(), session.page() + 1);
            state.loading = true;
            pending
        };

        let result = self.gateway.search(&query, next_page).await;

        let mut state = self.state.write().await;
        if !state.session.as_ref().is_some_and(|s| s.query() == query) {
            tracing::debug!("Discarding stale page {next_page} response for '{query}'");
            return;
        }
        state.loading = false;
        match result {
            Ok(page) => {
                if let Some(session) = state.session.as_mut() {
                    session.apply_next_page(page);
                }
            }
            Err(e) => {
                tracing::warn!("Loading page {next_page} of '{query}' failed: {e}");
                state.error = Some(e.user_message(LOAD_MORE_FAILED));
            }
        }
    }

    /// Drop the active session. Any in-flight response becomes stale and
    /// will be discarded when it arrives.
    pub(crate) async fn clear(&self) {
        let mut state = self.state.write().await;
        state.session = None;
        state.loading = false;
        state.error = None;
    }
}
