//! Trait abstractions over the remote gateways and the favorites store.
//!
//! The engine depends on its collaborators only through these traits, so
//! every consistency property is testable with the in-memory mocks.

use async_trait::async_trait;

use crate::models::{FavoriteRecord, MovieDetail, MovieSummary};

/// Error type for remote gateway operations.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The remote service answered with an application-level message.
    #[error("{0}")]
    Remote(String),
    /// Transport or decoding failure with no user-facing message.
    #[error("Request failed: {0}")]
    Transport(String),
}

impl GatewayError {
    /// Message to surface to the user; transport failures get the caller's
    /// generic fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            GatewayError::Remote(message) => message.clone(),
            GatewayError::Transport(_) => fallback.to_string(),
        }
    }
}

/// One 1-based page of search results.
#[derive(Debug, Clone)]
pub struct ResultPage {
    pub items: Vec<MovieSummary>,
    /// Total matches across all pages. Page size is gateway-defined and
    /// opaque to the engine.
    pub total_available: u32,
}

#[async_trait]
pub trait SearchGateway: Send + Sync {
    /// Fetch one page of results for a query.
    async fn search(&self, query: &str, page: u32) -> Result<ResultPage, GatewayError>;
}

#[async_trait]
pub trait DetailGateway: Send + Sync {
    /// Fetch the full record for one title id.
    async fn fetch_detail(&self, id: &str) -> Result<MovieDetail, GatewayError>;
}

/// Error type for favorites persistence.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Favorites store failed: {0}")]
    Backend(String),
}

/// The persisted favorites collection: ordered, id-unique, durable across
/// restarts. The store is the single source of truth; in-memory copies are
/// caches.
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<FavoriteRecord>, StoreError>;
    async fn set_all(&self, records: &[FavoriteRecord]) -> Result<(), StoreError>;
}
