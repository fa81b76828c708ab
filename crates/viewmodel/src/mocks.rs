//! Mock implementations of the engine's collaborator traits.
//!
//! Use these in unit tests to control and verify the behavior of the
//! controllers without network or disk. The search mock can additionally
//! hold responses open so tests can interleave operations while a request
//! is in flight.
//!
//! # Example
//!
//! ```ignore
//! let gateway = Arc::new(MockSearchGateway::new());
//! gateway.set_page("batman", 1, page);
//!
//! let controller = SearchController::new(gateway.clone());
//! controller.start_search("batman").await;
//! assert_eq!(gateway.call_count(), 1);
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::models::{FavoriteRecord, MovieDetail};
use crate::traits::{
    DetailGateway, FavoritesStore, GatewayError, ResultPage, SearchGateway, StoreError,
};

#[derive(Clone)]
enum MockOutcome {
    Page(ResultPage),
    Remote(String),
    Transport,
}

// ============================================================================
// Mock Search Gateway
// ============================================================================

/// Mock implementation of [`SearchGateway`] for testing.
pub struct MockSearchGateway {
    outcomes: Mutex<HashMap<(String, u32), MockOutcome>>,
    calls: Mutex<Vec<(String, u32)>>,
    gated: AtomicBool,
    gate: Semaphore,
}

impl Default for MockSearchGateway {
    fn default() -> Self {
        Self {
            outcomes: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            gated: AtomicBool::new(false),
            gate: Semaphore::new(0),
        }
    }
}

impl MockSearchGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page returned for (query, page).
    pub fn set_page(&self, query: &str, page: u32, result: ResultPage) {
        self.outcomes
            .lock()
            .unwrap()
            .insert((query.to_string(), page), MockOutcome::Page(result));
    }

    /// Make (query, page) fail with a remote error message.
    pub fn set_remote_error(&self, query: &str, page: u32, message: &str) {
        self.outcomes.lock().unwrap().insert(
            (query.to_string(), page),
            MockOutcome::Remote(message.to_string()),
        );
    }

    /// Make (query, page) fail at the transport layer.
    pub fn set_transport_error(&self, query: &str, page: u32) {
        self.outcomes
            .lock()
            .unwrap()
            .insert((query.to_string(), page), MockOutcome::Transport);
    }

    /// All recorded (query, page) requests, in order.
    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Hold every subsequent request open until [`release`](Self::release)
    /// hands out permits. Calls are still recorded immediately, so tests
    /// can wait for a request to be in flight.
    pub fn hold(&self) {
        self.gated.store(true, Ordering::SeqCst);
    }

    /// Let `n` held requests complete.
    pub fn release(&self, n: usize) {
        self.gate.add_permits(n);
    }

    /// Wait until `n` requests have been issued.
    pub async fn wait_for_calls(&self, n: usize) {
        while self.call_count() < n {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl SearchGateway for MockSearchGateway {
    async fn search(&self, query: &str, page: u32) -> Result<ResultPage, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), page));

        if self.gated.load(Ordering::SeqCst) {
            self.gate.acquire().await.unwrap().forget();
        }

        let outcome = self
            .outcomes
            .lock()
            .unwrap()
            .get(&(query.to_string(), page))
            .cloned();
        match outcome {
            Some(MockOutcome::Page(result)) => Ok(result),
            Some(MockOutcome::Remote(message)) => Err(GatewayError::Remote(message)),
            Some(MockOutcome::Transport) => {
                Err(GatewayError::Transport("connection refused".to_string()))
            }
            None => Err(GatewayError::Remote("No mock result set".to_string())),
        }
    }
}

// ============================================================================
// Mock Detail Gateway
// ============================================================================

/// Mock implementation of [`DetailGateway`] for testing.
#[derive(Default)]
pub struct MockDetailGateway {
    details: Mutex<HashMap<String, MovieDetail>>,
    errors: Mutex<HashMap<String, String>>,
    calls: Mutex<Vec<String>>,
}

impl MockDetailGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_detail(&self, detail: MovieDetail) {
        self.details
            .lock()
            .unwrap()
            .insert(detail.id.clone(), detail);
    }

    pub fn set_remote_error(&self, id: &str, message: &str) {
        self.errors
            .lock()
            .unwrap()
            .insert(id.to_string(), message.to_string());
    }

    /// All recorded lookups, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DetailGateway for MockDetailGateway {
    async fn fetch_detail(&self, id: &str) -> Result<MovieDetail, GatewayError> {
        self.calls.lock().unwrap().push(id.to_string());

        if let Some(message) = self.errors.lock().unwrap().get(id) {
            return Err(GatewayError::Remote(message.clone()));
        }
        self.details
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| GatewayError::Remote("No mock result set".to_string()))
    }
}

// ============================================================================
// Mock Favorites Store
// ============================================================================

/// Mock implementation of [`FavoritesStore`] for testing.
///
/// Backed by an in-memory Vec so membership and ordering behave like the
/// real JSON document. Reads and writes can be failed independently.
#[derive(Default)]
pub struct MockFavoritesStore {
    records: Mutex<Vec<FavoriteRecord>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    writes: Mutex<Vec<Vec<FavoriteRecord>>>,
}

impl MockFavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the persisted collection.
    pub fn seed(&self, records: Vec<FavoriteRecord>) {
        *self.records.lock().unwrap() = records;
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Current persisted content (for verification).
    pub fn stored(&self) -> Vec<FavoriteRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Every full collection handed to `set_all`, in order.
    pub fn writes(&self) -> Vec<Vec<FavoriteRecord>> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl FavoritesStore for MockFavoritesStore {
    async fn get_all(&self) -> Result<Vec<FavoriteRecord>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("read failed".to_string()));
        }
        Ok(self.records.lock().unwrap().clone())
    }

    async fn set_all(&self, records: &[FavoriteRecord]) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("write failed".to_string()));
        }
        self.writes.lock().unwrap().push(records.to_vec());
        *self.records.lock().unwrap() = records.to_vec();
        Ok(())
    }
}
