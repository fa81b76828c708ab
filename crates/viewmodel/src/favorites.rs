//! Read-through cache over the persisted favorites store.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::FavoriteRecord;
use crate::traits::FavoritesStore;

#[derive(Default)]
struct FavoritesCache {
    records: Vec<FavoriteRecord>,
    ids: HashSet<String>,
}

impl FavoritesCache {
    fn replace(&mut self, records: Vec<FavoriteRecord>) {
        self.ids = records.iter().map(|r| r.id().to_string()).collect();
        self.records = records;
    }
}

/// Favorites view model.
///
/// The store is authoritative: every mutation re-reads it, persists the
/// updated collection, and only then refreshes the cache. Persistence
/// faults are reported as a `false` return, never propagated.
pub struct FavoritesModel {
    store: Arc<dyn FavoritesStore>,
    cache: RwLock<FavoritesCache>,
}

impl FavoritesModel {
    pub fn new(store: Arc<dyn FavoritesStore>) -> Self {
        Self {
            store,
            cache: RwLock::new(FavoritesCache::default()),
        }
    }

    /// Refresh the cache from the store. Idempotent; called on mount and
    /// whenever the favorites view regains visibility. A failed read keeps
    /// the previous cache.
    pub async fn load(&self) -> bool {
        match self.store.get_all().await {
            Ok(records) => {
                self.cache.write().await.replace(records);
                true
            }
            Err(e) => {
                tracing::warn!("Failed to load favorites: {e}");
                false
            }
        }
    }

    /// Snapshot of the cached collection, in insertion order.
    pub async fn all(&self) -> Vec<FavoriteRecord> {
        self.cache.read().await.records.clone()
    }

    pub async fn count(&self) -> usize {
        self.cache.read().await.records.len()
    }

    /// Cache lookup by id.
    pub async fn is_favorite(&self, id: &str) -> bool {
        self.cache.read().await.ids.contains(id)
    }

    /// Persist a new favorite.
    ///
    /// The membership check runs against a fresh store read, not the
    /// cache, so a stale cache cannot produce a duplicate id. Returns
    /// false when the id is already present or persistence fails; in
    /// either case the cache is left untouched.
    pub async fn add(&self, record: impl Into<FavoriteRecord>) -> bool {
        let record = record.into();

        let mut records = match self.store.get_all().await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Failed to read favorites before add: {e}");
                return false;
            }
        };

        if records.iter().any(|r| r.id() == record.id()) {
            return false;
        }

        records.push(record);
        if let Err(e) = self.store.set_all(&records).await {
            tracing::warn!("Failed to persist favorite: {e}");
            return false;
        }

        self.cache.write().await.replace(records);
        true
    }

    /// Remove a favorite by id and persist the filtered collection.
    /// Removing an id that is not present still counts as success.
    pub async fn remove(&self, id: &str) -> bool {
        let records = match self.store.get_all().await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Failed to read favorites before remove: {e}");
                return false;
            }
        };

        let records: Vec<FavoriteRecord> =
            records.into_iter().filter(|r| r.id() != id).collect();

        if let Err(e) = self.store.set_all(&records).await {
            tracing::warn!("Failed to persist favorites after remove: {e}");
            return false;
        }

        self.cache.write().await.replace(records);
        true
    }
}
