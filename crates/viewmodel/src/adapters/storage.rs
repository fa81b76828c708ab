//! Favorites persistence over the JSON document store.

use async_trait::async_trait;
use storage::JsonStore;

use crate::models::FavoriteRecord;
use crate::traits::{FavoritesStore, StoreError};

/// [`FavoritesStore`] backed by one on-disk JSON document.
pub struct JsonFavoritesStore {
    store: JsonStore,
}

impl JsonFavoritesStore {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FavoritesStore for JsonFavoritesStore {
    async fn get_all(&self) -> Result<Vec<FavoriteRecord>, StoreError> {
        self.store
            .load_or_default()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn set_all(&self, records: &[FavoriteRecord]) -> Result<(), StoreError> {
        self.store
            .replace(records)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MovieSummary;

    fn movie(id: &str) -> FavoriteRecord {
        MovieSummary {
            id: id.to_string(),
            title: format!("Movie {id}"),
            year: "2020".to_string(),
            media_type: "movie".to_string(),
            poster_url: None,
        }
        .into()
    }

    #[tokio::test]
    async fn round_trips_favorites_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFavoritesStore::new(JsonStore::new(dir.path().join("favorites.json")));

        store.set_all(&[movie("tt001"), movie("tt002")]).await.unwrap();

        let loaded = store.get_all().await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id(), "tt001");
        assert_eq!(loaded[1].id(), "tt002");
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFavoritesStore::new(JsonStore::new(dir.path().join("favorites.json")));

        assert!(store.get_all().await.unwrap().is_empty());
    }
}
