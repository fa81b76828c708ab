//! Detail view model for a single title.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::favorites::FavoritesModel;
use crate::models::MovieDetail;
use crate::traits::DetailGateway;

const DETAIL_FAILED: &str = "Failed to fetch movie details";

/// Immutable snapshot of the detail screen's state.
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    pub detail: Option<MovieDetail>,
    pub loading: bool,
    pub error: Option<String>,
    pub is_favorite: bool,
}

/// Owns the record and favorite membership for one title.
pub struct DetailModel {
    gateway: Arc<dyn DetailGateway>,
    favorites: Arc<FavoritesModel>,
    state: RwLock<DetailState>,
}

impl DetailModel {
    pub fn new(gateway: Arc<dyn DetailGateway>, favorites: Arc<FavoritesModel>) -> Self {
        Self {
            gateway,
            favorites,
            state: RwLock::new(DetailState::default()),
        }
    }

    pub async fn state(&self) -> DetailState {
        self.state.read().await.clone()
    }

    /// Fetch the record and favorite membership for `id`.
    ///
    /// Membership is checked against a fresh store read, so edits made on
    /// other screens are reflected here.
    pub async fn load(&self, id: &str) {
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        let result = self.gateway.fetch_detail(id).await;
        self.favorites.load().await;
        let is_favorite = self.favorites.is_favorite(id).await;

        let mut state = self.state.write().await;
        state.loading = false;
        state.is_favorite = is_favorite;
        match result {
            Ok(detail) => state.detail = Some(detail),
            Err(e) => {
                tracing::warn!("Detail fetch for {id} failed: {e}");
                state.error = Some(e.user_message(DETAIL_FAILED));
            }
        }
    }

    /// Toggle membership of the loaded record.
    ///
    /// Returns the new membership so the host can notify, or None when
    /// nothing is loaded or persistence failed (displayed state then stays
    /// at the pre-attempt value).
    pub async fn toggle_favorite(&self) -> Option<bool> {
        let (detail, currently_favorite) = {
            let state = self.state.read().await;
            (state.detail.clone()?, state.is_favorite)
        };

        let applied = if currently_favorite {
            self.favorites.remove(&detail.id).await
        } else {
            self.favorites.add(detail).await
        };
        if !applied {
            return None;
        }

        let now_favorite = !currently_favorite;
        self.state.write().await.is_favorite = now_favorite;
        Some(now_favorite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockDetailGateway, MockFavoritesStore};
    use crate::models::Rating;
    use crate::traits::FavoritesStore;

    fn detail(id: &str) -> MovieDetail {
        MovieDetail {
            id: id.to_string(),
            title: "Heat".to_string(),
            year: "1995".to_string(),
            media_type: "movie".to_string(),
            poster_url: Some("https://img.example/heat.jpg".to_string()),
            plot: Some("A group of thieves...".to_string()),
            genre: Some("Crime".to_string()),
            director: Some("Michael Mann".to_string()),
            writer: None,
            actors: None,
            rated: Some("R".to_string()),
            released: None,
            runtime: Some("170 min".to_string()),
            language: None,
            country: None,
            box_office: None,
            ratings: vec![Rating {
                source: "Internet Movie Database".to_string(),
                value: "8.3/10".to_string(),
            }],
        }
    }

    fn build() -> (Arc<MockDetailGateway>, Arc<MockFavoritesStore>, DetailModel) {
        let gateway = Arc::new(MockDetailGateway::new());
        let store = Arc::new(MockFavoritesStore::new());
        let favorites = Arc::new(FavoritesModel::new(
            Arc::clone(&store) as Arc<dyn FavoritesStore>
        ));
        let model = DetailModel::new(
            Arc::clone(&gateway) as Arc<dyn DetailGateway>,
            favorites,
        );
        (gateway, store, model)
    }

    #[tokio::test]
    async fn load_fills_detail_and_membership() {
        let (gateway, store, model) = build();
        gateway.set_detail(detail("tt0113277"));
        store.seed(vec![detail("tt0113277").into()]);

        model.load("tt0113277").await;

        let state = model.state().await;
        assert_eq!(state.detail.as_ref().unwrap().title, "Heat");
        assert!(state.is_favorite);
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn load_failure_surfaces_message() {
        let (gateway, _store, model) = build();
        gateway.set_remote_error("tt404", "Incorrect IMDb ID.");

        model.load("tt404").await;

        let state = model.state().await;
        assert!(state.detail.is_none());
        assert_eq!(state.error.as_deref(), Some("Incorrect IMDb ID."));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn toggle_round_trips_membership() {
        let (gateway, store, model) = build();
        gateway.set_detail(detail("tt0113277"));

        model.load("tt0113277").await;
        assert!(!model.state().await.is_favorite);

        assert_eq!(model.toggle_favorite().await, Some(true));
        assert!(model.state().await.is_favorite);
        assert_eq!(store.stored().len(), 1);
        assert_eq!(store.stored()[0].id(), "tt0113277");

        assert_eq!(model.toggle_favorite().await, Some(false));
        assert!(!model.state().await.is_favorite);
        assert!(store.stored().is_empty());
    }

    #[tokio::test]
    async fn toggle_without_loaded_record_is_a_no_op() {
        let (_gateway, store, model) = build();

        assert_eq!(model.toggle_favorite().await, None);
        assert!(store.stored().is_empty());
    }

    #[tokio::test]
    async fn failed_persist_reports_none_and_keeps_state() {
        let (gateway, store, model) = build();
        gateway.set_detail(detail("tt0113277"));
        model.load("tt0113277").await;

        store.set_fail_writes(true);
        assert_eq!(model.toggle_favorite().await, None);
        assert!(!model.state().await.is_favorite);
    }
}
