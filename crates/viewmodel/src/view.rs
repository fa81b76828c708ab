//! Composition of search, favorites and display mode into one view state.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::favorites::FavoritesModel;
use crate::models::{FavoriteRecord, MovieSummary};
use crate::search::SearchController;
use crate::session::SearchSession;
use crate::traits::{FavoritesStore, SearchGateway};

/// Active display mode. Both states reach each other; neither is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    SearchResults,
    Favorites,
}

/// Immutable snapshot consumed by the presentation layer.
///
/// Always rebuilt whole; the presentation layer never observes a partially
/// updated combination of fields.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub mode: ViewMode,
    pub session: Option<SearchSession>,
    pub favorites: Vec<FavoriteRecord>,
    pub favorites_count: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl ViewState {
    /// The list the active mode displays: merged session results, or a
    /// read-only snapshot of favorites taken at composition time.
    pub fn display_items(&self) -> Vec<MovieSummary> {
        match self.mode {
            ViewMode::SearchResults => self
                .session
                .as_ref()
                .map(|s| s.items().to_vec())
                .unwrap_or_default(),
            ViewMode::Favorites => self.favorites.iter().map(|r| r.summary()).collect(),
        }
    }
}

/// Pure composition of the coordinator's inputs into one [`ViewState`].
pub fn compose(
    mode: ViewMode,
    session: Option<SearchSession>,
    favorites: Vec<FavoriteRecord>,
    loading: bool,
    error: Option<String>,
) -> ViewState {
    let favorites_count = favorites.len();
    ViewState {
        mode,
        session,
        favorites,
        favorites_count,
        loading,
        error,
    }
}

/// View-state coordinator for the home screen.
///
/// Owns the search controller, the favorites view model and the display
/// mode, and exposes one coherent snapshot plus the write operations the
/// host is allowed to perform.
pub struct HomeModel {
    controller: SearchController,
    favorites: Arc<FavoritesModel>,
    mode: RwLock<ViewMode>,
}

impl HomeModel {
    pub fn new(gateway: Arc<dyn SearchGateway>, store: Arc<dyn FavoritesStore>) -> Self {
        Self::with_favorites(gateway, Arc::new(FavoritesModel::new(store)))
    }

    /// Build around an externally shared favorites model (the detail screen
    /// mutates the same one).
    pub fn with_favorites(gateway: Arc<dyn SearchGateway>, favorites: Arc<FavoritesModel>) -> Self {
        Self {
            controller: SearchController::new(gateway),
            favorites,
            mode: RwLock::new(ViewMode::default()),
        }
    }

    pub fn favorites(&self) -> &Arc<FavoritesModel> {
        &self.favorites
    }

    /// Current snapshot, rebuilt whole on every call.
    pub async fn state(&self) -> ViewState {
        let mode = *self.mode.read().await;
        let (session, loading, error) = self.controller.snapshot().await;
        let favorites = self.favorites.all().await;
        compose(mode, session, favorites, loading, error)
    }

    /// Submit a query. Switches back to the results tab first, the way a
    /// search box on top of a favorites view behaves. Blank queries change
    /// nothing.
    pub async fn start_search(&self, query: &str) {
        if query.trim().is_empty() {
            return;
        }
        *self.mode.write().await = ViewMode::SearchResults;
        self.controller.start_search(query).await;
    }

    /// Infinite-scroll hook; only meaningful on the results tab.
    pub async fn load_next_page(&self) {
        if *self.mode.read().await != ViewMode::SearchResults {
            return;
        }
        self.controller.load_next_page().await;
    }

    /// Switch display mode.
    ///
    /// Entering Favorites discards the active session (any in-flight
    /// response becomes stale); leaving it does not bring the session
    /// back — the user searches again.
    pub async fn set_mode(&self, mode: ViewMode) {
        {
            let mut current = self.mode.write().await;
            if *current == mode {
                return;
            }
            *current = mode;
        }
        if mode == ViewMode::Favorites {
            self.favorites.load().await;
            self.controller.clear().await;
        }
    }

    /// Refresh-on-activate hook: the host calls this when the screen
    /// regains focus so favorites edited on other screens are picked up.
    pub async fn refresh_on_activate(&self) -> bool {
        self.favorites.load().await
    }
}
