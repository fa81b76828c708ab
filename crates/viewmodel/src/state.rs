//! Application composition root.

use std::sync::Arc;

use omdb::OmdbClient;
use reqwest::Client;
use storage::JsonStore;

use crate::adapters::{JsonFavoritesStore, OmdbGateway};
use crate::config::Config;
use crate::detail::DetailModel;
use crate::favorites::FavoritesModel;
use crate::traits::{DetailGateway, SearchGateway};
use crate::view::HomeModel;

/// Wires the OMDb client and the JSON store into the view models.
///
/// One instance per app process; detail models are minted per screen and
/// share the favorites model, so a toggle on the detail screen is visible
/// to the home screen's next refresh.
#[derive(Clone)]
pub struct AppState {
    pub home: Arc<HomeModel>,
    pub favorites: Arc<FavoritesModel>,
    gateway: Arc<OmdbGateway>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let http_client = Client::new();
        let omdb = Arc::new(OmdbClient::with_client(http_client, &config.api_key));
        let gateway = Arc::new(OmdbGateway::new(omdb));

        let store = Arc::new(JsonFavoritesStore::new(JsonStore::new(
            config.favorites_path(),
        )));
        let favorites = Arc::new(FavoritesModel::new(store));

        let home = Arc::new(HomeModel::with_favorites(
            Arc::clone(&gateway) as Arc<dyn SearchGateway>,
            Arc::clone(&favorites),
        ));

        Self {
            home,
            favorites,
            gateway,
        }
    }

    /// Detail view model for one title screen.
    pub fn detail_model(&self) -> DetailModel {
        DetailModel::new(
            Arc::clone(&self.gateway) as Arc<dyn DetailGateway>,
            Arc::clone(&self.favorites),
        )
    }
}
