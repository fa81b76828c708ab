pub mod adapters;
pub mod config;
pub mod detail;
pub mod favorites;
pub mod mocks;
pub mod models;
pub mod search;
pub mod session;
pub mod state;
pub mod traits;
pub mod view;

pub use config::Config;
pub use detail::{DetailModel, DetailState};
pub use favorites::FavoritesModel;
pub use models::{FavoriteRecord, MovieDetail, MovieSummary, Rating};
pub use search::SearchController;
pub use session::SearchSession;
pub use state::AppState;
pub use view::{HomeModel, ViewMode, ViewState};
