mod client;
mod error;
mod search;
mod title;
pub mod models;

pub use client::OmdbClient;
pub use error::OmdbError;
pub use models::{Rating, SearchItem, SearchPage, TitleRecord};

pub type Result<T> = std::result::Result<T, OmdbError>;
