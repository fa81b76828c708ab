//! Engine-owned data models.
//!
//! Gateway adapters translate their wire shapes into these; nothing above
//! the adapter layer sees a provider-specific field name.

use serde::{Deserialize, Serialize};

/// One entry of a paged search result. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Unique remote identifier.
    pub id: String,
    pub title: String,
    pub year: String,
    pub media_type: String,
    pub poster_url: Option<String>,
}

/// A single review-source rating. Order is preserved as delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub source: String,
    pub value: String,
}

/// Full record for one title. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: String,
    pub title: String,
    pub year: String,
    pub media_type: String,
    pub poster_url: Option<String>,
    pub plot: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub writer: Option<String>,
    pub actors: Option<String>,
    pub rated: Option<String>,
    pub released: Option<String>,
    pub runtime: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub box_office: Option<String>,
    /// Required (possibly empty) so the untagged [`FavoriteRecord`] decode
    /// can tell a detail record from a summary one.
    pub ratings: Vec<Rating>,
}

/// A persisted favorite, keyed by id.
///
/// Favorites added from the detail view carry the full record; ones written
/// by older versions of the app may only carry the summary shape. Both are
/// valid cache entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FavoriteRecord {
    Detail(MovieDetail),
    Summary(MovieSummary),
}

impl FavoriteRecord {
    pub fn id(&self) -> &str {
        match self {
            FavoriteRecord::Detail(d) => &d.id,
            FavoriteRecord::Summary(s) => &s.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            FavoriteRecord::Detail(d) => &d.title,
            FavoriteRecord::Summary(s) => &s.title,
        }
    }

    /// Project to the summary shape used by result listings.
    pub fn summary(&self) -> MovieSummary {
        match self {
            FavoriteRecord::Detail(d) => MovieSummary {
                id: d.id.clone(),
                title: d.title.clone(),
                year: d.year.clone(),
                media_type: d.media_type.clone(),
                poster_url: d.poster_url.clone(),
            },
            FavoriteRecord::Summary(s) => s.clone(),
        }
    }
}

impl From<MovieSummary> for FavoriteRecord {
    fn from(summary: MovieSummary) -> Self {
        FavoriteRecord::Summary(summary)
    }
}

impl From<MovieDetail> for FavoriteRecord {
    fn from(detail: MovieDetail) -> Self {
        FavoriteRecord::Detail(detail)
    }
}
