//! OMDb gateway adapter.

use std::sync::Arc;

use async_trait::async_trait;
use omdb::{OmdbClient, OmdbError, SearchItem, TitleRecord};

use crate::models::{MovieDetail, MovieSummary, Rating};
use crate::traits::{DetailGateway, GatewayError, ResultPage, SearchGateway};

/// Poster value OMDb sends when no artwork exists.
const NO_POSTER: &str = "N/A";

/// Remote Search and Detail Gateway over the OMDb API.
pub struct OmdbGateway {
    client: Arc<OmdbClient>,
}

impl OmdbGateway {
    pub fn new(client: Arc<OmdbClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SearchGateway for OmdbGateway {
    async fn search(&self, query: &str, page: u32) -> Result<ResultPage, GatewayError> {
        let page = self.client.search(query, page).await?;
        Ok(ResultPage {
            items: page.items.into_iter().map(summary_from_item).collect(),
            total_available: page.total_results,
        })
    }
}

#[async_trait]
impl DetailGateway for OmdbGateway {
    async fn fetch_detail(&self, id: &str) -> Result<MovieDetail, GatewayError> {
        let record = self.client.get_title(id).await?;
        Ok(detail_from_record(record))
    }
}

impl From<OmdbError> for GatewayError {
    fn from(e: OmdbError) -> Self {
        match e {
            OmdbError::Api { message } => GatewayError::Remote(message),
            other => GatewayError::Transport(other.to_string()),
        }
    }
}

fn poster_url(poster: String) -> Option<String> {
    if poster.is_empty() || poster == NO_POSTER {
        None
    } else {
        Some(poster)
    }
}

/// OMDb stuffs `"N/A"` into text fields it has no value for; map those to
/// absent like the poster.
fn text_field(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v.as_str() != NO_POSTER)
}

fn summary_from_item(item: SearchItem) -> MovieSummary {
    MovieSummary {
        id: item.imdb_id,
        title: item.title,
        year: item.year,
        media_type: item.media_type,
        poster_url: poster_url(item.poster),
    }
}

fn detail_from_record(record: TitleRecord) -> MovieDetail {
    MovieDetail {
        id: record.imdb_id,
        title: record.title,
        year: record.year,
        media_type: record.media_type,
        poster_url: poster_url(record.poster),
        plot: text_field(record.plot),
        genre: text_field(record.genre),
        director: text_field(record.director),
        writer: text_field(record.writer),
        actors: text_field(record.actors),
        rated: text_field(record.rated),
        released: text_field(record.released),
        runtime: text_field(record.runtime),
        language: text_field(record.language),
        country: text_field(record.country),
        box_office: text_field(record.box_office),
        ratings: record
            .ratings
            .into_iter()
            .map(|r| Rating {
                source: r.source,
                value: r.value,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_poster_normalizes_to_none() {
        let item = SearchItem {
            imdb_id: "tt0372784".to_string(),
            title: "Batman Begins".to_string(),
            year: "2005".to_string(),
            media_type: "movie".to_string(),
            poster: "N/A".to_string(),
        };

        let summary = summary_from_item(item);
        assert!(summary.poster_url.is_none());
    }

    #[test]
    fn real_poster_passes_through() {
        let item = SearchItem {
            imdb_id: "tt0372784".to_string(),
            title: "Batman Begins".to_string(),
            year: "2005".to_string(),
            media_type: "movie".to_string(),
            poster: "https://img.example/bb.jpg".to_string(),
        };

        let summary = summary_from_item(item);
        assert_eq!(
            summary.poster_url.as_deref(),
            Some("https://img.example/bb.jpg")
        );
    }

    #[test]
    fn na_text_fields_normalize_to_none() {
        let record = TitleRecord {
            imdb_id: "tt0113277".to_string(),
            title: "Heat".to_string(),
            year: "1995".to_string(),
            media_type: "movie".to_string(),
            poster: "N/A".to_string(),
            rated: Some("R".to_string()),
            released: None,
            runtime: Some("N/A".to_string()),
            genre: None,
            director: Some("Michael Mann".to_string()),
            writer: None,
            actors: None,
            plot: None,
            language: None,
            country: None,
            box_office: Some("N/A".to_string()),
            ratings: vec![],
        };

        let detail = detail_from_record(record);
        assert_eq!(detail.rated.as_deref(), Some("R"));
        assert!(detail.runtime.is_none());
        assert!(detail.box_office.is_none());
        assert!(detail.poster_url.is_none());
    }
}
