use serde::Deserialize;

use crate::{
    error::OmdbError,
    models::{SearchItem, SearchPage},
    OmdbClient,
};

#[derive(Debug, Deserialize)]
struct RawSearchResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Search", default)]
    search: Vec<SearchItem>,
    #[serde(rename = "totalResults", default)]
    total_results: Option<String>,
    #[serde(rename = "Error", default)]
    error: Option<String>,
}

impl OmdbClient {
    /// Fetch one page of search results for a keyword.
    ///
    /// GET /?s=<query>&page=<n>
    ///
    /// OMDb reports failure in-band: a 200 response with `Response: "False"`
    /// and an `Error` message. That is surfaced as [`OmdbError::Api`].
    pub async fn search(&self, query: &str, page: u32) -> crate::Result<SearchPage> {
        let page_param = page.to_string();
        let response = self
            .client()
            .get(self.url())
            .query(&[
                ("apikey", self.api_key()),
                ("s", query),
                ("page", page_param.as_str()),
            ])
            .send()
            .await?;

        let raw: RawSearchResponse = self.handle_response(response).await?;

        if raw.response != "True" {
            return Err(OmdbError::Api {
                message: raw.error.unwrap_or_else(|| "Movie not found!".to_string()),
            });
        }

        // totalResults arrives as a decimal string.
        let total_field = raw.total_results.unwrap_or_default();
        let total_results = total_field
            .parse()
            .map_err(|_| OmdbError::TotalResults(total_field.clone()))?;

        Ok(SearchPage {
            items: raw.search,
            total_results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_success_listing() {
        let body = r#"{
            "Search": [
                {"Title": "Batman Begins", "Year": "2005", "imdbID": "tt0372784", "Type": "movie", "Poster": "https://img.example/bb.jpg"},
                {"Title": "The Batman", "Year": "2022", "imdbID": "tt1877830", "Type": "movie", "Poster": "N/A"}
            ],
            "totalResults": "523",
            "Response": "True"
        }"#;

        let raw: RawSearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(raw.response, "True");
        assert_eq!(raw.search.len(), 2);
        assert_eq!(raw.search[0].imdb_id, "tt0372784");
        assert_eq!(raw.search[1].poster, "N/A");
        assert_eq!(raw.total_results.as_deref(), Some("523"));
    }

    #[test]
    fn parses_error_body_without_listing() {
        let body = r#"{"Response": "False", "Error": "Movie not found!"}"#;

        let raw: RawSearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(raw.response, "False");
        assert!(raw.search.is_empty());
        assert_eq!(raw.error.as_deref(), Some("Movie not found!"));
    }
}
