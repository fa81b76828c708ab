use crate::{error::OmdbError, models::TitleRecord, OmdbClient};

impl OmdbClient {
    /// Fetch the full record for one title by IMDb id.
    ///
    /// GET /?i=<imdbID>&plot=full
    pub async fn get_title(&self, imdb_id: &str) -> crate::Result<TitleRecord> {
        let response = self
            .client()
            .get(self.url())
            .query(&[
                ("apikey", self.api_key()),
                ("i", imdb_id),
                ("plot", "full"),
            ])
            .send()
            .await?;

        // The failure shape shares no fields with the record, so decode to a
        // Value first and check the in-band status before the real decode.
        let raw: serde_json::Value = self.handle_response(response).await?;

        match raw.get("Response").and_then(|v| v.as_str()) {
            Some("True") => serde_path_to_error::deserialize(raw).map_err(|e| OmdbError::Json {
                path: e.path().to_string(),
                source: e.into_inner(),
            }),
            _ => Err(OmdbError::Api {
                message: raw
                    .get("Error")
                    .and_then(|v| v.as_str())
                    .unwrap_or("Incorrect IMDb ID.")
                    .to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_record() {
        let body = r#"{
            "Title": "Heat",
            "Year": "1995",
            "Rated": "R",
            "Released": "15 Dec 1995",
            "Runtime": "170 min",
            "Genre": "Action, Crime, Drama",
            "Director": "Michael Mann",
            "Writer": "Michael Mann",
            "Actors": "Al Pacino, Robert De Niro, Val Kilmer",
            "Plot": "A group of high-end professional thieves...",
            "Language": "English, Spanish",
            "Country": "United States",
            "Poster": "https://img.example/heat.jpg",
            "Ratings": [
                {"Source": "Internet Movie Database", "Value": "8.3/10"},
                {"Source": "Rotten Tomatoes", "Value": "88%"}
            ],
            "imdbID": "tt0113277",
            "Type": "movie",
            "BoxOffice": "$67,436,818",
            "Response": "True"
        }"#;

        let record: TitleRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.imdb_id, "tt0113277");
        assert_eq!(record.ratings.len(), 2);
        assert_eq!(record.ratings[0].value, "8.3/10");
        assert_eq!(record.box_office.as_deref(), Some("$67,436,818"));
    }

    #[test]
    fn record_tolerates_missing_optional_fields() {
        let body = r#"{
            "Title": "Some Short",
            "Year": "2019",
            "Poster": "N/A",
            "imdbID": "tt9999999",
            "Type": "movie",
            "Response": "True"
        }"#;

        let record: TitleRecord = serde_json::from_str(body).unwrap();
        assert!(record.ratings.is_empty());
        assert!(record.box_office.is_none());
    }
}
