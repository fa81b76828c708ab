use reqwest::Client;

use crate::error::OmdbError;

const BASE_URL: &str = "https://www.omdbapi.com/";

pub struct OmdbClient {
    client: Client,
    api_key: String,
}

impl OmdbClient {
    /// Create an OmdbClient with a reqwest Client.
    pub fn with_client(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
        }
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Every OMDb endpoint is the root URL with query parameters.
    pub(crate) fn url(&self) -> &'static str {
        BASE_URL
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(OmdbError::Api { message: body });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| OmdbError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
