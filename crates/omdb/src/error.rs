use thiserror::Error;

#[derive(Debug, Error)]
pub enum OmdbError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse response at {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("OMDb error: {message}")]
    Api { message: String },

    #[error("Invalid totalResults value: {0:?}")]
    TotalResults(String),
}
