use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access store file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse stored JSON: {0}")]
    Json(#[from] serde_json::Error),
}
