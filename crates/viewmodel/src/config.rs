use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Fixed file name of the favorites collection inside the data directory.
const FAVORITES_FILE: &str = "favorites.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// OMDb API key.
    pub api_key: String,
    /// Directory holding the app's persisted documents.
    pub data_dir: PathBuf,
}

impl Config {
    pub fn new(api_key: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            api_key: api_key.into(),
            data_dir: data_dir.into(),
        }
    }

    pub fn favorites_path(&self) -> PathBuf {
        self.data_dir.join(FAVORITES_FILE)
    }
}
