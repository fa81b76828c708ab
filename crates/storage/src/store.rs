use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

/// Durable single-document JSON store.
///
/// One store maps to one file on disk. Writes go to a temporary file and are
/// renamed into place, so a crash mid-write never leaves a half-written
/// document behind.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document, or return the type's default when the file does
    /// not exist yet.
    pub async fn load_or_default<T>(&self) -> crate::Result<T>
    where
        T: DeserializeOwned + Default,
    {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(T::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the document atomically, creating parent directories on
    /// demand.
    pub async fn replace<T>(&self, value: &T) -> crate::Result<()>
    where
        T: Serialize + ?Sized,
    {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(value)?;

        // Write to temporary file first, then atomically rename.
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &json).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        tracing::debug!("Saved document to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("absent.json"));

        let loaded: Vec<String> = store.load_or_default().await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn round_trips_a_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("doc.json"));

        let written = vec!["tt0372784".to_string(), "tt1877830".to_string()];
        store.replace(&written).await.unwrap();

        let loaded: Vec<String> = store.load_or_default().await.unwrap();
        assert_eq!(loaded, written);
    }

    #[tokio::test]
    async fn replace_overwrites_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("doc.json"));

        store.replace(&vec!["a".to_string()]).await.unwrap();
        store.replace(&vec!["b".to_string()]).await.unwrap();

        let loaded: Vec<String> = store.load_or_default().await.unwrap();
        assert_eq!(loaded, vec!["b".to_string()]);
    }

    #[tokio::test]
    async fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("nested/deeper/doc.json"));

        store.replace(&vec![1, 2, 3]).await.unwrap();

        let loaded: Vec<i32> = store.load_or_default().await.unwrap();
        assert_eq!(loaded, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error_not_a_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        tokio::fs::write(&path, "not json").await.unwrap();

        let store = JsonStore::new(path);
        let result: crate::Result<Vec<String>> = store.load_or_default().await;
        assert!(result.is_err());
    }
}
