//! File-backed storage.

use std::{
    collections::BTreeMap,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::{fs, sync::Mutex};
use tracing::debug;

use crate::storage::{KeyValueStorage, StorageError};

type Items = BTreeMap<String, String>;

/// Storage kept in a single JSON object file mapping keys to string values.
///
/// A missing file reads as an empty store. Every write rewrites the whole file through
/// a temporary sibling and a rename.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_items(&self) -> Result<Items, StorageError> {
        match fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Items::new()),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(StorageError::Corrupt),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(Items::new()),
            Err(error) => Err(error.into()),
        }
    }

    async fn write_items(&self, items: &Items) -> Result<(), StorageError> {
        if let Some(parent) = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            fs::create_dir_all(parent).await?;
        }

        let payload = serde_json::to_vec_pretty(items).map_err(StorageError::Encode)?;
        let staging = self.path.with_extension("tmp");

        fs::write(&staging, payload).await?;
        fs::rename(&staging, &self.path).await?;

        debug!(path = %self.path.display(), keys = items.len(), "storage file written");

        Ok(())
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().await;

        Ok(self.read_items().await?.remove(key))
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;

        let mut items = self.read_items().await?;

        items.insert(key.to_string(), value);

        self.write_items(&items).await
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;

        let mut items = self.read_items().await?;

        if items.remove(key).is_none() {
            return Ok(());
        }

        self.write_items(&items).await
    }
}
