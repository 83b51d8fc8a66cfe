//! Storage backend.

use async_trait::async_trait;
use mockall::automock;

use crate::storage::StorageError;

/// String key-value store with `localStorage` semantics.
#[automock]
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: String) -> Result<(), StorageError>;

    /// Delete the value stored under `key`, if any.
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
