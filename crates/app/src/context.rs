//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    catalog::HttpCatalogService,
    config::AppConfig,
    notifications::{Notifier, TracingNotifier},
    storage::{FileStorage, KeyValueStorage, MemoryStorage},
    store::{CartStore, StoreInitError},
};

/// Errors raised while building the [`AppContext`].
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The cart store could not be loaded.
    #[error("failed to load cart store")]
    Store(#[source] StoreInitError),
}

/// Services shared by every entry point.
#[derive(Clone)]
pub struct AppContext {
    /// The shopper's cart.
    pub store: Arc<CartStore>,
}

impl AppContext {
    /// Build application context from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the persisted cart cannot be loaded.
    pub async fn from_config(config: &AppConfig) -> Result<Self, AppInitError> {
        let storage: Arc<dyn KeyValueStorage> = if config.storage.ephemeral {
            info!("using in-memory storage");

            Arc::new(MemoryStorage::new())
        } else {
            info!(path = %config.storage.storage_path.display(), "using file storage");

            Arc::new(FileStorage::new(&config.storage.storage_path))
        };

        let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);

        let store = CartStore::load(
            Arc::new(HttpCatalogService::new(&config.catalog.api_url)),
            storage,
            notifier,
        )
        .await
        .map_err(AppInitError::Store)?;

        Ok(Self {
            store: Arc::new(store),
        })
    }
}
