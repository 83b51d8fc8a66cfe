//! Cart store errors.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors raised while creating a [`CartStore`](crate::store::CartStore).
#[derive(Debug, Error)]
pub enum StoreInitError {
    /// The persisted cart could not be read or parsed.
    #[error("failed to load persisted cart")]
    Snapshot(#[from] StorageError),
}
