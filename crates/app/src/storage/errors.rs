//! Storage errors.

use std::io;

use thiserror::Error;

/// Errors that can occur when reading or writing storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not be read or written.
    #[error("storage io error")]
    Io(#[from] io::Error),

    /// The storage file is not a JSON object of strings.
    #[error("storage file is corrupt")]
    Corrupt(#[source] serde_json::Error),

    /// A stored value does not parse as the expected type.
    #[error("malformed value stored under {key}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be serialized for storage.
    #[error("failed to encode value")]
    Encode(#[source] serde_json::Error),
}
