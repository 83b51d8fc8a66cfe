//! Persistent key-value storage for cart snapshots.

mod backend;
mod errors;
pub mod file;
pub mod memory;
mod snapshot;

pub use backend::*;
pub use errors::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use snapshot::{CART_KEY, CartSnapshot};
