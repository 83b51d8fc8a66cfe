//! Cart Store

pub mod errors;
pub mod models;
pub mod service;

pub use errors::StoreInitError;
pub use models::UpdateProductAmount;
pub use service::CartStore;
