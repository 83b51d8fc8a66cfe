//! Catalog

mod errors;
pub mod http;
mod service;

pub use errors::CatalogError;
pub use http::HttpCatalogService;
pub use service::*;
