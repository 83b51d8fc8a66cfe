//! Application configuration

use clap::Args;

pub use catalog::CatalogConfig;
pub use observability::{LogFormat, LoggingConfig};
pub use storage::StorageConfig;

mod catalog;
mod observability;
mod storage;

/// Settings shared by every entry point.
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Product catalog settings.
    #[command(flatten)]
    pub catalog: CatalogConfig,

    /// Cart persistence settings.
    #[command(flatten)]
    pub storage: StorageConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}
