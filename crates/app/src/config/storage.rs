//! Storage Config

use std::path::PathBuf;

use clap::Args;

/// Cart persistence settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// File holding persisted storage items
    #[arg(long, env = "STORAGE_PATH", default_value = ".rocketshoes/storage.json")]
    pub storage_path: PathBuf,

    /// Keep the cart in memory only
    #[arg(long, default_value_t = false)]
    pub ephemeral: bool,
}
