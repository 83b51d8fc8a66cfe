//! Catalog Config

use clap::Args;

/// Product catalog API settings.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// Base URL of the catalog API
    #[arg(long, env = "API_URL", default_value = "http://localhost:3333")]
    pub api_url: String,
}
