//! HTTP client for the storefront catalog API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use rocketshoes::products::{Product, ProductId, Stock};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::catalog::{CatalogError, CatalogService};

/// Catalog client backed by the storefront REST API.
///
/// Products are served from `GET {base_url}/products/{id}` and stock levels from
/// `GET {base_url}/stock/{id}`.
#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    base_url: String,
    http: Client,
}

impl HttpCatalogService {
    /// Create a new client for the API rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client reusing an existing `reqwest` client.
    #[must_use]
    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self { base_url, http }
    }

    /// API root this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch<T>(&self, path: &str) -> Result<Option<T>, CatalogError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{path}", self.base_url);

        debug!(%url, "catalog request");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();

            return Err(CatalogError::UnexpectedResponse(format!(
                "GET {url} failed with status {status}: {text}"
            )));
        }

        let body = response.bytes().await?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    async fn get_product(&self, product: ProductId) -> Result<Option<Product>, CatalogError> {
        self.fetch(&format!("products/{product}")).await
    }

    async fn get_stock(&self, product: ProductId) -> Result<Option<Stock>, CatalogError> {
        self.fetch(&format!("stock/{product}")).await
    }
}
