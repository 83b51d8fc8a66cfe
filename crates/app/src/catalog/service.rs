//! Catalog service.

use async_trait::async_trait;
use mockall::automock;
use rocketshoes::products::{Product, ProductId, Stock};

use crate::catalog::CatalogError;

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieve a single product, `None` when the catalog has no record for it.
    async fn get_product(&self, product: ProductId) -> Result<Option<Product>, CatalogError>;

    /// Retrieve the current stock level of a product, `None` when no stock is recorded.
    async fn get_stock(&self, product: ProductId) -> Result<Option<Stock>, CatalogError>;
}
