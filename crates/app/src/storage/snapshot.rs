//! Persisted cart snapshot.

use std::sync::Arc;

use rocketshoes::cart::Cart;
use tracing::debug;

use crate::storage::{KeyValueStorage, StorageError};

/// Storage key holding the serialized cart.
pub const CART_KEY: &str = "@RocketShoes:cart";

/// Serialized mirror of the cart under [`CART_KEY`].
#[derive(Clone)]
pub struct CartSnapshot {
    storage: Arc<dyn KeyValueStorage>,
}

impl CartSnapshot {
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Read the persisted cart. An absent or empty value is an empty cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Malformed`] if the stored value does not parse as a cart,
    /// or the backend's error if it cannot be read.
    pub async fn load(&self) -> Result<Cart, StorageError> {
        let Some(raw) = self
            .storage
            .get_item(CART_KEY)
            .await?
            .filter(|raw| !raw.is_empty())
        else {
            debug!("no persisted cart, starting empty");

            return Ok(Cart::new());
        };

        serde_json::from_str(&raw).map_err(|source| StorageError::Malformed {
            key: CART_KEY.to_string(),
            source,
        })
    }

    /// Overwrite the persisted cart with `cart`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be encoded or the backend write fails.
    pub async fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        let payload = serde_json::to_string(cart).map_err(StorageError::Encode)?;

        self.storage.set_item(CART_KEY, payload).await
    }

    /// Delete the persisted cart.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the delete fails.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove_item(CART_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use rocketshoes::products::ProductId;
    use testresult::TestResult;

    use crate::{
        storage::{MemoryStorage, MockKeyValueStorage},
        test::helpers::product,
    };

    use super::*;

    #[tokio::test]
    async fn load_absent_key_is_empty_cart() -> TestResult {
        let snapshot = CartSnapshot::new(Arc::new(MemoryStorage::new()));

        assert!(snapshot.load().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn load_empty_value_is_empty_cart() -> TestResult {
        let snapshot = CartSnapshot::new(Arc::new(MemoryStorage::with_item(CART_KEY, "")));

        assert!(snapshot.load().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn load_malformed_value_errors() {
        let snapshot = CartSnapshot::new(Arc::new(MemoryStorage::with_item(CART_KEY, "[{")));

        let result = snapshot.load().await;

        assert!(
            matches!(result, Err(StorageError::Malformed { ref key, .. }) if key == CART_KEY),
            "expected Malformed, got {result:?}"
        );
    }

    #[tokio::test]
    async fn save_then_load_returns_same_cart() -> TestResult {
        let snapshot = CartSnapshot::new(Arc::new(MemoryStorage::new()));
        let cart = Cart::new()
            .with_product(product(1, "Shoe", 100))?
            .with_product(product(2, "Boot", 250))?;

        snapshot.save(&cart).await?;

        assert_eq!(snapshot.load().await?, cart);

        Ok(())
    }

    #[tokio::test]
    async fn save_writes_whole_cart_under_cart_key() -> TestResult {
        let mut storage = MockKeyValueStorage::new();

        storage
            .expect_set_item()
            .once()
            .withf(|key, value| key.to_string() == CART_KEY && value.starts_with(r#"[{"id":1,"#))
            .returning(|_, _| Ok(()));

        storage.expect_get_item().never();
        storage.expect_remove_item().never();

        let snapshot = CartSnapshot::new(Arc::new(storage));
        let cart = Cart::new().with_product(product(1, "Shoe", 100))?;

        snapshot.save(&cart).await?;

        Ok(())
    }

    #[tokio::test]
    async fn clear_removes_cart_key() -> TestResult {
        let storage = Arc::new(MemoryStorage::new());
        let snapshot = CartSnapshot::new(storage.clone());

        snapshot
            .save(&Cart::new().with_product(product(3, "Sandal", 80))?)
            .await?;
        snapshot.clear().await?;

        assert_eq!(storage.get_item(CART_KEY).await?, None);
        assert!(!snapshot.load().await?.contains(ProductId::new(3)));

        Ok(())
    }
}
