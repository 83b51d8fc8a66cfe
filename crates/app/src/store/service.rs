//! Cart store service.

use std::{num::NonZeroU32, sync::Arc};

use rocketshoes::{cart::Cart, errors::CartError, products::ProductId};
use tokio::sync::{Mutex, watch};
use tracing::{error, info, warn};

use crate::{
    catalog::CatalogService,
    notifications::Notifier,
    storage::{CartSnapshot, KeyValueStorage},
    store::{StoreInitError, UpdateProductAmount},
};

/// Owns the shopper's cart.
///
/// Every operation validates against the current cart (and the catalog for adds and
/// amount changes), writes the new cart to storage and only then publishes it to
/// subscribers. A failed operation notifies the shopper once and changes nothing.
///
/// Adds and amount changes read the current cart before their catalog lookup, so
/// overlapping operations on the same product are last-write-wins. Writing the snapshot
/// and publishing the cart happen under one lock, so the persisted cart and
/// [`CartStore::cart`] always change together.
pub struct CartStore {
    catalog: Arc<dyn CatalogService>,
    snapshot: CartSnapshot,
    notifier: Arc<dyn Notifier>,
    state: watch::Sender<Cart>,
    writes: Mutex<()>,
}

impl CartStore {
    /// Create a store around an already loaded cart.
    #[must_use]
    pub fn new(
        catalog: Arc<dyn CatalogService>,
        storage: Arc<dyn KeyValueStorage>,
        notifier: Arc<dyn Notifier>,
        cart: Cart,
    ) -> Self {
        let (state, _) = watch::channel(cart);

        Self {
            catalog,
            snapshot: CartSnapshot::new(storage),
            notifier,
            state,
            writes: Mutex::new(()),
        }
    }

    /// Create a store from the cart persisted in `storage`.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted cart cannot be read or parsed.
    pub async fn load(
        catalog: Arc<dyn CatalogService>,
        storage: Arc<dyn KeyValueStorage>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, StoreInitError> {
        let cart = CartSnapshot::new(storage.clone()).load().await?;

        info!(entries = cart.len(), "cart restored");

        Ok(Self::new(catalog, storage, notifier, cart))
    }

    /// Current cart.
    pub fn cart(&self) -> Cart {
        self.state.borrow().clone()
    }

    /// Receive every cart published after a successful operation.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.state.subscribe()
    }

    /// Add one unit of a product.
    ///
    /// A product already in the cart has its amount raised by one, subject to stock.
    ///
    /// # Errors
    ///
    /// [`CartError::Add`] when the catalog has no such product or cannot be reached, or
    /// the errors of [`CartStore::update_product_amount`] for products already present.
    #[tracing::instrument(name = "cart.store.add_product", skip(self), fields(product_id = %product_id))]
    pub async fn add_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        let result = self.try_add_product(product_id).await;

        self.report(result)
    }

    /// Remove a product's entry.
    ///
    /// # Errors
    ///
    /// [`CartError::Remove`] when the product is not in the cart or the cart cannot be
    /// persisted.
    #[tracing::instrument(name = "cart.store.remove_product", skip(self), fields(product_id = %product_id))]
    pub async fn remove_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        let result = self.try_remove_product(product_id).await;

        self.report(result)
    }

    /// Set the amount of a product already in the cart.
    ///
    /// # Errors
    ///
    /// [`CartError::Update`] for non-positive amounts, products not in the cart, failed
    /// stock lookups or failed writes; [`CartError::OutOfStock`] when the stock cannot
    /// cover the amount.
    #[tracing::instrument(
        name = "cart.store.update_product_amount",
        skip(self, request),
        fields(product_id = %request.product_id, amount = request.amount)
    )]
    pub async fn update_product_amount(
        &self,
        request: UpdateProductAmount,
    ) -> Result<Cart, CartError> {
        let result = self.try_update_product_amount(request).await;

        self.report(result)
    }

    /// Empty the cart and delete its persisted copy.
    ///
    /// # Errors
    ///
    /// [`CartError::Remove`] when the persisted copy cannot be deleted.
    pub async fn clear(&self) -> Result<Cart, CartError> {
        let _guard = self.writes.lock().await;

        let result = match self.snapshot.clear().await {
            Ok(()) => {
                self.state.send_replace(Cart::new());

                info!("cart cleared");

                Ok(Cart::new())
            }
            Err(source) => {
                error!(error = %source, "failed to clear persisted cart");

                Err(CartError::Remove)
            }
        };

        self.report(result)
    }

    async fn try_add_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        let cart = self.cart();

        if let Some(entry) = cart.get(product_id) {
            let amount = i64::from(entry.amount.get()) + 1;

            return self
                .try_update_product_amount(UpdateProductAmount { product_id, amount })
                .await;
        }

        let product = self
            .catalog
            .get_product(product_id)
            .await
            .map_err(|source| {
                error!(error = %source, "product lookup failed");

                CartError::Add
            })?;

        let Some(product) = product.filter(|product| product.id == product_id) else {
            warn!("product not found in catalog");

            return Err(CartError::Add);
        };

        let cart = cart.with_product(product)?;

        self.commit(cart, CartError::Add).await
    }

    async fn try_remove_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        let _guard = self.writes.lock().await;

        let cart = self.cart().without(product_id).inspect_err(|_| {
            warn!("product not in cart");
        })?;

        self.persist(cart, CartError::Remove).await
    }

    async fn try_update_product_amount(
        &self,
        request: UpdateProductAmount,
    ) -> Result<Cart, CartError> {
        let UpdateProductAmount { product_id, amount } = request;

        let Some(amount) = u32::try_from(amount).ok().and_then(NonZeroU32::new) else {
            warn!(amount, "rejected amount");

            return Err(CartError::Update);
        };

        let cart = self.cart();

        if !cart.contains(product_id) {
            warn!("product not in cart");

            return Err(CartError::Update);
        }

        let stock = self
            .catalog
            .get_stock(product_id)
            .await
            .map_err(|source| {
                error!(error = %source, "stock lookup failed");

                CartError::Update
            })?;

        if let Some(stock) = stock.filter(|stock| !stock.covers(amount.get())) {
            warn!(
                requested = amount.get(),
                available = stock.amount,
                "requested amount out of stock"
            );

            return Err(CartError::OutOfStock);
        }

        let cart = cart.with_amount(product_id, amount)?;

        self.commit(cart, CartError::Update).await
    }

    async fn commit(&self, cart: Cart, failure: CartError) -> Result<Cart, CartError> {
        let _guard = self.writes.lock().await;

        self.persist(cart, failure).await
    }

    /// Save then publish. Callers hold `writes`.
    async fn persist(&self, cart: Cart, failure: CartError) -> Result<Cart, CartError> {
        if let Err(source) = self.snapshot.save(&cart).await {
            error!(error = %source, "failed to persist cart");

            return Err(failure);
        }

        self.state.send_replace(cart.clone());

        info!(entries = cart.len(), items = cart.item_count(), "cart updated");

        Ok(cart)
    }

    fn report(&self, result: Result<Cart, CartError>) -> Result<Cart, CartError> {
        result.inspect_err(|error| self.notifier.error(&error.to_string()))
    }
}
