//! Cart

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{
    errors::{CartDecodeError, CartError},
    products::{Product, ProductId},
};

/// One product line in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Product id
    pub id: ProductId,

    /// Display title
    pub title: String,

    /// Unit price in BRL
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Product image URL
    #[serde(default)]
    pub image: String,

    /// Units of the product in the cart
    pub amount: NonZeroU32,
}

impl CartEntry {
    /// Creates a new entry for the given product with a single unit.
    pub fn new(product: Product) -> Self {
        let Product {
            id,
            title,
            price,
            image,
        } = product;

        Self {
            id,
            title,
            price,
            image,
            amount: NonZeroU32::MIN,
        }
    }
}

/// Shopping cart.
///
/// Entries are keyed by product id, at most one per product, and iterate in the order
/// they were added. Every transition returns a new cart and leaves the receiver as it
/// was. Serializes as a JSON array of entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartEntry>", into = "Vec<CartEntry>")]
pub struct Cart {
    entries: FxHashMap<ProductId, CartEntry>,
    order: SmallVec<[ProductId; 8]>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Check if the cart holds an entry for the product.
    pub fn contains(&self, id: ProductId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Get the entry for the product, if present.
    pub fn get(&self, id: ProductId) -> Option<&CartEntry> {
        self.entries.get(&id)
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartEntry> + '_ {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    /// Total number of units across all entries.
    pub fn item_count(&self) -> u64 {
        self.entries
            .values()
            .map(|entry| u64::from(entry.amount.get()))
            .sum()
    }

    /// Returns a cart with the product appended as a new single-unit entry.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Add`] if the product already has an entry.
    pub fn with_product(&self, product: Product) -> Result<Self, CartError> {
        if self.contains(product.id) {
            return Err(CartError::Add);
        }

        let mut cart = self.clone();

        cart.order.push(product.id);
        cart.entries.insert(product.id, CartEntry::new(product));

        Ok(cart)
    }

    /// Returns a cart without the product's entry.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Remove`] if the product has no entry.
    pub fn without(&self, id: ProductId) -> Result<Self, CartError> {
        if !self.contains(id) {
            return Err(CartError::Remove);
        }

        let mut cart = self.clone();

        cart.entries.remove(&id);
        cart.order.retain(|existing| *existing != id);

        Ok(cart)
    }

    /// Returns a cart with the product's amount replaced.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Update`] if the product has no entry.
    pub fn with_amount(&self, id: ProductId, amount: NonZeroU32) -> Result<Self, CartError> {
        let mut cart = self.clone();

        let entry = cart.entries.get_mut(&id).ok_or(CartError::Update)?;

        entry.amount = amount;

        Ok(cart)
    }
}

impl TryFrom<Vec<CartEntry>> for Cart {
    type Error = CartDecodeError;

    fn try_from(entries: Vec<CartEntry>) -> Result<Self, Self::Error> {
        let mut cart = Cart::default();

        for entry in entries {
            if cart.contains(entry.id) {
                return Err(CartDecodeError::DuplicateEntry(entry.id));
            }

            cart.order.push(entry.id);
            cart.entries.insert(entry.id, entry);
        }

        Ok(cart)
    }
}

impl From<Cart> for Vec<CartEntry> {
    fn from(cart: Cart) -> Self {
        let Cart { mut entries, order } = cart;

        order
            .into_iter()
            .filter_map(|id| entries.remove(&id))
            .collect()
    }
}
