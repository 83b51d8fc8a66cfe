//! Cart store models.

use rocketshoes::products::ProductId;

/// Request to set the amount of a product already in the cart.
///
/// `amount` is taken as entered, so zero and negative values reach validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    /// Product whose entry changes.
    pub product_id: ProductId,

    /// Requested amount; must be at least 1.
    pub amount: i64,
}
