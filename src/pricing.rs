//! Prices

use rust_decimal::Decimal;
use rusty_money::{Money, iso};
use thiserror::Error;

use crate::cart::{Cart, CartEntry};

/// Errors that can occur while calculating cart prices.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Decimal arithmetic overflowed.
    #[error("price arithmetic overflowed")]
    Overflow,
}

/// Price of an entry: unit price times amount.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the multiplication overflows.
pub fn subtotal(entry: &CartEntry) -> Result<Decimal, PricingError> {
    entry
        .price
        .checked_mul(Decimal::from(entry.amount.get()))
        .ok_or(PricingError::Overflow)
}

/// Sum of all entry subtotals.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if any subtotal or the running sum overflows.
pub fn total(cart: &Cart) -> Result<Decimal, PricingError> {
    cart.iter().try_fold(Decimal::ZERO, |acc, entry| {
        acc.checked_add(subtotal(entry)?)
            .ok_or(PricingError::Overflow)
    })
}

/// Presents a decimal amount as BRL money.
pub fn to_money(amount: Decimal) -> Money<'static, iso::Currency> {
    Money::from_decimal(amount, iso::BRL)
}
