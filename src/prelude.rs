//! RocketShoes prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartEntry},
    errors::{CartDecodeError, CartError},
    pricing::{PricingError, subtotal, to_money, total},
    products::{Product, ProductId, Stock},
    summary::{CartSummary, SummaryError},
};
