//! Test Helpers

use std::num::NonZeroU32;

use rocketshoes::{
    cart::Cart,
    errors::CartError,
    products::{Product, ProductId, Stock},
};
use rust_decimal::Decimal;

pub(crate) fn product(id: u64, title: &str, price: i64) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        price: Decimal::new(price, 0),
        image: format!("https://rocketseat-cdn.s3-sa-east-1.amazonaws.com/tenis-{id}.jpg"),
    }
}

pub(crate) fn stock(id: u64, amount: u32) -> Stock {
    Stock {
        id: Some(ProductId::new(id)),
        amount,
    }
}

/// Cart holding `(id, amount)` entries in the given order, priced at 100 each.
pub(crate) fn cart_of(entries: &[(u64, u32)]) -> Result<Cart, CartError> {
    entries.iter().try_fold(Cart::new(), |cart, &(id, amount)| {
        let amount = NonZeroU32::new(amount).ok_or(CartError::Update)?;

        cart.with_product(product(id, &format!("Tênis {id}"), 100))?
            .with_amount(ProductId::new(id), amount)
    })
}
