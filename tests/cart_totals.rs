//! Cart transitions and totals through the public API.

use std::num::NonZeroU32;

use rocketshoes::prelude::*;
use rust_decimal::Decimal;
use testresult::TestResult;

fn product(id: u64, title: &str, price: Decimal) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        price,
        image: format!("https://rocketseat-cdn.s3-sa-east-1.amazonaws.com/tenis-{id}.jpg"),
    }
}

#[test]
fn shopping_session_totals() -> TestResult {
    let amount = NonZeroU32::new(3).ok_or("zero amount")?;

    let cart = Cart::new()
        .with_product(product(1, "Tênis de Caminhada", Decimal::new(17_990, 2)))?
        .with_product(product(2, "Tênis VR Caminhada", Decimal::new(13_990, 2)))?
        .with_product(product(3, "Tênis Adidas Duramo", Decimal::new(21_990, 2)))?
        .with_amount(ProductId::new(2), amount)?
        .without(ProductId::new(3))?;

    assert_eq!(cart.len(), 2);
    assert_eq!(cart.item_count(), 4);
    assert_eq!(total(&cart)?, Decimal::new(59_960, 2));

    let summary = CartSummary::from_cart(&cart)?;

    assert_eq!(summary.total_amount(), Decimal::new(59_960, 2));
    assert_eq!(summary.item_count(), 4);
    assert_eq!(summary.total(), to_money(Decimal::new(59_960, 2)));

    Ok(())
}

#[test]
fn rejected_transitions_leave_cart_untouched() -> TestResult {
    let cart = Cart::new().with_product(product(1, "Tênis", Decimal::new(100, 0)))?;

    assert_eq!(
        cart.with_product(product(1, "Tênis", Decimal::new(100, 0))),
        Err(CartError::Add)
    );
    assert_eq!(cart.without(ProductId::new(2)), Err(CartError::Remove));
    assert_eq!(
        cart.with_amount(ProductId::new(2), NonZeroU32::MIN),
        Err(CartError::Update)
    );
    assert_eq!(cart.len(), 1);

    Ok(())
}

#[test]
fn summary_table_lists_entries_in_cart_order() -> TestResult {
    let cart = Cart::new()
        .with_product(product(7, "Bota", Decimal::new(250, 0)))?
        .with_product(product(4, "Sandália", Decimal::new(80, 0)))?;

    let mut out = Vec::new();

    CartSummary::from_cart(&cart)?.write_to(&mut out)?;

    let rendered = String::from_utf8(out)?;
    let bota = rendered.find("Bota").ok_or("missing Bota")?;
    let sandalia = rendered.find("Sandália").ok_or("missing Sandália")?;

    assert!(bota < sandalia, "entries out of order:\n{rendered}");
    assert!(rendered.contains("Itens: 2"), "missing item count:\n{rendered}");

    Ok(())
}
