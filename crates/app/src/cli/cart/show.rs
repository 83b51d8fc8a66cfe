use std::io;

use rocketshoes::{cart::Cart, summary::CartSummary};
use rocketshoes_app::context::AppContext;

pub(crate) fn run(ctx: &AppContext) -> Result<(), String> {
    print(&ctx.store.cart())
}

pub(super) fn print(cart: &Cart) -> Result<(), String> {
    let summary = CartSummary::from_cart(cart)
        .map_err(|error| format!("failed to summarise cart: {error}"))?;

    summary
        .write_to(io::stdout().lock())
        .map_err(|error| format!("failed to print cart: {error}"))
}
