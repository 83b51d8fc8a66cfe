//! Cart Summary

use std::io;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::Cart,
    pricing::{PricingError, subtotal, to_money, total},
};

/// Errors that can occur when building or writing a cart summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Error calculating prices for the cart.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// IO error
    #[error("IO error")]
    IO(#[from] io::Error),
}

/// Priced view of a single cart entry.
#[derive(Debug, Clone)]
pub struct SummaryLine {
    /// Product id
    pub id: u64,

    /// Display title
    pub title: String,

    /// Unit price
    pub price: Money<'static, Currency>,

    /// Units in the cart
    pub amount: u32,

    /// Unit price times amount
    pub subtotal: Money<'static, Currency>,
}

/// Priced view of a whole cart, as shown on the cart page.
#[derive(Debug, Clone)]
pub struct CartSummary {
    lines: SmallVec<[SummaryLine; 8]>,
    total: Money<'static, Currency>,
    item_count: u64,
}

impl CartSummary {
    /// Price every entry of the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`SummaryError::Pricing`] if a subtotal or the total overflows.
    pub fn from_cart(cart: &Cart) -> Result<Self, SummaryError> {
        let lines = cart
            .iter()
            .map(|entry| -> Result<SummaryLine, PricingError> {
                Ok(SummaryLine {
                    id: entry.id.get(),
                    title: entry.title.clone(),
                    price: to_money(entry.price),
                    amount: entry.amount.get(),
                    subtotal: to_money(subtotal(entry)?),
                })
            })
            .collect::<Result<SmallVec<_>, PricingError>>()?;

        Ok(Self {
            lines,
            total: to_money(total(cart)?),
            item_count: cart.item_count(),
        })
    }

    /// Priced lines in cart order.
    pub fn lines(&self) -> &[SummaryLine] {
        &self.lines
    }

    /// Cart total.
    pub fn total(&self) -> Money<'static, Currency> {
        self.total
    }

    /// Total amount as a plain decimal.
    pub fn total_amount(&self) -> Decimal {
        *self.total.amount()
    }

    /// Total number of units.
    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    /// Writes the summary as a table followed by the total.
    ///
    /// # Errors
    ///
    /// Returns a [`SummaryError::IO`] if writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), SummaryError> {
        if self.lines.is_empty() {
            writeln!(out, "Carrinho vazio")?;

            return Ok(());
        }

        let mut builder = Builder::default();

        builder.push_record(["ID", "Produto", "Preço", "Qtd", "Subtotal"]);

        for line in &self.lines {
            builder.push_record([
                line.id.to_string(),
                line.title.clone(),
                line.price.to_string(),
                line.amount.to_string(),
                line.subtotal.to_string(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(2..), Alignment::right());
        table.modify(Rows::first(), Alignment::center());

        writeln!(out, "{table}")?;
        writeln!(out, " Itens: {}", self.item_count)?;
        writeln!(out, " Total: {}", self.total)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use testresult::TestResult;

    use crate::products::{Product, ProductId};

    use super::*;

    fn cart() -> TestResult<Cart> {
        let cart = Cart::new()
            .with_product(Product {
                id: ProductId::new(1),
                title: "Tênis de Caminhada Leve Confortável".to_string(),
                price: Decimal::new(1799, 1),
                image: String::new(),
            })?
            .with_product(Product {
                id: ProductId::new(2),
                title: "Tênis VR Caminhada Confortável Detalhes Couro Masculino".to_string(),
                price: Decimal::new(1399, 1),
                image: String::new(),
            })?
            .with_amount(ProductId::new(2), NonZeroU32::new(2).ok_or("zero")?)?;

        Ok(cart)
    }

    #[test]
    fn from_cart_prices_each_line() -> TestResult {
        let summary = CartSummary::from_cart(&cart()?)?;

        let [first, second] = summary.lines() else {
            return Err("expected two lines".into());
        };

        assert_eq!(first.id, 1);
        assert_eq!(first.subtotal.to_minor_units(), 17_990);
        assert_eq!(second.amount, 2);
        assert_eq!(second.subtotal.to_minor_units(), 27_980);
        assert_eq!(summary.total_amount(), Decimal::new(4597, 1));
        assert_eq!(summary.item_count(), 3);

        Ok(())
    }

    #[test]
    fn write_to_renders_table_and_total() -> TestResult {
        let summary = CartSummary::from_cart(&cart()?)?;
        let mut out = Vec::new();

        summary.write_to(&mut out)?;

        let rendered = String::from_utf8(out)?;

        assert!(rendered.contains("Produto"), "missing header: {rendered}");
        assert!(
            rendered.contains("Tênis de Caminhada Leve Confortável"),
            "missing product: {rendered}"
        );
        assert!(rendered.contains("Total:"), "missing total: {rendered}");

        Ok(())
    }

    #[test]
    fn write_to_empty_cart() -> TestResult {
        let summary = CartSummary::from_cart(&Cart::new())?;
        let mut out = Vec::new();

        summary.write_to(&mut out)?;

        assert_eq!(String::from_utf8(out)?, "Carrinho vazio\n");

        Ok(())
    }
}
