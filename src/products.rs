//! Products

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::ParseIntError,
    str::FromStr,
};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product identifier as issued by the catalog API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Wrap a raw catalog id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw catalog id.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Product record served by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product id
    pub id: ProductId,

    /// Display title
    pub title: String,

    /// Unit price in BRL
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Product image URL; empty when the catalog omits it
    #[serde(default)]
    pub image: String,
}

/// Stock level for a single product.
///
/// Fetched on demand for validation only; never cached or persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    /// Product id, when the stock service echoes it back
    #[serde(default)]
    pub id: Option<ProductId>,

    /// Units available
    pub amount: u32,
}

impl Stock {
    /// Whether `requested` units can be served from this stock level.
    pub fn covers(&self, requested: u32) -> bool {
        self.amount >= requested
    }
}
