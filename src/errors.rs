//! Cart errors

use thiserror::Error;

use crate::products::ProductId;

/// Failures of cart operations.
///
/// The display text of each variant is the message shown to the shopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CartError {
    /// The product could not be added to the cart.
    #[error("Erro na adição do produto")]
    Add,

    /// The product could not be removed from the cart.
    #[error("Erro na remoção do produto")]
    Remove,

    /// The requested amount could not be applied.
    #[error("Erro na alteração de quantidade do produto")]
    Update,

    /// The requested amount exceeds the available stock.
    #[error("Quantidade solicitada fora de estoque")]
    OutOfStock,
}

/// Errors raised while rebuilding a cart from its serialized entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CartDecodeError {
    /// The same product appears in more than one entry.
    #[error("duplicate cart entry for product {0}")]
    DuplicateEntry(ProductId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_shopper_facing() {
        assert_eq!(CartError::Add.to_string(), "Erro na adição do produto");
        assert_eq!(CartError::Remove.to_string(), "Erro na remoção do produto");
        assert_eq!(
            CartError::Update.to_string(),
            "Erro na alteração de quantidade do produto"
        );
        assert_eq!(
            CartError::OutOfStock.to_string(),
            "Quantidade solicitada fora de estoque"
        );
    }
}
