//! RocketShoes
//!
//! Cart domain for the RocketShoes storefront: catalog products, cart entries, the pure
//! transitions a cart store applies to them and the price totals shown to shoppers.

pub mod cart;
pub mod errors;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod summary;
