//! Cart store for the RocketShoes storefront, with its catalog client, persistent
//! storage, notifications and runtime setup.

pub mod catalog;
pub mod config;
pub mod context;
pub mod notifications;
pub mod observability;
pub mod storage;
pub mod store;

#[cfg(test)]
mod test;
