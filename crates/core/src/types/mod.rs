//! Core types for shop-cart.
//!
//! This module provides type-safe wrappers for the storefront's domain concepts.

pub mod cart_line;
pub mod error;
pub mod id;
pub mod price;
pub mod product;

pub use cart_line::CartLine;
pub use error::StoreError;
pub use id::*;
pub use price::Price;
pub use product::Product;
