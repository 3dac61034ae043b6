//! shop-cart storefront - Catalog and cart state model.
//!
//! # Architecture
//!
//! - [`catalog`] - Ordered product list with favorite flags and filtering
//! - [`cart`] - Cart lines with quantity controls and a running total
//! - [`session`] - Single owner of catalog, cart and filter; applies [`Command`]s
//! - [`command`] - Typed UI events with serde and text forms
//! - [`views`] - Display-ready snapshots for a renderer
//! - [`seed`] - Built-in products and starting cart
//! - [`config`] - Environment configuration
//!
//! Everything is synchronous and single-threaded: a command is applied in
//! full through `&mut Session` before the next one can start.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod command;
pub mod config;
pub mod seed;
pub mod session;
pub mod views;

pub use cart::{Cart, QuantityChange};
pub use catalog::{Catalog, ListFilter};
pub use command::{Command, ParseCommandError};
pub use config::{ConfigError, StorefrontConfig};
pub use session::{Outcome, Session};
pub use views::{CartLineView, CartView, ProductCardView, StorefrontView};
