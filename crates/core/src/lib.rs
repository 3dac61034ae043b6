//! shop-cart core - Shared types library.
//!
//! This crate provides the types used across all shop-cart components:
//! - `storefront` - Catalog, cart and session state model
//! - `cli` - Terminal front end that renders the storefront and feeds it commands
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no session state, no
//! rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Typed IDs, prices, products, cart lines and the store error

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
