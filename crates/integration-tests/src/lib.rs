//! Integration tests for the shop-cart storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shop-cart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_scenarios` - Seeded session walkthroughs driven by commands
//! - `cart_properties` - Property tests over random command sequences
//!
//! The helpers below are shared by both.

use shop_cart_core::ProductId;
use shop_cart_storefront::{Command, Session, StorefrontConfig};

/// A session with the seed catalog and cart and the filter off.
#[must_use]
pub fn seeded_session() -> Session {
    Session::seeded(&StorefrontConfig::default())
}

/// A session with the seed catalog and an empty cart.
#[must_use]
pub fn empty_cart_session() -> Session {
    Session::seeded(&StorefrontConfig {
        seed_cart: false,
        favorites_only: false,
    })
}

/// Shorthand for `ProductId::new`.
#[must_use]
pub const fn pid(id: i32) -> ProductId {
    ProductId::new(id)
}

/// Parse text-form commands.
///
/// # Panics
///
/// Panics if a command does not parse.
#[must_use]
pub fn commands(lines: &[&str]) -> Vec<Command> {
    lines
        .iter()
        .map(|line| {
            line.parse()
                .unwrap_or_else(|e| panic!("bad test command {line:?}: {e}"))
        })
        .collect()
}

/// Visible product ids, in display order.
#[must_use]
pub fn visible_ids(session: &Session) -> Vec<i32> {
    session.visible_products().map(|p| p.id.as_i32()).collect()
}
