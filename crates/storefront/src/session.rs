//! Storefront session state.
//!
//! A [`Session`] is the single owner of the catalog, the cart and the
//! favorites-only filter for one run of the storefront. The UI layer holds a
//! session, sends it [`Command`]s and renders its [`StorefrontView`].

use shop_cart_core::{Product, StoreError};
use tracing::instrument;

use crate::cart::{Cart, QuantityChange};
use crate::catalog::{Catalog, ListFilter};
use crate::command::Command;
use crate::config::StorefrontConfig;
use crate::seed;
use crate::views::StorefrontView;

/// What a dispatched command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A product's favorite flag now has this value.
    FavoriteToggled { is_favorite: bool },
    /// A cart line now has this quantity.
    LineQuantity { quantity: u32 },
    /// A cart line was removed.
    LineRemoved,
    /// The cart was emptied; `lines` lines were dropped.
    CartCleared { lines: usize },
    /// The favorites-only filter was set.
    FilterSet { favorites_only: bool },
    /// The command was rejected (unknown id, quantity limit) and changed nothing.
    Ignored,
}

/// One shopper's catalog, cart and listing filter.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    cart: Cart,
    favorites_only: bool,
}

impl Session {
    /// Create a session from an existing catalog and cart.
    #[must_use]
    pub const fn new(catalog: Catalog, cart: Cart) -> Self {
        Self {
            catalog,
            cart,
            favorites_only: false,
        }
    }

    /// Create a session from the built-in seed data.
    ///
    /// The seed cart is only loaded when `config.seed_cart` is set.
    #[must_use]
    pub fn seeded(config: &StorefrontConfig) -> Self {
        let catalog = seed::catalog();
        let cart = if config.seed_cart {
            seed::cart(&catalog)
        } else {
            Cart::new()
        };
        tracing::info!(
            products = catalog.len(),
            cart_lines = cart.len(),
            favorites_only = config.favorites_only,
            "Session started"
        );

        Self {
            catalog,
            cart,
            favorites_only: config.favorites_only,
        }
    }

    /// Apply a command, reporting rejections as errors.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ProductNotFound` or `StoreError::LineNotFound`
    /// when the command references an id that does not exist, and
    /// `StoreError::QuantityLimit` when adding to a line already at
    /// `u32::MAX`. State is not modified in either case.
    #[instrument(skip(self, command), fields(command = %command))]
    pub fn try_dispatch(&mut self, command: &Command) -> Result<Outcome, StoreError> {
        let outcome = match *command {
            Command::ToggleFavorite { product_id } => {
                let product = self.catalog.toggle_favorite(product_id)?;
                Outcome::FavoriteToggled {
                    is_favorite: product.is_favorite,
                }
            }
            Command::AddToCart { product_id } => {
                let line = self.cart.add(product_id, &self.catalog)?;
                Outcome::LineQuantity {
                    quantity: line.quantity,
                }
            }
            Command::UpdateQuantity { product_id, delta } => {
                match self.cart.update_quantity(product_id, delta)? {
                    QuantityChange::Updated { quantity } => Outcome::LineQuantity { quantity },
                    QuantityChange::Removed => Outcome::LineRemoved,
                }
            }
            Command::RemoveFromCart { product_id } => {
                self.cart.remove(product_id)?;
                Outcome::LineRemoved
            }
            Command::ClearCart => Outcome::CartCleared {
                lines: self.cart.clear(),
            },
            Command::SetFavoritesOnly { enabled } => {
                self.favorites_only = enabled;
                Outcome::FilterSet {
                    favorites_only: enabled,
                }
            }
        };

        tracing::debug!(?outcome, total = self.cart.total().amount(), "Command applied");
        Ok(outcome)
    }

    /// Apply a command from the UI.
    ///
    /// Rejected commands are silent no-ops and return [`Outcome::Ignored`].
    pub fn dispatch(&mut self, command: &Command) -> Outcome {
        match self.try_dispatch(command) {
            Ok(outcome) => outcome,
            Err(e) if e.is_not_found() => {
                tracing::debug!(error = %e, "Command ignored");
                Outcome::Ignored
            }
            Err(e) => {
                tracing::warn!(error = %e, "Command rejected");
                Outcome::Ignored
            }
        }
    }

    /// Apply a sequence of commands in order.
    pub fn dispatch_all<'a>(
        &mut self,
        commands: impl IntoIterator<Item = &'a Command>,
    ) -> Vec<Outcome> {
        commands.into_iter().map(|c| self.dispatch(c)).collect()
    }

    /// Products visible under the current filter, in display order.
    pub fn visible_products(&self) -> impl Iterator<Item = &Product> {
        self.catalog.list(self.filter())
    }

    /// Snapshot of everything the renderer needs.
    #[must_use]
    pub fn view(&self) -> StorefrontView {
        StorefrontView::new(self)
    }

    #[must_use]
    pub const fn filter(&self) -> ListFilter {
        ListFilter {
            favorites_only: self.favorites_only,
        }
    }

    #[must_use]
    pub const fn favorites_only(&self) -> bool {
        self.favorites_only
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::seeded(&StorefrontConfig::default())
    }
}
