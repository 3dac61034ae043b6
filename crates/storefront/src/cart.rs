//! Shopping cart.
//!
//! A line is created by the first [`Cart::add`] of a product and lives until a
//! quantity change drives it to zero, it is removed, or the cart is cleared.
//! Lines keep the name and price the product had when it was first added.
//!
//! Quantities are `u32`. [`Cart::add`] refuses to go past `u32::MAX`, while
//! [`Cart::update_quantity`] clamps to it.

use shop_cart_core::{CartLine, Price, ProductId, StoreError};

use crate::catalog::Catalog;

/// Result of a successful [`Cart::update_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The line is still present with this quantity.
    Updated { quantity: u32 },
    /// The quantity dropped to zero or below and the line was removed.
    Removed,
}

/// Ordered cart lines, at most one per product id.
///
/// Lines can only be created through [`Cart::add`], so there is no
/// deserialization path that could skip its checks:
///
/// ```compile_fail
/// use shop_cart_storefront::Cart;
///
/// let cart: Cart = serde_json::from_str(r#"{"lines": []}"#).unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of a catalog product.
    ///
    /// Increments the existing line if the product is already in the cart,
    /// otherwise appends a new line snapshotting the product's name and price.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ProductNotFound` if the catalog has no such product,
    /// or `StoreError::QuantityLimit` if the line is already at `u32::MAX`.
    /// The cart is unchanged in both cases.
    pub fn add(&mut self, id: ProductId, catalog: &Catalog) -> Result<&CartLine, StoreError> {
        let product = catalog.get(id).ok_or(StoreError::ProductNotFound(id))?;

        let idx = if let Some(idx) = self.position(id) {
            let line = self.lines.get_mut(idx).ok_or(StoreError::LineNotFound(id))?;
            line.quantity = line
                .quantity
                .checked_add(1)
                .ok_or(StoreError::QuantityLimit(id))?;
            idx
        } else {
            self.lines.push(CartLine::snapshot(product));
            self.lines.len() - 1
        };

        self.lines.get(idx).ok_or(StoreError::LineNotFound(id))
    }

    /// Change a line's quantity by `delta`.
    ///
    /// A resulting quantity of zero or less removes the line. Results above
    /// `u32::MAX` are clamped to it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LineNotFound` if the product is not in the cart.
    pub fn update_quantity(
        &mut self,
        id: ProductId,
        delta: i64,
    ) -> Result<QuantityChange, StoreError> {
        let idx = self.position(id).ok_or(StoreError::LineNotFound(id))?;
        let line = self.lines.get_mut(idx).ok_or(StoreError::LineNotFound(id))?;

        let new_quantity = i64::from(line.quantity).saturating_add(delta);
        if new_quantity > 0 {
            line.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
            Ok(QuantityChange::Updated {
                quantity: line.quantity,
            })
        } else {
            self.lines.remove(idx);
            Ok(QuantityChange::Removed)
        }
    }

    /// Remove a line and return it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LineNotFound` if the product is not in the cart.
    pub fn remove(&mut self, id: ProductId) -> Result<CartLine, StoreError> {
        let idx = self.position(id).ok_or(StoreError::LineNotFound(id))?;
        Ok(self.lines.remove(idx))
    }

    /// Empty the cart, returning how many lines were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.lines.len();
        self.lines.clear();
        removed
    }

    /// Sum of `price * quantity` over all lines; zero when empty.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }

    /// The line for `id`, if present.
    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == id)
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.lines.iter().position(|l| l.product_id == id)
    }
}
