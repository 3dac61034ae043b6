//! Store error type.

use super::ProductId;

/// Errors reported by catalog and cart operations.
///
/// None of these are fatal: the session turns them into no-ops when
/// dispatching UI commands.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// No product with this id exists in the catalog.
    #[error("product {0} not found in catalog")]
    ProductNotFound(ProductId),
    /// No cart line exists for this product id.
    #[error("product {0} is not in the cart")]
    LineNotFound(ProductId),
    /// The line for this product is already at the largest storable quantity.
    #[error("product {0} is already at the maximum quantity")]
    QuantityLimit(ProductId),
    /// The catalog was built with the same id twice.
    #[error("duplicate product id {0}")]
    DuplicateProductId(ProductId),
    /// Product ids must be strictly positive.
    #[error("invalid product id {0}: must be positive")]
    InvalidProductId(i32),
}

impl StoreError {
    /// Whether this error only means "the referenced id does not exist".
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ProductNotFound(_) | Self::LineNotFound(_))
    }
}
