//! Catalog product type.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A purchasable product as listed in the catalog.
///
/// Everything except `is_favorite` is fixed for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, strictly positive identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in whole won.
    pub price: Price,
    /// Opaque reference to the product image.
    pub image_url: String,
    /// Whether the shopper starred this product.
    pub is_favorite: bool,
}

impl Product {
    /// Create a new, non-favorited product.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image_url: image_url.into(),
            is_favorite: false,
        }
    }

    /// Builder-style setter for the initial favorite flag.
    #[must_use]
    pub const fn favorited(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }
}
