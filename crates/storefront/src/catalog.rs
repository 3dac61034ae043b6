//! Product catalog.
//!
//! Holds the fixed, ordered product list and the shopper's favorite flags.
//! Order is display order and never changes after construction.

use std::collections::HashSet;

use shop_cart_core::{Product, ProductId, StoreError};

/// Listing filter applied by [`Catalog::list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListFilter {
    /// Restrict the listing to favorited products.
    pub favorites_only: bool,
}

impl ListFilter {
    /// Every product.
    pub const ALL: Self = Self {
        favorites_only: false,
    };

    /// Favorited products only.
    pub const FAVORITES: Self = Self {
        favorites_only: true,
    };
}

/// Ordered product collection with unique, positive ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products in display order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidProductId` if an id is not strictly positive,
    /// or `StoreError::DuplicateProductId` if an id appears twice.
    pub fn new(products: Vec<Product>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !product.id.is_positive() {
                return Err(StoreError::InvalidProductId(product.id.as_i32()));
            }
            if !seen.insert(product.id) {
                return Err(StoreError::DuplicateProductId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Flip the favorite flag of one product and return it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ProductNotFound` if no product has this id. The
    /// catalog is left untouched in that case.
    pub fn toggle_favorite(&mut self, id: ProductId) -> Result<&Product, StoreError> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::ProductNotFound(id))?;
        product.is_favorite = !product.is_favorite;
        Ok(product)
    }

    /// Products matching `filter`, in display order.
    pub fn list(&self, filter: ListFilter) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |p| !filter.favorites_only || p.is_favorite)
    }

    /// All products in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
