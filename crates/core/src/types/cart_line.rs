//! Cart line type.

use serde::{Deserialize, Serialize};

use super::{Price, Product, ProductId};

/// One cart entry: a product id, a snapshot of its name and price, and a
/// quantity.
///
/// The name and price are copied from the [`Product`] when the line is
/// created and are never refreshed from the catalog afterwards.
///
/// ## Constraints
///
/// - `quantity` is at least 1 for as long as the line exists. The cart
///   removes the line instead of letting it reach zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Lookup key into the catalog; not an ownership link.
    pub product_id: ProductId,
    /// Product name at add-time.
    pub name: String,
    /// Unit price at add-time.
    pub price: Price,
    /// Number of units, always >= 1.
    pub quantity: u32,
}

impl CartLine {
    /// Start a new line for `product` with a quantity of one.
    #[must_use]
    pub fn snapshot(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
        }
    }

    /// `price * quantity` for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}
