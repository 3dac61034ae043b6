//! Render-ready view models.
//!
//! Views carry display strings (formatted prices, labels) so a renderer only
//! has to lay them out. They serialize to JSON for non-Rust front ends.

use serde::Serialize;
use shop_cart_core::{CartLine, Product, ProductId};

use crate::cart::Cart;
use crate::session::Session;

/// Page heading.
pub const PAGE_TITLE: &str = "상품 목록";
/// Label of the favorites-only checkbox.
pub const FAVORITES_ONLY_LABEL: &str = "즐겨찾기만 보기";
/// Heading of the cart sidebar.
pub const CART_TITLE: &str = "장바구니";
/// Shown in place of cart lines when the cart is empty.
pub const EMPTY_CART_MESSAGE: &str = "장바구니가 비어있습니다";
/// Label in front of the cart total.
pub const TOTAL_LABEL: &str = "합계";

/// Product card display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCardView {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub image_url: String,
    pub is_favorite: bool,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price.to_string(),
            image_url: product.image_url.clone(),
            is_favorite: product.is_favorite,
        }
    }
}

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineView {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub quantity: u32,
    pub line_price: String,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.product_id,
            name: line.name.clone(),
            price: line.price.to_string(),
            quantity: line.quantity,
            line_price: line.line_total().to_string(),
        }
    }
}

/// Cart sidebar display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub total: String,
    pub item_count: u32,
    pub is_empty: bool,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartLineView::from).collect(),
            total: cart.total().to_string(),
            item_count: cart.item_count(),
            is_empty: cart.is_empty(),
        }
    }
}

/// Everything shown on the storefront page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorefrontView {
    pub title: &'static str,
    pub favorites_only: bool,
    pub products: Vec<ProductCardView>,
    pub cart: CartView,
}

impl StorefrontView {
    /// Build the view of a session's current state.
    #[must_use]
    pub fn new(session: &Session) -> Self {
        Self {
            title: PAGE_TITLE,
            favorites_only: session.favorites_only(),
            products: session
                .visible_products()
                .map(ProductCardView::from)
                .collect(),
            cart: CartView::from(session.cart()),
        }
    }

    /// Serialize the view as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
