//! Terminal rendering of the storefront view.

use std::io::{self, Write};

use shop_cart_storefront::views::{
    CART_TITLE, EMPTY_CART_MESSAGE, FAVORITES_ONLY_LABEL, TOTAL_LABEL,
};
use shop_cart_storefront::{CartView, ProductCardView, StorefrontView};

/// Output format for rendered views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    pub const fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

/// Write `view` to `out` in the requested format.
///
/// # Errors
///
/// Returns an error if writing fails or the view cannot be serialized.
pub fn write_view(
    out: &mut impl Write,
    view: &StorefrontView,
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        Format::Json => writeln!(out, "{}", view.to_json()?)?,
        Format::Text => write_text(out, view)?,
    }
    Ok(())
}

fn write_text(out: &mut impl Write, view: &StorefrontView) -> io::Result<()> {
    let filter = if view.favorites_only { "on" } else { "off" };
    writeln!(out, "{}  [{FAVORITES_ONLY_LABEL}: {filter}]", view.title)?;
    for product in &view.products {
        write_product(out, product)?;
    }
    writeln!(out)?;
    write_cart(out, &view.cart)
}

fn write_product(out: &mut impl Write, product: &ProductCardView) -> io::Result<()> {
    let star = if product.is_favorite { '★' } else { '☆' };
    writeln!(
        out,
        "{star} [{}] {}  {}",
        product.id, product.name, product.price
    )
}

fn write_cart(out: &mut impl Write, cart: &CartView) -> io::Result<()> {
    writeln!(out, "{CART_TITLE} ({})", cart.item_count)?;
    if cart.is_empty {
        writeln!(out, "  {EMPTY_CART_MESSAGE}")?;
    }
    for item in &cart.items {
        writeln!(
            out,
            "  [{}] {}  {} x {} = {}",
            item.id, item.name, item.price, item.quantity, item.line_price
        )?;
    }
    writeln!(out, "{TOTAL_LABEL}: {}", cart.total)
}
