//! Built-in seed data loaded at session start.
//!
//! The seed cart uses product 2 (청바지) for the jeans line.

use shop_cart_core::{Price, Product, ProductId};

use crate::cart::Cart;
use crate::catalog::Catalog;

const IMAGE_BASE: &str = "https://images.unsplash.com";
const IMAGE_PARAMS: &str = "?w=200&h=200&fit=crop";

/// `(id, name, price, image path, favorited)` in display order.
const PRODUCTS: &[(i32, &str, u64, &str, bool)] = &[
    (1, "티셔츠", 19_000, "photo-1521572163474-6864f9cf17ab", true),
    (2, "청바지", 42_000, "photo-1542272604-787c3835535d", false),
    (3, "모자", 14_000, "photo-1521369909029-2afed882baee", false),
    (4, "운동화", 68_000, "photo-1549298916-b41d501d3772", false),
    (5, "후드", 53_000, "photo-1556821840-3a63f95609a7", false),
    (6, "가방", 48_000, "photo-1553062407-98eeb64c6a62", true),
];

/// `(product id, quantity)` of the starting cart.
const CART: &[(i32, u32)] = &[(2, 4), (5, 1)];

/// The seed products, in display order.
#[must_use]
pub fn products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|&(id, name, price, image, favorite)| {
            Product::new(
                ProductId::new(id),
                name,
                Price::new(price),
                format!("{IMAGE_BASE}/{image}{IMAGE_PARAMS}"),
            )
            .favorited(favorite)
        })
        .collect()
}

/// The seed catalog.
///
/// # Panics
///
/// Panics if the seed table above has a duplicate or non-positive id.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(products()).expect("seed products have unique positive ids")
}

/// The starting cart, built by adding seed products through `catalog` so
/// each line snapshots the catalog's name and price.
///
/// Seed entries whose product is missing from `catalog` are skipped.
#[must_use]
pub fn cart(catalog: &Catalog) -> Cart {
    let mut cart = Cart::new();
    for &(id, quantity) in CART {
        for _ in 0..quantity {
            if let Err(e) = cart.add(ProductId::new(id), catalog) {
                tracing::warn!(error = %e, "Skipping seed cart entry");
                break;
            }
        }
    }
    cart
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_builds() {
        let catalog = Catalog::new(products()).unwrap();
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn test_seed_prices_and_favorites() {
        let catalog = catalog();
        let prices: Vec<u64> = catalog.iter().map(|p| p.price.amount()).collect();
        assert_eq!(prices, vec![19_000, 42_000, 14_000, 68_000, 53_000, 48_000]);

        let favorites: Vec<i32> = catalog
            .iter()
            .filter(|p| p.is_favorite)
            .map(|p| p.id.as_i32())
            .collect();
        assert_eq!(favorites, vec![1, 6]);
    }

    #[test]
    fn test_seed_image_urls() {
        let catalog = catalog();
        let first = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(
            first.image_url,
            "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=200&h=200&fit=crop"
        );
    }

    #[test]
    fn test_seed_cart() {
        let catalog = catalog();
        let cart = cart(&catalog);

        let lines: Vec<(i32, &str, u64, u32)> = cart
            .lines()
            .iter()
            .map(|l| (l.product_id.as_i32(), l.name.as_str(), l.price.amount(), l.quantity))
            .collect();
        assert_eq!(lines, vec![(2, "청바지", 42_000, 4), (5, "후드", 53_000, 1)]);
        assert_eq!(cart.total(), Price::new(221_000));
    }

    #[test]
    fn test_seed_cart_skips_missing_products() {
        let catalog = Catalog::new(vec![Product::new(
            ProductId::new(5),
            "후드",
            Price::new(53_000),
            "hoodie.jpg",
        )])
        .unwrap();
        let cart = cart(&catalog);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Price::new(53_000));
    }
}
