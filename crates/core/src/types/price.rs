//! Type-safe price representation in whole won.
//!
//! Prices are non-negative integers with no minor unit, so all cart math is
//! exact integer arithmetic. Display follows the storefront's fixed format:
//! thousands grouped with `,` and the `원` suffix (`19,000원`).

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use serde::{Deserialize, Serialize};

/// A price in whole won.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// The zero price, e.g. the total of an empty cart.
    pub const ZERO: Self = Self(0);

    /// Currency suffix appended when displaying a price.
    pub const SUFFIX: &'static str = "원";

    /// Create a new price from whole won.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Get the amount in whole won.
    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Price of `quantity` units at this unit price.
    ///
    /// Saturates at `u64::MAX` instead of overflowing.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    /// The amount with thousands grouping but without the currency suffix.
    ///
    /// ```
    /// use shop_cart_core::Price;
    ///
    /// assert_eq!(Price::new(221_000).grouped(), "221,000");
    /// assert_eq!(Price::new(999).grouped(), "999");
    /// ```
    #[must_use]
    pub fn grouped(&self) -> String {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.grouped(), Self::SUFFIX)
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl From<Price> for u64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_storefront_format() {
        assert_eq!(Price::new(19_000).to_string(), "19,000원");
        assert_eq!(Price::new(42_000).to_string(), "42,000원");
        assert_eq!(Price::new(221_000).to_string(), "221,000원");
        assert_eq!(Price::new(1_234_567).to_string(), "1,234,567원");
    }

    #[test]
    fn test_display_small_amounts() {
        assert_eq!(Price::ZERO.to_string(), "0원");
        assert_eq!(Price::new(7).to_string(), "7원");
        assert_eq!(Price::new(100).to_string(), "100원");
        assert_eq!(Price::new(1000).to_string(), "1,000원");
    }

    #[test]
    fn test_grouped_max() {
        assert_eq!(Price::new(u64::MAX).grouped(), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_times() {
        assert_eq!(Price::new(42_000).times(4), Price::new(168_000));
        assert_eq!(Price::new(42_000).times(0), Price::ZERO);
        assert_eq!(Price::new(u64::MAX).times(2), Price::new(u64::MAX));
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::new(168_000), Price::new(53_000)].into_iter().sum();
        assert_eq!(total, Price::new(221_000));

        let empty: Price = core::iter::empty().sum();
        assert_eq!(empty, Price::ZERO);
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Price::new(14_000)).unwrap();
        assert_eq!(json, "14000");
        let parsed: Price = serde_json::from_str("68000").unwrap();
        assert_eq!(parsed, Price::new(68_000));
    }
}
