//! Type-safe price representation in integral minor currency units.
//!
//! Catalog prices are whole amounts of the smallest currency unit, so all
//! arithmetic is exact integer arithmetic - there are no rounding concerns
//! anywhere in the cart math.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A price in the smallest currency unit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// The zero price (empty cart total).
    pub const ZERO: Self = Self(0);

    /// Create a price from an amount in minor units.
    #[must_use]
    pub const fn from_minor(amount: u64) -> Self {
        Self(amount)
    }

    /// Get the amount in minor units.
    #[must_use]
    pub const fn as_minor(&self) -> u64 {
        self.0
    }

    /// Whether this price is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiply by a quantity, saturating at `u64::MAX`.
    ///
    /// Line totals are `price * quantity`; saturation keeps a hostile
    /// persisted quantity from panicking the cart math in debug builds.
    #[must_use]
    pub const fn times(&self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    /// Format with thousands separators, e.g. `25,000,000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i).is_multiple_of(3) {
                out.push(',');
            }
            out.push(ch);
        }
        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_times_and_sum() {
        let unit = Price::from_minor(25_000_000);
        assert_eq!(unit.times(3).as_minor(), 75_000_000);

        let total: Price = [unit.times(1), Price::from_minor(8_500_000).times(2)]
            .into_iter()
            .sum();
        assert_eq!(total.as_minor(), 42_000_000);
    }

    #[test]
    fn test_times_saturates() {
        let huge = Price::from_minor(u64::MAX);
        assert_eq!(huge.times(2), huge);
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(Price::from_minor(0).to_string(), "0");
        assert_eq!(Price::from_minor(550).to_string(), "550");
        assert_eq!(Price::from_minor(550_000).to_string(), "550,000");
        assert_eq!(Price::from_minor(25_000_000).to_string(), "25,000,000");
    }

    #[test]
    fn test_serde_transparent() {
        let price = Price::from_minor(1200);
        let json = serde_json::to_string(&price).expect("serialize");
        assert_eq!(json, "1200");
        let back: Price = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, price);
    }
}
