//! A single price level of an order-book side.

use crate::Decimal;
use crate::types::error::{VCError, VCResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A discrete (price, quantity) point in an order-book side.
///
/// Levels are immutable once constructed. Price must be positive and
/// quantity non-negative; the normalizer additionally drops zero-quantity
/// levels, so every level inside an [`OrderBookSide`](super::OrderBookSide)
/// carries fillable quantity.
///
/// # Example
///
/// ```rust
/// use venue_cost_rs::book::PriceLevel;
/// use venue_cost_rs::dec;
///
/// let level = PriceLevel::new(dec!(100.0), dec!(5.0)).unwrap();
/// assert_eq!(level.notional(), dec!(500.0));
///
/// assert!(PriceLevel::new(dec!(-1.0), dec!(5.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PriceLevel {
    price: Decimal,
    quantity: Decimal,
}

impl PriceLevel {
    /// Creates a new price level with validation.
    ///
    /// # Errors
    ///
    /// Returns `VCError::InvalidLevel` if `price` is not positive or
    /// `quantity` is negative.
    pub fn new(price: Decimal, quantity: Decimal) -> VCResult<Self> {
        if price <= Decimal::ZERO {
            return Err(VCError::InvalidLevel(format!(
                "level price must be positive, got {price}"
            )));
        }
        if quantity < Decimal::ZERO {
            return Err(VCError::InvalidLevel(format!(
                "level quantity must not be negative, got {quantity}"
            )));
        }
        Ok(Self { price, quantity })
    }

    /// Builds a level without validation. Callers must have filtered the
    /// inputs already; only the normalizer uses this.
    pub(crate) const fn new_unchecked(price: Decimal, quantity: Decimal) -> Self {
        Self { price, quantity }
    }

    /// The level's price.
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    /// The quantity resting at this price.
    #[must_use]
    pub const fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// The USD capacity of the level: `price * quantity`.
    #[must_use]
    pub fn notional(&self) -> Decimal {
        self.price * self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dec;

    #[test]
    fn test_new_valid() {
        let level = PriceLevel::new(dec!(100.5), dec!(2.0)).unwrap();
        assert_eq!(level.price(), dec!(100.5));
        assert_eq!(level.quantity(), dec!(2.0));
        assert_eq!(level.notional(), dec!(201.0));
    }

    #[test]
    fn test_new_zero_quantity_allowed() {
        let level = PriceLevel::new(dec!(100.0), Decimal::ZERO).unwrap();
        assert_eq!(level.notional(), Decimal::ZERO);
    }

    #[test]
    fn test_new_rejects_non_positive_price() {
        assert!(matches!(
            PriceLevel::new(Decimal::ZERO, dec!(1.0)),
            Err(VCError::InvalidLevel(_))
        ));
        assert!(PriceLevel::new(dec!(-100.0), dec!(1.0)).is_err());
    }

    #[test]
    fn test_new_rejects_negative_quantity() {
        assert!(matches!(
            PriceLevel::new(dec!(100.0), dec!(-0.5)),
            Err(VCError::InvalidLevel(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialization() {
        let level = PriceLevel::new(dec!(100.0), dec!(5.0)).unwrap();
        let json = serde_json::to_string(&level).unwrap();
        let back: PriceLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(level, back);
    }
}
