//! Result of walking a book side.

use crate::Decimal;
use crate::types::decimal::ratio_to_bps;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of simulating one market order against one book side.
///
/// `remaining` is expressed in the walk's own unit: USD for buys, base-asset
/// quantity for sells (the sell target is converted at the mid price before
/// walking). `fill_percent` is USD-denominated in both modes:
/// `100 * filled_notional_usd / requested notional`, exactly 100 when
/// filled.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FillResult {
    /// True when the remaining size fell to or below the fill tolerance.
    pub filled: bool,
    /// USD value actually exchanged.
    pub filled_notional_usd: Decimal,
    /// Base-asset quantity actually exchanged.
    pub filled_quantity: Decimal,
    /// Volume-weighted average execution price; zero when nothing filled.
    pub avg_price: Decimal,
    /// Number of levels that contributed to the fill.
    pub levels_consumed: usize,
    /// Unfilled remainder, in the walk's unit (USD for buys, quantity for sells).
    pub remaining: Decimal,
    /// Achieved fill as a percentage of the requested notional.
    pub fill_percent: Decimal,
    /// First (best) price touched; zero when nothing filled.
    pub best_price: Decimal,
    /// Last (worst) price touched; zero when nothing filled.
    pub worst_price: Decimal,
}

impl FillResult {
    /// A fill that never touched the book, for an empty or exhausted side.
    pub(crate) fn unfilled(remaining: Decimal) -> Self {
        Self {
            filled: false,
            filled_notional_usd: Decimal::ZERO,
            filled_quantity: Decimal::ZERO,
            avg_price: Decimal::ZERO,
            levels_consumed: 0,
            remaining,
            fill_percent: Decimal::ZERO,
            best_price: Decimal::ZERO,
            worst_price: Decimal::ZERO,
        }
    }

    /// A nominal full fill at the requested notional, used for venues
    /// without a walkable book. Quantity and prices are not meaningful and
    /// stay zero; callers tag the surrounding result `estimated`.
    pub(crate) fn nominal(notional_usd: Decimal) -> Self {
        Self {
            filled: true,
            filled_notional_usd: notional_usd,
            filled_quantity: Decimal::ZERO,
            avg_price: Decimal::ZERO,
            levels_consumed: 0,
            remaining: Decimal::ZERO,
            fill_percent: Decimal::ONE_HUNDRED,
            best_price: Decimal::ZERO,
            worst_price: Decimal::ZERO,
        }
    }

    /// Spread actually traversed from the best to the worst touched price,
    /// in basis points. Zero when at most one level was touched.
    #[must_use]
    pub fn effective_spread_bps(&self) -> Decimal {
        if self.best_price <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        ratio_to_bps((self.worst_price - self.best_price).abs() / self.best_price)
    }
}
