//! One normalized side of an order book.

use std::collections::BTreeMap;

use crate::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::level::PriceLevel;

/// Which side of the book a sequence of levels belongs to.
///
/// The kind fixes the canonical ordering: asks ascend (best ask first),
/// bids descend (best bid first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SideKind {
    /// Sell-side levels, sorted ascending by price.
    Asks,
    /// Buy-side levels, sorted descending by price.
    Bids,
}

/// An ordered, deduplicated sequence of price levels.
///
/// Built once per snapshot through [`OrderBookSide::normalize`] and never
/// mutated. Invariants: strictly monotonic prices in canonical order, no
/// duplicate prices, no non-positive price, no non-positive quantity.
///
/// # Example
///
/// ```rust
/// use venue_cost_rs::book::{OrderBookSide, SideKind};
/// use venue_cost_rs::dec;
///
/// let bids = OrderBookSide::normalize(
///     &[(dec!(99.0), dec!(1.0)), (dec!(100.0), dec!(2.0))],
///     SideKind::Bids,
/// );
/// // Best bid first.
/// assert_eq!(bids.best().unwrap().price(), dec!(100.0));
/// assert_eq!(bids.total_notional(), dec!(299.0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderBookSide {
    kind: SideKind,
    levels: Vec<PriceLevel>,
}

impl OrderBookSide {
    /// Normalizes raw (price, quantity) pairs into a canonical side.
    ///
    /// Entries with non-positive price or non-positive quantity are
    /// discarded (they cannot be filled), duplicate prices are merged by
    /// summing quantity, and the result is sorted ascending for asks,
    /// descending for bids. An empty result is not an error here; whether
    /// an empty side is acceptable is the caller's decision.
    ///
    /// Normalization is idempotent: feeding a side's own levels back in
    /// reproduces the side exactly.
    #[must_use]
    pub fn normalize(raw: &[(Decimal, Decimal)], kind: SideKind) -> Self {
        let mut merged: BTreeMap<Decimal, Decimal> = BTreeMap::new();
        for &(price, quantity) in raw {
            if price <= Decimal::ZERO || quantity <= Decimal::ZERO {
                continue;
            }
            *merged.entry(price).or_insert(Decimal::ZERO) += quantity;
        }

        let levels: Vec<PriceLevel> = match kind {
            SideKind::Asks => merged
                .into_iter()
                .map(|(price, quantity)| PriceLevel::new_unchecked(price, quantity))
                .collect(),
            SideKind::Bids => merged
                .into_iter()
                .rev()
                .map(|(price, quantity)| PriceLevel::new_unchecked(price, quantity))
                .collect(),
        };

        Self { kind, levels }
    }

    /// The side's kind (asks or bids).
    #[must_use]
    pub const fn kind(&self) -> SideKind {
        self.kind
    }

    /// The levels in canonical order, best price first.
    #[must_use]
    pub fn levels(&self) -> &[PriceLevel] {
        &self.levels
    }

    /// Iterates levels in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &PriceLevel> {
        self.levels.iter()
    }

    /// The best (first) level, if any.
    #[must_use]
    pub fn best(&self) -> Option<&PriceLevel> {
        self.levels.first()
    }

    /// Number of levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// True if the side holds no levels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Total resting quantity across all levels.
    #[must_use]
    pub fn total_quantity(&self) -> Decimal {
        self.levels.iter().map(PriceLevel::quantity).sum()
    }

    /// Total USD capacity across all levels.
    #[must_use]
    pub fn total_notional(&self) -> Decimal {
        self.levels.iter().map(PriceLevel::notional).sum()
    }
}
