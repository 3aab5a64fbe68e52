//! A full order-book snapshot: both sides plus observation time.

use crate::Decimal;
use crate::types::decimal::ratio_to_bps;
use crate::types::error::{VCError, VCResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::side::{OrderBookSide, SideKind};

/// An immutable order-book snapshot.
///
/// Both sides must be individually valid and non-empty: the walker and the
/// fee model both need a mid price, which requires a best bid and a best
/// ask. A snapshot whose best bid crosses the best ask is stale or
/// erroneous source data; the engine does not correct it, but exposes the
/// condition through [`OrderBook::is_crossed`] so callers can decide.
///
/// # Example
///
/// ```rust
/// use venue_cost_rs::book::{OrderBook, OrderBookSide, SideKind};
/// use venue_cost_rs::dec;
///
/// let bids = OrderBookSide::normalize(&[(dec!(99.0), dec!(3.0))], SideKind::Bids);
/// let asks = OrderBookSide::normalize(&[(dec!(101.0), dec!(2.0))], SideKind::Asks);
/// let book = OrderBook::new(bids, asks, 1_700_000_000_000).unwrap();
///
/// assert_eq!(book.best_bid(), dec!(99.0));
/// assert_eq!(book.best_ask(), dec!(101.0));
/// assert_eq!(book.mid_price(), dec!(100.0));
/// assert_eq!(book.spread_bps(), dec!(200.0));
/// assert!(!book.is_crossed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderBook {
    bids: OrderBookSide,
    asks: OrderBookSide,
    observed_at: u64,
}

impl OrderBook {
    /// Creates a snapshot from two normalized sides.
    ///
    /// # Arguments
    ///
    /// * `bids` - buy side, must have kind [`SideKind::Bids`]
    /// * `asks` - sell side, must have kind [`SideKind::Asks`]
    /// * `observed_at` - observation timestamp in milliseconds
    ///
    /// # Errors
    ///
    /// Returns `VCError::InvalidLevel` if a side has the wrong kind or is
    /// empty.
    pub fn new(bids: OrderBookSide, asks: OrderBookSide, observed_at: u64) -> VCResult<Self> {
        if bids.kind() != SideKind::Bids {
            return Err(VCError::InvalidLevel(
                "bid side constructed with ask ordering".to_string(),
            ));
        }
        if asks.kind() != SideKind::Asks {
            return Err(VCError::InvalidLevel(
                "ask side constructed with bid ordering".to_string(),
            ));
        }
        if bids.is_empty() {
            return Err(VCError::InvalidLevel("bid side is empty".to_string()));
        }
        if asks.is_empty() {
            return Err(VCError::InvalidLevel("ask side is empty".to_string()));
        }
        Ok(Self {
            bids,
            asks,
            observed_at,
        })
    }

    /// Normalizes raw pairs for both sides and builds the snapshot.
    ///
    /// # Errors
    ///
    /// Returns `VCError::InvalidLevel` if either side normalizes to empty.
    pub fn from_raw(
        raw_bids: &[(Decimal, Decimal)],
        raw_asks: &[(Decimal, Decimal)],
        observed_at: u64,
    ) -> VCResult<Self> {
        Self::new(
            OrderBookSide::normalize(raw_bids, SideKind::Bids),
            OrderBookSide::normalize(raw_asks, SideKind::Asks),
            observed_at,
        )
    }

    /// The buy side, best bid first.
    #[must_use]
    pub const fn bids(&self) -> &OrderBookSide {
        &self.bids
    }

    /// The sell side, best ask first.
    #[must_use]
    pub const fn asks(&self) -> &OrderBookSide {
        &self.asks
    }

    /// Observation timestamp in milliseconds.
    #[must_use]
    pub const fn observed_at(&self) -> u64 {
        self.observed_at
    }

    /// Highest bid price. Always present: construction requires it.
    #[must_use]
    pub fn best_bid(&self) -> Decimal {
        self.bids.levels()[0].price()
    }

    /// Lowest ask price. Always present: construction requires it.
    #[must_use]
    pub fn best_ask(&self) -> Decimal {
        self.asks.levels()[0].price()
    }

    /// Midpoint between best bid and best ask.
    #[must_use]
    pub fn mid_price(&self) -> Decimal {
        (self.best_bid() + self.best_ask()) / Decimal::TWO
    }

    /// Absolute spread: `best_ask - best_bid`. Negative when crossed.
    #[must_use]
    pub fn spread(&self) -> Decimal {
        self.best_ask() - self.best_bid()
    }

    /// Spread relative to the mid price, in basis points.
    #[must_use]
    pub fn spread_bps(&self) -> Decimal {
        ratio_to_bps(self.spread() / self.mid_price())
    }

    /// True when the best bid is at or above the best ask, which indicates
    /// stale or erroneous source data.
    #[must_use]
    pub fn is_crossed(&self) -> bool {
        self.best_bid() >= self.best_ask()
    }
}
