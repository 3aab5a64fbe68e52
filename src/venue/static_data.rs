//! In-memory market data for tests, demos, and snapshot fixtures.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::book::OrderBook;
use crate::fees::FeeSchedule;
use crate::types::error::{VCError, VCResult};

use super::config::{AssetCategory, VenueId};
use super::provider::{FeeScheduleProvider, OrderBookProvider};

/// An in-memory implementation of both provider traits.
///
/// Holds pre-loaded book snapshots keyed by (venue, symbol) and fee
/// schedules keyed by (venue, category). Lookups for missing entries
/// report `VCError::VenueUnavailable`, which the engine demotes to a
/// per-venue warning.
///
/// # Example
///
/// ```rust
/// use venue_cost_rs::book::OrderBook;
/// use venue_cost_rs::fees::FeeSchedule;
/// use venue_cost_rs::venue::{AssetCategory, StaticMarketData, VenueId};
/// use venue_cost_rs::dec;
///
/// let book = OrderBook::from_raw(
///     &[(dec!(99.0), dec!(5.0))],
///     &[(dec!(101.0), dec!(5.0))],
///     0,
/// )
/// .unwrap();
///
/// let mut data = StaticMarketData::new();
/// data.insert_book("hyperliquid", "BTC", book);
/// data.insert_fee_schedule("hyperliquid", AssetCategory::Crypto, FeeSchedule::bps(dec!(4.5), dec!(4.5)).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticMarketData {
    books: HashMap<(VenueId, String), OrderBook>,
    fees: HashMap<(VenueId, AssetCategory), FeeSchedule>,
}

impl StaticMarketData {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a book snapshot for (venue, symbol).
    pub fn insert_book(
        &mut self,
        venue: impl Into<String>,
        symbol: impl Into<String>,
        book: OrderBook,
    ) {
        self.books
            .insert((VenueId::new(venue), symbol.into()), book);
    }

    /// Loads a fee schedule for (venue, category).
    pub fn insert_fee_schedule(
        &mut self,
        venue: impl Into<String>,
        category: AssetCategory,
        schedule: FeeSchedule,
    ) {
        self.fees.insert((VenueId::new(venue), category), schedule);
    }

    /// Number of loaded book snapshots.
    #[must_use]
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Number of loaded fee schedules.
    #[must_use]
    pub fn fee_schedule_count(&self) -> usize {
        self.fees.len()
    }
}

#[async_trait]
impl OrderBookProvider for StaticMarketData {
    async fn fetch_order_book(&self, symbol: &str, venue: &VenueId) -> VCResult<OrderBook> {
        self.books
            .get(&(venue.clone(), symbol.to_string()))
            .cloned()
            .ok_or_else(|| {
                VCError::VenueUnavailable(format!("no order book for {symbol} on {venue}"))
            })
    }
}

#[async_trait]
impl FeeScheduleProvider for StaticMarketData {
    async fn fee_schedule(
        &self,
        venue: &VenueId,
        category: AssetCategory,
    ) -> VCResult<FeeSchedule> {
        self.fees
            .get(&(venue.clone(), category))
            .copied()
            .ok_or_else(|| {
                VCError::VenueUnavailable(format!("no fee schedule for {venue}"))
            })
    }
}
