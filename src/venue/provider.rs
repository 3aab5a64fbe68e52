//! Data-provider traits at the engine boundary.

use async_trait::async_trait;

use crate::book::OrderBook;
use crate::fees::FeeSchedule;
use crate::types::error::VCResult;

use super::config::{AssetCategory, VenueId};

/// Supplies order-book snapshots per (instrument, venue).
///
/// Implementations own all transport concerns: HTTP clients, SDKs,
/// authentication, per-request timeouts. The engine's contract is only
/// "supply a book or signal unavailability". Any error drops the venue
/// from the current comparison without failing the batch, and the engine
/// performs no retry of its own.
#[async_trait]
pub trait OrderBookProvider: Send + Sync {
    /// Fetches the current snapshot for `symbol` on `venue`.
    async fn fetch_order_book(&self, symbol: &str, venue: &VenueId) -> VCResult<OrderBook>;
}

/// Supplies fee schedules per (venue, asset category).
#[async_trait]
pub trait FeeScheduleProvider: Send + Sync {
    /// Looks up the venue's fee schedule for an asset category.
    async fn fee_schedule(
        &self,
        venue: &VenueId,
        category: AssetCategory,
    ) -> VCResult<FeeSchedule>;
}
