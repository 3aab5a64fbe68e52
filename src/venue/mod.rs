//! Venue configuration and data-provider boundaries.
//!
//! Everything the engine knows about a venue is explicit configuration
//! constructed once and passed in:
//!
//! - [`VenueId`]: venue identifier, also the ranking tie-breaker
//! - [`VenueCapability`]: whether a live book can be walked
//!   (`Walkable`) or a configured spread stands in for slippage
//!   (`Estimated`), resolved by configuration, never by runtime probing
//! - [`VenueConfig`]: identifier plus capability
//! - [`Asset`] / [`AssetCategory`]: the canonical asset symbol, its fee
//!   category, and the per-venue instrument symbol aliases
//!
//! Live data enters through two async traits, [`OrderBookProvider`] and
//! [`FeeScheduleProvider`]. Transport concerns (HTTP, SDKs, retries,
//! timeouts) live behind those traits; any provider error is treated as
//! the venue being unavailable for the current run. [`StaticMarketData`]
//! is an in-memory implementation of both, for tests, demos, and snapshot
//! fixtures.

mod config;
mod provider;
mod static_data;

pub use config::{Asset, AssetCategory, VenueCapability, VenueConfig, VenueId};
pub use provider::{FeeScheduleProvider, OrderBookProvider};
pub use static_data::StaticMarketData;
