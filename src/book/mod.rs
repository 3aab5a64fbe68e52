//! Order-book snapshot types and normalization.
//!
//! This module turns raw (price, quantity) pairs from an upstream feed into
//! a canonical, validated order-book snapshot:
//!
//! - [`PriceLevel`]: a single immutable (price, quantity) point
//! - [`OrderBookSide`]: an ordered side, built once through
//!   [`OrderBookSide::normalize`] and never mutated
//! - [`OrderBook`]: both sides plus the observation timestamp, with derived
//!   mid-price and spread accessors
//!
//! Normalization discards entries with non-positive price or quantity,
//! merges duplicate prices by summing quantity, and sorts asks ascending /
//! bids descending. It is idempotent: normalizing an already-normalized
//! side is a no-op.
//!
//! # Example
//!
//! ```rust
//! use venue_cost_rs::book::{OrderBook, OrderBookSide, SideKind};
//! use venue_cost_rs::dec;
//!
//! // Raw feed data: out of order, duplicate price, one bad entry.
//! let raw = [
//!     (dec!(101.0), dec!(10.0)),
//!     (dec!(100.0), dec!(2.0)),
//!     (dec!(100.0), dec!(3.0)),
//!     (dec!(0.0), dec!(5.0)),
//! ];
//! let asks = OrderBookSide::normalize(&raw, SideKind::Asks);
//! assert_eq!(asks.len(), 2);
//! assert_eq!(asks.best().unwrap().price(), dec!(100.0));
//! assert_eq!(asks.best().unwrap().quantity(), dec!(5.0));
//!
//! let bids = OrderBookSide::normalize(&[(dec!(99.0), dec!(4.0))], SideKind::Bids);
//! let book = OrderBook::new(bids, asks, 1_700_000_000_000).unwrap();
//! assert_eq!(book.mid_price(), dec!(99.5));
//! ```

mod level;
mod side;
mod snapshot;

pub use level::PriceLevel;
pub use side::{OrderBookSide, SideKind};
pub use snapshot::OrderBook;
