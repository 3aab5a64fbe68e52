//! # venue-cost-rs
//!
//! A library for estimating the true cost of executing a market order of a
//! given notional size against a venue's visible order book, and for ranking
//! multiple trading venues by that cost.
//!
//! # Overview
//!
//! The crate is organized as a pipeline of small, pure components:
//!
//! - **[`book`]**: order-book normalization; raw (price, quantity) pairs
//!   become a canonical, validated [`book::OrderBookSide`] / [`book::OrderBook`]
//! - **[`walker`]**: the greedy level walk, simulating a fill of a target
//!   size against one book side into a [`walker::FillResult`]
//! - **[`fees`]**: venue cost structures as a closed [`fees::FeeKind`] variant
//!   set, applied to a fill to produce slippage and fee basis points
//! - **[`engine`]**: orchestrates book + fees per (venue, size, side) into
//!   [`engine::ExecutionResult`] values
//! - **[`report`]**: ranks results per (size, side) into a
//!   [`report::ComparisonReport`]
//!
//! Order books and fee schedules are supplied by collaborators through the
//! async [`venue::OrderBookProvider`] and [`venue::FeeScheduleProvider`]
//! traits; the engine itself performs no I/O and is a pure function of the
//! data it is given. It does not place orders and does not model funding,
//! margin, or liquidation.
//!
//! # Example
//!
//! ```rust
//! use venue_cost_rs::book::{OrderBook, OrderBookSide, SideKind};
//! use venue_cost_rs::fees::FeeSchedule;
//! use venue_cost_rs::walker::{simulate_fill, ExecutionRequest};
//! use venue_cost_rs::dec;
//!
//! // Normalize a raw book snapshot.
//! let asks = OrderBookSide::normalize(&[(dec!(100.0), dec!(5.0)), (dec!(101.0), dec!(10.0))], SideKind::Asks);
//! let bids = OrderBookSide::normalize(&[(dec!(99.0), dec!(8.0))], SideKind::Bids);
//! let book = OrderBook::new(bids, asks, 1_700_000_000_000).unwrap();
//!
//! // Walk a $600 market buy.
//! let request = ExecutionRequest::buy(dec!(600.0)).unwrap();
//! let fill = simulate_fill(&book, &request).unwrap();
//! assert!(fill.filled);
//! assert_eq!(fill.levels_consumed, 2);
//!
//! // Apply a 4.5 bps taker fee.
//! let schedule = FeeSchedule::bps(dec!(4.5), dec!(0.0)).unwrap();
//! let assessment = schedule.assess(&fill, book.mid_price(), false).unwrap();
//! assert_eq!(assessment.fee_bps, dec!(4.5));
//! ```

/// Order-book snapshot types and normalization.
pub mod book;

/// Execution-cost engine orchestrating walker and fee model per venue.
pub mod engine;

/// Venue fee structures and their application to fills.
pub mod fees;

/// Cross-venue ranking and comparison reports.
pub mod report;

/// Shared primitives: error types and decimal helpers.
pub mod types;

/// Venue configuration and data-provider boundaries.
pub mod venue;

/// Market-order fill simulation against one book side.
pub mod walker;

pub use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;
