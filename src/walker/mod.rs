//! Market-order fill simulation against one book side.
//!
//! The level walker consumes a normalized [`OrderBookSide`](crate::book::OrderBookSide)
//! greedily, best price first, until the requested size is met or the side
//! is exhausted. Two modes share the same greedy rule:
//!
//! - **Buy**: the target is a USD notional walked against the asks; at each
//!   level the walker spends up to the level's capacity (`price * quantity`).
//! - **Sell**: the USD notional is first converted to a base-asset quantity
//!   at the book's mid price, then walked against the bids consuming
//!   quantity.
//!
//! The walk is strictly deterministic: levels are consumed in exactly the
//! order established by normalization, with no reordering or skipping, so
//! identical inputs return identical [`FillResult`]s. Running out of book
//! is not an error; it is reported as `filled = false` with the achieved
//! `fill_percent`.
//!
//! # Example
//!
//! ```rust
//! use venue_cost_rs::book::OrderBook;
//! use venue_cost_rs::walker::{simulate_fill, ExecutionRequest};
//! use venue_cost_rs::dec;
//!
//! let book = OrderBook::from_raw(
//!     &[(dec!(99.0), dec!(2.0))],
//!     &[(dec!(100.0), dec!(5.0)), (dec!(101.0), dec!(10.0))],
//!     0,
//! )
//! .unwrap();
//!
//! let fill = simulate_fill(&book, &ExecutionRequest::buy(dec!(600.0)).unwrap()).unwrap();
//! assert!(fill.filled);
//! assert_eq!(fill.filled_notional_usd, dec!(600.0));
//! assert_eq!(fill.levels_consumed, 2);
//! ```

mod fill;
mod request;
mod simulate;

pub use fill::FillResult;
pub use request::{ExecutionRequest, Side};
pub use simulate::{simulate_fill, FILL_TOLERANCE};
