//! Venue fee structures and their application to fills.
//!
//! A venue's cost structure is a closed set of [`FeeKind`] variants wrapped
//! in a [`FeeSchedule`], which also carries the venue-level
//! `forced_zero_slippage` override some venues grant on designated
//! instruments. Applying a schedule to a [`FillResult`](crate::walker::FillResult)
//! produces a [`FeeAssessment`]: slippage in basis points, the fee in both
//! basis points and USD, and whether the numbers are indicative only.
//!
//! Fee values are data, not constants: schedules are loaded once as static
//! configuration and passed in, so there is exactly one source of truth per
//! venue.
//!
//! # Example
//!
//! ```rust
//! use venue_cost_rs::fees::{FeeKind, FeeSchedule};
//! use venue_cost_rs::dec;
//!
//! // 6 bps to open, 6 to close, zero slippage guaranteed.
//! let schedule = FeeSchedule::bps(dec!(6.0), dec!(6.0))
//!     .unwrap()
//!     .with_forced_zero_slippage();
//! assert!(schedule.forced_zero_slippage());
//! assert!(matches!(schedule.kind(), FeeKind::Bps { .. }));
//! ```

mod assess;
mod schedule;

pub use assess::FeeAssessment;
pub use schedule::{FeeKind, FeeSchedule};
