//! The execution-cost engine.
//!
//! Orchestrates, for one asset, the full pipeline per (venue, size, side):
//! look up the venue's fee schedule, obtain its order book (or fall back
//! to the configured assumed spread for `Estimated` venues), run the level
//! walker and the fee model, and assemble an
//! [`ExecutionResult`]. Results are ranked per (size, side) into a
//! [`ComparisonReport`](crate::report::ComparisonReport).
//!
//! The engine never blocks on a missing venue: a venue that cannot supply
//! either a book or a fee schedule is dropped from the run with a warning,
//! and the remaining venues proceed. Only an invalid size parameter aborts
//! a whole computation.

mod compute;
mod result;

pub use compute::{EngineOptions, ExecutionCostEngine};
pub use result::ExecutionResult;

use crate::Decimal;
use crate::dec;

/// The conventional comparison ladder: $10K, $100K, $1M, $10M.
#[must_use]
pub fn default_order_sizes() -> Vec<Decimal> {
    vec![
        dec!(10_000),
        dec!(100_000),
        dec!(1_000_000),
        dec!(10_000_000),
    ]
}
