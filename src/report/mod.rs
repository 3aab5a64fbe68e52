//! Cross-venue ranking and comparison reports.
//!
//! For each (size, side) the ranker orders [`ExecutionResult`](crate::engine::ExecutionResult)s
//! ascending by `total_cost_bps`, breaking ties by lexically ascending
//! venue id so output is deterministic. Partially-filled results are
//! included by default, annotated by their `fill_percent`;
//! [`RankingPolicy`] can exclude them. The margin between the cheapest and
//! second-cheapest venue is reported per comparison, and venues dropped as
//! unavailable are carried as [`VenueWarning`]s rather than failing the
//! batch: a report with fewer venues than requested is valid output.

mod comparison;
mod ranking;

pub use comparison::{ComparisonReport, SizeComparison, VenueWarning};
pub use ranking::{rank_results, RankingPolicy};
