//! Ordering execution results by total cost.

use crate::engine::ExecutionResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ranking configuration.
///
/// Partially-filled results carry real information (how deep the book ran)
/// and are ranked by default; set `include_partial_fills` to `false` to
/// compare only venues that could absorb the full size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RankingPolicy {
    /// Keep results with `filled = false` in the ranking.
    pub include_partial_fills: bool,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            include_partial_fills: true,
        }
    }
}

/// Sorts results ascending by `total_cost_bps`, ties broken by lexically
/// ascending venue id.
#[must_use]
pub fn rank_results(
    mut results: Vec<ExecutionResult>,
    policy: &RankingPolicy,
) -> Vec<ExecutionResult> {
    if !policy.include_partial_fills {
        results.retain(|result| result.fill.filled);
    }
    results.sort_by(|a, b| {
        a.total_cost_bps
            .cmp(&b.total_cost_bps)
            .then_with(|| a.venue_id.cmp(&b.venue_id))
    });
    results
}
