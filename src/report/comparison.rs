//! Comparison report types.

use crate::Decimal;
use crate::engine::ExecutionResult;
use crate::venue::VenueId;
use crate::walker::Side;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The ranked outcome for one (size, side) across all available venues.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SizeComparison {
    /// Requested order size in USD.
    pub notional_usd: Decimal,
    /// Order side.
    pub side: Side,
    /// Results ranked ascending by `total_cost_bps`.
    pub results: Vec<ExecutionResult>,
    /// Cost gap between the cheapest and second-cheapest venue, in bps.
    /// Zero when fewer than two venues produced a result.
    pub margin_bps: Decimal,
}

impl SizeComparison {
    /// Builds a comparison from already-ranked results, deriving the margin.
    pub(crate) fn new(notional_usd: Decimal, side: Side, results: Vec<ExecutionResult>) -> Self {
        let margin_bps = if results.len() >= 2 {
            results[1].total_cost_bps - results[0].total_cost_bps
        } else {
            Decimal::ZERO
        };
        Self {
            notional_usd,
            side,
            results,
            margin_bps,
        }
    }

    /// The cheapest venue's result, if any venue produced one.
    #[must_use]
    pub fn cheapest(&self) -> Option<&ExecutionResult> {
        self.results.first()
    }
}

/// A venue dropped from the comparison, and why.
///
/// Unavailability is a warning, never a batch failure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VenueWarning {
    /// The venue that was dropped.
    pub venue_id: VenueId,
    /// Human-readable reason.
    pub reason: String,
}

/// The full output of one comparison run for one asset.
///
/// Serializable as a structured record with the `serde` feature. Fewer
/// venues (or fewer comparisons) than requested is valid output: partial
/// results are always preferable to total failure.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComparisonReport {
    /// Canonical symbol of the compared asset.
    pub asset: String,
    /// One entry per requested (size, side), in request order.
    pub comparisons: Vec<SizeComparison>,
    /// Venues dropped during the run.
    pub warnings: Vec<VenueWarning>,
}

impl ComparisonReport {
    /// Finds the comparison for a given (size, side).
    #[must_use]
    pub fn comparison_for(&self, notional_usd: Decimal, side: Side) -> Option<&SizeComparison> {
        self.comparisons
            .iter()
            .find(|c| c.notional_usd == notional_usd && c.side == side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dec;
    use crate::walker::FillResult;

    fn result(venue: &str, total_cost_bps: Decimal) -> ExecutionResult {
        ExecutionResult {
            venue_id: VenueId::new(venue),
            fill: FillResult::nominal(dec!(10000.0)),
            slippage_bps: Decimal::ZERO,
            fee_bps: total_cost_bps,
            fee_usd: Decimal::ZERO,
            total_cost_bps,
            estimated: false,
            indicative: false,
        }
    }

    #[test]
    fn test_margin_between_top_two() {
        let comparison = SizeComparison::new(
            dec!(10000.0),
            Side::Buy,
            vec![result("lighter", dec!(0.5)), result("ostium", dec!(6.0))],
        );
        assert_eq!(comparison.margin_bps, dec!(5.5));
        assert_eq!(comparison.cheapest().unwrap().venue_id.as_str(), "lighter");
    }

    #[test]
    fn test_margin_zero_with_single_result() {
        let comparison =
            SizeComparison::new(dec!(10000.0), Side::Sell, vec![result("lighter", dec!(0.5))]);
        assert_eq!(comparison.margin_bps, Decimal::ZERO);
    }

    #[test]
    fn test_margin_zero_with_no_results() {
        let comparison = SizeComparison::new(dec!(10000.0), Side::Buy, Vec::new());
        assert_eq!(comparison.margin_bps, Decimal::ZERO);
        assert!(comparison.cheapest().is_none());
    }

    #[test]
    fn test_comparison_lookup() {
        let report = ComparisonReport {
            asset: "GOLD".to_string(),
            comparisons: vec![
                SizeComparison::new(dec!(10000.0), Side::Buy, vec![result("a", dec!(1.0))]),
                SizeComparison::new(dec!(10000.0), Side::Sell, vec![result("a", dec!(2.0))]),
            ],
            warnings: Vec::new(),
        };
        let sell = report.comparison_for(dec!(10000.0), Side::Sell).unwrap();
        assert_eq!(sell.results[0].total_cost_bps, dec!(2.0));
        assert!(report.comparison_for(dec!(99.0), Side::Buy).is_none());
    }
}
