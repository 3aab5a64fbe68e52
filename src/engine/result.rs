//! Per-venue execution-cost result.

use crate::Decimal;
use crate::fees::FeeAssessment;
use crate::venue::VenueId;
use crate::walker::FillResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The estimated cost of executing one order on one venue.
///
/// `total_cost_bps` is the ranking key: `slippage_bps + fee_bps`.
/// `estimated` marks venues priced from a configured assumed spread rather
/// than a walked book (fill quantity and prices are nominal there);
/// `indicative` marks profit-share venues whose fee cannot be computed
/// before the position closes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExecutionResult {
    /// The venue this result belongs to.
    pub venue_id: VenueId,
    /// The simulated fill.
    pub fill: FillResult,
    /// Slippage against the mid price, in bps.
    pub slippage_bps: Decimal,
    /// Fee in basis points of the filled notional.
    pub fee_bps: Decimal,
    /// Fee in USD.
    pub fee_usd: Decimal,
    /// Combined cost: `slippage_bps + fee_bps`.
    pub total_cost_bps: Decimal,
    /// True when no live book was walked and the slippage is an assumed
    /// constant from configuration.
    pub estimated: bool,
    /// True when the fee is indicative only (profit-share schedules).
    pub indicative: bool,
}

impl ExecutionResult {
    /// Assembles a result from a fill and its fee assessment.
    pub(crate) fn from_assessment(
        venue_id: VenueId,
        fill: FillResult,
        assessment: FeeAssessment,
        estimated: bool,
    ) -> Self {
        Self {
            venue_id,
            fill,
            slippage_bps: assessment.slippage_bps,
            fee_bps: assessment.fee_bps,
            fee_usd: assessment.fee_usd,
            total_cost_bps: assessment.total_cost_bps(),
            estimated,
            indicative: assessment.indicative,
        }
    }
}
