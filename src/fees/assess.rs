//! Applying a fee schedule to a fill.

use crate::Decimal;
use crate::types::decimal::{bps_to_ratio, ratio_to_bps};
use crate::types::error::{VCError, VCResult};
use crate::walker::FillResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::schedule::{FeeKind, FeeSchedule};

/// The fee model's verdict on one fill: slippage, fee, and whether the
/// numbers are indicative only.
///
/// `total_cost_bps` is always `slippage_bps + fee_bps`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeeAssessment {
    /// Deviation of the average execution price from the mid, in bps.
    pub slippage_bps: Decimal,
    /// Fee in basis points of the filled notional.
    pub fee_bps: Decimal,
    /// Fee in USD.
    pub fee_usd: Decimal,
    /// True when the fee cannot be computed pre-close (profit-share
    /// venues); the reported zero fee is indicative only.
    pub indicative: bool,
}

impl FeeAssessment {
    /// Combined cost of the fill in basis points.
    #[must_use]
    pub fn total_cost_bps(&self) -> Decimal {
        self.slippage_bps + self.fee_bps
    }
}

impl FeeSchedule {
    /// Slippage of a fill against the mid price, honoring the
    /// `forced_zero_slippage` override.
    ///
    /// An empty fill has no average price and reports zero slippage.
    ///
    /// # Errors
    ///
    /// Returns `VCError::InvalidRequest` if `mid_price` is not positive.
    pub fn slippage_bps(&self, fill: &FillResult, mid_price: Decimal) -> VCResult<Decimal> {
        if mid_price <= Decimal::ZERO {
            return Err(VCError::InvalidRequest(format!(
                "mid price must be positive, got {mid_price}"
            )));
        }
        if self.forced_zero_slippage() || fill.filled_quantity <= Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }
        Ok(ratio_to_bps(
            (fill.avg_price - mid_price).abs() / mid_price,
        ))
    }

    /// Applies the schedule to a walked fill.
    ///
    /// `round_trip` adds the closing leg for [`FeeKind::Bps`] schedules;
    /// opening-only is the default costing.
    ///
    /// # Errors
    ///
    /// Returns `VCError::InvalidRequest` if `mid_price` is not positive.
    ///
    /// # Example
    ///
    /// ```rust
    /// use venue_cost_rs::book::OrderBook;
    /// use venue_cost_rs::fees::FeeSchedule;
    /// use venue_cost_rs::walker::{simulate_fill, ExecutionRequest};
    /// use venue_cost_rs::dec;
    ///
    /// let book = OrderBook::from_raw(
    ///     &[(dec!(99.0), dec!(5.0))],
    ///     &[(dec!(101.0), dec!(5.0))],
    ///     0,
    /// )
    /// .unwrap();
    /// let fill = simulate_fill(&book, &ExecutionRequest::buy(dec!(101.0)).unwrap()).unwrap();
    ///
    /// // Zero-slippage venue: the walked slippage is discarded entirely.
    /// let schedule = FeeSchedule::bps(dec!(6.0), dec!(0.0))
    ///     .unwrap()
    ///     .with_forced_zero_slippage();
    /// let assessment = schedule.assess(&fill, book.mid_price(), false).unwrap();
    /// assert_eq!(assessment.slippage_bps, dec!(0));
    /// assert_eq!(assessment.total_cost_bps(), dec!(6.0));
    /// ```
    pub fn assess(
        &self,
        fill: &FillResult,
        mid_price: Decimal,
        round_trip: bool,
    ) -> VCResult<FeeAssessment> {
        let slippage_bps = self.slippage_bps(fill, mid_price)?;
        let (fee_bps, fee_usd, indicative) = self.fee_components(fill, round_trip);
        Ok(FeeAssessment {
            slippage_bps,
            fee_bps,
            fee_usd,
            indicative,
        })
    }

    /// Applies the schedule to a nominal fill for a venue without a
    /// walkable book: the configured assumed spread stands in for walked
    /// slippage, unless the schedule forces zero.
    pub(crate) fn assess_estimated(
        &self,
        fill: &FillResult,
        assumed_spread_bps: Decimal,
        round_trip: bool,
    ) -> FeeAssessment {
        let slippage_bps = if self.forced_zero_slippage() {
            Decimal::ZERO
        } else {
            assumed_spread_bps
        };
        let (fee_bps, fee_usd, indicative) = self.fee_components(fill, round_trip);
        FeeAssessment {
            slippage_bps,
            fee_bps,
            fee_usd,
            indicative,
        }
    }

    fn fee_components(&self, fill: &FillResult, round_trip: bool) -> (Decimal, Decimal, bool) {
        match self.kind() {
            FeeKind::Bps {
                opening_bps,
                closing_bps,
            } => {
                let fee_bps = if round_trip {
                    opening_bps + closing_bps
                } else {
                    opening_bps
                };
                let fee_usd = fill.filled_notional_usd * bps_to_ratio(fee_bps);
                (fee_bps, fee_usd, false)
            }
            FeeKind::FixedCurrency { amount } => {
                let fee_bps = if fill.filled_notional_usd > Decimal::ZERO {
                    ratio_to_bps(amount / fill.filled_notional_usd)
                } else {
                    Decimal::ZERO
                };
                (fee_bps, amount, false)
            }
            FeeKind::ProfitShare { .. } => (Decimal::ZERO, Decimal::ZERO, true),
            FeeKind::Zero => (Decimal::ZERO, Decimal::ZERO, false),
        }
    }
}
