//! Engine orchestration.

use tracing::{debug, warn};

use crate::Decimal;
use crate::report::{rank_results, ComparisonReport, RankingPolicy, SizeComparison, VenueWarning};
use crate::types::error::{VCError, VCResult};
use crate::venue::{
    Asset, FeeScheduleProvider, OrderBookProvider, VenueCapability, VenueConfig,
};
use crate::walker::{simulate_fill, ExecutionRequest, FillResult, Side};

use super::result::ExecutionResult;

/// Engine-wide costing options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Include the closing leg of `Bps` fee schedules (round-trip cost).
    /// Opening-only is the default.
    pub round_trip: bool,
    /// How results are ranked per (size, side).
    pub ranking: RankingPolicy,
}

/// The execution-cost engine.
///
/// Holds the two data providers and the costing options; each
/// [`compute`](Self::compute) call is a pure function of the books and
/// schedules the providers return. Evaluations per (venue, size, side) are
/// independent; dropping the returned future mid-run loses nothing but
/// the not-yet-evaluated combinations.
///
/// # Example
///
/// ```rust
/// use venue_cost_rs::book::OrderBook;
/// use venue_cost_rs::engine::ExecutionCostEngine;
/// use venue_cost_rs::fees::FeeSchedule;
/// use venue_cost_rs::venue::{Asset, AssetCategory, StaticMarketData, VenueConfig};
/// use venue_cost_rs::walker::Side;
/// use venue_cost_rs::dec;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut data = StaticMarketData::new();
/// data.insert_book(
///     "hyperliquid",
///     "PAXG",
///     OrderBook::from_raw(&[(dec!(1999.0), dec!(50.0))], &[(dec!(2001.0), dec!(50.0))], 0)?,
/// );
/// data.insert_fee_schedule(
///     "hyperliquid",
///     AssetCategory::Gold,
///     FeeSchedule::bps(dec!(4.5), dec!(4.5))?,
/// );
///
/// let engine = ExecutionCostEngine::new(data.clone(), data);
/// let asset = Asset::new("GOLD", AssetCategory::Gold).with_alias("hyperliquid", "PAXG");
/// let venues = [VenueConfig::walkable("hyperliquid")];
///
/// let runtime = tokio::runtime::Builder::new_current_thread().build()?;
/// let report = runtime.block_on(engine.compute(
///     &asset,
///     &venues,
///     &[dec!(10_000)],
///     &[Side::Buy],
/// ))?;
/// assert_eq!(report.comparisons.len(), 1);
/// assert_eq!(report.comparisons[0].results.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ExecutionCostEngine<B, F> {
    books: B,
    fees: F,
    options: EngineOptions,
}

impl<B, F> ExecutionCostEngine<B, F>
where
    B: OrderBookProvider,
    F: FeeScheduleProvider,
{
    /// Creates an engine with default options.
    pub fn new(books: B, fees: F) -> Self {
        Self::with_options(books, fees, EngineOptions::default())
    }

    /// Creates an engine with explicit options.
    pub fn with_options(books: B, fees: F, options: EngineOptions) -> Self {
        Self {
            books,
            fees,
            options,
        }
    }

    /// The engine's costing options.
    #[must_use]
    pub const fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Runs the full comparison for one asset.
    ///
    /// For each requested size and side, every configured venue is
    /// evaluated; venues that cannot supply their inputs are dropped into
    /// `warnings` and the rest proceed. Results per (size, side) are
    /// ranked ascending by total cost.
    ///
    /// # Errors
    ///
    /// Returns `VCError::InvalidRequest` if any requested size is not
    /// positive, the one condition that aborts the whole batch.
    pub async fn compute(
        &self,
        asset: &Asset,
        venues: &[VenueConfig],
        sizes: &[Decimal],
        sides: &[Side],
    ) -> VCResult<ComparisonReport> {
        for &size in sizes {
            if size <= Decimal::ZERO {
                return Err(VCError::InvalidRequest(format!(
                    "order size must be positive, got {size}"
                )));
            }
        }

        let mut comparisons = Vec::with_capacity(sizes.len() * sides.len());
        let mut warnings: Vec<VenueWarning> = Vec::new();

        for &size in sizes {
            for &side in sides {
                let mut results = Vec::with_capacity(venues.len());
                for venue in venues {
                    match self.evaluate_venue(asset, venue, size, side).await {
                        Ok(result) => results.push(result),
                        // Invalid sizes were rejected up front; anything
                        // else is that venue's unavailability.
                        Err(VCError::InvalidRequest(reason)) => {
                            return Err(VCError::InvalidRequest(reason));
                        }
                        Err(err) => {
                            let reason = err.to_string();
                            warn!(venue = %venue.venue_id(), %reason, "venue dropped from comparison");
                            let warning = VenueWarning {
                                venue_id: venue.venue_id().clone(),
                                reason,
                            };
                            if !warnings.contains(&warning) {
                                warnings.push(warning);
                            }
                        }
                    }
                }
                let ranked = rank_results(results, &self.options.ranking);
                comparisons.push(SizeComparison::new(size, side, ranked));
            }
        }

        Ok(ComparisonReport {
            asset: asset.symbol().to_string(),
            comparisons,
            warnings,
        })
    }

    /// Evaluates one (venue, size, side) combination.
    async fn evaluate_venue(
        &self,
        asset: &Asset,
        venue: &VenueConfig,
        size: Decimal,
        side: Side,
    ) -> VCResult<ExecutionResult> {
        let venue_id = venue.venue_id();
        let schedule = self.fees.fee_schedule(venue_id, asset.category()).await?;

        match *venue.capability() {
            VenueCapability::Walkable => {
                let symbol = asset.symbol_for(venue_id);
                let book = self.books.fetch_order_book(symbol, venue_id).await?;
                let request = ExecutionRequest::new(side, size)?;
                let fill = simulate_fill(&book, &request)?;
                debug!(
                    venue = %venue_id,
                    %symbol,
                    %size,
                    %side,
                    filled = fill.filled,
                    levels = fill.levels_consumed,
                    "walked order book"
                );
                let assessment = schedule.assess(&fill, book.mid_price(), self.options.round_trip)?;
                Ok(ExecutionResult::from_assessment(
                    venue_id.clone(),
                    fill,
                    assessment,
                    false,
                ))
            }
            VenueCapability::Estimated { assumed_spread_bps } => {
                let fill = FillResult::nominal(size);
                let assessment =
                    schedule.assess_estimated(&fill, assumed_spread_bps, self.options.round_trip);
                debug!(
                    venue = %venue_id,
                    %size,
                    %side,
                    spread_bps = %assumed_spread_bps,
                    "using assumed spread, no walkable book"
                );
                Ok(ExecutionResult::from_assessment(
                    venue_id.clone(),
                    fill,
                    assessment,
                    true,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::OrderBook;
    use crate::dec;
    use crate::fees::FeeSchedule;
    use crate::venue::{AssetCategory, StaticMarketData};

    fn engine_with(
        data: StaticMarketData,
        options: EngineOptions,
    ) -> ExecutionCostEngine<StaticMarketData, StaticMarketData> {
        ExecutionCostEngine::with_options(data.clone(), data, options)
    }

    fn gold_fixture() -> (Asset, Vec<VenueConfig>, StaticMarketData) {
        let asset = Asset::new("GOLD", AssetCategory::Gold).with_alias("hyperliquid", "PAXG");

        let mut data = StaticMarketData::new();
        data.insert_book(
            "hyperliquid",
            "PAXG",
            OrderBook::from_raw(
                &[(dec!(1999.0), dec!(50.0)), (dec!(1998.0), dec!(80.0))],
                &[(dec!(2001.0), dec!(50.0)), (dec!(2002.0), dec!(80.0))],
                0,
            )
            .unwrap(),
        );
        data.insert_fee_schedule(
            "hyperliquid",
            AssetCategory::Gold,
            FeeSchedule::bps(dec!(4.5), dec!(4.5)).unwrap(),
        );
        data.insert_fee_schedule(
            "avantis",
            AssetCategory::Gold,
            FeeSchedule::bps(dec!(6.0), dec!(0.0))
                .unwrap()
                .with_forced_zero_slippage(),
        );

        let venues = vec![
            VenueConfig::walkable("hyperliquid"),
            VenueConfig::estimated("avantis", dec!(2.0)).unwrap(),
        ];
        (asset, venues, data)
    }

    #[tokio::test]
    async fn test_compute_walkable_and_estimated() {
        let (asset, venues, data) = gold_fixture();
        let engine = engine_with(data, EngineOptions::default());

        let report = engine
            .compute(&asset, &venues, &[dec!(10_000)], &[Side::Buy])
            .await
            .unwrap();

        assert_eq!(report.asset, "GOLD");
        assert!(report.warnings.is_empty());
        let comparison = &report.comparisons[0];
        assert_eq!(comparison.results.len(), 2);

        let avantis = comparison
            .results
            .iter()
            .find(|r| r.venue_id.as_str() == "avantis")
            .unwrap();
        assert!(avantis.estimated);
        // Forced zero slippage discards the assumed spread too.
        assert_eq!(avantis.slippage_bps, Decimal::ZERO);
        assert_eq!(avantis.total_cost_bps, dec!(6.0));

        let hyperliquid = comparison
            .results
            .iter()
            .find(|r| r.venue_id.as_str() == "hyperliquid")
            .unwrap();
        assert!(!hyperliquid.estimated);
        assert!(hyperliquid.fill.filled);
        assert!(hyperliquid.slippage_bps > Decimal::ZERO);
        assert_eq!(hyperliquid.fee_bps, dec!(4.5));
    }

    #[tokio::test]
    async fn test_compute_rejects_non_positive_size() {
        let (asset, venues, data) = gold_fixture();
        let engine = engine_with(data, EngineOptions::default());

        let err = engine
            .compute(&asset, &venues, &[dec!(10_000), Decimal::ZERO], &[Side::Buy])
            .await
            .unwrap_err();
        assert!(matches!(err, VCError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_unavailable_venue_becomes_warning() {
        let (asset, mut venues, data) = gold_fixture();
        venues.push(VenueConfig::walkable("ghost"));
        let engine = engine_with(data, EngineOptions::default());

        let report = engine
            .compute(&asset, &venues, &[dec!(10_000), dec!(100_000)], &[Side::Buy])
            .await
            .unwrap();

        // Both sizes still produced results from the healthy venues.
        assert_eq!(report.comparisons.len(), 2);
        for comparison in &report.comparisons {
            assert_eq!(comparison.results.len(), 2);
        }
        // The ghost venue is reported once, not once per size.
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].venue_id.as_str(), "ghost");
    }

    #[tokio::test]
    async fn test_round_trip_option_adds_closing_leg() {
        let (asset, venues, data) = gold_fixture();
        let engine = engine_with(
            data,
            EngineOptions {
                round_trip: true,
                ranking: RankingPolicy::default(),
            },
        );

        let report = engine
            .compute(&asset, &venues, &[dec!(10_000)], &[Side::Buy])
            .await
            .unwrap();
        let hyperliquid = report.comparisons[0]
            .results
            .iter()
            .find(|r| r.venue_id.as_str() == "hyperliquid")
            .unwrap();
        assert_eq!(hyperliquid.fee_bps, dec!(9.0));
    }

    #[tokio::test]
    async fn test_sell_side_uses_bids() {
        let (asset, venues, data) = gold_fixture();
        let engine = engine_with(data, EngineOptions::default());

        let report = engine
            .compute(&asset, &venues, &[dec!(10_000)], &[Side::Sell])
            .await
            .unwrap();
        let hyperliquid = report.comparisons[0]
            .results
            .iter()
            .find(|r| r.venue_id.as_str() == "hyperliquid")
            .unwrap();
        assert!(hyperliquid.fill.filled);
        // Sells execute at or below the best bid, under the mid of 2000.
        assert!(hyperliquid.fill.avg_price <= dec!(1999.0));
    }
}
