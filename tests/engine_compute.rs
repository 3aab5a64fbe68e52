//! End-to-end comparison runs through the static providers.

use venue_cost_rs::book::OrderBook;
use venue_cost_rs::dec;
use venue_cost_rs::engine::{default_order_sizes, EngineOptions, ExecutionCostEngine};
use venue_cost_rs::fees::FeeSchedule;
use venue_cost_rs::report::RankingPolicy;
use venue_cost_rs::types::error::VCError;
use venue_cost_rs::venue::{Asset, AssetCategory, StaticMarketData, VenueConfig};
use venue_cost_rs::walker::Side;
use venue_cost_rs::Decimal;

/// Four venues in the shape of the real comparison: two with walkable
/// books, one fixed-fee zero-slippage venue, one estimated venue, plus a
/// venue with no data at all.
fn gold_universe() -> (Asset, Vec<VenueConfig>, StaticMarketData) {
    let asset = Asset::new("GOLD", AssetCategory::Gold)
        .with_alias("hyperliquid", "PAXG")
        .with_alias("lighter", "XAU")
        .with_alias("ostium", "XAUUSD")
        .with_alias("avantis", "XAUUSD");

    let mut data = StaticMarketData::new();

    // Hyperliquid: deep book, 4.5 bps taker.
    data.insert_book(
        "hyperliquid",
        "PAXG",
        OrderBook::from_raw(
            &[(dec!(1999.0), dec!(10.0)), (dec!(1998.0), dec!(40.0))],
            &[(dec!(2000.0), dec!(10.0)), (dec!(2001.0), dec!(40.0))],
            1_700_000_000_000,
        )
        .unwrap(),
    );
    data.insert_fee_schedule(
        "hyperliquid",
        AssetCategory::Gold,
        FeeSchedule::bps(dec!(4.5), dec!(4.5)).unwrap(),
    );

    // Lighter: tighter book, zero fees.
    data.insert_book(
        "lighter",
        "XAU",
        OrderBook::from_raw(
            &[(dec!(1999.4), dec!(8.0)), (dec!(1999.0), dec!(20.0))],
            &[(dec!(1999.6), dec!(8.0)), (dec!(2000.0), dec!(20.0))],
            1_700_000_000_000,
        )
        .unwrap(),
    );
    data.insert_fee_schedule("lighter", AssetCategory::Gold, FeeSchedule::zero());

    // Avantis: fixed-fee perps, zero slippage on gold.
    data.insert_fee_schedule(
        "avantis",
        AssetCategory::Gold,
        FeeSchedule::bps(dec!(6.0), dec!(0.0))
            .unwrap()
            .with_forced_zero_slippage(),
    );

    // Ostium: no book integration, assumed spread plus opening fee.
    data.insert_fee_schedule(
        "ostium",
        AssetCategory::Gold,
        FeeSchedule::bps(dec!(3.0), dec!(0.0)).unwrap(),
    );

    let venues = vec![
        VenueConfig::walkable("hyperliquid"),
        VenueConfig::walkable("lighter"),
        VenueConfig::estimated("avantis", dec!(2.0)).unwrap(),
        VenueConfig::estimated("ostium", dec!(3.0)).unwrap(),
        VenueConfig::walkable("ghost"),
    ];
    (asset, venues, data)
}

fn engine(
    data: StaticMarketData,
) -> ExecutionCostEngine<StaticMarketData, StaticMarketData> {
    ExecutionCostEngine::new(data.clone(), data)
}

#[tokio::test]
async fn full_comparison_ranks_all_available_venues() {
    let (asset, venues, data) = gold_universe();

    let report = engine(data)
        .compute(&asset, &venues, &[dec!(10_000)], &[Side::Buy])
        .await
        .unwrap();

    assert_eq!(report.asset, "GOLD");
    assert_eq!(report.comparisons.len(), 1);

    let comparison = &report.comparisons[0];
    let order: Vec<&str> = comparison
        .results
        .iter()
        .map(|r| r.venue_id.as_str())
        .collect();

    // Lighter walks ~0.5 bps slippage at zero fee; Avantis is a flat 6
    // (zero slippage forced); Ostium 3 assumed + 3 opening = 6, tied with
    // Avantis and behind it lexically; Hyperliquid pays 2.5 bps of walked
    // slippage on top of its 4.5 bps taker fee.
    assert_eq!(order, vec!["lighter", "avantis", "ostium", "hyperliquid"]);

    let lighter = &comparison.results[0];
    assert!(!lighter.estimated);
    assert!(lighter.total_cost_bps < dec!(1.0));

    let avantis = &comparison.results[1];
    assert!(avantis.estimated);
    assert_eq!(avantis.total_cost_bps, dec!(6.0));
    assert_eq!(avantis.slippage_bps, Decimal::ZERO);

    let ostium = &comparison.results[2];
    assert_eq!(ostium.total_cost_bps, dec!(6.0));
    assert_eq!(ostium.slippage_bps, dec!(3.0));

    let hyperliquid = &comparison.results[3];
    assert!(hyperliquid.total_cost_bps > dec!(6.0));
    assert!(hyperliquid.fill.filled);

    // Margin is cheapest vs second-cheapest.
    assert_eq!(
        comparison.margin_bps,
        avantis.total_cost_bps - lighter.total_cost_bps
    );

    // The ghost venue surfaced as a warning, not a failure.
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].venue_id.as_str(), "ghost");
}

#[tokio::test]
async fn equal_costs_rank_lexically() {
    let (asset, venues, data) = gold_universe();

    let report = engine(data)
        .compute(&asset, &venues, &[dec!(10_000)], &[Side::Buy])
        .await
        .unwrap();

    let comparison = &report.comparisons[0];
    let tied: Vec<&str> = comparison
        .results
        .iter()
        .filter(|r| r.total_cost_bps == dec!(6.0))
        .map(|r| r.venue_id.as_str())
        .collect();
    assert_eq!(tied, vec!["avantis", "ostium"]);
}

#[tokio::test]
async fn both_sides_and_multiple_sizes() {
    let (asset, venues, data) = gold_universe();
    let sizes = [dec!(10_000), dec!(100_000)];

    let report = engine(data)
        .compute(&asset, &venues, &sizes, &[Side::Buy, Side::Sell])
        .await
        .unwrap();

    assert_eq!(report.comparisons.len(), 4);
    for &size in &sizes {
        for side in [Side::Buy, Side::Sell] {
            let comparison = report.comparison_for(size, side).unwrap();
            assert_eq!(comparison.results.len(), 4);
        }
    }

    // Walked costs never decrease with size on the same venue and side.
    let small = report.comparison_for(dec!(10_000), Side::Buy).unwrap();
    let large = report.comparison_for(dec!(100_000), Side::Buy).unwrap();
    for venue in ["hyperliquid", "lighter"] {
        let small_cost = small
            .results
            .iter()
            .find(|r| r.venue_id.as_str() == venue)
            .unwrap()
            .total_cost_bps;
        let large_cost = large
            .results
            .iter()
            .find(|r| r.venue_id.as_str() == venue)
            .unwrap()
            .total_cost_bps;
        assert!(large_cost >= small_cost);
    }
}

#[tokio::test]
async fn oversized_order_reports_partial_fill() {
    let (asset, venues, data) = gold_universe();

    // Far beyond the books: every walkable venue reports a partial fill
    // but stays in the ranking by default.
    let report = engine(data)
        .compute(&asset, &venues, &[dec!(1_000_000_000)], &[Side::Buy])
        .await
        .unwrap();

    let comparison = &report.comparisons[0];
    let lighter = comparison
        .results
        .iter()
        .find(|r| r.venue_id.as_str() == "lighter")
        .unwrap();
    assert!(!lighter.fill.filled);
    assert!(lighter.fill.fill_percent > Decimal::ZERO);
    assert!(lighter.fill.fill_percent < dec!(1.0));
}

#[tokio::test]
async fn ranking_policy_can_exclude_partials() {
    let (asset, venues, data) = gold_universe();
    let engine = ExecutionCostEngine::with_options(
        data.clone(),
        data,
        EngineOptions {
            round_trip: false,
            ranking: RankingPolicy {
                include_partial_fills: false,
            },
        },
    );

    let report = engine
        .compute(&asset, &venues, &[dec!(1_000_000_000)], &[Side::Buy])
        .await
        .unwrap();

    // Only the estimated venues remain: their nominal fills are complete.
    let comparison = &report.comparisons[0];
    let order: Vec<&str> = comparison
        .results
        .iter()
        .map(|r| r.venue_id.as_str())
        .collect();
    assert_eq!(order, vec!["avantis", "ostium"]);
}

#[tokio::test]
async fn invalid_size_aborts_the_batch() {
    let (asset, venues, data) = gold_universe();

    let err = engine(data)
        .compute(&asset, &venues, &[dec!(10_000), dec!(-5.0)], &[Side::Buy])
        .await
        .unwrap_err();
    assert!(matches!(err, VCError::InvalidRequest(_)));
}

#[tokio::test]
async fn default_sizes_are_the_conventional_ladder() {
    let sizes = default_order_sizes();
    assert_eq!(
        sizes,
        vec![
            dec!(10_000),
            dec!(100_000),
            dec!(1_000_000),
            dec!(10_000_000)
        ]
    );

    let (asset, venues, data) = gold_universe();
    let report = engine(data)
        .compute(&asset, &venues, &sizes, &[Side::Buy])
        .await
        .unwrap();
    assert_eq!(report.comparisons.len(), 4);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn report_serializes_as_structured_record() {
    let (asset, venues, data) = gold_universe();

    let report = engine(data)
        .compute(&asset, &venues, &[dec!(10_000)], &[Side::Buy])
        .await
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["asset"], "GOLD");
    let results = json["comparisons"][0]["results"].as_array().unwrap();
    assert_eq!(results.len(), 4);
    for result in results {
        assert!(result["venue_id"].is_string());
        assert!(result["total_cost_bps"].is_string() || result["total_cost_bps"].is_number());
        assert!(result["fill"]["fill_percent"].is_string() || result["fill"]["fill_percent"].is_number());
    }
}
