//! Cross-venue cost comparison walkthrough.
//!
//! Builds a static market-data universe for gold across four venues (two
//! with walkable books, one fixed-fee zero-slippage venue, one priced by
//! an assumed spread) and ranks them per order size.
//!
//! Run with: `cargo run --example compare_venues`

use venue_cost_rs::book::OrderBook;
use venue_cost_rs::dec;
use venue_cost_rs::engine::{default_order_sizes, ExecutionCostEngine};
use venue_cost_rs::fees::FeeSchedule;
use venue_cost_rs::venue::{Asset, AssetCategory, StaticMarketData, VenueConfig};
use venue_cost_rs::walker::Side;

fn build_universe() -> (Asset, Vec<VenueConfig>, StaticMarketData) {
    let asset = Asset::new("GOLD", AssetCategory::Gold)
        .with_alias("hyperliquid", "PAXG")
        .with_alias("lighter", "XAU")
        .with_alias("ostium", "XAUUSD")
        .with_alias("avantis", "XAUUSD");

    let mut data = StaticMarketData::new();

    // Hyperliquid: walkable book, 4.5 bps taker.
    data.insert_book(
        "hyperliquid",
        "PAXG",
        OrderBook::from_raw(
            &[
                (dec!(1999.0), dec!(12.0)),
                (dec!(1998.5), dec!(30.0)),
                (dec!(1998.0), dec!(55.0)),
            ],
            &[
                (dec!(2000.0), dec!(12.0)),
                (dec!(2000.5), dec!(30.0)),
                (dec!(2001.0), dec!(55.0)),
            ],
            1_700_000_000_000,
        )
        .expect("static book"),
    );
    data.insert_fee_schedule(
        "hyperliquid",
        AssetCategory::Gold,
        FeeSchedule::bps(dec!(4.5), dec!(4.5)).expect("static schedule"),
    );

    // Lighter: walkable book, zero fees.
    data.insert_book(
        "lighter",
        "XAU",
        OrderBook::from_raw(
            &[(dec!(1999.4), dec!(9.0)), (dec!(1999.0), dec!(25.0))],
            &[(dec!(1999.6), dec!(9.0)), (dec!(2000.0), dec!(25.0))],
            1_700_000_000_000,
        )
        .expect("static book"),
    );
    data.insert_fee_schedule("lighter", AssetCategory::Gold, FeeSchedule::zero());

    // Avantis: fixed-fee perps, zero slippage guaranteed on gold.
    data.insert_fee_schedule(
        "avantis",
        AssetCategory::Gold,
        FeeSchedule::bps(dec!(6.0), dec!(0.0))
            .expect("static schedule")
            .with_forced_zero_slippage(),
    );

    // Ostium: no book integration yet, 3 bps assumed spread + 3 bps opening.
    data.insert_fee_schedule(
        "ostium",
        AssetCategory::Gold,
        FeeSchedule::bps(dec!(3.0), dec!(0.0)).expect("static schedule"),
    );

    let venues = vec![
        VenueConfig::walkable("hyperliquid"),
        VenueConfig::walkable("lighter"),
        VenueConfig::estimated("avantis", dec!(2.0)).expect("static config"),
        VenueConfig::estimated("ostium", dec!(3.0)).expect("static config"),
    ];
    (asset, venues, data)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let (asset, venues, data) = build_universe();
    let engine = ExecutionCostEngine::new(data.clone(), data);

    let sizes = default_order_sizes();
    let report = engine
        .compute(&asset, &venues, &sizes, &[Side::Buy, Side::Sell])
        .await
        .expect("sizes are positive");

    println!("=== Cross-Venue Execution Cost: {} ===\n", report.asset);

    for comparison in &report.comparisons {
        println!(
            "{} ${} (margin to 2nd: {:.2} bps)",
            comparison.side, comparison.notional_usd, comparison.margin_bps
        );
        println!(
            "  {:<14} {:>12} {:>10} {:>12} {:>8} {:>10}",
            "venue", "slippage", "fee bps", "fee usd", "total", "fill %"
        );
        for result in &comparison.results {
            let tag = if result.estimated { " (est)" } else { "" };
            println!(
                "  {:<14} {:>12.4} {:>10.2} {:>12.2} {:>8.2} {:>9.2}%{}",
                result.venue_id.as_str(),
                result.slippage_bps,
                result.fee_bps,
                result.fee_usd,
                result.total_cost_bps,
                result.fill.fill_percent,
                tag,
            );
        }
        println!();
    }

    if !report.warnings.is_empty() {
        println!("Warnings:");
        for warning in &report.warnings {
            println!("  {}: {}", warning.venue_id, warning.reason);
        }
    }
}
