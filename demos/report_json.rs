//! Serializing a comparison report as a structured record.
//!
//! Run with: `cargo run --example report_json --features serde`

use venue_cost_rs::book::OrderBook;
use venue_cost_rs::dec;
use venue_cost_rs::engine::ExecutionCostEngine;
use venue_cost_rs::fees::FeeSchedule;
use venue_cost_rs::venue::{Asset, AssetCategory, StaticMarketData, VenueConfig};
use venue_cost_rs::walker::Side;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let asset = Asset::new("SPY", AssetCategory::Indices).with_alias("avantis", "SPYUSD");

    let mut data = StaticMarketData::new();
    data.insert_book(
        "hyperliquid",
        "SPY",
        OrderBook::from_raw(
            &[(dec!(499.9), dec!(500.0)), (dec!(499.8), dec!(1500.0))],
            &[(dec!(500.1), dec!(500.0)), (dec!(500.2), dec!(1500.0))],
            1_700_000_000_000,
        )
        .expect("static book"),
    );
    data.insert_fee_schedule(
        "hyperliquid",
        AssetCategory::Indices,
        FeeSchedule::bps(dec!(4.5), dec!(4.5)).expect("static schedule"),
    );
    data.insert_fee_schedule(
        "avantis",
        AssetCategory::Indices,
        FeeSchedule::bps(dec!(6.0), dec!(0.0))
            .expect("static schedule")
            .with_forced_zero_slippage(),
    );

    let venues = vec![
        VenueConfig::walkable("hyperliquid"),
        VenueConfig::estimated("avantis", dec!(0.0)).expect("static config"),
    ];

    let engine = ExecutionCostEngine::new(data.clone(), data);
    let report = engine
        .compute(&asset, &venues, &[dec!(100_000)], &[Side::Buy])
        .await
        .expect("sizes are positive");

    let json = serde_json::to_string_pretty(&report).expect("report serializes");
    println!("{json}");
}
