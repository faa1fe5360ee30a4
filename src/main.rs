//! Bitcoin Models CLI
//!
//! Runs the default Bitcoin24 projection and writes the full series to CSV

use btc_models::{
    projection::{ProjectionConfig, ProjectionEngine, Scenario},
    units,
};
use std::fs::File;
use std::io::Write;

fn main() {
    env_logger::init();

    println!("Bitcoin Models v0.1.0");
    println!("=====================\n");

    let config = ProjectionConfig::default();
    let scenario = Scenario::bear();

    println!("Anchor: {} @ ${:.0}", config.anchor_year, config.anchor_price);
    println!("Horizon: {} years", config.horizon_years);
    println!(
        "Scenario: bear (ARR {:.1}% -> {:.1}%, -{:.1}%/yr)",
        scenario.initial_rate, scenario.floor_rate, scenario.decay_per_year
    );
    println!();

    let engine = ProjectionEngine::new(config);
    let series = engine.project(&scenario).expect("projection failed");

    // Print the full year table
    println!("Projection Results ({} years):", series.len() - 1);
    println!("{:>6} {:>18} {:>8} {:>16}", "Year", "Price (USD)", "ARR %", "Bits per $1M");
    println!("{}", "-".repeat(52));

    for point in series.points() {
        let bits = units::usd_to_bits(1_000_000.0, point.price).expect("positive price");
        println!(
            "{:>6} {:>18.2} {:>8.1} {:>16.1}",
            point.year, point.price, point.rate, bits
        );
    }

    // Write full results to CSV
    let csv_path = "projection_output.csv";
    let mut file = File::create(csv_path).expect("Unable to create CSV file");

    writeln!(file, "Year,Price,ARR").unwrap();
    for point in series.points() {
        writeln!(file, "{},{:.8},{:.4}", point.year, point.price, point.rate).unwrap();
    }

    println!("\nFull results written to: {}", csv_path);

    // Print summary
    let summary = series.summary();
    println!("\nSummary:");
    println!("  Final Price: ${:.1}M", summary.final_price / 1_000_000.0);
    println!("  Market Cap: ${:.0}T", summary.market_cap_trillions);
    println!("  Compound ARR: {:.1}%", summary.compound_arr_pct);
    println!("  Share of Global Wealth: {:.1}%", summary.share_of_global_wealth_pct);
}
