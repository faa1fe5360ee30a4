//! Run all scenario presets against one anchor configuration
//!
//! Supports JSON output for API integration via --json flag
//! Accepts config via environment variables:
//!   ANCHOR_YEAR, ANCHOR_PRICE, HORIZON_YEARS

use btc_models::{
    projection::{ProjectionConfig, ProjectionEngine, Scenario, ScenarioKind},
    ModelError,
};
use rayon::prelude::*;
use serde::Serialize;
use std::env;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

#[derive(Serialize)]
struct ComparisonResponse {
    anchor_year: i32,
    anchor_price: f64,
    horizon_years: u32,
    scenarios: Vec<ScenarioResult>,
    execution_time_ms: u64,
}

#[derive(Serialize)]
struct ScenarioResult {
    name: &'static str,
    initial_rate: f64,
    decay_per_year: f64,
    floor_rate: f64,
    final_price: f64,
    market_cap_trillions: f64,
    compound_arr_pct: f64,
    share_of_global_wealth_pct: f64,
    years: Vec<String>,
    prices: Vec<f64>,
    rates: Vec<f64>,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key).ok().and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn main() -> Result<(), ModelError> {
    env_logger::init();

    let json_output = env::args().any(|arg| arg == "--json");
    let start = Instant::now();

    let defaults = ProjectionConfig::default();
    let config = ProjectionConfig {
        anchor_year: env_or("ANCHOR_YEAR", defaults.anchor_year),
        anchor_price: env_or("ANCHOR_PRICE", defaults.anchor_price),
        horizon_years: env_or("HORIZON_YEARS", defaults.horizon_years),
    };

    let engine = ProjectionEngine::new(config);

    // Run all presets in parallel
    let results: Vec<ScenarioResult> = ScenarioKind::ALL
        .par_iter()
        .map(|&kind| {
            let scenario = Scenario::preset(kind);
            let series = engine.project(&scenario)?;
            let summary = series.summary();

            Ok(ScenarioResult {
                name: kind.name(),
                initial_rate: scenario.initial_rate,
                decay_per_year: scenario.decay_per_year,
                floor_rate: scenario.floor_rate,
                final_price: summary.final_price,
                market_cap_trillions: summary.market_cap_trillions,
                compound_arr_pct: summary.compound_arr_pct,
                share_of_global_wealth_pct: summary.share_of_global_wealth_pct,
                years: series.labels(),
                prices: series.prices(),
                rates: series.rates(),
            })
        })
        .collect::<Result<_, ModelError>>()?;

    if json_output {
        let response = ComparisonResponse {
            anchor_year: config.anchor_year,
            anchor_price: config.anchor_price,
            horizon_years: config.horizon_years,
            scenarios: results,
            execution_time_ms: start.elapsed().as_millis() as u64,
        };
        println!("{}", serde_json::to_string_pretty(&response).expect("serialize response"));
        return Ok(());
    }

    println!(
        "Scenario comparison: {} @ ${:.0}, {} years\n",
        config.anchor_year, config.anchor_price, config.horizon_years
    );
    println!(
        "{:>6} {:>10} {:>10} {:>8} {:>16} {:>12} {:>10}",
        "Name", "Start ARR", "Decay/yr", "Floor", "Final Price", "Mkt Cap $T", "ARR %"
    );
    println!("{}", "-".repeat(78));

    for r in &results {
        println!(
            "{:>6} {:>10.1} {:>10.1} {:>8.1} {:>16.0} {:>12.0} {:>10.1}",
            r.name,
            r.initial_rate,
            r.decay_per_year,
            r.floor_rate,
            r.final_price,
            r.market_cap_trillions,
            r.compound_arr_pct,
        );
    }

    // Write per-year prices for all scenarios side by side
    let output_path = "scenario_comparison.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");

    writeln!(file, "Year,Bear,Base,Bull").unwrap();
    for i in 0..results[0].years.len() {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2}",
            results[0].years[i], results[0].prices[i], results[1].prices[i], results[2].prices[i],
        )
        .unwrap();
    }

    println!("\nOutput written to {}", output_path);
    println!("Total time: {:?}", start.elapsed());

    Ok(())
}
