//! Personal CPI report from a basket CSV
//!
//! Reads a basket of (category_id, weight) rows, computes the weighted
//! personal CPI against a category table, and prints the breakdown.

use anyhow::{bail, Context, Result};
use btc_models::cpi::{self, loader};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cpi_report", about = "Compute a personal CPI from a basket CSV")]
struct Args {
    /// Basket CSV with category_id,weight columns
    #[arg(long)]
    basket: PathBuf,

    /// Category table CSV; defaults to the shipped 2024 table
    #[arg(long)]
    categories: Option<PathBuf>,

    /// Emit JSON instead of the console report
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    personal_cpi: f64,
    inflation_vs_base_pct: f64,
    total_weight: f64,
    items: Vec<cpi::BasketItem>,
    trend: Vec<(i32, f64)>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let categories = match &args.categories {
        Some(path) => loader::load_categories(path)
            .with_context(|| format!("loading categories from {}", path.display()))?,
        None => cpi::default_2024_categories(),
    };

    let basket = loader::load_basket(&args.basket)
        .with_context(|| format!("loading basket from {}", args.basket.display()))?;

    let Some(personal_cpi) = basket.personal_cpi(&categories) else {
        bail!("basket carries no weight in any known category");
    };

    let report = Report {
        personal_cpi,
        inflation_vs_base_pct: cpi::inflation_vs_base(personal_cpi),
        total_weight: basket.total_weight(),
        items: basket.contributions(&categories),
        trend: cpi::historical_trend(personal_cpi),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Personal CPI Report");
    println!("===================\n");
    println!("{:<24} {:>8} {:>8} {:>14}", "Category", "CPI", "Weight", "Contribution");
    println!("{}", "-".repeat(58));
    for item in &report.items {
        println!(
            "{:<24} {:>8.1} {:>8.1} {:>14.1}",
            item.name, item.cpi, item.weight, item.contribution
        );
    }

    println!("\nPersonal CPI: {:.1}", report.personal_cpi);
    println!("Inflation vs 2020 base: {:.1}%", report.inflation_vs_base_pct);

    println!("\nTrend:");
    for (year, value) in &report.trend {
        println!("  {}: {:.1}", year, value);
    }

    Ok(())
}
