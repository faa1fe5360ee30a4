//! Preset configurations for the dashboard's comparison series
//!
//! Constants mirror the mocked data the dashboard charts: city housing
//! markets, US M2 money supply, the global liquidity ratio, and Bitcoin
//! itself.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::generator::{Cycle, SyntheticConfig};

/// Housing markets tracked by the real-estate comparison tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum City {
    LosAngeles,
    NewYork,
    Paris,
    Beirut,
    Tokyo,
}

impl City {
    pub const ALL: [City; 5] =
        [City::LosAngeles, City::NewYork, City::Paris, City::Beirut, City::Tokyo];

    pub fn name(&self) -> &'static str {
        match self {
            City::LosAngeles => "Los Angeles",
            City::NewYork => "New York City",
            City::Paris => "Paris",
            City::Beirut => "Beirut",
            City::Tokyo => "Tokyo",
        }
    }

    /// Median home price and annual appreciation for the city, with the
    /// roughly-yearly cyclical swing all city series share
    pub fn config(&self) -> SyntheticConfig {
        let (base, annual_growth) = match self {
            City::LosAngeles => (650_000.0, 0.08),
            City::NewYork => (900_000.0, 0.06),
            City::Paris => (550_000.0, 0.04),
            City::Beirut => (220_000.0, -0.15), // ongoing economic crisis
            City::Tokyo => (380_000.0, 0.02),
        };

        SyntheticConfig {
            base,
            annual_growth,
            cycle: Some(Cycle { amplitude: 0.1, period_months: 12.57 }),
            ..Default::default()
        }
    }
}

/// US M2 money supply in trillions USD, from its 2020 level
pub fn m2_money_supply() -> SyntheticConfig {
    SyntheticConfig {
        base: 15.5,
        annual_growth: 0.12,
        volatility: 0.1,
        ..Default::default()
    }
}

/// Global liquidity ratio: slow linear drift with a long swing, kept in a
/// plausible 0.2-0.8 band
pub fn global_liquidity() -> SyntheticConfig {
    SyntheticConfig {
        base: 0.45,
        monthly_trend: 0.003,
        volatility: 0.05,
        cycle: Some(Cycle { amplitude: 0.3, period_months: 62.8 }),
        floor: Some(0.2),
        cap: Some(0.8),
        ..Default::default()
    }
}

/// Bitcoin price from its 2020 level, with characteristic volatility
///
/// `m2_adjusted` uses the higher base / lower growth variant the money-supply
/// tab overlays on the M2 chart.
pub fn bitcoin_price(m2_adjusted: bool) -> SyntheticConfig {
    let (base, annual_growth) = if m2_adjusted { (10_000.0, 0.85) } else { (7_000.0, 1.2) };

    SyntheticConfig {
        base,
        annual_growth,
        volatility: 0.3,
        cycle: Some(Cycle { amplitude: 0.2, period_months: 125.7 }),
        floor: Some(1_000.0),
        ..Default::default()
    }
}

/// Mock Bitcoin price for a given date, following the rough historical
/// progression the comparison tabs denominate against
pub fn reference_btc_price(date: NaiveDate) -> f64 {
    let month = date.month0() as f64;
    match date.year() {
        2020 => 8_000.0 + month * 2_000.0,
        2021 => 30_000.0 + month * 3_000.0,
        2022 => 45_000.0 - month * 2_000.0,
        2023 => 20_000.0 + month * 1_500.0,
        2024 => 35_000.0 + month * 2_500.0,
        _ => 110_000.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_city_series_deterministic() {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        // City presets carry no random jitter, so any seed gives the same series
        let a = City::LosAngeles.config().generate(start, 36, 1);
        let b = City::LosAngeles.config().generate(start, 36, 99);
        assert_eq!(a, b);
    }

    #[test]
    fn test_beirut_declines() {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let series = City::Beirut.config().generate(start, 48, 0);
        assert!(series.points().last().unwrap().value < series.points()[0].value);
    }

    #[test]
    fn test_reference_btc_price_progression() {
        let jan_2020 = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let dec_2020 = NaiveDate::from_ymd_opt(2020, 12, 1).unwrap();
        assert_relative_eq!(reference_btc_price(jan_2020), 8_000.0);
        assert_relative_eq!(reference_btc_price(dec_2020), 30_000.0);

        // 2022 slopes downward
        let jan_2022 = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        let dec_2022 = NaiveDate::from_ymd_opt(2022, 12, 1).unwrap();
        assert!(reference_btc_price(dec_2022) < reference_btc_price(jan_2022));

        // Beyond the table: current approximate price
        let later = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        assert_relative_eq!(reference_btc_price(later), 110_000.0);
    }

    #[test]
    fn test_bitcoin_preset_floor() {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let series = bitcoin_price(false).generate(start, 60, 3);
        for p in series.points() {
            assert!(p.value >= 1_000.0);
        }
    }
}
