//! Synthetic monthly series generation

use chrono::{Months, NaiveDate};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Cyclical component layered on top of the growth trend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cycle {
    /// Relative amplitude of the swing (0.1 = ±10%)
    pub amplitude: f64,

    /// Full cycle length in months
    pub period_months: f64,
}

/// Parameters for one synthetic series
///
/// Monthly value at index `i`:
/// `(base * (1 + annual_growth)^(i/12) + monthly_trend * i)
///  * (1 + volatility * jitter + cycle)`,
/// where `jitter` is uniform in [-0.5, 0.5] from the seeded RNG and `cycle`
/// is `amplitude * sin(2π i / period)`. Values are clamped to `[floor, cap]`
/// when those bounds are set. `volatility = 0` gives a fully deterministic
/// series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SyntheticConfig {
    /// Value at month 0, before jitter and cycle
    pub base: f64,

    /// Compound annual growth rate as a decimal (0.12 = 12%/yr)
    pub annual_growth: f64,

    /// Relative jitter amplitude (0.1 = ±5% around the trend)
    pub volatility: f64,

    /// Optional cyclical swing
    pub cycle: Option<Cycle>,

    /// Additive per-month drift, for series that trend linearly
    pub monthly_trend: f64,

    /// Lower clamp applied after jitter
    pub floor: Option<f64>,

    /// Upper clamp applied after jitter
    pub cap: Option<f64>,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            base: 100.0,
            annual_growth: 0.0,
            volatility: 0.0,
            cycle: None,
            monthly_trend: 0.0,
            floor: None,
            cap: None,
        }
    }
}

impl SyntheticConfig {
    /// Generate `months` monthly points starting at `start`
    ///
    /// The jitter stream comes from a `StdRng` seeded with `seed`, so
    /// identical arguments always produce the identical series.
    pub fn generate(&self, start: NaiveDate, months: usize, seed: u64) -> MonthlySeries {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut points = Vec::with_capacity(months);

        for i in 0..months {
            let years = i as f64 / 12.0;
            let trend = self.base * (1.0 + self.annual_growth).powf(years)
                + self.monthly_trend * i as f64;

            let jitter: f64 = rng.gen::<f64>() - 0.5;
            let cyclical = self
                .cycle
                .map(|c| c.amplitude * (std::f64::consts::TAU * i as f64 / c.period_months).sin())
                .unwrap_or(0.0);

            let mut value = trend * (1.0 + self.volatility * jitter + cyclical);
            if let Some(floor) = self.floor {
                value = value.max(floor);
            }
            if let Some(cap) = self.cap {
                value = value.min(cap);
            }

            points.push(SeriesPoint { date: start + Months::new(i as u32), value });
        }

        debug!("generated {} synthetic points from {}", points.len(), start);
        MonthlySeries { points }
    }
}

/// One dated value in a synthetic series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// A dated monthly series, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeries {
    points: Vec<SeriesPoint>,
}

impl MonthlySeries {
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// ISO date labels, one per point (chart x-axis)
    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.date.format("%Y-%m-%d").to_string()).collect()
    }

    /// Values parallel to [`labels`](Self::labels)
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Divide each value by the matching BTC price, yielding a BTC-denominated
    /// series. Entries where the price series has no value are skipped.
    pub fn denominated_in(&self, btc_prices: &MonthlySeries) -> MonthlySeries {
        let points = self
            .points
            .iter()
            .zip(btc_prices.points.iter())
            .filter(|(_, btc)| btc.value > 0.0)
            .map(|(p, btc)| SeriesPoint { date: p.date, value: p.value / btc.value })
            .collect();
        MonthlySeries { points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
    }

    #[test]
    fn test_deterministic_without_volatility() {
        let config = SyntheticConfig {
            base: 650_000.0,
            annual_growth: 0.08,
            ..Default::default()
        };

        let series = config.generate(start(), 24, 0);
        assert_eq!(series.len(), 24);
        assert_relative_eq!(series.points()[0].value, 650_000.0, max_relative = 1e-12);
        // One year out: exactly one year of compound growth
        assert_relative_eq!(series.points()[12].value, 650_000.0 * 1.08, max_relative = 1e-12);
    }

    #[test]
    fn test_seed_reproducibility() {
        let config = SyntheticConfig {
            base: 15.5,
            annual_growth: 0.12,
            volatility: 0.1,
            ..Default::default()
        };

        let a = config.generate(start(), 60, 42);
        let b = config.generate(start(), 60, 42);
        assert_eq!(a, b);

        let c = config.generate(start(), 60, 43);
        assert_ne!(a, c);
    }

    #[test]
    fn test_clamping() {
        let config = SyntheticConfig {
            base: 0.45,
            monthly_trend: 0.003,
            volatility: 0.05,
            floor: Some(0.2),
            cap: Some(0.8),
            ..Default::default()
        };

        let series = config.generate(start(), 240, 7);
        for p in series.points() {
            assert!(p.value >= 0.2 && p.value <= 0.8);
        }
    }

    #[test]
    fn test_monthly_dates() {
        let config = SyntheticConfig::default();
        let series = config.generate(start(), 14, 0);

        assert_eq!(series.points()[0].date, start());
        assert_eq!(series.points()[13].date, NaiveDate::from_ymd_opt(2021, 2, 1).unwrap());
        assert_eq!(series.labels()[1], "2020-02-01");
    }

    #[test]
    fn test_btc_denomination() {
        let usd = SyntheticConfig { base: 100_000.0, ..Default::default() }.generate(start(), 3, 0);
        let btc = SyntheticConfig { base: 50_000.0, ..Default::default() }.generate(start(), 3, 0);

        let in_btc = usd.denominated_in(&btc);
        assert_eq!(in_btc.len(), 3);
        assert_relative_eq!(in_btc.points()[0].value, 2.0, max_relative = 1e-12);
    }
}
