//! College tuition denominated in BTC
//!
//! The dashboard's college tab tracks private-university tuition against
//! Bitcoin: Harvard's published history, estimated histories for other
//! schools (4% annual growth backed out from the 2024 sticker price), and
//! the growth race normalized to 2009.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::history;
use crate::units;

/// Assumed annual tuition growth for estimated histories
pub const TUITION_GROWTH_RATE: f64 = 0.04;

/// Harvard tuition in the first year of the comparison
pub const HARVARD_TUITION_2009: f64 = 50_724.0;

/// Approximate 2009 Bitcoin price the growth comparison normalizes against
const BTC_PRICE_2009: f64 = 0.01;

/// A tracked university with its 2024 sticker price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct University {
    pub id: String,
    pub name: String,
    pub tuition_2024: f64,
}

impl University {
    fn new(id: &str, name: &str, tuition_2024: f64) -> Self {
        Self { id: id.to_string(), name: name.to_string(), tuition_2024 }
    }
}

/// The private universities shown on the comparison cards
pub fn universities() -> Vec<University> {
    vec![
        University::new("harvey-mudd", "Harvey Mudd College", 90_165.0),
        University::new("northwestern", "Northwestern University", 91_290.0),
        University::new("usc", "USC", 90_453.0),
        University::new("uchicago", "University of Chicago", 90_360.0),
        University::new("pepperdine", "Pepperdine University", 93_512.0),
    ]
}

/// Harvard's published tuition by year, 2009 through 2024
pub fn harvard_history() -> Vec<(i32, f64)> {
    vec![
        (2009, 50_724.0),
        (2010, 52_652.0),
        (2011, 54_496.0),
        (2012, 56_407.0),
        (2013, 58_607.0),
        (2014, 60_659.0),
        (2015, 63_025.0),
        (2016, 65_609.0),
        (2017, 68_580.0),
        (2018, 71_650.0),
        (2019, 74_528.0),
        (2020, 76_623.0),
        (2021, 79_450.0),
        (2022, 81_611.0),
        (2023, 84_413.0),
        (2024, 79_450.0), // financial-aid restructuring lowered the sticker
    ]
}

/// Estimate a university's tuition in `year` by compounding
/// [`TUITION_GROWTH_RATE`] from the known 2024 value (backwards for earlier
/// years, forwards for later ones)
pub fn estimated_tuition(tuition_2024: f64, year: i32) -> f64 {
    tuition_2024 * (1.0 + TUITION_GROWTH_RATE).powi(year - 2024)
}

/// Tuition for one year in both denominations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TuitionPoint {
    pub year: i32,
    pub usd: f64,
    pub btc: f64,
}

/// Estimated year-by-year tuition for a university, denominated via the
/// approximate annual BTC price
pub fn university_series_btc(
    university: &University,
    start_year: i32,
    end_year: i32,
) -> Result<Vec<TuitionPoint>, ModelError> {
    (start_year..=end_year)
        .map(|year| {
            let usd = estimated_tuition(university.tuition_2024, year);
            let btc = units::usd_to_btc(usd, history::price_by_year(year))?;
            Ok(TuitionPoint { year, usd, btc })
        })
        .collect()
}

/// One year of the tuition-vs-Bitcoin growth race, indexed to 2009 = 100
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub year: i32,
    pub tuition_index: f64,
    pub btc_index: f64,
}

/// Harvard tuition growth against Bitcoin price growth, both normalized to
/// 2009 = 100. Years without a published tuition entry are skipped.
pub fn growth_comparison(years: &[i32]) -> Vec<GrowthPoint> {
    let harvard = harvard_history();

    years
        .iter()
        .filter_map(|&year| {
            let (_, tuition) = harvard.iter().find(|(y, _)| *y == year)?;
            Some(GrowthPoint {
                year,
                tuition_index: tuition / HARVARD_TUITION_2009 * 100.0,
                btc_index: history::price_by_year(year) / BTC_PRICE_2009 * 100.0,
            })
        })
        .collect()
}

/// How much cheaper a Harvard year is in BTC now versus 2009, in percent
pub fn education_savings_pct(current_btc_price: f64) -> Result<f64, ModelError> {
    let cost_2009 = units::usd_to_btc(HARVARD_TUITION_2009, BTC_PRICE_2009)?;
    let harvard_2024 = harvard_history()
        .last()
        .map(|(_, t)| *t)
        .unwrap_or(HARVARD_TUITION_2009);
    let cost_now = units::usd_to_btc(harvard_2024, current_btc_price)?;

    Ok((cost_2009 - cost_now) / cost_2009 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_harvard_history_table() {
        let history = harvard_history();
        assert_eq!(history.len(), 16);
        assert_eq!(history[0], (2009, 50_724.0));
        assert_eq!(history[12], (2021, 79_450.0));
        // Contiguous years
        for pair in history.windows(2) {
            assert_eq!(pair[1].0, pair[0].0 + 1);
        }
    }

    #[test]
    fn test_estimated_tuition_recurrence() {
        // 2024 is the anchor year
        assert_relative_eq!(estimated_tuition(90_165.0, 2024), 90_165.0);

        // Four years back: divided by 1.04^4
        assert_relative_eq!(
            estimated_tuition(90_165.0, 2020),
            90_165.0 / 1.04_f64.powi(4),
            max_relative = 1e-12
        );

        // One year forward: one more step of growth
        assert_relative_eq!(
            estimated_tuition(90_165.0, 2025),
            90_165.0 * 1.04,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_university_series_btc() {
        let usc = University::new("usc", "USC", 90_453.0);
        let series = university_series_btc(&usc, 2020, 2024).unwrap();

        assert_eq!(series.len(), 5);
        assert_eq!(series[0].year, 2020);

        // 2023: estimated tuition over the $42k annual price
        let p2023 = series.iter().find(|p| p.year == 2023).unwrap();
        let expected_usd = 90_453.0 / 1.04;
        assert_relative_eq!(p2023.usd, expected_usd, max_relative = 1e-12);
        assert_relative_eq!(p2023.btc, expected_usd / 42_000.0, max_relative = 1e-12);

        // Tuition in BTC collapses as the price table climbs
        assert!(series.last().unwrap().btc < series[0].btc);
    }

    #[test]
    fn test_growth_comparison_normalized() {
        let points = growth_comparison(&[2009, 2012, 2015, 2018, 2021, 2024]);
        assert_eq!(points.len(), 6);

        // 2009 is the index base for both series
        assert_relative_eq!(points[0].tuition_index, 100.0);
        assert_relative_eq!(points[0].btc_index, 100.0);

        // Bitcoin's index dwarfs tuition's by 2021 (47,000 / 0.01)
        let p2021 = &points[4];
        assert_relative_eq!(p2021.btc_index, 470_000_000.0, max_relative = 1e-12);
        assert!(p2021.tuition_index < 200.0);

        // Years without a published entry are dropped
        assert!(growth_comparison(&[1999]).is_empty());
    }

    #[test]
    fn test_education_savings() {
        // 2009: 50,724 / 0.01 = 5,072,400 BTC; 2024 at $100k: 0.7945 BTC
        let savings = education_savings_pct(100_000.0).unwrap();
        assert!(savings > 99.9 && savings <= 100.0);

        assert!(education_savings_pct(0.0).is_err());
    }
}
