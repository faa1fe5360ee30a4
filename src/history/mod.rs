//! Bitcoin price history from key milestones
//!
//! The dashboard draws long-range history by linearly interpolating between
//! well-known price milestones instead of calling an API. The daily jitter it
//! layers on top is display dressing and is not reproduced here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated price milestone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub date: NaiveDate,
    pub price: f64,
}

/// Key Bitcoin price milestones, 2010 through late 2024
pub fn btc_milestones() -> Vec<Milestone> {
    const TABLE: [(i32, u32, u32, f64); 20] = [
        (2010, 1, 1, 0.01),
        (2010, 7, 1, 0.08),
        (2011, 1, 1, 0.30),
        (2011, 6, 1, 20.0),
        (2012, 1, 1, 5.0),
        (2013, 1, 1, 13.0),
        (2013, 12, 1, 1_000.0),
        (2014, 12, 1, 320.0),
        (2015, 12, 1, 430.0),
        (2016, 12, 1, 750.0),
        (2017, 12, 1, 19_000.0),
        (2018, 12, 1, 4_000.0),
        (2019, 12, 1, 7_200.0),
        (2020, 3, 1, 5_000.0),
        (2020, 12, 1, 29_000.0),
        (2021, 11, 1, 67_000.0),
        (2022, 12, 1, 16_500.0),
        (2023, 12, 1, 42_000.0),
        (2024, 3, 1, 70_000.0),
        (2024, 12, 1, 100_000.0),
    ];

    TABLE
        .iter()
        .filter_map(|&(y, m, d, price)| {
            NaiveDate::from_ymd_opt(y, m, d).map(|date| Milestone { date, price })
        })
        .collect()
}

/// Linearly interpolate a price between the bracketing milestones
///
/// Returns `None` outside the covered range. Milestones must be sorted by
/// date ascending, which [`btc_milestones`] guarantees.
pub fn interpolate_at(milestones: &[Milestone], date: NaiveDate) -> Option<f64> {
    let first = milestones.first()?;
    let last = milestones.last()?;
    if date < first.date || date > last.date {
        return None;
    }

    for pair in milestones.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if date >= lo.date && date <= hi.date {
            let span = (hi.date - lo.date).num_days() as f64;
            if span == 0.0 {
                return Some(lo.price);
            }
            let progress = (date - lo.date).num_days() as f64 / span;
            return Some(lo.price + (hi.price - lo.price) * progress);
        }
    }

    None
}

/// Approximate year-end Bitcoin price by calendar year
///
/// Years outside the 2009-2024 table fall back to the 2024 value, matching
/// the dashboard's lookup.
pub fn price_by_year(year: i32) -> f64 {
    match year {
        2009 => 0.01,
        2010 => 0.30,
        2011 => 5.0,
        2012 => 13.0,
        2013 => 400.0,
        2014 => 320.0,
        2015 => 430.0,
        2016 => 950.0,
        2017 => 13_800.0,
        2018 => 3_700.0,
        2019 => 7_200.0,
        2020 => 28_900.0,
        2021 => 47_000.0,
        2022 => 16_500.0,
        2023 => 42_000.0,
        _ => 100_000.0,
    }
}
