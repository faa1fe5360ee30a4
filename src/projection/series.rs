//! Projection output structures

use serde::{Deserialize, Serialize};

/// Bitcoin's fixed maximum supply, used for market cap estimates
pub const MAX_BTC_SUPPLY: f64 = 21_000_000.0;

/// Estimated global wealth in trillions USD, for the share-of-assets stat
pub const GLOBAL_WEALTH_TRILLIONS: f64 = 4_000.0;

/// A single projected year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub year: i32,

    /// Projected price in USD
    pub price: f64,

    /// Annual growth rate applied to reach this price (0 at the anchor)
    pub rate: f64,
}

/// Ordered year-by-year projection, anchor first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSeries {
    points: Vec<ProjectionPoint>,
}

impl ProjectionSeries {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { points: Vec::with_capacity(capacity) }
    }

    pub(crate) fn push(&mut self, point: ProjectionPoint) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[ProjectionPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Anchor price (first point)
    pub fn anchor_price(&self) -> f64 {
        self.points.first().map(|p| p.price).unwrap_or(0.0)
    }

    /// Price at the final projected year
    pub fn final_price(&self) -> f64 {
        self.points.last().map(|p| p.price).unwrap_or(0.0)
    }

    /// Stringified years, one label per point (chart x-axis)
    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.year.to_string()).collect()
    }

    /// Prices parallel to [`labels`](Self::labels)
    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    /// Growth rates parallel to [`labels`](Self::labels)
    pub fn rates(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.rate).collect()
    }

    /// Summary statistics over the whole series
    pub fn summary(&self) -> ProjectionSummary {
        let final_price = self.final_price();
        let market_cap_trillions = final_price * MAX_BTC_SUPPLY / 1e12;

        // Compound ARR over the projected horizon (excludes the anchor point)
        let horizon = self.points.len().saturating_sub(1);
        let compound_arr_pct = if horizon > 0 && self.anchor_price() > 0.0 {
            let total_return = final_price / self.anchor_price();
            (total_return.powf(1.0 / horizon as f64) - 1.0) * 100.0
        } else {
            0.0
        };

        ProjectionSummary {
            final_price,
            market_cap_trillions,
            compound_arr_pct,
            share_of_global_wealth_pct: market_cap_trillions / GLOBAL_WEALTH_TRILLIONS * 100.0,
        }
    }
}

/// Headline stats for a completed projection
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectionSummary {
    /// Price at the final projected year, USD
    pub final_price: f64,

    /// Implied market cap at 21M BTC supply, trillions USD
    pub market_cap_trillions: f64,

    /// Annualized compound return over the horizon, percent
    pub compound_arr_pct: f64,

    /// Implied market cap as a share of estimated global wealth, percent
    pub share_of_global_wealth_pct: f64,
}
