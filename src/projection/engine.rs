//! Core projection engine for year-by-year Bitcoin price projections
//!
//! Implements the Bitcoin24 model: a compounding-growth recurrence whose
//! annual rate decays by a fixed step each year until it reaches a steady
//! state, with a one-year grace period after the anchor.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use super::series::{ProjectionPoint, ProjectionSeries};

/// Growth-rate assumptions for a projection run
///
/// All rates are annual percentages (25.0 = 25%). `floor_rate` should not
/// exceed `initial_rate`; if it does, the rate simply never decays below the
/// initial value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Growth rate applied in the first post-anchor year
    pub initial_rate: f64,

    /// Annual reduction of the growth rate once decay begins
    pub decay_per_year: f64,

    /// Steady-state rate the decay bottoms out at
    pub floor_rate: f64,
}

/// Named scenario presets matching the dashboard's bear/base/bull buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    Bear,
    Base,
    Bull,
}

impl ScenarioKind {
    /// All presets in display order
    pub const ALL: [ScenarioKind; 3] = [ScenarioKind::Bear, ScenarioKind::Base, ScenarioKind::Bull];

    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::Bear => "bear",
            ScenarioKind::Base => "base",
            ScenarioKind::Bull => "bull",
        }
    }
}

impl Scenario {
    /// Bear preset: 25% starting ARR, -2.5%/yr decay, 20% steady state
    pub fn bear() -> Self {
        Self { initial_rate: 25.0, decay_per_year: 2.5, floor_rate: 20.0 }
    }

    /// Base preset: 50% starting ARR, -4%/yr decay, 20% steady state
    pub fn base() -> Self {
        Self { initial_rate: 50.0, decay_per_year: 4.0, floor_rate: 20.0 }
    }

    /// Bull preset: 75% starting ARR, -4%/yr decay, 25% steady state
    pub fn bull() -> Self {
        Self { initial_rate: 75.0, decay_per_year: 4.0, floor_rate: 25.0 }
    }

    pub fn preset(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::Bear => Self::bear(),
            ScenarioKind::Base => Self::base(),
            ScenarioKind::Bull => Self::bull(),
        }
    }

    /// Validate that all rates are finite
    fn validate(&self) -> Result<(), ModelError> {
        for (name, rate) in [
            ("initial_rate", self.initial_rate),
            ("decay_per_year", self.decay_per_year),
            ("floor_rate", self.floor_rate),
        ] {
            if !rate.is_finite() {
                return Err(ModelError::invalid(format!("{name} must be finite, got {rate}")));
            }
        }
        Ok(())
    }
}

/// Configuration for a projection run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Starting year (emitted with rate 0)
    pub anchor_year: i32,

    /// Price at the anchor year, in USD
    pub anchor_price: f64,

    /// Number of years to project past the anchor
    pub horizon_years: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            anchor_year: 2024,
            anchor_price: 95_000.0,
            horizon_years: 21, // 2024 through 2045
        }
    }
}

/// Main projection engine
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the projection for a single scenario
    ///
    /// Emits the anchor point with rate 0, then compounds year by year. The
    /// rate decay is skipped for the first post-anchor year and applied before
    /// growth in every later year, never dropping below `floor_rate`.
    ///
    /// Fails fast with [`ModelError::InvalidArgument`] on a non-finite or
    /// non-positive anchor price or non-finite scenario rates, rather than
    /// silently propagating NaN through the series.
    pub fn project(&self, scenario: &Scenario) -> Result<ProjectionSeries, ModelError> {
        let ProjectionConfig { anchor_year, anchor_price, horizon_years } = self.config;

        if !anchor_price.is_finite() || anchor_price <= 0.0 {
            return Err(ModelError::invalid(format!(
                "anchor_price must be finite and positive, got {anchor_price}"
            )));
        }
        scenario.validate()?;

        // Final year must stay representable as a calendar year
        let final_year = anchor_year as i64 + horizon_years as i64;
        if final_year > i32::MAX as i64 {
            return Err(ModelError::invalid(format!(
                "horizon_years {horizon_years} overflows the final year from anchor {anchor_year}"
            )));
        }

        let mut series = ProjectionSeries::with_capacity(horizon_years as usize + 1);
        series.push(ProjectionPoint { year: anchor_year, price: anchor_price, rate: 0.0 });

        let mut rate = scenario.initial_rate;
        let mut price = anchor_price;

        for year in (anchor_year as i64 + 1)..=final_year {
            // Grace period: no decay in the first post-anchor year
            if year >= anchor_year as i64 + 2 && rate > scenario.floor_rate {
                rate = scenario.floor_rate.max(rate - scenario.decay_per_year);
            }

            price *= 1.0 + rate / 100.0;
            series.push(ProjectionPoint { year: year as i32, price, rate });
        }

        debug!(
            "projected {} years from {} @ ${:.0}: final price ${:.0}",
            horizon_years,
            anchor_year,
            anchor_price,
            series.final_price()
        );

        Ok(series)
    }
}
