//! Scenario runner for batch projections
//!
//! Holds one anchor/horizon configuration, then runs many scenarios against
//! it without rebuilding the engine each time.

use crate::error::ModelError;
use crate::projection::{
    ProjectionConfig, ProjectionEngine, ProjectionSeries, Scenario, ScenarioKind,
};

/// Batch projection runner with a shared base configuration
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// for kind in ScenarioKind::ALL {
///     let series = runner.run(&Scenario::preset(kind))?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    config: ProjectionConfig,
}

impl ScenarioRunner {
    /// Create a runner with the dashboard defaults (2024 @ $95k, 21 years)
    pub fn new() -> Self {
        Self { config: ProjectionConfig::default() }
    }

    /// Create a runner with a specific base configuration
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run a single projection for the given scenario
    pub fn run(&self, scenario: &Scenario) -> Result<ProjectionSeries, ModelError> {
        ProjectionEngine::new(self.config).project(scenario)
    }

    /// Run projections for multiple scenarios against the shared config
    pub fn run_scenarios(
        &self,
        scenarios: &[Scenario],
    ) -> Result<Vec<ProjectionSeries>, ModelError> {
        scenarios.iter().map(|s| self.run(s)).collect()
    }

    /// Terminal market cap (trillions USD) for each preset, in display order
    pub fn market_cap_comparison(&self) -> Result<Vec<(ScenarioKind, f64)>, ModelError> {
        ScenarioKind::ALL
            .iter()
            .map(|&kind| {
                let series = self.run(&Scenario::preset(kind))?;
                Ok((kind, series.summary().market_cap_trillions))
            })
            .collect()
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
