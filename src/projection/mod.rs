//! Bitcoin24 price projection engine

mod engine;
mod series;

pub use engine::{ProjectionEngine, ProjectionConfig, Scenario, ScenarioKind};
pub use series::{ProjectionPoint, ProjectionSeries, ProjectionSummary};
