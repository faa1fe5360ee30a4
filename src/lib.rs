//! Bitcoin dashboard model layer - deterministic projection and comparison models
//!
//! This library provides:
//! - Bitcoin24 price projections (compounding growth with a decaying annual rate)
//! - Scenario presets (bear/base/bull) and a batch scenario runner
//! - A parameterized synthetic comparison-series generator (real estate, M2, liquidity)
//! - Milestone-interpolated Bitcoin price history
//! - College tuition histories denominated in BTC
//! - Personal CPI weighted-average calculation
//! - BTC / bits / sats denomination helpers
//!
//! Rendering, HTTP proxying, and live price fetching live in the surrounding
//! dashboard application, not here.

pub mod cpi;
pub mod error;
pub mod history;
pub mod projection;
pub mod scenario;
pub mod synthetic;
pub mod tuition;
pub mod units;

// Re-export commonly used types
pub use error::ModelError;
pub use projection::{ProjectionEngine, ProjectionConfig, ProjectionPoint, ProjectionSeries, Scenario};
pub use scenario::ScenarioRunner;
pub use synthetic::{MonthlySeries, SyntheticConfig};
