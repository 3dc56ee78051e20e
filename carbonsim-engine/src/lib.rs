//! Carbonsim Engine
//!
//! Platform-agnostic core logic for the Carbonsim carbon-footprint explorer.
//! This crate generates synthetic per-activity emission data, rescales it
//! under policy scenarios, aggregates independent runs, and summarizes the
//! result. All user interaction, chart rendering, and dataset caching lives
//! in the presentation layer, which calls in with a `SimulationConfig` and
//! receives a `Dataset` back.

pub mod activity;
pub mod aggregate;
pub mod cost;
pub mod dataset;
pub mod impact;
pub mod numbers;
pub mod sampler;
pub mod scenario;
pub mod summary;

// Re-export commonly used types
pub use activity::{Activity, SamplingRange};
pub use aggregate::{ConfigError, SimulationConfig, run_simulation};
pub use cost::{COST_USD_PER_TCO2EQ, environmental_cost};
pub use dataset::{CSV_HEADER, Dataset, DatasetError, SimulationRow};
pub use impact::ImpactCategory;
pub use sampler::Sampler;
pub use scenario::{Scenario, ScenarioParseError};
pub use summary::{DescriptiveStats, describe, group_means};
