//! Multi-run simulation driver and request validation.
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::activity::Activity;
use crate::dataset::Dataset;
use crate::sampler::Sampler;
use crate::scenario::{Scenario, ScenarioParseError};

/// One simulation request from the presentation layer.
///
/// `seed == 0` means unseeded: every run draws fresh entropy. A non-zero
/// seed makes run `r` use `seed + (r - 1)`, so a whole batch is reproducible
/// from the base seed alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Days simulated per activity, per run.
    pub days: u16,
    /// Base seed; 0 disables seeding.
    pub seed: u64,
    /// Independent runs to concatenate.
    pub num_runs: u16,
    pub scenario: Scenario,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: 30,
            seed: 0,
            num_runs: 1,
            scenario: Scenario::Baseline,
        }
    }
}

/// Errors raised when a simulation request violates its documented bounds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must be at least {min} (got {value})")]
    MinViolation {
        field: &'static str,
        min: u16,
        value: u16,
    },
    #[error(transparent)]
    UnknownScenario(#[from] ScenarioParseError),
}

impl SimulationConfig {
    /// Validate the request bounds.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MinViolation` when `days` or `num_runs` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.days < 1 {
            return Err(ConfigError::MinViolation {
                field: "days",
                min: 1,
                value: self.days,
            });
        }
        if self.num_runs < 1 {
            return Err(ConfigError::MinViolation {
                field: "num_runs",
                min: 1,
                value: self.num_runs,
            });
        }
        Ok(())
    }

    /// Replace the scenario from an externally supplied name.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownScenario` for unrecognized names.
    pub fn with_scenario_name(mut self, name: &str) -> Result<Self, ConfigError> {
        self.scenario = name.parse::<Scenario>()?;
        Ok(self)
    }
}

/// Execute `num_runs` independent runs and concatenate them into one
/// dataset, tagging rows with a dense 1-based `run_index`.
///
/// # Errors
///
/// Returns `ConfigError` when the request fails validation; no other
/// failure modes exist.
pub fn run_simulation(cfg: &SimulationConfig) -> Result<Dataset, ConfigError> {
    cfg.validate()?;
    let per_run = Activity::ALL.len() * usize::from(cfg.days);
    let mut rows = Vec::with_capacity(per_run * usize::from(cfg.num_runs));
    for run in 1..=u32::from(cfg.num_runs) {
        let mut sampler = if cfg.seed == 0 {
            Sampler::from_entropy()
        } else {
            Sampler::seeded(cfg.seed + u64::from(run) - 1)
        };
        let run_rows = cfg.scenario.apply(sampler.generate(cfg.days));
        debug!(
            "run {run}: {} rows under scenario {}",
            run_rows.len(),
            cfg.scenario.as_str()
        );
        rows.extend(run_rows.into_iter().map(|mut row| {
            row.run_index = run;
            row
        }));
    }
    Ok(Dataset::new(rows))
}
