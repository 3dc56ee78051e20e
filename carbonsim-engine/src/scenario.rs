//! Policy scenarios rescaling emission and dependent cost figures.
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::cost::environmental_cost;
use crate::dataset::SimulationRow;
use crate::numbers::round_to;

/// Named policy applied uniformly to a run's emission figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// No measures; figures pass through untouched.
    #[default]
    Baseline,
    /// Moderate measures: 15% emission reduction.
    ModeratePolicy,
    /// Strong measures: 35% emission reduction.
    StrongPolicy,
}

/// Raised when an externally supplied scenario name is not recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized scenario {0:?}")]
pub struct ScenarioParseError(pub String);

impl Scenario {
    /// Multiplier applied to every emission figure under this policy.
    #[must_use]
    pub const fn emission_factor(self) -> f64 {
        match self {
            Self::Baseline => 1.0,
            Self::ModeratePolicy => 0.85,
            Self::StrongPolicy => 0.65,
        }
    }

    /// Canonical name used in logs and exports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::ModeratePolicy => "moderate_policy",
            Self::StrongPolicy => "strong_policy",
        }
    }

    /// Rescale a run's rows under this policy.
    ///
    /// Pure transform: emission is scaled and re-rounded to 3 places, cost is
    /// recomputed from the new emission. The impact category deliberately
    /// retains the pre-policy classification.
    #[must_use]
    pub fn apply(self, rows: Vec<SimulationRow>) -> Vec<SimulationRow> {
        if matches!(self, Self::Baseline) {
            return rows;
        }
        let factor = self.emission_factor();
        rows.into_iter()
            .map(|mut row| {
                row.emission_tco2eq = round_to(row.emission_tco2eq * factor, 3);
                row.environmental_cost_usd =
                    round_to(environmental_cost(row.emission_tco2eq), 2);
                row
            })
            .collect()
    }
}

impl FromStr for Scenario {
    type Err = ScenarioParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "baseline" | "base" => Ok(Self::Baseline),
            "moderate" | "moderate_policy" | "moderatepolicy" => Ok(Self::ModeratePolicy),
            "strong" | "strong_policy" | "strongpolicy" => Ok(Self::StrongPolicy),
            _ => Err(ScenarioParseError(s.to_string())),
        }
    }
}
