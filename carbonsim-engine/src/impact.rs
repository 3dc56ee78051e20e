//! Ordinal impact classification of raw emission values.
use serde::{Deserialize, Serialize};

const MEDIUM_FLOOR: f64 = 40.0;
const MEDIUM_CEILING: f64 = 90.0;

/// Ordinal impact band for a single observation.
///
/// Classification is a property of the raw draw: scenario rescaling never
/// moves a row to a different band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ImpactCategory {
    Low,
    Medium,
    High,
}

impl ImpactCategory {
    /// Classify an emission figure in tCO2eq.
    #[must_use]
    pub fn classify(emission: f64) -> Self {
        if emission < MEDIUM_FLOOR {
            Self::Low
        } else if emission <= MEDIUM_CEILING {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Display name used in exports and grouped summaries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}
