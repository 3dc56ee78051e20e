//! Activity catalog and per-activity sampling ranges.
use serde::{Deserialize, Serialize};

/// Emission-producing activity tracked by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Activity {
    Transport,
    Energy,
    Waste,
    Water,
}

/// Half-open `[lo, hi)` interval for uniform draws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingRange {
    pub lo: f64,
    pub hi: f64,
}

impl Activity {
    /// Fixed iteration order used by the sampler and all grouped output.
    pub const ALL: [Self; 4] = [Self::Transport, Self::Energy, Self::Waste, Self::Water];

    /// Display name used in exports and grouped summaries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "Transport",
            Self::Energy => "Energy",
            Self::Waste => "Waste",
            Self::Water => "Water",
        }
    }

    /// Daily emission range in tCO2eq.
    #[must_use]
    pub const fn emission_range(self) -> SamplingRange {
        match self {
            Self::Transport => SamplingRange { lo: 30.0, hi: 100.0 },
            Self::Energy => SamplingRange { lo: 50.0, hi: 150.0 },
            Self::Waste => SamplingRange { lo: 10.0, hi: 60.0 },
            Self::Water => SamplingRange { lo: 5.0, hi: 30.0 },
        }
    }

    /// Daily reduction-potential range in percent.
    #[must_use]
    pub const fn reduction_range(self) -> SamplingRange {
        match self {
            Self::Transport => SamplingRange { lo: 20.0, hi: 40.0 },
            Self::Energy => SamplingRange { lo: 30.0, hi: 60.0 },
            Self::Waste => SamplingRange { lo: 10.0, hi: 40.0 },
            Self::Water => SamplingRange { lo: 5.0, hi: 20.0 },
        }
    }
}
