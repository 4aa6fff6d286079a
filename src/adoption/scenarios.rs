//! Named adoption scenarios and their curve adjustments
//!
//! Five fixed scenarios shift the inflection point and scale the growth
//! rate of the shared logistic curve. The table is immutable after
//! construction and injected into the model, so tests can supply
//! alternate parameter sets without touching global state.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Identifier for one of the named adoption scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioId {
    Min,
    Downside,
    Base,
    Upside,
    Max,
}

impl ScenarioId {
    /// All scenarios in severity order, worst to best
    pub const ALL: [ScenarioId; 5] = [
        ScenarioId::Min,
        ScenarioId::Downside,
        ScenarioId::Base,
        ScenarioId::Upside,
        ScenarioId::Max,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioId::Min => "min",
            ScenarioId::Downside => "downside",
            ScenarioId::Base => "base",
            ScenarioId::Upside => "upside",
            ScenarioId::Max => "max",
        }
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScenarioId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "min" => Ok(ScenarioId::Min),
            "downside" => Ok(ScenarioId::Downside),
            "base" => Ok(ScenarioId::Base),
            "upside" => Ok(ScenarioId::Upside),
            "max" => Ok(ScenarioId::Max),
            other => Err(ModelError::InvalidScenario(other.to_string())),
        }
    }
}

/// Curve adjustments for one scenario, immutable after definition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParams {
    /// Years added to the inflection point (positive = later ramp)
    pub inflection_shift_years: f64,

    /// Multiplier applied to the base growth rate `k`
    pub growth_rate_multiplier: f64,
}

/// Immutable lookup table of scenario parameters
#[derive(Debug, Clone)]
pub struct ScenarioTable {
    params: HashMap<ScenarioId, ScenarioParams>,
}

impl ScenarioTable {
    /// Build a table from explicit entries (for tests and custom sets)
    pub fn from_entries(entries: &[(ScenarioId, ScenarioParams)]) -> Self {
        Self {
            params: entries.iter().copied().collect(),
        }
    }

    /// Look up parameters for a scenario
    pub fn get(&self, scenario: ScenarioId) -> ModelResult<ScenarioParams> {
        self.params
            .get(&scenario)
            .copied()
            .ok_or_else(|| ModelError::InvalidScenario(scenario.to_string()))
    }
}

impl Default for ScenarioTable {
    /// The five standard planning scenarios
    fn default() -> Self {
        Self::from_entries(&[
            (
                ScenarioId::Min,
                ScenarioParams {
                    inflection_shift_years: 2.0,
                    growth_rate_multiplier: 0.6,
                },
            ),
            (
                ScenarioId::Downside,
                ScenarioParams {
                    inflection_shift_years: 1.0,
                    growth_rate_multiplier: 0.8,
                },
            ),
            (
                ScenarioId::Base,
                ScenarioParams {
                    inflection_shift_years: 0.0,
                    growth_rate_multiplier: 1.0,
                },
            ),
            (
                ScenarioId::Upside,
                ScenarioParams {
                    inflection_shift_years: -1.0,
                    growth_rate_multiplier: 1.2,
                },
            ),
            (
                ScenarioId::Max,
                ScenarioParams {
                    inflection_shift_years: -2.0,
                    growth_rate_multiplier: 1.5,
                },
            ),
        ])
    }
}
