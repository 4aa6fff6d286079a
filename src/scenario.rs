//! Scenario runner for batch valuations and sensitivity grids
//!
//! Pre-holds assumptions and the adoption model once, then runs many
//! independent valuations. Every run is a pure function, so scenario
//! batches and sensitivity grids parallelize freely.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::adoption::{AdoptionModel, ScenarioId};
use crate::assumptions::Assumptions;
use crate::dcf::{DcfEngine, DcfResult, TerminalMethod};
use crate::error::ModelResult;
use crate::projection::ProjectionBuilder;

/// One cell of a WACC x terminal-growth sensitivity grid
///
/// `enterprise_value` is `None` where the pair is invalid for the
/// terminal method (Gordon-Growth with WACC <= growth); callers render
/// those cells as "N/A".
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SensitivityCell {
    pub wacc: f64,
    pub terminal_growth: f64,
    pub enterprise_value: Option<f64>,
}

/// Pre-loaded runner for batch scenario valuations
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    assumptions: Assumptions,
    adoption: AdoptionModel,
    base_year: i32,
}

impl ScenarioRunner {
    /// Create a runner with default planning assumptions
    pub fn new(base_year: i32) -> Self {
        Self::with_assumptions(Assumptions::default_planning(), base_year)
    }

    /// Create a runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions, base_year: i32) -> Self {
        Self {
            assumptions,
            adoption: AdoptionModel::new(),
            base_year,
        }
    }

    /// Create a runner with an explicit adoption model
    pub fn with_model(assumptions: Assumptions, adoption: AdoptionModel, base_year: i32) -> Self {
        Self {
            assumptions,
            adoption,
            base_year,
        }
    }

    /// Get reference to base assumptions for inspection
    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Get mutable reference to base assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.assumptions
    }

    fn engine_with(&self, assumptions: Assumptions) -> DcfEngine {
        DcfEngine::new(ProjectionBuilder::new(
            self.adoption.clone(),
            assumptions,
            self.base_year,
        ))
    }

    /// Value a single scenario
    pub fn run(&self, scenario: ScenarioId) -> ModelResult<DcfResult> {
        self.engine_with(self.assumptions.clone()).value(scenario)
    }

    /// Value all five scenarios in parallel, worst to best
    pub fn run_all(&self) -> ModelResult<Vec<(ScenarioId, DcfResult)>> {
        ScenarioId::ALL
            .par_iter()
            .map(|&id| Ok((id, self.run(id)?)))
            .collect()
    }

    /// Enterprise value over a WACC x terminal-growth grid
    ///
    /// Invalid Gordon-Growth combinations come back as `None` cells
    /// rather than failing the whole grid.
    pub fn sensitivity(
        &self,
        scenario: ScenarioId,
        waccs: &[f64],
        terminal_growths: &[f64],
    ) -> Vec<SensitivityCell> {
        let pairs: Vec<(f64, f64)> = waccs
            .iter()
            .flat_map(|&w| terminal_growths.iter().map(move |&g| (w, g)))
            .collect();

        pairs
            .par_iter()
            .map(|&(wacc, terminal_growth)| {
                let mut assumptions = self.assumptions.clone();
                assumptions.corporate.wacc = wacc;
                assumptions.corporate.terminal_growth_rate = terminal_growth;

                let invalid_gordon = matches!(assumptions.exit.method, TerminalMethod::GordonGrowth)
                    && wacc <= terminal_growth;
                let enterprise_value = if invalid_gordon || wacc <= -1.0 {
                    None
                } else {
                    self.engine_with(assumptions)
                        .value(scenario)
                        .ok()
                        .map(|r| r.enterprise_value)
                };

                SensitivityCell {
                    wacc,
                    terminal_growth,
                    enterprise_value,
                }
            })
            .collect()
    }
}
