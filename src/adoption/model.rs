//! Logistic adoption curve sampled at annual or monthly granularity
//!
//! The curve gives an annual unit run-rate `f(t) = L / (1 + e^(-k(t - t0)))`.
//! Monthly samples take `f(m/12) / 12` at month-end offsets; the annual
//! figure for a year is the sum of its 12 monthly samples, so annual and
//! monthly series agree by construction.

use serde::{Deserialize, Serialize};

use super::scenarios::{ScenarioId, ScenarioParams, ScenarioTable};
use crate::error::{ModelError, ModelResult};

/// Shared logistic curve constants, identical across scenarios
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CurveParams {
    /// Saturation level `L`: annual unit run-rate at full adoption
    pub saturation: f64,

    /// Base growth rate `k` (per year)
    pub growth_rate: f64,

    /// Base inflection point `t0` in years from the base year
    pub inflection_year: f64,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            saturation: 120_000.0,
            growth_rate: 0.65,
            inflection_year: 5.0,
        }
    }
}

/// Sampling granularity for a unit projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Annual,
    Monthly,
}

/// Ordered unit-volume series, one entry per period, indexed from period 1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSeries {
    pub base_year: i32,
    pub granularity: Granularity,
    pub values: Vec<f64>,
}

impl UnitSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Total units over the whole series
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Scenario-driven unit adoption model
///
/// Pure and deterministic: every call recomputes the series from the
/// curve constants and the scenario table; nothing is cached internally.
#[derive(Debug, Clone, Default)]
pub struct AdoptionModel {
    curve: CurveParams,
    scenarios: ScenarioTable,
}

impl AdoptionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model with explicit curve constants and scenario table
    pub fn with_table(curve: CurveParams, scenarios: ScenarioTable) -> Self {
        Self { curve, scenarios }
    }

    pub fn curve(&self) -> &CurveParams {
        &self.curve
    }

    /// Annual unit run-rate at time `t` (years from base year)
    fn annual_rate(&self, params: &ScenarioParams, t: f64) -> f64 {
        let k = self.curve.growth_rate * params.growth_rate_multiplier;
        let t0 = self.curve.inflection_year + params.inflection_shift_years;
        self.curve.saturation / (1.0 + (-k * (t - t0)).exp())
    }

    /// Project unit volumes for a scenario at the requested granularity
    ///
    /// `periods` counts years for annual granularity and months for
    /// monthly granularity; it must be at least 1.
    pub fn project_units(
        &self,
        scenario: ScenarioId,
        base_year: i32,
        periods: u32,
        granularity: Granularity,
    ) -> ModelResult<UnitSeries> {
        if periods == 0 {
            return Err(ModelError::InvalidPeriods);
        }
        let params = self.scenarios.get(scenario)?;

        let values = match granularity {
            Granularity::Monthly => self.monthly_values(&params, periods),
            Granularity::Annual => {
                let monthly = self.monthly_values(&params, periods * 12);
                monthly
                    .chunks(12)
                    .map(|months| months.iter().sum())
                    .collect()
            }
        };

        Ok(UnitSeries {
            base_year,
            granularity,
            values,
        })
    }

    /// Convenience: yearly unit volumes for a scenario
    pub fn annual_units(
        &self,
        scenario: ScenarioId,
        base_year: i32,
        years: u32,
    ) -> ModelResult<UnitSeries> {
        self.project_units(scenario, base_year, years, Granularity::Annual)
    }

    /// Convenience: monthly unit volumes for a scenario
    pub fn monthly_units(
        &self,
        scenario: ScenarioId,
        base_year: i32,
        months: u32,
    ) -> ModelResult<UnitSeries> {
        self.project_units(scenario, base_year, months, Granularity::Monthly)
    }

    fn monthly_values(&self, params: &ScenarioParams, months: u32) -> Vec<f64> {
        (1..=months)
            .map(|m| self.annual_rate(params, m as f64 / 12.0) / 12.0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_periods_rejected() {
        let model = AdoptionModel::new();
        assert_eq!(
            model.project_units(ScenarioId::Base, 2026, 0, Granularity::Annual),
            Err(ModelError::InvalidPeriods)
        );
    }

    #[test]
    fn test_series_non_decreasing() {
        let model = AdoptionModel::new();
        for id in ScenarioId::ALL {
            let series = model.annual_units(id, 2026, 15).unwrap();
            for pair in series.values.windows(2) {
                assert!(
                    pair[1] >= pair[0],
                    "scenario {} decreased: {:?}",
                    id,
                    pair
                );
            }
        }
    }

    #[test]
    fn test_annual_matches_monthly_sum() {
        let model = AdoptionModel::new();
        for id in ScenarioId::ALL {
            let annual = model.annual_units(id, 2026, 10).unwrap();
            let monthly = model.monthly_units(id, 2026, 120).unwrap();
            for (year_idx, &annual_units) in annual.values.iter().enumerate() {
                let from_months: f64 =
                    monthly.values[year_idx * 12..(year_idx + 1) * 12].iter().sum();
                assert_relative_eq!(annual_units, from_months, max_relative = 1e-6);
            }
        }
    }

    #[test]
    fn test_scenarios_ordered_by_optimism() {
        let model = AdoptionModel::new();
        let totals: Vec<f64> = ScenarioId::ALL
            .iter()
            .map(|&id| model.annual_units(id, 2026, 10).unwrap().total())
            .collect();
        for pair in totals.windows(2) {
            assert!(pair[1] > pair[0], "totals not ordered: {:?}", totals);
        }
    }

    #[test]
    fn test_saturation_bounds_run_rate() {
        let model = AdoptionModel::new();
        let series = model.annual_units(ScenarioId::Max, 2026, 40).unwrap();
        let cap = model.curve().saturation;
        for &units in &series.values {
            assert!(units <= cap, "annual units {} exceed saturation {}", units, cap);
        }
        // Deep into the horizon the curve approaches saturation
        assert!(series.values.last().unwrap() / cap > 0.99);
    }

    #[test]
    fn test_deterministic_recall() {
        let model = AdoptionModel::new();
        let a = model.annual_units(ScenarioId::Base, 2026, 10).unwrap();
        let b = model.annual_units(ScenarioId::Base, 2026, 10).unwrap();
        assert_eq!(a.values, b.values);
    }
}
