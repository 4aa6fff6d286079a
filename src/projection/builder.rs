//! Projection builder: unit series + assumptions -> yearly statements

use crate::adoption::{AdoptionModel, ScenarioId};
use crate::assumptions::Assumptions;
use crate::error::{ModelError, ModelResult};

use super::statement::YearlyProjection;

/// Builds yearly financial projections for a scenario
///
/// Pure over its inputs: assumptions are read, never mutated, and every
/// call recomputes from the adoption curve.
#[derive(Debug, Clone)]
pub struct ProjectionBuilder {
    adoption: AdoptionModel,
    assumptions: Assumptions,
    base_year: i32,
}

impl ProjectionBuilder {
    pub fn new(adoption: AdoptionModel, assumptions: Assumptions, base_year: i32) -> Self {
        Self {
            adoption,
            assumptions,
            base_year,
        }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn base_year(&self) -> i32 {
        self.base_year
    }

    /// Build the per-year statement for a scenario over a horizon
    pub fn build_projections(
        &self,
        scenario: ScenarioId,
        horizon_years: u32,
    ) -> ModelResult<Vec<YearlyProjection>> {
        if horizon_years == 0 {
            return Err(ModelError::InvalidHorizon);
        }

        let units = self
            .adoption
            .annual_units(scenario, self.base_year, horizon_years)?;

        let a = &self.assumptions;
        let mut rows = Vec::with_capacity(horizon_years as usize);

        // Capex per year is needed up front for the depreciation schedule,
        // and maintenance capex depends on revenue, so compute the revenue
        // line first.
        let mut revenues = Vec::with_capacity(horizon_years as usize);
        for (i, &units_i) in units.values.iter().enumerate() {
            revenues.push(units_i * a.revenue.price_for_year(i as u32));
        }
        let capex: Vec<f64> = revenues
            .iter()
            .enumerate()
            .map(|(i, &rev)| a.capital.capex_for_year(i as u32, rev))
            .collect();
        let depreciation = depreciation_schedule(
            a.capital.initial_investment,
            &capex,
            a.capital.depreciation_years,
        );

        let mut prior_nwc = 0.0;
        let mut cumulative_fcf = 0.0;

        for i in 0..horizon_years {
            let idx = i as usize;
            let mut row = YearlyProjection::new(self.base_year + i as i32);

            row.units = units.values[idx];
            row.revenue = revenues[idx];
            row.cogs = row.units * a.costs.loaded_cost_for_year(i);
            row.gross_profit = row.revenue - row.cogs;

            row.marketing = a.opex.marketing_for(row.revenue);
            row.gna = a.opex.gna_for_year(row.units, i);
            row.ebitda = row.gross_profit - row.marketing - row.gna;

            row.depreciation = depreciation[idx];
            // Losses carry no tax credit
            row.taxes = (row.ebitda - row.depreciation).max(0.0) * a.corporate.tax_rate;

            row.capex = capex[idx];

            let nwc = a.capital.working_capital_balance(row.revenue, row.cogs);
            row.working_capital_change = nwc - prior_nwc;
            prior_nwc = nwc;

            row.free_cash_flow =
                row.ebitda - row.taxes - row.capex - row.working_capital_change;

            cumulative_fcf += row.free_cash_flow;
            row.cumulative_fcf = cumulative_fcf;

            rows.push(row);
        }

        Ok(rows)
    }
}

/// Straight-line depreciation by capex vintage
///
/// The initial investment is the year-0 vintage; capex in year `j` starts
/// depreciating in year `j`. Truncation at the horizon keeps
/// `sum(depreciation) <= sum(capex)` for any schedule.
fn depreciation_schedule(initial_investment: f64, capex: &[f64], life_years: u32) -> Vec<f64> {
    let life = life_years.max(1) as usize;
    let horizon = capex.len();
    let mut schedule = vec![0.0; horizon];

    for (year, dep) in schedule.iter_mut().enumerate() {
        if year < life {
            *dep += initial_investment / life as f64;
        }
        for (vintage, &amount) in capex.iter().enumerate().take(year + 1) {
            if year - vintage < life {
                *dep += amount / life as f64;
            }
        }
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn builder() -> ProjectionBuilder {
        ProjectionBuilder::new(AdoptionModel::new(), Assumptions::default_planning(), 2026)
    }

    #[test]
    fn test_zero_horizon_rejected() {
        assert_eq!(
            builder().build_projections(ScenarioId::Base, 0),
            Err(ModelError::InvalidHorizon)
        );
    }

    #[test]
    fn test_statement_identities() {
        let rows = builder().build_projections(ScenarioId::Base, 10).unwrap();
        assert_eq!(rows.len(), 10);
        for row in &rows {
            assert_relative_eq!(
                row.ebitda,
                row.gross_profit - row.marketing - row.gna,
                max_relative = 1e-12
            );
            assert_relative_eq!(
                row.free_cash_flow,
                row.ebitda - row.taxes - row.capex - row.working_capital_change,
                max_relative = 1e-12
            );
            assert!(row.taxes >= 0.0, "loss year produced a tax credit");
        }
    }

    #[test]
    fn test_depreciation_never_exceeds_capex() {
        let rows = builder().build_projections(ScenarioId::Max, 12).unwrap();
        let total_dep: f64 = rows.iter().map(|r| r.depreciation).sum();
        let total_capex = rows.iter().map(|r| r.capex).sum::<f64>()
            + builder().assumptions().capital.initial_investment;
        assert!(
            total_dep <= total_capex + 1e-9,
            "depreciation {} exceeds capex {}",
            total_dep,
            total_capex
        );
    }

    #[test]
    fn test_depreciation_schedule_tranches() {
        // Two vintages of 100 over 2 years: year 0 = 50 + 50, year 1 = 50 + 50 + 50
        let schedule = depreciation_schedule(100.0, &[100.0, 100.0, 0.0], 2);
        assert_abs_diff_eq!(schedule[0], 100.0);
        assert_abs_diff_eq!(schedule[1], 150.0);
        // Year 2: only the year-1 vintage is still live
        assert_abs_diff_eq!(schedule[2], 50.0);
    }

    #[test]
    fn test_working_capital_is_a_delta() {
        let rows = builder().build_projections(ScenarioId::Base, 10).unwrap();
        let a = Assumptions::default_planning();
        let mut prior = 0.0;
        for row in &rows {
            let balance = a.capital.working_capital_balance(row.revenue, row.cogs);
            assert_relative_eq!(
                row.working_capital_change,
                balance - prior,
                max_relative = 1e-9
            );
            prior = balance;
        }
    }

    #[test]
    fn test_marketing_floor_binds_early() {
        let mut assumptions = Assumptions::default_planning();
        assumptions.opex.marketing_base_budget = 2_000_000.0;
        let builder = ProjectionBuilder::new(AdoptionModel::new(), assumptions, 2026);
        let rows = builder.build_projections(ScenarioId::Min, 10).unwrap();
        // Early low-revenue years sit on the budget floor
        assert_relative_eq!(rows[0].marketing, 2_000_000.0);
        // Once percent-of-revenue exceeds the floor, it takes over
        let last = rows.last().unwrap();
        assert!(last.marketing >= 2_000_000.0);
    }

    #[test]
    fn test_insane_assumptions_accepted_as_is() {
        // Negative price is not validated here; the caller owns sanity
        let mut assumptions = Assumptions::default_planning();
        assumptions.revenue.unit_price = -10.0;
        let builder = ProjectionBuilder::new(AdoptionModel::new(), assumptions, 2026);
        let rows = builder.build_projections(ScenarioId::Base, 3).unwrap();
        assert!(rows[0].revenue < 0.0);
    }
}
