//! DCF engine: scenario projections to enterprise value

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::adoption::ScenarioId;
use crate::error::ModelResult;
use crate::projection::{ProjectionBuilder, YearlyProjection};

use super::discount::{discount_factor, year_fraction};
use super::payback::{discounted_payback_period, payback_period};
use super::terminal::terminal_value;

/// Valuation output for one scenario
///
/// Invariant: `enterprise_value` is the literal sum of
/// `pv_of_cash_flows` and `pv_of_terminal_value`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DcfResult {
    pub enterprise_value: f64,
    pub pv_of_cash_flows: f64,
    pub pv_of_terminal_value: f64,
    pub terminal_value: f64,
    pub yearly_projections: Vec<YearlyProjection>,
}

impl DcfResult {
    /// Free-cash-flow series over the horizon, period 1 first
    pub fn cash_flows(&self) -> Vec<f64> {
        self.yearly_projections
            .iter()
            .map(|r| r.free_cash_flow)
            .collect()
    }

    /// Simple payback of the FCF series against the initial investment
    pub fn payback_years(&self, initial_investment: f64) -> Option<f64> {
        let mut flows = vec![-initial_investment];
        flows.extend(self.cash_flows());
        payback_period(&flows)
    }

    /// Discounted payback of the FCF series against the initial investment
    pub fn discounted_payback_years(
        &self,
        initial_investment: f64,
        rate: f64,
    ) -> ModelResult<Option<f64>> {
        let mut flows = vec![-initial_investment];
        flows.extend(self.cash_flows());
        discounted_payback_period(&flows, rate)
    }
}

/// Scenario valuation engine over a projection builder
#[derive(Debug, Clone)]
pub struct DcfEngine {
    builder: ProjectionBuilder,
}

impl DcfEngine {
    pub fn new(builder: ProjectionBuilder) -> Self {
        Self { builder }
    }

    pub fn builder(&self) -> &ProjectionBuilder {
        &self.builder
    }

    /// Value a scenario over the corporate horizon
    pub fn value(&self, scenario: ScenarioId) -> ModelResult<DcfResult> {
        let corporate = self.builder.assumptions().corporate;
        self.value_over(scenario, corporate.horizon_years)
    }

    /// Value a scenario over an explicit horizon
    pub fn value_over(&self, scenario: ScenarioId, horizon_years: u32) -> ModelResult<DcfResult> {
        let corporate = self.builder.assumptions().corporate;
        let exit_method = self.builder.assumptions().exit.method;
        let mut rows = self.builder.build_projections(scenario, horizon_years)?;

        // Fill the discounting columns the builder leaves empty
        let wacc = corporate.wacc;
        let mut pv_of_cash_flows = 0.0;
        for (i, row) in rows.iter_mut().enumerate() {
            row.discount_factor = discount_factor(wacc, (i + 1) as f64)?;
            row.present_value = row.free_cash_flow * row.discount_factor;
            pv_of_cash_flows += row.present_value;
            row.cumulative_pv = pv_of_cash_flows;
        }

        let final_year = rows.last().expect("horizon is at least one year");
        let tv = terminal_value(
            final_year,
            wacc,
            corporate.terminal_growth_rate,
            exit_method,
        )?;
        let pv_of_terminal_value = tv * discount_factor(wacc, horizon_years as f64)?;

        log::debug!(
            "scenario {}: pv_cf={:.0} pv_tv={:.0}",
            scenario,
            pv_of_cash_flows,
            pv_of_terminal_value
        );

        Ok(DcfResult {
            enterprise_value: pv_of_cash_flows + pv_of_terminal_value,
            pv_of_cash_flows,
            pv_of_terminal_value,
            terminal_value: tv,
            yearly_projections: rows,
        })
    }

    /// Value a scenario as of an effective date
    ///
    /// Both PV components are scaled by the same fractional-year factor,
    /// so the enterprise-value decomposition still holds exactly. With
    /// `effective_date == start_date` this reduces to `value`.
    pub fn value_at(
        &self,
        scenario: ScenarioId,
        effective_date: NaiveDate,
        start_date: NaiveDate,
    ) -> ModelResult<DcfResult> {
        let mut result = self.value(scenario)?;
        let wacc = self.builder.assumptions().corporate.wacc;
        let factor = (1.0 + wacc).powf(year_fraction(start_date, effective_date));

        result.pv_of_cash_flows *= factor;
        result.pv_of_terminal_value *= factor;
        result.enterprise_value = result.pv_of_cash_flows + result.pv_of_terminal_value;
        for row in &mut result.yearly_projections {
            row.present_value *= factor;
            row.cumulative_pv *= factor;
        }
        Ok(result)
    }
}
