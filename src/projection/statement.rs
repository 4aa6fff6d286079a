//! Per-year financial statement rows

use serde::{Deserialize, Serialize};

/// One projected year of the financial statement
///
/// Sign convention: a positive `working_capital_change` is a cash
/// outflow. The discounting columns (`discount_factor`, `present_value`,
/// `cumulative_pv`) are zero until the DCF engine fills them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyProjection {
    /// Calendar year
    pub year: i32,

    pub units: f64,
    pub revenue: f64,
    pub cogs: f64,
    pub gross_profit: f64,
    pub marketing: f64,
    pub gna: f64,
    pub ebitda: f64,
    pub depreciation: f64,
    pub taxes: f64,
    pub capex: f64,
    pub working_capital_change: f64,
    pub free_cash_flow: f64,

    // Filled by the DCF engine
    pub discount_factor: f64,
    pub present_value: f64,

    pub cumulative_fcf: f64,
    pub cumulative_pv: f64,
}

impl YearlyProjection {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            units: 0.0,
            revenue: 0.0,
            cogs: 0.0,
            gross_profit: 0.0,
            marketing: 0.0,
            gna: 0.0,
            ebitda: 0.0,
            depreciation: 0.0,
            taxes: 0.0,
            capex: 0.0,
            working_capital_change: 0.0,
            free_cash_flow: 0.0,
            discount_factor: 0.0,
            present_value: 0.0,
            cumulative_fcf: 0.0,
            cumulative_pv: 0.0,
        }
    }
}

/// Summary statistics over a projection horizon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub horizon_years: u32,
    pub total_units: f64,
    pub total_revenue: f64,
    pub total_ebitda: f64,
    pub total_taxes: f64,
    pub total_capex: f64,
    pub total_free_cash_flow: f64,
    pub final_year_revenue: f64,
    pub final_year_ebitda: f64,
    pub final_year_fcf: f64,
}

impl ProjectionSummary {
    pub fn from_rows(rows: &[YearlyProjection]) -> Self {
        let last = rows.last();
        Self {
            horizon_years: rows.len() as u32,
            total_units: rows.iter().map(|r| r.units).sum(),
            total_revenue: rows.iter().map(|r| r.revenue).sum(),
            total_ebitda: rows.iter().map(|r| r.ebitda).sum(),
            total_taxes: rows.iter().map(|r| r.taxes).sum(),
            total_capex: rows.iter().map(|r| r.capex).sum(),
            total_free_cash_flow: rows.iter().map(|r| r.free_cash_flow).sum(),
            final_year_revenue: last.map(|r| r.revenue).unwrap_or(0.0),
            final_year_ebitda: last.map(|r| r.ebitda).unwrap_or(0.0),
            final_year_fcf: last.map(|r| r.free_cash_flow).unwrap_or(0.0),
        }
    }
}
