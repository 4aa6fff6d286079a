//! Capital assumptions: investment, capex schedule, working capital days

use serde::{Deserialize, Serialize};

/// Capital structure and working-capital assumptions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapitalAssumptions {
    /// Upfront investment, depreciated as the year-0 capex vintage
    pub initial_investment: f64,

    /// Explicit capex by year offset; years beyond the schedule fall back
    /// to `maintenance_capex_pct` of revenue
    pub capex_schedule: Vec<f64>,

    /// Maintenance capex as a share of revenue past the explicit schedule
    pub maintenance_capex_pct: f64,

    /// Straight-line depreciation life per capex vintage, in years
    pub depreciation_years: u32,

    /// Days of revenue held in receivables
    pub receivable_days: f64,

    /// Days of COGS held in inventory
    pub inventory_days: f64,

    /// Days of COGS financed by payables
    pub payable_days: f64,
}

impl CapitalAssumptions {
    /// Capex for a year offset: explicit schedule, else maintenance percent
    pub fn capex_for_year(&self, year_offset: u32, revenue: f64) -> f64 {
        self.capex_schedule
            .get(year_offset as usize)
            .copied()
            .unwrap_or(revenue * self.maintenance_capex_pct)
    }

    /// Net working capital balance implied by a year's revenue and COGS
    pub fn working_capital_balance(&self, revenue: f64, cogs: f64) -> f64 {
        let receivables = revenue / 365.0 * self.receivable_days;
        let inventory = cogs / 365.0 * self.inventory_days;
        let payables = cogs / 365.0 * self.payable_days;
        receivables + inventory - payables
    }
}

impl Default for CapitalAssumptions {
    fn default() -> Self {
        Self {
            initial_investment: 1_500_000.0,
            capex_schedule: vec![200_000.0, 300_000.0, 400_000.0],
            maintenance_capex_pct: 0.02,
            depreciation_years: 5,
            receivable_days: 30.0,
            inventory_days: 45.0,
            payable_days: 30.0,
        }
    }
}
