//! Operating expense assumptions: marketing and G&A

use serde::{Deserialize, Serialize};

/// Marketing and G&A assumptions
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OpexAssumptions {
    /// Minimum annual marketing budget
    pub marketing_base_budget: f64,

    /// Marketing spend as a share of revenue once revenue scales
    pub marketing_pct_of_revenue: f64,

    /// Headcount floor regardless of volume
    pub base_headcount: u32,

    /// Units handled per additional head
    pub units_per_headcount_step: f64,

    /// Average fully loaded base salary in the base year
    pub base_salary: f64,

    /// Annual salary growth rate (geometric)
    pub annual_salary_growth: f64,

    /// Benefits and payroll-tax multiplier on salary
    pub benefits_multiplier: f64,

    /// Flat annual office overhead
    pub office_overhead: f64,

    /// Flat annual insurance overhead
    pub insurance_overhead: f64,
}

impl OpexAssumptions {
    /// Marketing spend for a period: a floor, not a blend
    pub fn marketing_for(&self, revenue: f64) -> f64 {
        self.marketing_base_budget
            .max(revenue * self.marketing_pct_of_revenue)
    }

    /// Headcount required for a unit volume
    pub fn headcount_for(&self, units: f64) -> u32 {
        let volume_driven = (units / self.units_per_headcount_step).ceil() as u32;
        self.base_headcount.max(volume_driven)
    }

    /// Total G&A for a year offset: salaries with benefits plus overhead
    pub fn gna_for_year(&self, units: f64, year_offset: u32) -> f64 {
        let salary = self.base_salary * (1.0 + self.annual_salary_growth).powi(year_offset as i32);
        let headcount = self.headcount_for(units) as f64;
        headcount * salary * self.benefits_multiplier + self.office_overhead + self.insurance_overhead
    }
}

impl Default for OpexAssumptions {
    fn default() -> Self {
        Self {
            marketing_base_budget: 250_000.0,
            marketing_pct_of_revenue: 0.08,
            base_headcount: 6,
            units_per_headcount_step: 4_000.0,
            base_salary: 95_000.0,
            annual_salary_growth: 0.03,
            benefits_multiplier: 1.25,
            office_overhead: 60_000.0,
            insurance_overhead: 24_000.0,
        }
    }
}
