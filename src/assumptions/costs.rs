//! Cost-of-goods assumptions: unit cost curve and shipping

use serde::{Deserialize, Serialize};

/// COGS assumptions
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CostAssumptions {
    /// Landed cost per unit in the base year
    pub unit_cost: f64,

    /// Annual cost reduction rate from scale and process learning
    pub annual_cost_reduction: f64,

    /// Flat shipping and fulfillment cost per unit
    pub shipping_per_unit: f64,
}

impl CostAssumptions {
    /// Unit cost for year offset `i` from the base year (excludes shipping)
    pub fn unit_cost_for_year(&self, year_offset: u32) -> f64 {
        self.unit_cost * (1.0 - self.annual_cost_reduction).powi(year_offset as i32)
    }

    /// Fully loaded cost per unit for a year, shipping included
    pub fn loaded_cost_for_year(&self, year_offset: u32) -> f64 {
        self.unit_cost_for_year(year_offset) + self.shipping_per_unit
    }
}

impl Default for CostAssumptions {
    fn default() -> Self {
        Self {
            unit_cost: 540.0,
            annual_cost_reduction: 0.03,
            shipping_per_unit: 45.0,
        }
    }
}
