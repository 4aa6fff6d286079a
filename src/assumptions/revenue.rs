//! Revenue assumptions: pricing and price trajectory

use serde::{Deserialize, Serialize};

/// Pricing assumptions
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RevenueAssumptions {
    /// Realized price per unit in the base year
    pub unit_price: f64,

    /// Annual price growth rate (geometric)
    pub annual_price_growth: f64,

    /// Average customer discount off list, already netted into `unit_price`
    /// when computing revenue; recorded for reporting
    pub customer_discount: f64,
}

impl RevenueAssumptions {
    /// Realized unit price for year offset `i` from the base year
    pub fn price_for_year(&self, year_offset: u32) -> f64 {
        self.unit_price * (1.0 + self.annual_price_growth).powi(year_offset as i32)
    }
}

impl Default for RevenueAssumptions {
    fn default() -> Self {
        Self {
            unit_price: 1_200.0,
            annual_price_growth: 0.02,
            customer_discount: 0.05,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_geometric_price_growth() {
        let rev = RevenueAssumptions {
            unit_price: 100.0,
            annual_price_growth: 0.10,
            customer_discount: 0.0,
        };
        assert_relative_eq!(rev.price_for_year(0), 100.0);
        assert_relative_eq!(rev.price_for_year(2), 121.0, max_relative = 1e-12);
    }
}
