//! Corporate and exit assumptions: tax, discounting, terminal value

use serde::{Deserialize, Serialize};

use crate::dcf::{TerminalBasis, TerminalMethod};

/// Corporate-level assumptions
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CorporateAssumptions {
    /// Flat corporate tax rate applied to positive pre-tax income
    pub tax_rate: f64,

    /// Weighted average cost of capital, the operating discount rate
    pub wacc: f64,

    /// Perpetual growth rate for Gordon-Growth terminal value
    pub terminal_growth_rate: f64,

    /// Explicit projection horizon in years
    pub horizon_years: u32,
}

impl Default for CorporateAssumptions {
    fn default() -> Self {
        Self {
            tax_rate: 0.25,
            wacc: 0.12,
            terminal_growth_rate: 0.025,
            horizon_years: 10,
        }
    }
}

/// Exit assumptions: how value beyond the horizon is estimated
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExitAssumptions {
    /// Terminal value method, mutually exclusive by construction
    pub method: TerminalMethod,

    /// Planned exit year offset from the base year
    pub exit_year: u32,
}

impl Default for ExitAssumptions {
    fn default() -> Self {
        Self {
            method: TerminalMethod::GordonGrowth,
            exit_year: 10,
        }
    }
}

impl ExitAssumptions {
    /// An exit-multiple configuration on EBITDA
    pub fn ebitda_multiple(multiple: f64, exit_year: u32) -> Self {
        Self {
            method: TerminalMethod::ExitMultiple {
                basis: TerminalBasis::Ebitda,
                multiple,
            },
            exit_year,
        }
    }
}
