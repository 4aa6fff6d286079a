//! Terminal value beyond the explicit projection horizon

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::projection::YearlyProjection;

/// Basis for an exit-multiple terminal value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminalBasis {
    Ebitda,
    Revenue,
}

/// Terminal value method, mutually exclusive by construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum TerminalMethod {
    /// Perpetuity on final-year FCF at the corporate terminal growth rate
    GordonGrowth,
    /// Multiple on the final year's EBITDA or revenue
    ExitMultiple { basis: TerminalBasis, multiple: f64 },
}

/// Terminal value at the end of the horizon
///
/// Gordon-Growth requires `wacc > terminal_growth`; the exit-multiple
/// method ignores both rates.
pub fn terminal_value(
    final_year: &YearlyProjection,
    wacc: f64,
    terminal_growth: f64,
    method: TerminalMethod,
) -> ModelResult<f64> {
    match method {
        TerminalMethod::GordonGrowth => {
            if wacc <= terminal_growth {
                return Err(ModelError::InvalidTerminalAssumptions {
                    wacc,
                    growth: terminal_growth,
                });
            }
            Ok(final_year.free_cash_flow * (1.0 + terminal_growth) / (wacc - terminal_growth))
        }
        TerminalMethod::ExitMultiple { basis, multiple } => {
            let base = match basis {
                TerminalBasis::Ebitda => final_year.ebitda,
                TerminalBasis::Revenue => final_year.revenue,
            };
            Ok(base * multiple)
        }
    }
}
