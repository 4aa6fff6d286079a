//! Error taxonomy for the valuation engine
//!
//! Input-validation failures are raised immediately as `ModelError`.
//! Numerical non-convergence (IRR without a real root) is NOT an error:
//! it is surfaced as a structured `IrrOutcome` so callers can render
//! "N/A" cells instead of unwinding.

use thiserror::Error;

/// Errors raised by model inputs that cannot be computed over
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Scenario id not present in the scenario table
    #[error("unknown scenario id: {0}")]
    InvalidScenario(String),

    /// Discount/interest rate at or below -100%
    #[error("rate must be greater than -100%, got {0}")]
    InvalidRate(f64),

    /// Gordon-Growth terminal value with WACC <= terminal growth
    #[error("terminal growth rate {growth} must be below WACC {wacc}")]
    InvalidTerminalAssumptions { wacc: f64, growth: f64 },

    /// Projection horizon of zero years
    #[error("projection horizon must be at least one year")]
    InvalidHorizon,

    /// Unit projection over zero periods
    #[error("at least one projection period is required")]
    InvalidPeriods,
}

pub type ModelResult<T> = Result<T, ModelError>;
