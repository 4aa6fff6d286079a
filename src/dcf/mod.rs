//! Discounted-cash-flow valuation toolkit
//!
//! Pure numerical functions over free-cash-flow series plus an engine
//! that ties them to scenario projections.

mod discount;
mod engine;
mod irr;
mod payback;
mod terminal;

pub use discount::{discount_factor, npv, npv_at_periods, npv_with_effective_date};
pub use engine::{DcfEngine, DcfResult};
pub use irr::{irr, irr_simple, mirr, IrrOutcome};
pub use payback::{discounted_payback_period, payback_period};
pub use terminal::{terminal_value, TerminalBasis, TerminalMethod};
