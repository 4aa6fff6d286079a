//! Valuation Engine - Adoption modeling and DCF valuation for startup financial planning
//!
//! This library provides:
//! - Scenario-driven unit-adoption projections on a logistic curve
//! - Yearly financial-statement projections (revenue through free cash flow)
//! - DCF valuation (NPV, IRR, MIRR, terminal value, payback, enterprise value)
//! - Per-cohort investor return calculations across six instrument types
//! - Multi-scenario batch runs and sensitivity grids

pub mod adoption;
pub mod assumptions;
pub mod dcf;
pub mod error;
pub mod investor;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use adoption::{AdoptionModel, Granularity, ScenarioId, ScenarioTable, UnitSeries};
pub use assumptions::Assumptions;
pub use dcf::{DcfEngine, DcfResult, IrrOutcome};
pub use error::{ModelError, ModelResult};
pub use investor::{calculate_cohort_returns, CohortReturns, InstrumentTerms, InvestorCohort};
pub use projection::{ProjectionBuilder, YearlyProjection};
pub use scenario::ScenarioRunner;
