//! Yearly financial-statement projections built from unit adoption

mod builder;
mod statement;

pub use builder::ProjectionBuilder;
pub use statement::{ProjectionSummary, YearlyProjection};
