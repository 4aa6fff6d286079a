//! Unit-adoption modeling: named scenarios over a shared logistic curve

mod model;
mod scenarios;

pub use model::{AdoptionModel, CurveParams, Granularity, UnitSeries};
pub use scenarios::{ScenarioId, ScenarioParams, ScenarioTable};
