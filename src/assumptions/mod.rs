//! Business assumptions driving projections and valuation
//!
//! A flat container of grouped numeric records. The engine only reads
//! these; ranges are not sanity-checked here (that responsibility sits
//! with the caller).

mod capital;
mod corporate;
mod costs;
mod opex;
mod revenue;

pub use capital::CapitalAssumptions;
pub use corporate::{CorporateAssumptions, ExitAssumptions};
pub use costs::CostAssumptions;
pub use opex::OpexAssumptions;
pub use revenue::RevenueAssumptions;

use serde::{Deserialize, Serialize};

/// Container for all planning assumptions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assumptions {
    pub revenue: RevenueAssumptions,
    pub costs: CostAssumptions,
    pub opex: OpexAssumptions,
    pub capital: CapitalAssumptions,
    pub corporate: CorporateAssumptions,
    pub exit: ExitAssumptions,
}

impl Assumptions {
    /// Reference planning assumptions for a hardware startup
    pub fn default_planning() -> Self {
        Self {
            revenue: RevenueAssumptions::default(),
            costs: CostAssumptions::default(),
            opex: OpexAssumptions::default(),
            capital: CapitalAssumptions::default(),
            corporate: CorporateAssumptions::default(),
            exit: ExitAssumptions::default(),
        }
    }

    /// Deserialize a full assumption set from JSON
    pub fn from_json<R: std::io::Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_planning()
    }
}
