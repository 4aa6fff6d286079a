//! Per-cohort investor return calculations across instrument types

mod returns;

pub use returns::{calculate_cohort_returns, CohortReturns, ASSUMED_COMPARISON_RATE};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Terms for one investment instrument, a closed set
///
/// Matching is exhaustive in the return calculator, so terms can never
/// be read for the wrong instrument type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "instrument", rename_all = "snake_case")]
pub enum InstrumentTerms {
    CommonEquity {
        /// Fraction of the company owned at exit
        ownership_percent: f64,
    },
    PreferredEquity {
        ownership_percent: f64,
        /// Recorded but not applied to proceeds; see the known-gap test
        liquidation_preference: f64,
        /// Recorded but not applied to proceeds
        participating: bool,
    },
    ConvertibleNote {
        /// Stated annual interest rate, compounded to maturity
        interest_rate: f64,
        maturity_years: f64,
        valuation_cap: f64,
        /// Discount off the exit price at conversion
        discount_rate: f64,
    },
    Safe {
        valuation_cap: f64,
        discount_rate: f64,
    },
    RevenueBasedLoan {
        repayment_multiple: f64,
        repayment_cap: f64,
    },
    TermLoan {
        interest_rate: f64,
        term_years: f64,
    },
}

/// One investor cohort: a dated investment under one instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorCohort {
    pub investment_date: NaiveDate,
    pub investment_amount: f64,
    pub terms: InstrumentTerms,
}
