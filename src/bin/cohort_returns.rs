//! Compare investor returns across instrument types for one exit
//!
//! Builds one sample cohort per instrument against the base-scenario
//! enterprise value and prints the comparison table.

use chrono::NaiveDate;

use valuation_engine::{
    calculate_cohort_returns, AdoptionModel, Assumptions, DcfEngine, InstrumentTerms,
    InvestorCohort, ProjectionBuilder, ScenarioId,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let base_year = 2026;
    let assumptions = Assumptions::default_planning();
    let engine = DcfEngine::new(ProjectionBuilder::new(
        AdoptionModel::new(),
        assumptions,
        base_year,
    ));

    // Exit at the base-scenario enterprise value at the end of the horizon
    let result = engine.value(ScenarioId::Base)?;
    let exit_value = result.enterprise_value;
    let exit_date = NaiveDate::from_ymd_opt(base_year + 10, 1, 1).expect("valid date");
    let investment_date = NaiveDate::from_ymd_opt(base_year, 1, 1).expect("valid date");
    let total_shares = 10_000_000.0;

    println!("Exit value (base scenario EV): ${:.0}", exit_value);
    println!("Hold: {} to {}\n", investment_date, exit_date);

    let cohorts = [
        (
            "common equity",
            InvestorCohort {
                investment_date,
                investment_amount: 1_000_000.0,
                terms: InstrumentTerms::CommonEquity {
                    ownership_percent: 0.08,
                },
            },
        ),
        (
            "preferred equity",
            InvestorCohort {
                investment_date,
                investment_amount: 1_000_000.0,
                terms: InstrumentTerms::PreferredEquity {
                    ownership_percent: 0.08,
                    liquidation_preference: 1.0,
                    participating: false,
                },
            },
        ),
        (
            "convertible note",
            InvestorCohort {
                investment_date,
                investment_amount: 500_000.0,
                terms: InstrumentTerms::ConvertibleNote {
                    interest_rate: 0.06,
                    maturity_years: 3.0,
                    valuation_cap: 12_000_000.0,
                    discount_rate: 0.20,
                },
            },
        ),
        (
            "SAFE",
            InvestorCohort {
                investment_date,
                investment_amount: 500_000.0,
                terms: InstrumentTerms::Safe {
                    valuation_cap: 10_000_000.0,
                    discount_rate: 0.20,
                },
            },
        ),
        (
            "revenue-based loan",
            InvestorCohort {
                investment_date,
                investment_amount: 750_000.0,
                terms: InstrumentTerms::RevenueBasedLoan {
                    repayment_multiple: 1.8,
                    repayment_cap: 1_200_000.0,
                },
            },
        ),
        (
            "term loan",
            InvestorCohort {
                investment_date,
                investment_amount: 750_000.0,
                terms: InstrumentTerms::TermLoan {
                    interest_rate: 0.11,
                    term_years: 5.0,
                },
            },
        ),
    ];

    println!(
        "{:>20} {:>12} {:>14} {:>8} {:>9} {:>14}",
        "Instrument", "Invested", "Proceeds", "MOIC", "IRR", "NPV@12%"
    );
    println!("{}", "-".repeat(82));

    for (name, cohort) in &cohorts {
        let returns = calculate_cohort_returns(cohort, exit_value, exit_date, total_shares);
        let irr = returns
            .irr
            .map(|r| format!("{:>8.1}%", r * 100.0))
            .unwrap_or_else(|| "      n/a".to_string());
        println!(
            "{:>20} {:>12.0} {:>14.0} {:>7.2}x {} {:>14.0}",
            name, cohort.investment_amount, returns.proceeds, returns.multiple, irr, returns.npv
        );
    }

    Ok(())
}
