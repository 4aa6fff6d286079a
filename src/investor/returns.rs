//! Cohort return calculation: proceeds, multiple, IRR, comparison NPV

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{InstrumentTerms, InvestorCohort};

/// Fixed discount rate for the comparison NPV, distinct from the
/// corporate WACC
pub const ASSUMED_COMPARISON_RATE: f64 = 0.12;

/// Returns for one cohort at exit
///
/// `irr` is `None` for zero-duration holds, where an annualized rate is
/// undefined; the multiple is still reported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CohortReturns {
    pub irr: Option<f64>,
    pub npv: f64,
    pub multiple: f64,
    pub proceeds: f64,
}

/// Compute a cohort's returns against an exit
///
/// `total_equity_at_exit` is the fully diluted share count at exit; it
/// only matters for convertible notes, which price their conversion off
/// the per-share exit value.
pub fn calculate_cohort_returns(
    cohort: &InvestorCohort,
    exit_value: f64,
    exit_date: NaiveDate,
    total_equity_at_exit: f64,
) -> CohortReturns {
    let years_held = (exit_date - cohort.investment_date).num_days() as f64 / 365.25;
    let proceeds = proceeds_at_exit(cohort, exit_value, years_held, total_equity_at_exit);

    let multiple = if cohort.investment_amount != 0.0 {
        proceeds / cohort.investment_amount
    } else {
        f64::NAN
    };

    // Exit at or before the investment date: the multiple stands on its
    // own, an annualized rate does not exist, and nothing is discounted.
    if years_held <= 0.0 {
        return CohortReturns {
            irr: None,
            npv: proceeds - cohort.investment_amount,
            multiple,
            proceeds,
        };
    }

    let irr = multiple.powf(1.0 / years_held) - 1.0;
    let npv = proceeds / (1.0 + ASSUMED_COMPARISON_RATE).powf(years_held)
        - cohort.investment_amount;

    CohortReturns {
        irr: Some(irr),
        npv,
        multiple,
        proceeds,
    }
}

fn proceeds_at_exit(
    cohort: &InvestorCohort,
    exit_value: f64,
    years_held: f64,
    total_equity_at_exit: f64,
) -> f64 {
    let amount = cohort.investment_amount;

    match cohort.terms {
        InstrumentTerms::CommonEquity { ownership_percent } => ownership_percent * exit_value,

        // Preference and participation terms are captured on the record
        // but not yet applied to proceeds; preferred pays out like common.
        InstrumentTerms::PreferredEquity {
            ownership_percent, ..
        } => ownership_percent * exit_value,

        InstrumentTerms::ConvertibleNote {
            interest_rate,
            maturity_years,
            valuation_cap,
            discount_rate,
        } => {
            if total_equity_at_exit <= 0.0 {
                log::warn!("convertible note with non-positive share count at exit");
                return 0.0;
            }
            let accrual_years = years_held.max(0.0).min(maturity_years);
            let accrued = amount * (1.0 + interest_rate).powf(accrual_years);

            let exit_price = exit_value / total_equity_at_exit;
            let cap_price = valuation_cap / total_equity_at_exit;
            let discounted_price = exit_price * (1.0 - discount_rate);
            // Lower price converts to more shares: investor-favorable
            let conversion_price = cap_price.min(discounted_price);

            let shares = accrued / conversion_price;
            // Pro-rata of exit value on the post-conversion share count
            exit_value * shares / (total_equity_at_exit + shares)
        }

        InstrumentTerms::Safe {
            valuation_cap,
            discount_rate,
        } => {
            // Whichever term grants more ownership wins
            let cap_ownership = amount / valuation_cap;
            let discount_ownership = amount / (exit_value * (1.0 - discount_rate));
            cap_ownership.max(discount_ownership) * exit_value
        }

        InstrumentTerms::RevenueBasedLoan {
            repayment_multiple,
            repayment_cap,
        } => (amount * repayment_multiple).min(repayment_cap),

        InstrumentTerms::TermLoan {
            interest_rate,
            term_years,
        } => {
            let accrual_years = years_held.max(0.0).min(term_years);
            amount * (1.0 + interest_rate).powf(accrual_years)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn cohort(terms: InstrumentTerms, amount: f64) -> InvestorCohort {
        InvestorCohort {
            investment_date: date(2025, 1, 1),
            investment_amount: amount,
            terms,
        }
    }

    #[test]
    fn test_safe_seed_scenario() {
        // $100k SAFE, $2M cap, 20% discount, $10M exit after one year:
        // ownership = max(0.05, 0.0125) = 5%, proceeds $500k, 5x, IRR ~400%
        let cohort = cohort(
            InstrumentTerms::Safe {
                valuation_cap: 2_000_000.0,
                discount_rate: 0.20,
            },
            100_000.0,
        );
        let returns =
            calculate_cohort_returns(&cohort, 10_000_000.0, date(2026, 1, 1), 1_000_000.0);

        assert_relative_eq!(returns.proceeds, 500_000.0, max_relative = 1e-12);
        assert_relative_eq!(returns.multiple, 5.0, max_relative = 1e-12);
        // 365 days over a 365.25-day year leaves the annualization a hair off 4.0
        assert_abs_diff_eq!(returns.irr.unwrap(), 4.0, epsilon = 0.01);
    }

    #[test]
    fn test_safe_discount_side_wins_on_low_exit() {
        // Low exit: the discount term grants more ownership than the cap
        let cohort = cohort(
            InstrumentTerms::Safe {
                valuation_cap: 2_000_000.0,
                discount_rate: 0.20,
            },
            100_000.0,
        );
        let exit_value = 1_000_000.0;
        let returns =
            calculate_cohort_returns(&cohort, exit_value, date(2026, 1, 1), 1_000_000.0);
        let discount_ownership = 100_000.0 / (exit_value * 0.8);
        assert_relative_eq!(returns.proceeds, discount_ownership * exit_value);
    }

    #[test]
    fn test_common_equity_proceeds() {
        let cohort = cohort(
            InstrumentTerms::CommonEquity {
                ownership_percent: 0.10,
            },
            500_000.0,
        );
        let returns =
            calculate_cohort_returns(&cohort, 20_000_000.0, date(2028, 1, 1), 1_000_000.0);
        assert_relative_eq!(returns.proceeds, 2_000_000.0, max_relative = 1e-12);
        assert_relative_eq!(returns.multiple, 4.0, max_relative = 1e-12);
    }

    #[test]
    fn test_preferred_terms_recorded_but_not_applied() {
        // Known gap carried over for parity: liquidation preference and
        // participation do not change proceeds yet, so preferred pays
        // exactly like common at the same ownership.
        let common = cohort(
            InstrumentTerms::CommonEquity {
                ownership_percent: 0.10,
            },
            500_000.0,
        );
        let preferred = cohort(
            InstrumentTerms::PreferredEquity {
                ownership_percent: 0.10,
                liquidation_preference: 1.5,
                participating: true,
            },
            500_000.0,
        );
        let exit = date(2028, 1, 1);
        let a = calculate_cohort_returns(&common, 20_000_000.0, exit, 1_000_000.0);
        let b = calculate_cohort_returns(&preferred, 20_000_000.0, exit, 1_000_000.0);
        assert_relative_eq!(a.proceeds, b.proceeds);
    }

    #[test]
    fn test_convertible_note_cap_conversion() {
        // $8M cap against a $40M exit: the cap price converts far below
        // the discounted exit price
        let cohort = cohort(
            InstrumentTerms::ConvertibleNote {
                interest_rate: 0.06,
                maturity_years: 2.0,
                valuation_cap: 8_000_000.0,
                discount_rate: 0.20,
            },
            400_000.0,
        );
        let total_shares = 1_000_000.0;
        let exit_value = 40_000_000.0;
        let returns =
            calculate_cohort_returns(&cohort, exit_value, date(2027, 1, 1), total_shares);

        // Two full years of interest (hold matches maturity)
        let accrued = 400_000.0 * 1.06_f64.powf((365.0 + 365.0) / 365.25);
        let cap_price = 8_000_000.0 / total_shares;
        let shares = accrued / cap_price;
        let expected = exit_value * shares / (total_shares + shares);
        assert_relative_eq!(returns.proceeds, expected, max_relative = 1e-9);
        assert!(returns.multiple > 5.0);
    }

    #[test]
    fn test_convertible_interest_stops_at_maturity() {
        let terms = InstrumentTerms::ConvertibleNote {
            interest_rate: 0.08,
            maturity_years: 2.0,
            valuation_cap: 8_000_000.0,
            discount_rate: 0.20,
        };
        let c = cohort(terms, 400_000.0);
        // Both holds are past the two-year maturity, so both accrue
        // exactly two years of interest
        let past_maturity =
            calculate_cohort_returns(&c, 40_000_000.0, date(2027, 7, 1), 1_000_000.0);
        let well_past =
            calculate_cohort_returns(&c, 40_000_000.0, date(2030, 1, 1), 1_000_000.0);
        assert_relative_eq!(past_maturity.proceeds, well_past.proceeds, max_relative = 1e-12);
        // Same proceeds over a longer hold annualizes lower
        assert!(well_past.irr.unwrap() < past_maturity.irr.unwrap());
    }

    #[test]
    fn test_revenue_based_loan_cap_binds() {
        let cohort = cohort(
            InstrumentTerms::RevenueBasedLoan {
                repayment_multiple: 2.0,
                repayment_cap: 150_000.0,
            },
            100_000.0,
        );
        // Exit value is irrelevant to a revenue-based loan
        let low = calculate_cohort_returns(&cohort, 1_000_000.0, date(2027, 1, 1), 1_000_000.0);
        let high = calculate_cohort_returns(&cohort, 99_000_000.0, date(2027, 1, 1), 1_000_000.0);
        assert_relative_eq!(low.proceeds, 150_000.0);
        assert_relative_eq!(low.proceeds, high.proceeds);
    }

    #[test]
    fn test_term_loan_compounds_to_term() {
        let cohort = cohort(
            InstrumentTerms::TermLoan {
                interest_rate: 0.10,
                term_years: 3.0,
            },
            200_000.0,
        );
        // Held five years, but interest stops at the three-year term
        let returns =
            calculate_cohort_returns(&cohort, 50_000_000.0, date(2030, 1, 1), 1_000_000.0);
        assert_relative_eq!(returns.proceeds, 200_000.0 * 1.1_f64.powf(3.0), max_relative = 1e-9);
    }

    #[test]
    fn test_zero_duration_hold_has_no_irr() {
        let c = cohort(
            InstrumentTerms::CommonEquity {
                ownership_percent: 0.10,
            },
            500_000.0,
        );
        let same_day = calculate_cohort_returns(&c, 20_000_000.0, c.investment_date, 1_000_000.0);
        assert!(same_day.irr.is_none());
        assert_relative_eq!(same_day.multiple, 4.0, max_relative = 1e-12);
        assert_relative_eq!(same_day.npv, 1_500_000.0, max_relative = 1e-12);

        // Exit before investment behaves the same way
        let before = calculate_cohort_returns(&c, 20_000_000.0, date(2024, 6, 1), 1_000_000.0);
        assert!(before.irr.is_none());
    }

    #[test]
    fn test_comparison_npv_uses_assumed_rate() {
        let c = cohort(
            InstrumentTerms::CommonEquity {
                ownership_percent: 0.05,
            },
            250_000.0,
        );
        let exit = date(2027, 1, 1);
        let returns = calculate_cohort_returns(&c, 10_000_000.0, exit, 1_000_000.0);
        let years = (exit - c.investment_date).num_days() as f64 / 365.25;
        let expected = 500_000.0 / (1.0 + ASSUMED_COMPARISON_RATE).powf(years) - 250_000.0;
        assert_relative_eq!(returns.npv, expected, max_relative = 1e-12);
    }
}
