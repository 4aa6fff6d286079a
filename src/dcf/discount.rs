//! Discount factors and net present value

use chrono::NaiveDate;

use crate::error::{ModelError, ModelResult};

const DAYS_PER_YEAR: f64 = 365.25;

/// Discount factor `1 / (1+rate)^period`
///
/// Rates at or below -100% are rejected rather than clamped.
pub fn discount_factor(rate: f64, period: f64) -> ModelResult<f64> {
    if rate <= -1.0 {
        return Err(ModelError::InvalidRate(rate));
    }
    Ok(1.0 / (1.0 + rate).powf(period))
}

/// Net present value of end-of-period cash flows
///
/// Flows are discounted from period 1; the initial investment sits at
/// period 0 undiscounted:
/// `NPV = -initial_investment + sum(cf[t] / (1+rate)^(t+1))`.
pub fn npv(cash_flows: &[f64], rate: f64, initial_investment: f64) -> ModelResult<f64> {
    if rate <= -1.0 {
        return Err(ModelError::InvalidRate(rate));
    }
    let pv: f64 = cash_flows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32 + 1))
        .sum();
    Ok(pv - initial_investment)
}

/// NPV over explicitly timed flows `(period, amount)`
///
/// Periods may be fractional and arrive in any order; they are sorted
/// before summation.
pub fn npv_at_periods(flows: &[(f64, f64)], rate: f64) -> ModelResult<f64> {
    if rate <= -1.0 {
        return Err(ModelError::InvalidRate(rate));
    }
    let mut sorted = flows.to_vec();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));
    Ok(sorted
        .iter()
        .map(|&(period, amount)| amount / (1.0 + rate).powf(period))
        .sum())
}

/// NPV re-based to an effective date
///
/// The discounting origin moves from `start_date` to `effective_date` by
/// a fractional-year offset; when the dates coincide this reduces to
/// plain `npv`.
pub fn npv_with_effective_date(
    cash_flows: &[f64],
    rate: f64,
    effective_date: NaiveDate,
    start_date: NaiveDate,
) -> ModelResult<f64> {
    let base = npv(cash_flows, rate, 0.0)?;
    let offset_years = (effective_date - start_date).num_days() as f64 / DAYS_PER_YEAR;
    Ok(base * (1.0 + rate).powf(offset_years))
}

/// Fractional years between two dates
pub(crate) fn year_fraction(from: NaiveDate, to: NaiveDate) -> f64 {
    (to - from).num_days() as f64 / DAYS_PER_YEAR
}
