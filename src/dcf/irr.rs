//! Internal rate of return via Newton-Raphson with bisection fallback
//!
//! The cash-flow series is indexed from period 0: the first entry is
//! undiscounted. A series whose signs never change has no real root;
//! that is an expected outcome and is reported through the `converged`
//! flag, never as an error.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

const NEWTON_SEED: f64 = 0.10;
const RATE_FLOOR: f64 = -0.99;
const RATE_CEILING: f64 = 10.0;
const TOLERANCE: f64 = 1e-10;
const MAX_ITERATIONS: u32 = 200;

/// Structured IRR result
///
/// `value` is only meaningful when `converged` is true; callers must
/// check the flag before trusting it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrrOutcome {
    pub value: f64,
    pub converged: bool,
}

impl IrrOutcome {
    fn converged(value: f64) -> Self {
        Self {
            value,
            converged: true,
        }
    }

    fn failed() -> Self {
        Self {
            value: f64::NAN,
            converged: false,
        }
    }
}

/// IRR of a cash-flow series indexed from period 0
///
/// Newton-Raphson from a 10% seed with clamped steps; falls back to
/// bisection over -99%..1000% when the derivative collapses or the
/// iteration budget runs out.
pub fn irr(cash_flows: &[f64]) -> IrrOutcome {
    if cash_flows.is_empty() {
        return IrrOutcome::failed();
    }
    if cash_flows.iter().all(|&cf| cf.abs() < TOLERANCE) {
        return IrrOutcome::converged(0.0);
    }

    // No sign change means no real root exists
    let has_positive = cash_flows.iter().any(|&cf| cf > TOLERANCE);
    let has_negative = cash_flows.iter().any(|&cf| cf < -TOLERANCE);
    if !has_positive || !has_negative {
        return IrrOutcome::failed();
    }

    let mut rate = NEWTON_SEED;
    for _ in 0..MAX_ITERATIONS {
        let (value, derivative) = npv_and_derivative(cash_flows, rate);

        if derivative.abs() < 1e-20 {
            return bisect(cash_flows);
        }

        let next = (rate - value / derivative).clamp(RATE_FLOOR, RATE_CEILING);
        if (next - rate).abs() < TOLERANCE {
            // A step pinned at a clamp bound stalls without reaching a
            // root; only accept the iterate if it actually zeroes the NPV
            if npv_at(cash_flows, next).abs() < residual_tolerance(cash_flows) {
                return IrrOutcome::converged(next);
            }
            return bisect(cash_flows);
        }
        rate = next;
    }

    bisect(cash_flows)
}

/// Acceptable NPV residual at a candidate root, scaled to the flows
fn residual_tolerance(cash_flows: &[f64]) -> f64 {
    let scale = cash_flows.iter().fold(0.0_f64, |m, &cf| m.max(cf.abs()));
    (scale * 1e-8).max(1e-8)
}

/// Best-effort IRR: `NaN` instead of a structured non-convergence result
pub fn irr_simple(cash_flows: &[f64]) -> f64 {
    let outcome = irr(cash_flows);
    if outcome.converged {
        outcome.value
    } else {
        f64::NAN
    }
}

/// NPV over a 0-indexed series and its derivative with respect to rate
fn npv_and_derivative(cash_flows: &[f64], rate: f64) -> (f64, f64) {
    let mut value = 0.0;
    let mut derivative = 0.0;
    for (t, &cf) in cash_flows.iter().enumerate() {
        value += cf / (1.0 + rate).powi(t as i32);
        if t > 0 {
            derivative -= t as f64 * cf / (1.0 + rate).powi(t as i32 + 1);
        }
    }
    (value, derivative)
}

fn npv_at(cash_flows: &[f64], rate: f64) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}

/// Bisection fallback over the bounded search interval
fn bisect(cash_flows: &[f64]) -> IrrOutcome {
    let mut low = RATE_FLOOR;
    let mut high = RATE_CEILING;

    let npv_low = npv_at(cash_flows, low);
    let npv_high = npv_at(cash_flows, high);
    if npv_low * npv_high > 0.0 {
        return IrrOutcome::failed();
    }

    for _ in 0..MAX_ITERATIONS {
        let mid = (low + high) / 2.0;
        let npv_mid = npv_at(cash_flows, mid);

        if npv_mid.abs() < TOLERANCE || (high - low) / 2.0 < TOLERANCE {
            return IrrOutcome::converged(mid);
        }

        if npv_mid * npv_at(cash_flows, low) < 0.0 {
            high = mid;
        } else {
            low = mid;
        }
    }

    IrrOutcome::failed()
}

/// Modified IRR with separate financing and reinvestment rates
///
/// Future value of positive flows compounds at `reinvest_rate`; present
/// value of negative flows discounts at `finance_rate`. Degenerate sign
/// patterns (no positive or no negative flow) yield `NaN`.
pub fn mirr(cash_flows: &[f64], finance_rate: f64, reinvest_rate: f64) -> ModelResult<f64> {
    if finance_rate <= -1.0 {
        return Err(ModelError::InvalidRate(finance_rate));
    }
    if reinvest_rate <= -1.0 {
        return Err(ModelError::InvalidRate(reinvest_rate));
    }
    if cash_flows.len() < 2 {
        return Ok(f64::NAN);
    }

    let n = cash_flows.len() - 1;
    let mut fv_positive = 0.0;
    let mut pv_negative = 0.0;
    for (t, &cf) in cash_flows.iter().enumerate() {
        if cf > 0.0 {
            fv_positive += cf * (1.0 + reinvest_rate).powi((n - t) as i32);
        } else if cf < 0.0 {
            pv_negative += cf / (1.0 + finance_rate).powi(t as i32);
        }
    }

    if fv_positive == 0.0 || pv_negative == 0.0 {
        return Ok(f64::NAN);
    }

    Ok((fv_positive / -pv_negative).powf(1.0 / n as f64) - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_irr_seed_case() {
        // -1000 then four 400s: IRR ~ 21.86%
        let outcome = irr(&[-1000.0, 400.0, 400.0, 400.0, 400.0]);
        assert!(outcome.converged);
        assert_abs_diff_eq!(outcome.value, 0.2186, epsilon = 1e-4);
    }

    #[test]
    fn test_npv_irr_duality() {
        let flows = [-1000.0, 300.0, 420.0, 680.0, 100.0];
        let outcome = irr(&flows);
        assert!(outcome.converged);
        let residual = npv_at(&flows, outcome.value);
        assert_abs_diff_eq!(residual, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_no_real_root_reports_non_convergence() {
        let outcome = irr(&[100.0, 100.0, 100.0]);
        assert!(!outcome.converged);
        assert!(outcome.value.is_nan());

        let all_negative = irr(&[-50.0, -50.0]);
        assert!(!all_negative.converged);
    }

    #[test]
    fn test_irr_simple_nan_on_failure() {
        assert!(irr_simple(&[100.0, 100.0]).is_nan());
        assert_abs_diff_eq!(
            irr_simple(&[-1000.0, 400.0, 400.0, 400.0, 400.0]),
            0.2186,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_all_zero_series_is_zero() {
        let outcome = irr(&[0.0, 0.0, 0.0]);
        assert!(outcome.converged);
        assert_abs_diff_eq!(outcome.value, 0.0);
    }

    #[test]
    fn test_deeply_negative_irr_found_by_fallback() {
        // Loses most of the investment: IRR near -80%
        let flows = [-1000.0, 100.0, 100.0];
        let outcome = irr(&flows);
        assert!(outcome.converged);
        assert!(outcome.value < -0.5);
        assert_abs_diff_eq!(npv_at(&flows, outcome.value), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_root_outside_search_bounds_not_reported_converged() {
        // True root near -99.5%, below the search floor: the Newton
        // iterate pins at the floor clamp without zeroing the NPV
        let below = irr(&[-1000.0, 5.0]);
        assert!(!below.converged);

        // True root near +99900%, above the ceiling
        let above = irr(&[-1.0, 1000.0]);
        assert!(!above.converged);
    }

    #[test]
    fn test_converged_results_zero_the_npv() {
        let cases: [&[f64]; 4] = [
            &[-1000.0, 400.0, 400.0, 400.0, 400.0],
            &[-1000.0, 100.0, 100.0],
            &[-500.0, 0.0, 0.0, 900.0],
            &[200.0, -150.0, -150.0],
        ];
        for flows in cases {
            let outcome = irr(flows);
            if outcome.converged {
                assert_abs_diff_eq!(npv_at(flows, outcome.value), 0.0, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn test_mirr_ordering_against_irr() {
        let flows = [-1000.0, 400.0, 400.0, 400.0, 400.0];
        let rate = irr(&flows).value;

        let below = mirr(&flows, 0.08, rate - 0.10).unwrap();
        assert!(below < rate);

        let above = mirr(&flows, 0.08, rate + 0.10).unwrap();
        assert!(above > rate);
    }

    #[test]
    fn test_mirr_equals_irr_at_fixed_point() {
        // Reinvesting at the IRR itself reproduces the IRR
        let flows = [-1000.0, 400.0, 400.0, 400.0, 400.0];
        let rate = irr(&flows).value;
        let modified = mirr(&flows, rate, rate).unwrap();
        assert_abs_diff_eq!(modified, rate, epsilon = 1e-6);
    }

    #[test]
    fn test_mirr_invalid_rates() {
        assert!(mirr(&[-100.0, 50.0], -1.0, 0.1).is_err());
        assert!(mirr(&[-100.0, 50.0], 0.1, -2.0).is_err());
    }

    #[test]
    fn test_mirr_degenerate_signs_nan() {
        assert!(mirr(&[100.0, 100.0], 0.1, 0.1).unwrap().is_nan());
    }
}
