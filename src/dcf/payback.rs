//! Payback periods over 0-indexed cash-flow series

use crate::error::{ModelError, ModelResult};

/// First fractional period at which cumulative cash flow turns
/// non-negative, linearly interpolated within the crossing period
///
/// Returns `None` when the cumulative sum never recovers.
pub fn payback_period(cash_flows: &[f64]) -> Option<f64> {
    crossing_point(cash_flows.iter().copied())
}

/// Payback on discounted flows; always >= the simple payback for any
/// non-negative rate
pub fn discounted_payback_period(cash_flows: &[f64], rate: f64) -> ModelResult<Option<f64>> {
    if rate <= -1.0 {
        return Err(ModelError::InvalidRate(rate));
    }
    Ok(crossing_point(
        cash_flows
            .iter()
            .enumerate()
            .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32)),
    ))
}

fn crossing_point(flows: impl Iterator<Item = f64>) -> Option<f64> {
    let mut cumulative = 0.0;
    for (t, cf) in flows.enumerate() {
        let prior = cumulative;
        cumulative += cf;
        if cumulative >= 0.0 {
            if t == 0 || prior >= 0.0 {
                return Some(t as f64);
            }
            // Interpolate within the crossing period
            return Some((t - 1) as f64 + (-prior) / cf);
        }
    }
    None
}
