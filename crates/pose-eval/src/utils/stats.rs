//! Summary statistics over per-frame series.
//!
//! Every function returns NaN for an empty series or one holding a
//! non-finite value, so callers can reject the result before comparing it
//! against a threshold.

fn poisoned(values: &[f64]) -> bool {
    values.is_empty() || values.iter().any(|v| !v.is_finite())
}

pub fn min(values: &[f64]) -> f64 {
    if poisoned(values) {
        return f64::NAN;
    }
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

pub fn max(values: &[f64]) -> f64 {
    if poisoned(values) {
        return f64::NAN;
    }
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

pub fn mean(values: &[f64]) -> f64 {
    if poisoned(values) {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// `max - min`
pub fn range(values: &[f64]) -> f64 {
    max(values) - min(values)
}
