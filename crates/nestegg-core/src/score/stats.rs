//! Numeric helpers for the score engine
//!
//! All helpers are total: every denominator that can reach zero falls back to
//! a neutral value instead.

use crate::models::{SCORE_MAX, SCORE_MIN};

/// `max(lo, min(hi, v))`
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    lo.max(hi.min(v))
}

/// Clamp to the score band `[-3, 3]`
pub fn clamp_score(v: f64) -> f64 {
    clamp(v, SCORE_MIN, SCORE_MAX)
}

/// Linear score for `value` against `target`.
///
/// `value == target` maps to 0, `value == 0` to +3 and `value == 2 * target`
/// to -3, unbounded beyond that. A zero target yields 0.
pub fn ratio_score(value: f64, target: f64) -> f64 {
    if target == 0.0 || target.is_nan() {
        return 0.0;
    }
    let ratio = value / target;
    let x = 1.0 - ratio;
    x * 3.0
}

/// Ordinary least-squares slope of `values` against their index.
///
/// Returns 0 for fewer than two points. A zero denominator is replaced by 1.
pub fn linear_slope(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let n = values.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for (i, y) in values.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    let mut denom = n * sum_xx - sum_x * sum_x;
    if denom == 0.0 || denom.is_nan() {
        denom = 1.0;
    }
    (n * sum_xy - sum_x * sum_y) / denom
}

/// Arithmetic mean, 0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    let sum: f64 = values.iter().sum();
    sum / values.len().max(1) as f64
}

/// Population standard deviation around `mean`, 0 for an empty slice
pub fn population_std(values: &[f64], mean: f64) -> f64 {
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    let variance = sum_sq / values.len().max(1) as f64;
    variance.sqrt()
}
