//! Numeric helpers centralizing rounding and safe casts.

use num_traits::cast::cast;

/// Round to a fixed number of decimal places, half away from zero.
///
/// Non-finite inputs collapse to 0.0 so stored figures stay comparable.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = 10f64.powi(cast::<u32, i32>(decimals).unwrap_or(0));
    (value * factor).round() / factor
}

/// Convert usize to f64 while allowing precision loss in a single location.
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}

/// Quantile of an ascending-sorted slice using linear interpolation between
/// the two closest ranks. Empty input yields 0.0; callers guard emptiness.
#[must_use]
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    match sorted {
        [] => 0.0,
        [only] => *only,
        _ => {
            let pos = q.clamp(0.0, 1.0) * usize_to_f64(sorted.len() - 1);
            let lo = pos.floor();
            let hi = pos.ceil();
            let lo_idx = cast::<f64, usize>(lo).unwrap_or(0);
            let hi_idx = cast::<f64, usize>(hi).unwrap_or(sorted.len() - 1);
            sorted[lo_idx] + (pos - lo) * (sorted[hi_idx] - sorted[lo_idx])
        }
    }
}
