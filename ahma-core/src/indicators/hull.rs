//! Hull Moving Average (HMA).
//!
//! Three WMA passes: `wma(2*wma(close, period/2) - wma(close, period),
//! sqrt(period))`. The intermediate difference series keeps the gaps of both
//! inputs, and the final sqrt-length pass re-smooths it.
//! First valid value at index `hull_lookback(period)`.

use super::wma::wma_series;

/// Floor applied to each derived pass length.
const MIN_PASS_PERIOD: f64 = 2.0;

fn pass_lengths(period: f64) -> (usize, usize, usize) {
    let full = period.round().max(MIN_PASS_PERIOD);
    let half = (full / 2.0).round().max(MIN_PASS_PERIOD);
    let sqrt = full.sqrt().round().max(MIN_PASS_PERIOD);
    (full as usize, half as usize, sqrt as usize)
}

/// Hull MA over raw closes. Output length equals input length.
pub fn hull_series(values: &[f64], period: f64) -> Vec<Option<f64>> {
    let (full, half, sqrt) = pass_lengths(period);

    let src: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
    let wma_half = wma_series(&src, half);
    let wma_full = wma_series(&src, full);

    let diff: Vec<Option<f64>> = wma_half
        .iter()
        .zip(&wma_full)
        .map(|(h, f)| match (h, f) {
            (Some(h), Some(f)) => Some(2.0 * h - f),
            _ => None,
        })
        .collect();

    wma_series(&diff, sqrt)
}

/// Index of the first present output for the given period.
pub fn hull_lookback(period: f64) -> usize {
    let (full, half, sqrt) = pass_lengths(period);
    full.max(half) - 1 + (sqrt - 1)
}
