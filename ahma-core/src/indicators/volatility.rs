//! Rolling volatility — population standard deviation of trailing closes.
//!
//! Volatility is always a usable number: windows with insufficient history
//! yield `0.0`, never a gap.

/// Floor on the volatility window length.
pub const MIN_VOLATILITY_PERIOD: usize = 5;

/// Window length used alongside a Hull base period.
pub fn volatility_period(base_period: f64) -> usize {
    let rounded = (base_period / 2.0).round().max(0.0) as usize;
    rounded.max(MIN_VOLATILITY_PERIOD)
}

/// Population standard deviation of the `period` closes ending at `index`.
///
/// `0.0` when the window reaches before the series start or is empty.
pub fn volatility_at(values: &[f64], period: usize, index: usize) -> f64 {
    if period == 0 || index >= values.len() || index + 1 < period {
        return 0.0;
    }

    let window = &values[index + 1 - period..=index];
    let mean = window.iter().sum::<f64>() / window.len() as f64;
    let variance = window
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum::<f64>()
        / window.len() as f64;

    variance.sqrt()
}

/// Rolling volatility over the whole series. Output length equals input length.
pub fn volatility_series(values: &[f64], period: usize) -> Vec<f64> {
    (0..values.len())
        .map(|i| volatility_at(values, period, i))
        .collect()
}
