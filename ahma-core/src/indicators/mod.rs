//! Moving-average and volatility primitives.
//!
//! All primitives are pure functions over plain slices. Warm-up gaps are
//! represented as `Option::None` and propagate through composed passes;
//! volatility is the exception and always yields a usable number.

pub mod hull;
pub mod volatility;
pub mod wma;

pub use hull::{hull_lookback, hull_series};
pub use volatility::{volatility_at, volatility_period, volatility_series};
pub use wma::{wma_at, wma_series};

/// Wrap plain closes as an all-present optional series for testing.
#[cfg(test)]
pub fn present(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().copied().map(Some).collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
