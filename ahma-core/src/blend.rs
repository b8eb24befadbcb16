//! Volatility-adaptive blending — the recursive step that turns the raw Hull
//! line into the AHMA line.
//!
//! The blend weight toward the previous output rises with volatility relative
//! to a normalizer-supplied reference, scaled by `sensitivity` and hard-capped
//! at [`MAX_ADAPTIVE_FACTOR`]. Turbulent stretches lean on the prior smoothed
//! value; calm stretches pass the Hull value through nearly unchanged.

/// Hard cap on the blend weight toward the previous output. The cap keeps
/// the current Hull value contributing at least 15%, so the line can never
/// freeze at its prior value.
pub const MAX_ADAPTIVE_FACTOR: f64 = 0.85;

/// Maps a raw volatility series to per-index ratios in `[0, 1]`.
pub trait VolatilityNormalizer {
    fn normalize(&self, volatility: &[f64]) -> Vec<f64>;
}

/// Normalizes against the maximum volatility over the entire series.
///
/// The ratio at an early index depends on volatility observed anywhere in
/// the series, including later points. Suitable for a fixed replayed window;
/// a streaming consumer should use [`RollingMaxNormalizer`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalMaxNormalizer;

impl VolatilityNormalizer for GlobalMaxNormalizer {
    fn normalize(&self, volatility: &[f64]) -> Vec<f64> {
        let max = volatility.iter().copied().fold(0.0_f64, f64::max);
        if max <= 0.0 {
            return vec![0.0; volatility.len()];
        }
        volatility.iter().map(|v| v / max).collect()
    }
}

/// Normalizes against a trailing-window maximum. No whole-series lookahead.
#[derive(Debug, Clone, Copy)]
pub struct RollingMaxNormalizer {
    pub window: usize,
}

impl VolatilityNormalizer for RollingMaxNormalizer {
    fn normalize(&self, volatility: &[f64]) -> Vec<f64> {
        let window = self.window.max(1);
        (0..volatility.len())
            .map(|i| {
                let start = (i + 1).saturating_sub(window);
                let max = volatility[start..=i].iter().copied().fold(0.0_f64, f64::max);
                if max <= 0.0 {
                    0.0
                } else {
                    volatility[i] / max
                }
            })
            .collect()
    }
}

/// Recursive blend of the Hull series with its own previous output.
///
/// The fold carries exactly one scalar of state (`previous`), seeded by the
/// first present Hull value; gaps emit gaps without advancing the state.
#[derive(Debug, Clone, Copy)]
pub struct AdaptiveBlender {
    sensitivity: f64,
}

impl AdaptiveBlender {
    pub fn new(sensitivity: f64) -> Self {
        Self { sensitivity }
    }

    /// Blend weight toward the previous output, in `[0, MAX_ADAPTIVE_FACTOR]`.
    pub fn adaptive_factor(&self, volatility_ratio: f64) -> f64 {
        (self.sensitivity * volatility_ratio).clamp(0.0, MAX_ADAPTIVE_FACTOR)
    }

    /// Fold the Hull series into the AHMA series. Output length equals input
    /// length; the present/absent pattern matches `hull` exactly.
    pub fn blend(
        &self,
        hull: &[Option<f64>],
        volatility: &[f64],
        normalizer: &dyn VolatilityNormalizer,
    ) -> Vec<Option<f64>> {
        debug_assert_eq!(
            hull.len(),
            volatility.len(),
            "hull and volatility series must be aligned"
        );

        let ratios = normalizer.normalize(volatility);
        let mut out = Vec::with_capacity(hull.len());
        let mut previous: Option<f64> = None;

        for (value, ratio) in hull.iter().zip(&ratios) {
            match (*value, previous) {
                (None, _) => out.push(None),
                (Some(v), None) => {
                    previous = Some(v);
                    out.push(Some(v));
                }
                (Some(v), Some(prev)) => {
                    let factor = self.adaptive_factor(*ratio);
                    let blended = v * (1.0 - factor) + prev * factor;
                    previous = Some(blended);
                    out.push(Some(blended));
                }
            }
        }

        out
    }
}
