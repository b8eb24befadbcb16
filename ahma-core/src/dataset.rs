//! Dataset assembly — the single entry point consumers need.
//!
//! Composes the pipeline: closes → Hull smoothing + rolling volatility →
//! adaptive blend → per-bar bias. Pure function of the series and parameters;
//! recomputation is full, never incremental.

use crate::blend::{AdaptiveBlender, GlobalMaxNormalizer, VolatilityNormalizer};
use crate::config::EngineParams;
use crate::domain::{Bias, IndicatorPoint, PricePoint};
use crate::indicators::hull::hull_series;
use crate::indicators::volatility::{volatility_period, volatility_series};

/// Compute the AHMA dataset with whole-series volatility normalization.
pub fn compute_ahma_dataset(series: &[PricePoint], params: &EngineParams) -> Vec<IndicatorPoint> {
    compute_ahma_dataset_with(series, params, &GlobalMaxNormalizer)
}

/// Compute the AHMA dataset with an explicit volatility normalizer.
pub fn compute_ahma_dataset_with(
    series: &[PricePoint],
    params: &EngineParams,
    normalizer: &dyn VolatilityNormalizer,
) -> Vec<IndicatorPoint> {
    let params = params.clamped();

    let closes: Vec<f64> = series.iter().map(|p| p.close).collect();
    let hull = hull_series(&closes, params.base_period);
    let volatility = volatility_series(&closes, volatility_period(params.base_period));
    let ahma = AdaptiveBlender::new(params.sensitivity).blend(&hull, &volatility, normalizer);

    debug_assert_eq!(ahma.len(), series.len(), "blend must preserve length");

    series
        .iter()
        .zip(&ahma)
        .map(|(point, ahma)| IndicatorPoint {
            date: point.date,
            label: point.date.to_string(),
            close: point.close,
            ahma: *ahma,
            bias: ahma.map(|a| Bias::from_close(point.close, a)),
        })
        .collect()
}

/// Index of the first warm bar, if the series is long enough.
pub fn first_warm_index(points: &[IndicatorPoint]) -> Option<usize> {
    points.iter().position(|p| p.is_warm())
}
