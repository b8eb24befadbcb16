//! Scalar summaries over a finished dataset.
//!
//! Each metric consumes only a bounded trailing window of warm bars and
//! reports `None` when too few qualify. Zero-variance windows resolve to a
//! zero z-score, never NaN.

use crate::domain::{IndicatorPoint, MetricsReport};

/// Trailing warm bars consumed by the slope metric.
pub const SLOPE_WINDOW: usize = 8;
const MIN_SLOPE_POINTS: usize = 2;

/// Trailing warm bars consumed by the pullback metric.
pub const PULLBACK_WINDOW: usize = 20;
const MIN_PULLBACK_POINTS: usize = 5;

/// Compute all summaries in one pass over the dataset tail.
pub fn compute_metrics(points: &[IndicatorPoint]) -> MetricsReport {
    MetricsReport {
        bias: points.last().and_then(|p| p.bias),
        slope_percent: slope_percent(points),
        pullback_z: pullback_z(points),
    }
}

/// The trailing `window` warm bars, oldest first.
fn trailing_warm(points: &[IndicatorPoint], window: usize) -> Vec<&IndicatorPoint> {
    let mut warm: Vec<&IndicatorPoint> = points
        .iter()
        .rev()
        .filter(|p| p.is_warm())
        .take(window)
        .collect();
    warm.reverse();
    warm
}

/// Percent change of the smoothed line across its trailing window.
fn slope_percent(points: &[IndicatorPoint]) -> Option<f64> {
    let warm = trailing_warm(points, SLOPE_WINDOW);
    if warm.len() < MIN_SLOPE_POINTS {
        return None;
    }
    let first = warm.first()?.ahma?;
    let last = warm.last()?.ahma?;
    if first == 0.0 {
        return None;
    }
    Some((last - first) / first * 100.0)
}

/// Standardized distance of the latest close-to-line gap relative to its
/// trailing distribution.
fn pullback_z(points: &[IndicatorPoint]) -> Option<f64> {
    let warm = trailing_warm(points, PULLBACK_WINDOW);
    if warm.len() < MIN_PULLBACK_POINTS {
        return None;
    }

    let distances: Vec<f64> = warm
        .iter()
        .filter_map(|p| p.ahma.map(|a| p.close - a))
        .collect();

    let last = *distances.last()?;
    let mean = distances.iter().sum::<f64>() / distances.len() as f64;
    let variance = distances
        .iter()
        .map(|d| {
            let e = d - mean;
            e * e
        })
        .sum::<f64>()
        / distances.len() as f64;
    let stddev = variance.sqrt();

    if stddev == 0.0 {
        return Some(0.0);
    }
    Some((last - mean) / stddev)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Bias;
    use chrono::NaiveDate;

    fn make_points(bars: &[(f64, Option<f64>)]) -> Vec<IndicatorPoint> {
        let base = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        bars.iter()
            .enumerate()
            .map(|(i, &(close, ahma))| {
                let date = base + chrono::Duration::days(i as i64);
                IndicatorPoint {
                    date,
                    label: date.to_string(),
                    close,
                    ahma,
                    bias: ahma.map(|a| Bias::from_close(close, a)),
                }
            })
            .collect()
    }

    #[test]
    fn empty_dataset_has_no_metrics() {
        let report = compute_metrics(&[]);
        assert_eq!(report.bias, None);
        assert_eq!(report.slope_percent, None);
        assert_eq!(report.pullback_z, None);
    }

    #[test]
    fn cold_dataset_has_no_metrics() {
        let points = make_points(&[(100.0, None), (101.0, None), (102.0, None)]);
        let report = compute_metrics(&points);
        assert_eq!(report.bias, None);
        assert_eq!(report.slope_percent, None);
        assert_eq!(report.pullback_z, None);
    }

    #[test]
    fn bias_is_the_last_bar() {
        let points = make_points(&[(100.0, Some(101.0)), (105.0, Some(102.0))]);
        assert_eq!(compute_metrics(&points).bias, Some(Bias::Bullish));
    }

    #[test]
    fn slope_needs_two_warm_bars() {
        let points = make_points(&[(100.0, None), (100.0, Some(100.0))]);
        assert_eq!(compute_metrics(&points).slope_percent, None);
    }

    #[test]
    fn slope_over_full_window() {
        // 9 warm bars, line ramping 100 → 108; window keeps the last 8.
        let bars: Vec<(f64, Option<f64>)> =
            (0..9).map(|i| (100.0, Some(100.0 + i as f64))).collect();
        let points = make_points(&bars);
        let slope = compute_metrics(&points).slope_percent.unwrap();
        // (108 - 101) / 101 * 100
        assert!((slope - 7.0 / 101.0 * 100.0).abs() < 1e-10);
    }

    #[test]
    fn slope_skips_cold_bars() {
        let points = make_points(&[
            (100.0, Some(100.0)),
            (100.0, None),
            (100.0, Some(110.0)),
        ]);
        let slope = compute_metrics(&points).slope_percent.unwrap();
        assert!((slope - 10.0).abs() < 1e-10);
    }

    #[test]
    fn pullback_needs_five_warm_bars() {
        let bars: Vec<(f64, Option<f64>)> =
            (0..4).map(|i| (100.0 + i as f64, Some(100.0))).collect();
        let points = make_points(&bars);
        assert_eq!(compute_metrics(&points).pullback_z, None);
    }

    #[test]
    fn flat_distances_give_exactly_zero() {
        let bars: Vec<(f64, Option<f64>)> =
            (0..10).map(|_| (100.0, Some(100.0))).collect();
        let points = make_points(&bars);
        assert_eq!(compute_metrics(&points).pullback_z, Some(0.0));
    }

    #[test]
    fn stretched_last_gap_scores_positive() {
        // Distances 0 for 9 bars, then +5 on the last bar.
        let mut bars: Vec<(f64, Option<f64>)> =
            (0..9).map(|_| (100.0, Some(100.0))).collect();
        bars.push((105.0, Some(100.0)));
        let points = make_points(&bars);
        let z = compute_metrics(&points).pullback_z.unwrap();
        assert!(z > 2.0, "expected a strongly positive z, got {z}");
    }

    #[test]
    fn known_z_value() {
        // Distances: [1, -1, 1, -1, 3] → mean 0.6, population stddev sqrt(2.24)
        let bars = [
            (101.0, Some(100.0)),
            (99.0, Some(100.0)),
            (101.0, Some(100.0)),
            (99.0, Some(100.0)),
            (103.0, Some(100.0)),
        ];
        let points = make_points(&bars);
        let z = compute_metrics(&points).pullback_z.unwrap();
        let expected = (3.0 - 0.6) / 2.24_f64.sqrt();
        assert!((z - expected).abs() < 1e-10);
    }
}
