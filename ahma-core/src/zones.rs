//! Trend zone segmentation — run-length encoding of bias.
//!
//! One left-to-right pass: cold bars are skipped, a zone opens on the first
//! warm bar, closes at the bar before each bias flip, and the final zone
//! closes at the last warm bar. Single-bar zones are dropped.

use crate::domain::{Bias, IndicatorPoint, TrendZone};

/// Segment the dataset into non-overlapping trend zones, ordered by start.
pub fn compute_trend_zones(points: &[IndicatorPoint]) -> Vec<TrendZone> {
    let mut zones = Vec::new();
    let mut open: Option<(usize, Bias)> = None;
    let mut last_warm: Option<usize> = None;

    for (i, point) in points.iter().enumerate() {
        let bias = match point.bias {
            Some(bias) => bias,
            None => continue,
        };

        match open {
            None => open = Some((i, bias)),
            Some((start, current)) if bias != current => {
                if let Some(end) = last_warm {
                    push_zone(&mut zones, points, start, end, current);
                }
                open = Some((i, bias));
            }
            Some(_) => {}
        }

        last_warm = Some(i);
    }

    if let (Some((start, bias)), Some(end)) = (open, last_warm) {
        push_zone(&mut zones, points, start, end, bias);
    }

    zones
}

fn push_zone(
    zones: &mut Vec<TrendZone>,
    points: &[IndicatorPoint],
    start: usize,
    end: usize,
    bias: Bias,
) {
    if start == end {
        return;
    }
    zones.push(TrendZone {
        start_index: start,
        end_index: end,
        start_label: points[start].label.clone(),
        end_label: points[end].label.clone(),
        bias,
    });
}
