//! Scalar summary report computed once per dataset.

use super::point::Bias;
use serde::{Deserialize, Serialize};

/// Current-state summary of a finished dataset.
///
/// `None` means the metric is unavailable (not enough warm bars), which is
/// distinct from a computed zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Bias of the newest bar, when its smoothed value exists.
    pub bias: Option<Bias>,
    /// Percent change of the smoothed line over its trailing window.
    pub slope_percent: Option<f64>,
    /// Standardized distance of the latest close-to-line gap.
    pub pullback_z: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serialization_roundtrip() {
        let report = MetricsReport {
            bias: Some(Bias::Bearish),
            slope_percent: Some(-1.25),
            pullback_z: None,
        };
        let json = serde_json::to_string(&report).unwrap();
        let deser: MetricsReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deser);
    }
}
