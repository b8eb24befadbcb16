//! Price and indicator points — the per-bar data units.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single synthetic daily close.
///
/// Sequences are ordered oldest-to-newest with strictly increasing dates,
/// one point per simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Per-bar classification of price relative to the smoothed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bias {
    Bullish,
    Bearish,
}

impl Bias {
    /// Bullish when the close sits above the smoothed value, bearish otherwise.
    pub fn from_close(close: f64, smoothed: f64) -> Self {
        if close > smoothed {
            Bias::Bullish
        } else {
            Bias::Bearish
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Bias::Bullish => "bullish",
            Bias::Bearish => "bearish",
        }
    }
}

impl std::fmt::Display for Bias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One output bar of the assembled dataset.
///
/// `ahma` is `None` inside the warm-up window. `bias` is present exactly
/// when `ahma` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    pub date: NaiveDate,
    /// ISO date string used as the chart axis label.
    pub label: String,
    pub close: f64,
    pub ahma: Option<f64>,
    pub bias: Option<Bias>,
}

impl IndicatorPoint {
    /// True once the smoothed line has enough history at this bar.
    pub fn is_warm(&self) -> bool {
        self.ahma.is_some()
    }
}
