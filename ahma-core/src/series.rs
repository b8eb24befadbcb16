//! Deterministic synthetic price series.
//!
//! The price path is a seeded pseudo-random walk: a slow two-wave oscillation,
//! uniform noise from a trigonometric hash stream, and a drift bonus that is
//! larger over the middle third of the series (a trending phase). No real
//! randomness source is involved; the same `(length, seed)` pair always
//! produces bit-identical closes.

use crate::domain::PricePoint;
use chrono::{Duration, NaiveDate};

pub const DEFAULT_LENGTH: usize = 220;
pub const DEFAULT_SEED: f64 = 35.0;

const BASE_PRICE: f64 = 142.0;
const PRICE_FLOOR: f64 = 5.0;
const NOISE_SPAN: f64 = 3.4;
const DRIFT_TRENDING: f64 = 0.5;
const DRIFT_QUIET: f64 = 0.1;

/// Deterministic pseudo-random stream.
///
/// Each step takes the fractional part of `sin(state) * 10000` and advances
/// `state` by one. Output is always in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct TrigHashStream {
    state: f64,
}

impl TrigHashStream {
    pub fn new(seed: f64) -> Self {
        Self { state: seed }
    }

    /// Next value in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        let x = self.state.sin() * 10_000.0;
        self.state += 1.0;
        x - x.floor()
    }
}

/// Generate `length` daily closes ending at the current local date.
pub fn generate_price_series(length: usize, seed: f64) -> Vec<PricePoint> {
    generate_price_series_at(length, seed, chrono::Local::now().date_naive())
}

/// Generate `length` daily closes ending at `anchor`, oldest first.
///
/// Closes are floor-clamped and rounded to cents; the rounded value feeds
/// back into the walk so the emitted series and the walk agree exactly.
pub fn generate_price_series_at(length: usize, seed: f64, anchor: NaiveDate) -> Vec<PricePoint> {
    let mut stream = TrigHashStream::new(seed);
    let mut points = Vec::with_capacity(length);
    let mut price = BASE_PRICE;

    let trending = length / 3..length * 2 / 3;

    for i in 0..length {
        let t = i as f64;
        let wave = (t / 14.0).sin() * 0.9 + (t / 34.0).cos() * 0.65;
        let noise = (stream.next_unit() - 0.5) * NOISE_SPAN;
        let drift = if trending.contains(&i) {
            DRIFT_TRENDING
        } else {
            DRIFT_QUIET
        };

        price = (price + wave + noise + drift).max(PRICE_FLOOR);
        price = (price * 100.0).round() / 100.0;

        let date = anchor - Duration::days((length - 1 - i) as i64);
        points.push(PricePoint { date, close: price });
    }

    points
}
