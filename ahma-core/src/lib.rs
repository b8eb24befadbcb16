//! AHMA Core — adaptive Hull moving average engine.
//!
//! This crate contains the numeric analytics pipeline:
//! - Deterministic synthetic price series (seeded, reproducible)
//! - Weighted and Hull moving averages with explicit warm-up gaps
//! - Rolling volatility estimation
//! - Volatility-adaptive recursive blending (the AHMA line)
//! - Derived metrics: current bias, slope strength, pullback z-score
//! - Trend zone segmentation for chart annotation
//! - Parameter config (TOML), fingerprinting, and dataset memoization
//!
//! Every stage is a pure function of its inputs; the blender carries one
//! scalar of fold state internally and exposes none of it.

pub mod blend;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod fingerprint;
pub mod indicators;
pub mod metrics;
pub mod series;
pub mod zones;
