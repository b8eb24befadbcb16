//! Dataset fingerprinting and memoization.
//!
//! A dataset is a pure function of `(series, base_period, sensitivity)`, so
//! the tuple's BLAKE3 digest identifies it exactly. `DatasetCache` keeps one
//! computed dataset per distinct key behind an `Arc`, for UI callers that
//! re-request the same parameters repeatedly.

use crate::config::EngineParams;
use crate::dataset::compute_ahma_dataset;
use crate::domain::{IndicatorPoint, PricePoint};
use chrono::Datelike;
use std::collections::HashMap;
use std::sync::Arc;

/// BLAKE3 digest of one `(series, params)` tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatasetKey([u8; 32]);

impl DatasetKey {
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

/// Derive the key for a series/parameter pair.
///
/// Parameters are clamped first, so raw and clamped forms of the same
/// effective configuration share a key. Close values are hashed by bit
/// pattern, dates by day number; params go through their canonical JSON.
pub fn dataset_key(series: &[PricePoint], params: &EngineParams) -> DatasetKey {
    let params = params.clamped();

    let mut hasher = blake3::Hasher::new();
    hasher.update(&(series.len() as u64).to_le_bytes());
    for point in series {
        hasher.update(&point.date.num_days_from_ce().to_le_bytes());
        hasher.update(&point.close.to_bits().to_le_bytes());
    }

    let params_json = serde_json::to_string(&params).expect("EngineParams must serialize");
    hasher.update(params_json.as_bytes());

    DatasetKey(*hasher.finalize().as_bytes())
}

/// At-most-one computation per distinct `(series, params)` tuple.
#[derive(Debug, Clone, Default)]
pub struct DatasetCache {
    entries: HashMap<DatasetKey, Arc<Vec<IndicatorPoint>>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached dataset for this tuple, computing it on first use.
    pub fn get_or_compute(
        &mut self,
        series: &[PricePoint],
        params: &EngineParams,
    ) -> Arc<Vec<IndicatorPoint>> {
        let key = dataset_key(series, params);
        self.entries
            .entry(key)
            .or_insert_with(|| Arc::new(compute_ahma_dataset(series, params)))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
