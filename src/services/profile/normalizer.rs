// ============================================
// Dimension Normalizer
// ============================================
//
// Read-time view over one dimension's affinity map that rescales raw
// weights into [0, 1]:
//
//   relevance(key) = weight(key) / max(1.0, max weight in dimension)
//
// The 1.0 floor keeps young profiles gentle: until some weight crosses
// 1.0, relevance equals the raw weight instead of snapping the single
// strongest signal straight to full strength.

use std::collections::HashMap;

use super::store::AffinityEntry;

/// Max-normalized view over one dimension, built once per ranking call.
#[derive(Debug, Clone, Copy)]
pub struct NormalizedDimension<'a> {
    entries: &'a HashMap<String, AffinityEntry>,
    max_weight: f64,
}

impl<'a> NormalizedDimension<'a> {
    pub fn new(entries: &'a HashMap<String, AffinityEntry>) -> Self {
        let max_weight = entries
            .values()
            .map(|entry| entry.weight)
            .fold(1.0_f64, f64::max);
        Self {
            entries,
            max_weight,
        }
    }

    /// Normalized relevance of `key` in [0, 1]. Unknown keys score 0.
    pub fn relevance(&self, key: &str) -> f64 {
        self.entries
            .get(key)
            .map(|entry| entry.weight / self.max_weight)
            .unwrap_or(0.0)
    }

    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }
}
