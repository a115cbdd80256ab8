// ============================================
// Preference Store
// ============================================
//
// Accumulates affinity weights per signal key with half-life decay:
//
//   bump:  weight += amount, last_updated = now
//   decay: weight *= 0.5^(elapsed_days / half_life_days), per entry
//
// Weights grow without bound by design; the per-call normalizer bounds
// them at read time. Entries decayed below a negligible threshold are
// pruned from their dimension map.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use super::Result;
use crate::utils::normalize_key;

/// Weight below which a decayed entry is dropped from its dimension.
const MIN_RETAINED_WEIGHT: f64 = 1e-6;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// The seven affinity dimensions tracked per profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalDimension {
    Category,
    Store,
    Gender,
    Size,
    PriceBucket,
    EtaBucket,
    Product,
}

impl SignalDimension {
    pub const ALL: [SignalDimension; 7] = [
        SignalDimension::Category,
        SignalDimension::Store,
        SignalDimension::Gender,
        SignalDimension::Size,
        SignalDimension::PriceBucket,
        SignalDimension::EtaBucket,
        SignalDimension::Product,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalDimension::Category => "category",
            SignalDimension::Store => "store",
            SignalDimension::Gender => "gender",
            SignalDimension::Size => "size",
            SignalDimension::PriceBucket => "price_bucket",
            SignalDimension::EtaBucket => "eta_bucket",
            SignalDimension::Product => "product",
        }
    }

    /// Canonical form of a key in this dimension. Keys are case-insensitive
    /// everywhere except the product dimension, whose keys are stringified
    /// numeric ids and keep their exact form.
    pub fn normalize_key(&self, key: &str) -> String {
        match self {
            SignalDimension::Product => key.trim().to_string(),
            _ => normalize_key(key),
        }
    }
}

/// Accumulated, decayable strength of preference for one signal key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffinityEntry {
    pub weight: f64,
    pub last_updated: DateTime<Utc>,
}

/// Per-user affinity weights across the seven signal dimensions.
///
/// Created empty; entries appear lazily on first bump and disappear only
/// through decay pruning or an explicit [`reset`](Self::reset).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferenceProfile {
    category: HashMap<String, AffinityEntry>,
    store: HashMap<String, AffinityEntry>,
    gender: HashMap<String, AffinityEntry>,
    size: HashMap<String, AffinityEntry>,
    price_bucket: HashMap<String, AffinityEntry>,
    eta_bucket: HashMap<String, AffinityEntry>,
    product: HashMap<String, AffinityEntry>,
}

impl PreferenceProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dimension(&self, dimension: SignalDimension) -> &HashMap<String, AffinityEntry> {
        match dimension {
            SignalDimension::Category => &self.category,
            SignalDimension::Store => &self.store,
            SignalDimension::Gender => &self.gender,
            SignalDimension::Size => &self.size,
            SignalDimension::PriceBucket => &self.price_bucket,
            SignalDimension::EtaBucket => &self.eta_bucket,
            SignalDimension::Product => &self.product,
        }
    }

    fn dimension_mut(&mut self, dimension: SignalDimension) -> &mut HashMap<String, AffinityEntry> {
        match dimension {
            SignalDimension::Category => &mut self.category,
            SignalDimension::Store => &mut self.store,
            SignalDimension::Gender => &mut self.gender,
            SignalDimension::Size => &mut self.size,
            SignalDimension::PriceBucket => &mut self.price_bucket,
            SignalDimension::EtaBucket => &mut self.eta_bucket,
            SignalDimension::Product => &mut self.product,
        }
    }

    /// Reinforce one signal key. Blank keys and non-positive amounts are
    /// silently ignored; decay is the only path that shrinks a weight.
    pub fn bump(&mut self, dimension: SignalDimension, key: &str, amount: f64) {
        self.bump_at(dimension, key, amount, Utc::now());
    }

    /// [`bump`](Self::bump) with an explicit timestamp.
    pub fn bump_at(
        &mut self,
        dimension: SignalDimension,
        key: &str,
        amount: f64,
        now: DateTime<Utc>,
    ) {
        let key = dimension.normalize_key(key);
        if key.is_empty() || !(amount > 0.0) {
            return;
        }

        let entry = self
            .dimension_mut(dimension)
            .entry(key)
            .or_insert(AffinityEntry {
                weight: 0.0,
                last_updated: now,
            });
        entry.weight += amount;
        entry.last_updated = now;

        debug!(
            dimension = dimension.as_str(),
            amount,
            weight = entry.weight,
            "Affinity bumped"
        );
    }

    /// Apply half-life decay to every entry in every dimension.
    ///
    /// Session hosts call this once at session start, not per ranking call.
    pub fn decay_all(&mut self, half_life_days: f64) {
        self.decay_all_at(half_life_days, Utc::now());
    }

    /// [`decay_all`](Self::decay_all) with an explicit sweep timestamp.
    ///
    /// One `now` anchors the whole sweep, and every surviving entry is
    /// re-stamped with it, so sweeps compose exactly: decaying by `d1` days
    /// and then by `d2` equals one decay by `d1 + d2`. Non-positive
    /// half-lives are ignored.
    pub fn decay_all_at(&mut self, half_life_days: f64, now: DateTime<Utc>) {
        if half_life_days <= 0.0 {
            return;
        }

        let mut pruned = 0usize;
        for dimension in SignalDimension::ALL {
            let map = self.dimension_mut(dimension);
            for entry in map.values_mut() {
                let elapsed_days =
                    (now - entry.last_updated).num_seconds().max(0) as f64 / SECONDS_PER_DAY;
                entry.weight *= 0.5_f64.powf(elapsed_days / half_life_days);
                entry.last_updated = now;
            }
            let before = map.len();
            map.retain(|_, entry| entry.weight >= MIN_RETAINED_WEIGHT);
            pruned += before - map.len();
        }

        debug!(
            half_life_days,
            pruned,
            remaining = self.entry_count(),
            "Profile decay applied"
        );
    }

    /// Drop every entry in every dimension.
    pub fn reset(&mut self) {
        for dimension in SignalDimension::ALL {
            self.dimension_mut(dimension).clear();
        }
    }

    /// Total entries across all dimensions.
    pub fn entry_count(&self) -> usize {
        SignalDimension::ALL
            .iter()
            .map(|dimension| self.dimension(*dimension).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    /// Snapshot for the host's load/save boundary (e.g. device storage or a
    /// user-scoped database row).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a profile from a [`to_json`](Self::to_json) snapshot.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
