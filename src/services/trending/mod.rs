// ============================================
// Trend Tracker
// ============================================
//
// Session-scoped popularity signal blending two sources:
//
//   local:  views recorded this session, max-normalized across the session
//   remote: catalog-wide view counts, saturating at a fixed ceiling
//
//   trend_score = max(local / local_max, min(remote / saturation, 1))
//
// Taking the max lets a fresh session ride catalog-wide popularity until
// its own views accumulate, and lets a heavy session override a cold
// catalog signal.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Remote view count at which an item is considered fully trending.
pub const DEFAULT_REMOTE_SATURATION: f64 = 50.0;

/// In-session view counter with a blended trend score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendTracker {
    local_views: HashMap<u64, u32>,
    remote_saturation: f64,
}

impl TrendTracker {
    pub fn new() -> Self {
        Self {
            local_views: HashMap::new(),
            remote_saturation: DEFAULT_REMOTE_SATURATION,
        }
    }

    /// Override the remote saturation ceiling. Non-positive values are
    /// ignored and the current ceiling is kept.
    pub fn with_remote_saturation(mut self, saturation: f64) -> Self {
        if saturation > 0.0 {
            self.remote_saturation = saturation;
        }
        self
    }

    /// Count one in-session view of `product_id`.
    pub fn record_view(&mut self, product_id: u64) {
        let views = self.local_views.entry(product_id).or_insert(0);
        *views += 1;
        debug!(product_id, views = *views, "Session view recorded");
    }

    /// In-session views of `product_id` so far.
    pub fn local_views(&self, product_id: u64) -> u32 {
        self.local_views.get(&product_id).copied().unwrap_or(0)
    }

    /// Blended trend relevance in [0, 1] for one candidate.
    pub fn trend_score(&self, product_id: u64, remote_view_count: u64) -> f64 {
        let local_max = self
            .local_views
            .values()
            .copied()
            .max()
            .unwrap_or(0)
            .max(1) as f64;
        let local = self.local_views(product_id) as f64 / local_max;
        let remote = (remote_view_count as f64 / self.remote_saturation).min(1.0);
        local.max(remote)
    }

    /// Drop all session view counts.
    pub fn reset(&mut self) {
        self.local_views.clear();
    }
}

impl Default for TrendTracker {
    fn default() -> Self {
        Self::new()
    }
}
