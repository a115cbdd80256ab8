// ============================================
// Interaction Recorder
// ============================================
//
// Translates UI events into profile bumps:
//
//   tap:    every signal the tapped product carries, at per-dimension
//           magnitudes, plus one session trend view
//   filter: a single dimension/value pair, weaker for a browsing chip
//           than for an applied filter
//
// Filter events are the only write path for the size dimension, since
// products carry no size attribute of their own.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Product;
use crate::services::profile::{PreferenceProfile, SignalDimension};
use crate::services::trending::TrendTracker;
use crate::utils::Bucketer;

/// Bump magnitudes applied on a product tap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionWeights {
    pub category: f64,
    pub store: f64,
    pub gender: f64,
    pub price_bucket: f64,
    pub eta_bucket: f64,
    pub product: f64,
}

impl Default for InteractionWeights {
    fn default() -> Self {
        Self {
            category: 1.2,
            store: 1.0,
            gender: 0.8,
            price_bucket: 0.6,
            eta_bucket: 0.5,
            product: 0.25,
        }
    }
}

/// How a filter value was chosen in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterSelection {
    /// Tapped a suggestion chip while browsing.
    Chip,
    /// Committed the value through the filter sheet.
    Applied,
}

impl FilterSelection {
    pub fn magnitude(&self) -> f64 {
        match self {
            FilterSelection::Chip => 0.6,
            FilterSelection::Applied => 1.0,
        }
    }
}

/// Stateless translator from UI events to profile and trend updates.
pub struct InteractionRecorder {
    weights: InteractionWeights,
}

impl InteractionRecorder {
    pub fn new() -> Self {
        Self {
            weights: InteractionWeights::default(),
        }
    }

    pub fn with_weights(mut self, weights: InteractionWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Record a product tap: bump every signal the product carries and
    /// count one session view. Missing attributes and unbucketable values
    /// fall through the blank-key guard and are skipped.
    pub fn record_tap(
        &self,
        product: &Product,
        bucketer: &dyn Bucketer,
        profile: &mut PreferenceProfile,
        trend: &mut TrendTracker,
    ) {
        profile.bump(
            SignalDimension::Category,
            product.primary_category(),
            self.weights.category,
        );
        profile.bump(
            SignalDimension::Store,
            &product.store_name,
            self.weights.store,
        );
        if let Some(gender) = product.gender {
            profile.bump(SignalDimension::Gender, gender.as_key(), self.weights.gender);
        }
        if let Some(price) = product.price {
            profile.bump(
                SignalDimension::PriceBucket,
                &bucketer.price_bucket(price),
                self.weights.price_bucket,
            );
        }
        if let Some(eta) = product.eta_text.as_deref() {
            profile.bump(
                SignalDimension::EtaBucket,
                &bucketer.eta_bucket(eta),
                self.weights.eta_bucket,
            );
        }
        profile.bump(
            SignalDimension::Product,
            &product.id.to_string(),
            self.weights.product,
        );
        trend.record_view(product.id);

        debug!(product_id = product.id, "Tap recorded");
    }

    /// Record a filter selection as a single-dimension bump.
    pub fn record_filter(
        &self,
        dimension: SignalDimension,
        value: &str,
        selection: FilterSelection,
        profile: &mut PreferenceProfile,
    ) {
        profile.bump(dimension, value, selection.magnitude());

        debug!(
            dimension = dimension.as_str(),
            value,
            magnitude = selection.magnitude(),
            "Filter recorded"
        );
    }
}

impl Default for InteractionRecorder {
    fn default() -> Self {
        Self::new()
    }
}
