// ============================================
// Ranking Engine
// ============================================
//
// Scores each candidate as a weighted sum of per-dimension relevances:
//
//   score = w_category * category + w_store * store + w_gender * gender
//         + w_size * size + w_price * price_bucket + w_eta * eta_bucket
//         + w_product * product + w_trend * trend + jitter
//
// Relevances come from max-normalized profile dimensions built once per
// call, trend from the session tracker, and jitter from the deterministic
// per-item mixer. One coin flip per call decides exploration, which both
// boosts the trend weight and triggers the injection pass after sorting.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::models::{Product, ScoredCandidate};
use crate::services::profile::{NormalizedDimension, PreferenceProfile, SignalDimension};
use crate::services::trending::TrendTracker;
use crate::utils::Bucketer;

use super::exploration::ExplorationPolicy;
use super::jitter::jitter;

/// Scale applied to the unit-range jitter before it joins the score.
pub const DEFAULT_JITTER_MAGNITUDE: f64 = 0.08;

/// Per-dimension weights of the scoring sum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalWeights {
    pub category: f64,
    pub store: f64,
    pub gender: f64,
    pub size: f64,
    pub price_bucket: f64,
    pub eta_bucket: f64,
    pub product: f64,
    pub trend: f64,
    /// Trend weight used instead of `trend` on exploring calls.
    pub trend_exploring: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            category: 1.00,
            store: 0.65,
            gender: 0.45,
            size: 0.35,
            price_bucket: 0.30,
            eta_bucket: 0.25,
            product: 0.20,
            trend: 0.15,
            trend_exploring: 0.33,
        }
    }
}

/// Normalized lookup keys derived from one candidate, matching the
/// canonical form under which interactions were recorded.
struct SignalKeys {
    category: String,
    store: String,
    gender: String,
    price_bucket: String,
    eta_bucket: String,
    product: String,
}

impl SignalKeys {
    fn derive(product: &Product, bucketer: &dyn Bucketer) -> Self {
        let gender = product
            .gender
            .map(|gender| gender.as_key().to_string())
            .unwrap_or_default();
        let price_bucket = product
            .price
            .map(|price| bucketer.price_bucket(price))
            .unwrap_or_default();
        let eta_bucket = product
            .eta_text
            .as_deref()
            .map(|eta| bucketer.eta_bucket(eta))
            .unwrap_or_default();

        Self {
            category: SignalDimension::Category.normalize_key(product.primary_category()),
            store: SignalDimension::Store.normalize_key(&product.store_name),
            gender: SignalDimension::Gender.normalize_key(&gender),
            price_bucket: SignalDimension::PriceBucket.normalize_key(&price_bucket),
            eta_bucket: SignalDimension::EtaBucket.normalize_key(&eta_bucket),
            product: SignalDimension::Product.normalize_key(&product.id.to_string()),
        }
    }
}

/// Personalized candidate ranker.
pub struct RankingEngine {
    weights: SignalWeights,
    exploration: ExplorationPolicy,
    jitter_magnitude: f64,
}

impl RankingEngine {
    pub fn new() -> Self {
        Self {
            weights: SignalWeights::default(),
            exploration: ExplorationPolicy::default(),
            jitter_magnitude: DEFAULT_JITTER_MAGNITUDE,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new()
            .with_weights(config.weights.clone())
            .with_exploration_rate(config.exploration_rate)
            .with_jitter_magnitude(config.jitter_magnitude)
    }

    pub fn with_weights(mut self, weights: SignalWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_exploration_rate(mut self, rate: f64) -> Self {
        self.exploration = ExplorationPolicy::new(rate);
        self
    }

    /// Override the jitter scale. Negative values are ignored.
    pub fn with_jitter_magnitude(mut self, magnitude: f64) -> Self {
        if magnitude >= 0.0 {
            self.jitter_magnitude = magnitude;
        }
        self
    }

    /// Reorder `candidates` by personalized score, best first.
    ///
    /// The same candidates, profile, trend state and session seed always
    /// produce the same order on non-exploring calls; `rng` only decides
    /// the exploration coin flip and injection sources.
    pub fn rank<R: Rng + ?Sized>(
        &self,
        candidates: Vec<Product>,
        profile: &PreferenceProfile,
        trend: &TrendTracker,
        bucketer: &dyn Bucketer,
        session_seed: u32,
        rng: &mut R,
    ) -> Vec<Product> {
        if candidates.is_empty() {
            return candidates;
        }

        let exploring = self.exploration.should_explore(rng);
        let trend_weight = if exploring {
            self.weights.trend_exploring
        } else {
            self.weights.trend
        };

        let category_view = NormalizedDimension::new(profile.dimension(SignalDimension::Category));
        let store_view = NormalizedDimension::new(profile.dimension(SignalDimension::Store));
        let gender_view = NormalizedDimension::new(profile.dimension(SignalDimension::Gender));
        let price_view = NormalizedDimension::new(profile.dimension(SignalDimension::PriceBucket));
        let eta_view = NormalizedDimension::new(profile.dimension(SignalDimension::EtaBucket));
        let product_view = NormalizedDimension::new(profile.dimension(SignalDimension::Product));

        let mut scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .map(|product| {
                let keys = SignalKeys::derive(&product, bucketer);
                let trend_relevance = trend.trend_score(product.id, product.remote_view_count);
                let jitter_value = jitter(product.id, session_seed) * self.jitter_magnitude;
                // Size affinity is accumulated on the profile but deliberately
                // contributes nothing to the score for now.
                let size_relevance = 0.0;

                let score = self.weights.category * category_view.relevance(&keys.category)
                    + self.weights.store * store_view.relevance(&keys.store)
                    + self.weights.gender * gender_view.relevance(&keys.gender)
                    + self.weights.size * size_relevance
                    + self.weights.price_bucket * price_view.relevance(&keys.price_bucket)
                    + self.weights.eta_bucket * eta_view.relevance(&keys.eta_bucket)
                    + self.weights.product * product_view.relevance(&keys.product)
                    + trend_weight * trend_relevance
                    + jitter_value;

                debug!(
                    product_id = product.id,
                    score, trend_relevance, "Candidate scored"
                );

                ScoredCandidate { product, score }
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        let mut ranked: Vec<Product> = scored
            .into_iter()
            .map(|candidate| candidate.product)
            .collect();

        if exploring {
            self.exploration.inject(&mut ranked, rng);
        }

        info!(
            candidate_count = ranked.len(),
            exploring, "Ranking completed"
        );
        ranked
    }
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::new()
    }
}
