use serde::{Deserialize, Serialize};
use std::env;

use crate::services::ranking::{SignalWeights, DEFAULT_EXPLORATION_RATE, DEFAULT_JITTER_MAGNITUDE};
use crate::services::trending::DEFAULT_REMOTE_SATURATION;

/// Days for an untouched affinity weight to halve.
pub const DEFAULT_HALF_LIFE_DAYS: f64 = 14.0;

/// Tunable knobs of the engine. Signal weights ship as code defaults and
/// are only overridden programmatically; the scalar knobs can also come
/// from the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub exploration_rate: f64,
    pub jitter_magnitude: f64,
    pub half_life_days: f64,
    pub trend_saturation: f64,
    pub weights: SignalWeights,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            exploration_rate: env::var("RANKING_EXPLORATION_RATE")
                .unwrap_or_else(|_| DEFAULT_EXPLORATION_RATE.to_string())
                .parse()
                .expect("RANKING_EXPLORATION_RATE must be a valid f64"),
            jitter_magnitude: env::var("RANKING_JITTER_MAGNITUDE")
                .unwrap_or_else(|_| DEFAULT_JITTER_MAGNITUDE.to_string())
                .parse()
                .expect("RANKING_JITTER_MAGNITUDE must be a valid f64"),
            half_life_days: env::var("RANKING_HALF_LIFE_DAYS")
                .unwrap_or_else(|_| DEFAULT_HALF_LIFE_DAYS.to_string())
                .parse()
                .expect("RANKING_HALF_LIFE_DAYS must be a valid f64"),
            trend_saturation: env::var("RANKING_TREND_SATURATION")
                .unwrap_or_else(|_| DEFAULT_REMOTE_SATURATION.to_string())
                .parse()
                .expect("RANKING_TREND_SATURATION must be a valid f64"),
            weights: SignalWeights::default(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            exploration_rate: DEFAULT_EXPLORATION_RATE,
            jitter_magnitude: DEFAULT_JITTER_MAGNITUDE,
            half_life_days: DEFAULT_HALF_LIFE_DAYS,
            trend_saturation: DEFAULT_REMOTE_SATURATION,
            weights: SignalWeights::default(),
        }
    }
}
