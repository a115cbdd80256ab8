pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use config::EngineConfig;
pub use models::{Gender, Product, ScoredCandidate};
pub use services::{
    FilterSelection, InteractionRecorder, PreferenceProfile, RankingEngine, SignalDimension,
    SignalWeights, TrendTracker,
};
pub use utils::{Bucketer, StandardBucketer};
