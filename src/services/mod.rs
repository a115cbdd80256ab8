pub mod interactions;
pub mod profile;
pub mod ranking;
pub mod trending;

pub use interactions::{FilterSelection, InteractionRecorder, InteractionWeights};
pub use profile::{AffinityEntry, PreferenceProfile, ProfileError, SignalDimension};
pub use ranking::{ExplorationPolicy, RankingEngine, SignalWeights};
pub use trending::TrendTracker;
