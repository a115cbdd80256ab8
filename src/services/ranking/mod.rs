// ============================================
// Ranking Service
// ============================================
//
// Scoring, deterministic jitter and epsilon-greedy exploration. The
// engine is the entry point; jitter and exploration are exposed for
// hosts that need the primitives directly.

pub mod engine;
pub mod exploration;
pub mod jitter;

pub use engine::{RankingEngine, SignalWeights, DEFAULT_JITTER_MAGNITUDE};
pub use exploration::{ExplorationPolicy, DEFAULT_EXPLORATION_RATE};
pub use jitter::jitter;
