// ============================================
// Preference Profile
// ============================================
//
// Per-user affinity state across seven signal dimensions. The write path
// bumps weights as evidence of preference arrives; a half-life decay sweep
// fades stale evidence; ranking reads the weights through a per-call
// normalized view so that one runaway dimension cannot swamp the others.
//
// Profiles are caller-owned, one per user/session. There is no global
// instance: hosts load a snapshot at session start, pass the profile into
// every engine call, and save a snapshot at the boundary of their choosing.

pub mod normalizer;
pub mod store;

pub use normalizer::NormalizedDimension;
pub use store::{AffinityEntry, PreferenceProfile, SignalDimension};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Profile snapshot failed: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProfileError>;
