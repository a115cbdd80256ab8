// ============================================
// Deterministic Jitter
// ============================================
//
// Tiny per-item score perturbation derived from (item id, session seed):
//
//   state = (id as u32) ^ seed
//   state = xorshift32(state)        // shifts 13, 17, 5
//   jitter = state / (2^32 - 1)      // uniform-ish in [0, 1]
//
// Same id and seed always produce the same value, so a ranking call is
// reproducible within a session while different sessions see slightly
// different orders among near-tied items.

/// Divisor mapping the mixed 32-bit state onto [0, 1].
const MIX_RANGE: f64 = u32::MAX as f64;

fn mix(mut state: u32) -> u32 {
    state ^= state << 13;
    state ^= state >> 17;
    state ^= state << 5;
    state
}

/// Deterministic per-item jitter in [0, 1] before scaling.
pub fn jitter(item_id: u64, session_seed: u32) -> f64 {
    let state = mix(item_id as u32 ^ session_seed);
    state as f64 / MIX_RANGE
}
