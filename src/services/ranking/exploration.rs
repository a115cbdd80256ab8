// ============================================
// Exploration Policy
// ============================================
//
// Epsilon-greedy reshuffle applied after scoring:
//
//   1. One coin flip per ranking call decides whether to explore at all.
//   2. When exploring, up to min(6, n / 8) items are pulled from deeper
//      in the list (never past position 28) and injected into alternating
//      slots 4, 6, 8, ...
//
// The top four positions are never displaced, so the strongest
// personalized picks always survive an exploring call.

use rand::Rng;

/// Fraction of ranking calls that explore.
pub const DEFAULT_EXPLORATION_RATE: f64 = 0.08;

/// Positions at the head of the list that injection never touches.
const PROTECTED_HEAD: usize = 4;

/// Lists at or below this length are never reshuffled.
const MIN_LIST_LEN: usize = 8;

/// Upper bound on injected items per exploring call.
const MAX_INJECTIONS: usize = 6;

/// Injection sources are drawn from within the first this-many positions.
const SOURCE_WINDOW: usize = 28;

#[derive(Debug, Clone, Copy)]
pub struct ExplorationPolicy {
    rate: f64,
}

impl ExplorationPolicy {
    pub fn new(rate: f64) -> Self {
        Self {
            rate: rate.clamp(0.0, 1.0),
        }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Flip the per-call exploration coin. Draws exactly once per call so
    /// the caller's RNG stream advances identically at any rate.
    pub fn should_explore<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        rng.gen::<f64>() < self.rate
    }

    /// Pull lower-ranked items into alternating slots behind the protected
    /// head. Short lists are left untouched.
    pub fn inject<T, R: Rng + ?Sized>(&self, ranked: &mut Vec<T>, rng: &mut R) {
        let n = ranked.len();
        if n <= MIN_LIST_LEN {
            return;
        }

        let injections = (n / MIN_LIST_LEN).min(MAX_INJECTIONS);
        let window = n.min(SOURCE_WINDOW);

        let mut target = PROTECTED_HEAD;
        for _ in 0..injections {
            if target + 1 >= window {
                break;
            }
            let source = rng.gen_range(target + 1..window);
            let item = ranked.remove(source);
            ranked.insert(target, item);
            target += 2;
        }
    }
}

impl Default for ExplorationPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_EXPLORATION_RATE)
    }
}
