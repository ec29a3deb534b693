//! RNG oracle for deterministic random number generation.
//!
//! Every random decision in an encounter (enemy policy, target pick, damage
//! variance, evade/flee rolls) is drawn through [`RngOracle`] with a seed
//! derived from the encounter seed and a draw counter. Replaying the same
//! choices with the same seed reproduces the same encounter.
//!
//! [`FixedRng`] and [`SequenceRng`] ignore the seed and return scripted
//! values, which makes individual outcomes easy to pin down.

use std::sync::atomic::{AtomicUsize, Ordering};

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform draw in `[0, 1)`.
    fn uniform(&self, seed: u64) -> f64 {
        f64::from(self.next_u32(seed)) / (f64::from(u32::MAX) + 1.0)
    }

    /// Uniform index in `[0, len)`. Returns 0 for an empty range.
    fn pick_index(&self, seed: u64, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let index = (self.uniform(seed) * len as f64) as usize;
        index.min(len - 1)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR variant: 32-bit output from 64-bit state.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Oracle that answers every draw with the same value.
#[derive(Clone, Copy, Debug)]
pub struct FixedRng(pub f64);

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        to_u32(self.0)
    }

    fn uniform(&self, _seed: u64) -> f64 {
        self.0
    }
}

/// Oracle that replays a scripted list of draws in order, then repeats the last one.
#[derive(Debug)]
pub struct SequenceRng {
    draws: Vec<f64>,
    cursor: AtomicUsize,
}

impl SequenceRng {
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }
}

impl RngOracle for SequenceRng {
    fn next_u32(&self, seed: u64) -> u32 {
        to_u32(self.uniform(seed))
    }

    fn uniform(&self, _seed: u64) -> f64 {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        match self.draws.get(index).or(self.draws.last()) {
            Some(value) => *value,
            None => 0.0,
        }
    }
}

fn to_u32(value: f64) -> u32 {
    (value.clamp(0.0, 1.0) * f64::from(u32::MAX)) as u32
}

/// Compute deterministic seed from encounter state components.
///
/// # Context Values
///
/// Different roll kinds within the same draw use distinct contexts, see
/// [`RollContext`].
pub fn compute_seed(encounter_seed: u64, nonce: u64, actor_id: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style mixing
    let mut hash = encounter_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor_id as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Identifies which decision a random draw feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum RollContext {
    /// Enemy flee-or-attack decision.
    Policy = 0,
    /// Enemy target pick.
    Target = 1,
    /// Damage multiplier.
    Damage = 2,
    /// Evade/flee success roll.
    Escape = 3,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic_and_in_range() {
        let rng = PcgRng;
        for seed in 0..256u64 {
            let a = rng.uniform(compute_seed(42, seed, 1, RollContext::Damage as u32));
            let b = rng.uniform(compute_seed(42, seed, 1, RollContext::Damage as u32));
            assert_eq!(a, b);
            assert!((0.0..1.0).contains(&a));
        }
    }

    #[test]
    fn contexts_produce_distinct_seeds() {
        let policy = compute_seed(7, 3, 2, RollContext::Policy as u32);
        let target = compute_seed(7, 3, 2, RollContext::Target as u32);
        assert_ne!(policy, target);
    }

    #[test]
    fn pick_index_stays_in_bounds() {
        assert_eq!(FixedRng(0.999_999).pick_index(0, 3), 2);
        assert_eq!(FixedRng(0.0).pick_index(0, 3), 0);
        assert_eq!(FixedRng(0.5).pick_index(0, 0), 0);
    }

    #[test]
    fn sequence_replays_then_repeats_last() {
        let rng = SequenceRng::new(vec![0.1, 0.9]);
        assert_eq!(rng.uniform(0), 0.1);
        assert_eq!(rng.uniform(0), 0.9);
        assert_eq!(rng.uniform(0), 0.9);
        assert_eq!(rng.consumed(), 3);
    }
}
