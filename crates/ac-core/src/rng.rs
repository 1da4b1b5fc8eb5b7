//! Deterministic randomness for the simulation.
//!
//! # Determinism strategy
//!
//! Behaviors never touch an ambient generator.  Every random draw goes through
//! a [`RandomSource`] handed in by the caller, so tests can substitute a
//! scripted source and runs are reproducible from a single seed.
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! Adding agents at the end of the list does not disturb the seeds of
//! existing agents.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RandomSource ─────────────────────────────────────────────────────────────

/// A source of uniform draws, object-safe so it can be passed as
/// `&mut dyn RandomSource`.
///
/// Only [`next_unit`][Self::next_unit] is required; the other methods derive
/// from it so a scripted test source controls every outcome.
pub trait RandomSource {
    /// A uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Bernoulli trial: `true` when the next draw is below `p`.
    fn gen_bool(&mut self, p: f64) -> bool {
        self.next_unit() < p.clamp(0.0, 1.0)
    }

    /// Uniform `f32` in `[lo, hi)`.  Returns `lo` for an empty range.
    fn gen_range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        if hi <= lo {
            return lo;
        }
        let v = lo + (hi - lo) * self.next_unit() as f32;
        v.min(hi).max(lo)
    }

    /// Uniform integer in `[lo, hi]` (inclusive on both ends).
    fn gen_int_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (hi as i64 - lo as i64 + 1) as f64;
        let offset = (self.next_unit() * span).floor() as i64;
        (lo as i64 + offset).min(hi as i64) as i32
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
///
/// Create one per agent at simulation init and keep it alongside the agent
/// list.  Agents never share RNG state, so the draw sequence of one agent is
/// independent of how many draws its neighbours made.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for AgentRng {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations (object placement at world
/// construction and similar one-off draws).
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}
