//! Fast PRNG for trial simulation. Uses SplitMix64 for throughput and good statistical quality.
//! Deterministic: same seed produces the same sequence. Not cryptographically secure.
//!
//! Every trial gets its own generator derived from the run's base seed and the trial index,
//! so trials never share mutable random state and parallel runs reproduce sequential ones.

use crate::simulation::error::SimulationError;

const SPLITMIX64_GOLDEN: u64 = 0x9e3779b97f4a7c15;
const SPLITMIX64_M1: u64 = 0xbf58476d1ce4e5b9;
const SPLITMIX64_M2: u64 = 0x94d049bb133111eb;

#[derive(Debug, Clone, Copy)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generator for one trial. Streams for different trial indices are decorrelated by
    /// running the combined seed through one SplitMix64 output step.
    pub fn for_trial(base_seed: u64, trial_index: u64) -> Self {
        let mut mixer = Self::new(base_seed ^ trial_index.wrapping_mul(SPLITMIX64_M1));
        Self::new(mixer.next_u64())
    }

    /// Draws a base seed from the operating system's entropy source.
    pub fn entropy_seed() -> Result<u64, SimulationError> {
        let mut bytes = [0u8; 8];
        getrandom::getrandom(&mut bytes).map_err(SimulationError::Entropy)?;
        Ok(u64::from_le_bytes(bytes))
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(SPLITMIX64_GOLDEN);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(SPLITMIX64_M1);
        z = (z ^ (z >> 27)).wrapping_mul(SPLITMIX64_M2);
        z ^ (z >> 31)
    }

    /// Uniform integer in `[0, bound)` (Lemire's multiply-and-reject, no modulo bias).
    /// `bound` must be non-zero.
    #[inline]
    pub fn next_below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "next_below requires a non-zero bound");
        let bound = bound as u64;
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let wide = u128::from(self.next_u64()) * u128::from(bound);
            if (wide as u64) >= threshold {
                return (wide >> 64) as usize;
            }
        }
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for index in (1..items.len()).rev() {
            let swap_index = self.next_below(index + 1);
            items.swap(index, swap_index);
        }
    }
}
