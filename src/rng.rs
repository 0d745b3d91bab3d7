//! Explicitly-threaded random source (DESIGN NOTES §9: "never consult a
//! global"). Every shuffle, pick, or dice roll in the engine takes
//! `&mut RandomSource` rather than reaching for a thread-local RNG.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::element::Element;

/// A seeded, splittable PRNG stream. Two `GameState`s created from the same
/// seed and fed the same actions produce bit-identical results.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Derives an independent child stream by drawing a seed from `self`.
    /// Used when a sub-computation (e.g. a single status's internal
    /// tie-break) needs its own deterministic stream without perturbing
    /// the parent's subsequent draws.
    pub fn split(&mut self) -> RandomSource {
        let seed = self.rng.random::<u64>();
        RandomSource::from_seed(seed)
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Rolls `n` dice, each uniformly one of the seven aurable elements
    /// (never `Omni` — real dice only collapse to `Omni` through explicit
    /// card effects, not the base roll).
    pub fn roll_dice(&mut self, n: u8) -> Vec<Element> {
        (0..n)
            .map(|_| Element::AURABLE[self.rng.random_range(0..Element::AURABLE.len())])
            .collect()
    }

    /// Picks `n` distinct indices out of `len` uniformly at random, used
    /// for random card selection (e.g. redraw replenishment).
    pub fn pick_indices(&mut self, len: usize, n: usize) -> Vec<usize> {
        let mut idx: Vec<usize> = (0..len).collect();
        idx.shuffle(&mut self.rng);
        idx.truncate(n);
        idx
    }

    pub fn gen_range(&mut self, range: std::ops::Range<usize>) -> usize {
        self.rng.random_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_rolls() {
        let mut a = RandomSource::from_seed(42);
        let mut b = RandomSource::from_seed(42);
        assert_eq!(a.roll_dice(8), b.roll_dice(8));
    }

    #[test]
    fn split_streams_are_deterministic_but_distinct_from_parent_continuation() {
        let mut a = RandomSource::from_seed(7);
        let mut child = a.split();
        let child_rolls = child.roll_dice(4);

        let mut b = RandomSource::from_seed(7);
        let mut child_b = b.split();
        assert_eq!(child_rolls, child_b.roll_dice(4));
    }
}
