//! RNG module - seeded LCG and the bag-based shape sequencer.
//!
//! The bag model guarantees fair distribution: whenever the bag empties it is
//! refilled with a shuffled permutation of all catalog indices, so within any
//! run of seven draws from a refill boundary every shape appears exactly
//! once. Across a refill boundary a shape may repeat back to back, but never
//! three times in a row.
//!
//! Deterministic under seed; no external RNG dependency.

use arrayvec::ArrayVec;

use crate::catalog::SHAPE_COUNT;

/// Simple LCG (Numerical Recipes constants). Good enough for shuffling a
/// seven-element bag and for demo autoplay decisions.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed (0 is remapped to avoid the
    /// all-zero fixed point).
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in [0, max).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// One-in-a-hundred style check: true on `percent`% of calls.
    pub fn chance_percent(&mut self, percent: u32) -> bool {
        self.next_range(100) < percent
    }
}

/// Fair shape sequencer over the catalog.
#[derive(Debug, Clone)]
pub struct ShapeBag {
    bag: ArrayVec<u8, SHAPE_COUNT>,
    rng: SimpleRng,
}

impl ShapeBag {
    /// An empty bag that refills lazily on the first draw.
    pub fn new(seed: u32) -> Self {
        Self {
            bag: ArrayVec::new(),
            rng: SimpleRng::new(seed),
        }
    }

    fn refill(&mut self) {
        self.bag.clear();
        for index in 0..SHAPE_COUNT as u8 {
            self.bag.push(index);
        }
        self.rng.shuffle(&mut self.bag);
    }

    /// Draw the next shape index, refilling with a fresh permutation when
    /// the bag is exhausted. Never fails: the catalog is non-empty.
    pub fn draw(&mut self) -> usize {
        if self.bag.is_empty() {
            self.refill();
        }
        // Non-empty by the refill above.
        self.bag.pop().unwrap_or(0) as usize
    }

    /// Shape indices remaining before the next refill.
    pub fn remaining(&self) -> usize {
        self.bag.len()
    }
}
