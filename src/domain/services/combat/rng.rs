//! Randomness source for combat resolution
//!
//! Every random decision in a fight (opponent pick, weapon/skill coin flip,
//! skill pick, damage rolls) goes through a single [`RandomSource`] so that
//! callers can seed or script fights.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform integers in a half-open range
pub trait RandomSource: Send {
    /// Draw a value in `[0, bound)`. A bound of zero or less always yields 0.
    fn next_below(&mut self, bound: i32) -> i32;

    /// Draw an index into a collection of `len` elements
    fn next_index(&mut self, len: usize) -> usize {
        let bound = i32::try_from(len).unwrap_or(i32::MAX);
        self.next_below(bound) as usize
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_below(&mut self, bound: i32) -> i32 {
        (**self).next_below(bound)
    }
}

/// `rand`-backed source, seeded or from OS entropy
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
    /// The seed used to initialize this source (if deterministic)
    pub seed: Option<u64>,
}

impl StdRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }
}

impl RandomSource for StdRandom {
    fn next_below(&mut self, bound: i32) -> i32 {
        if bound <= 0 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }
}

/// Replays a fixed list of draws, then keeps returning a fallback value
///
/// Each scripted value is reduced modulo the requested bound, so a script
/// never produces an out-of-range draw.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<i32>,
    fallback: i32,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            fallback: 0,
        }
    }

    /// A source whose every draw is 0
    pub fn zeros() -> Self {
        Self::default()
    }

    pub fn with_fallback(mut self, fallback: i32) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_below(&mut self, bound: i32) -> i32 {
        let value = self.values.pop_front().unwrap_or(self.fallback);
        if bound <= 0 {
            return 0;
        }
        value.rem_euclid(bound)
    }
}
