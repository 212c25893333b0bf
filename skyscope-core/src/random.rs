//! Injectable randomness.
//!
//! Synthetic cities, feels-like jitter and the simulated current location all
//! draw from a [`RandomSource`], so callers can swap the thread RNG for a
//! seeded one and get reproducible observations.

use parking_lot::Mutex;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::fmt::Debug;

pub trait RandomSource: Send + Sync + Debug {
    /// Uniform integer in `min..=max`.
    fn range_inclusive(&self, min: i32, max: i32) -> i32;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&self, len: usize) -> usize;
}

/// Production source backed by `rand::thread_rng()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandom {
    fn range_inclusive(&self, min: i32, max: i32) -> i32 {
        rand::thread_rng().gen_range(min..=max)
    }

    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic source seeded from a `u64`.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn range_inclusive(&self, min: i32, max: i32) -> i32 {
        self.rng.lock().gen_range(min..=max)
    }

    fn pick_index(&self, len: usize) -> usize {
        self.rng.lock().gen_range(0..len)
    }
}
