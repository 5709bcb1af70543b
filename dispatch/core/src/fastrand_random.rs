// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Random;
use std::sync::{Mutex, PoisonError};

/// Thread-local fastrand generator, no contention between workers.
#[derive(Clone, Copy, Debug, Default)]
pub struct FastrandRandom;

impl Random for FastrandRandom {
    fn usize(&self, range: std::ops::Range<usize>) -> usize {
        fastrand::usize(range)
    }
    fn u32(&self, range: std::ops::Range<u32>) -> u32 {
        fastrand::u32(range)
    }
    fn i64(&self, range: std::ops::Range<i64>) -> i64 {
        fastrand::i64(range)
    }
}

/// Deterministic generator for tests. All callers share one locked sequence.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<fastrand::Rng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut fastrand::Rng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}

impl Random for SeededRandom {
    fn usize(&self, range: std::ops::Range<usize>) -> usize {
        self.with_rng(|rng| rng.usize(range))
    }
    fn u32(&self, range: std::ops::Range<u32>) -> u32 {
        self.with_rng(|rng| rng.u32(range))
    }
    fn i64(&self, range: std::ops::Range<i64>) -> i64 {
        self.with_rng(|rng| rng.i64(range))
    }
}
