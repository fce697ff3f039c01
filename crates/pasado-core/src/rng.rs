//! Injectable randomness seam.
//!
//! Selection jitter, the shortlist pick, and the contrast-mode tense
//! choice all draw from a [`RandomSource`] so tests can script exact
//! values instead of asserting against a live RNG.

use rand::Rng;

/// A source of uniform random values in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Production source backed by the thread-local RNG.
#[derive(Debug, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn next_f64(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Deterministic source that cycles through a fixed sequence.
///
/// Only useful in tests; panics if constructed empty.
#[derive(Debug)]
pub struct ScriptedSource {
    values: Vec<f64>,
    index: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "ScriptedSource needs at least one value");
        Self { values, index: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn next_f64(&mut self) -> f64 {
        let v = self.values[self.index % self.values.len()];
        self.index += 1;
        v
    }
}
