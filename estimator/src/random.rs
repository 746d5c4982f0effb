//! Random draws
//!
//! The rules never touch `rand` directly; they ask a [`RandomSource`] so
//! tests can script the draws.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Uniform integer in `0..upper`. `upper` is always at least 1.
    fn next_below(&mut self, upper: u32) -> u32;

    /// Uniform float in `[0, 1)`
    fn next_unit(&mut self) -> f64;
}

/// Adapter from any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_below(&mut self, upper: u32) -> u32 {
        self.rng.gen_range(0..upper.max(1))
    }

    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of draws, then falls back to zero
///
/// Integer draws are reduced modulo the requested bound so a script can
/// never push a result out of range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    integers: VecDeque<u32>,
    units: VecDeque<f64>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_integers(mut self, draws: impl IntoIterator<Item = u32>) -> Self {
        self.integers.extend(draws);
        self
    }

    pub fn with_units(mut self, draws: impl IntoIterator<Item = f64>) -> Self {
        self.units.extend(draws);
        self
    }

    /// Draws not yet consumed, integers then units
    pub fn remaining(&self) -> (usize, usize) {
        (self.integers.len(), self.units.len())
    }
}

impl RandomSource for ScriptedSource {
    fn next_below(&mut self, upper: u32) -> u32 {
        self.integers.pop_front().unwrap_or(0) % upper.max(1)
    }

    fn next_unit(&mut self) -> f64 {
        match self.units.pop_front() {
            Some(unit) if unit.is_finite() => unit.clamp(0.0, 1.0 - f64::EPSILON),
            _ => 0.0,
        }
    }
}
