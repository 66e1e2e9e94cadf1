//! Injectable randomness for source selection.
//!
//! The multiplexer never touches a process-wide generator. It asks a
//! [`DrawSource`] for one uniform integer per pick, so callers choose
//! between a seeded [`rand`] generator ([`RngDraws`]) and a fixed script
//! ([`ScriptedDraws`]) for fully deterministic tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// A source of uniformly distributed draws.
pub trait DrawSource {
    /// Returns an integer uniformly distributed in `[0, bound)`.
    ///
    /// Callers guarantee `bound > 0`.
    fn draw(&mut self, bound: u64) -> u64;
}

impl<D: DrawSource + ?Sized> DrawSource for &mut D {
    fn draw(&mut self, bound: u64) -> u64 {
        (**self).draw(bound)
    }
}

/// Creates a reproducible generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Adapts any [`rand::Rng`] into a [`DrawSource`].
///
/// # Examples
///
/// ```
/// use weighted_mux::random::{create_rng, DrawSource, RngDraws};
///
/// let mut draws = RngDraws::new(create_rng(42));
/// assert!(draws.draw(10) < 10);
/// ```
#[derive(Debug, Clone)]
pub struct RngDraws<R> {
    rng: R,
}

impl<R: Rng> RngDraws<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngDraws<StdRng> {
    /// Seeded [`StdRng`], or a random seed when `seed` is `None`.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(create_rng(seed)),
            None => Self::new(create_rng(rand::random())),
        }
    }
}

impl<R: Rng> DrawSource for RngDraws<R> {
    fn draw(&mut self, bound: u64) -> u64 {
        self.rng.random_range(0..bound)
    }
}

/// Replays a fixed list of draws in order.
///
/// # Panics
///
/// [`draw`](DrawSource::draw) panics when the script is exhausted or when
/// the next scripted value is not below the requested bound.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraws {
    script: VecDeque<u64>,
}

impl ScriptedDraws {
    pub fn new(script: impl IntoIterator<Item = u64>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Number of draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DrawSource for ScriptedDraws {
    fn draw(&mut self, bound: u64) -> u64 {
        let value = self
            .script
            .pop_front()
            .expect("scripted draws exhausted");
        assert!(
            value < bound,
            "scripted draw {value} out of range [0, {bound})"
        );
        value
    }
}
