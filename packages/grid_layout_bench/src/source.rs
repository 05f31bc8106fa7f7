//! Where the write phase gets its cell values from.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{ALIVE, DEAD};

/// Produces the value of the next cell the write phase stores.
pub trait CellSource {
    /// Returns [`ALIVE`] or [`DEAD`].
    fn next_cell(&mut self) -> u8;
}

/// Draws each cell independently: uniform in `[0, 1)`, alive if below the fill probability.
#[derive(Debug)]
pub struct RandomCells<R = SmallRng> {
    rng: R,
    fill_probability: f64,
}

impl RandomCells<SmallRng> {
    /// A reproducible source: the same seed yields the same cell sequence.
    #[must_use]
    pub fn seeded(seed: u64, fill_probability: f64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed), fill_probability)
    }

    /// A source seeded from the thread-local generator.
    #[must_use]
    pub fn from_thread_rng(fill_probability: f64) -> Self {
        Self::with_rng(SmallRng::from_rng(&mut rand::rng()), fill_probability)
    }
}

impl<R: Rng> RandomCells<R> {
    /// Wraps an arbitrary generator.
    ///
    /// # Panics
    ///
    /// Panics if `fill_probability` is not within `[0, 1]`.
    #[must_use]
    pub fn with_rng(rng: R, fill_probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&fill_probability),
            "fill probability {fill_probability} is outside [0, 1]"
        );

        Self {
            rng,
            fill_probability,
        }
    }

    /// Probability that any given cell is alive.
    #[must_use]
    pub fn fill_probability(&self) -> f64 {
        self.fill_probability
    }
}

impl<R: Rng> CellSource for RandomCells<R> {
    #[inline]
    fn next_cell(&mut self) -> u8 {
        if self.rng.random::<f64>() < self.fill_probability {
            ALIVE
        } else {
            DEAD
        }
    }
}

/// Replays a fixed pattern, starting over when it runs out.
///
/// Used to feed several grids the exact same field.
#[derive(Clone, Debug)]
pub struct FixedCells {
    pattern: Vec<u8>,
    position: usize,
}

impl FixedCells {
    /// Creates a source that cycles through `pattern`.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is empty or contains anything other than 0 and 1.
    #[must_use]
    pub fn new(pattern: Vec<u8>) -> Self {
        assert!(!pattern.is_empty(), "a fixed cell pattern cannot be empty");
        assert!(
            pattern.iter().all(|&cell| cell == ALIVE || cell == DEAD),
            "a fixed cell pattern may only contain 0 and 1"
        );

        Self {
            pattern,
            position: 0,
        }
    }

    /// Rewinds to the start of the pattern.
    pub fn reset(&mut self) {
        self.position = 0;
    }
}

impl CellSource for FixedCells {
    fn next_cell(&mut self) -> u8 {
        let cell = *self
            .pattern
            .get(self.position)
            .expect("position is kept within the pattern");

        self.position = self
            .position
            .checked_add(1)
            .expect("position is kept within the pattern");
        if self.position == self.pattern.len() {
            self.position = 0;
        }

        cell
    }
}
