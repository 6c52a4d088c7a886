//! Randomness source used by the engine, the deciders and the networks.
//!
//! Every random draw in the simulation goes through [`Entropy`], so a test can
//! swap in a scripted source and assert exact tie-break outcomes. Any
//! [`rand::RngCore`] is an `Entropy` already.

use rand::{Rng, RngCore};

/// A source of uniform floats in `[0, 1)` plus the helpers derived from it.
pub trait Entropy {
    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform float in `[-scale, scale)`.
    fn symmetric(&mut self, scale: f64) -> f64 {
        (self.unit() - 0.5) * 2.0 * scale
    }

    /// Uniform integer in `[min, max]`, both ends included.
    fn range_inclusive(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        let span = (max - min + 1) as f64;
        let drawn = (self.unit() * span).floor() as i64 + min;
        drawn.min(max)
    }

    /// Uniform index into a sequence of `len` elements; `None` when empty.
    fn index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.range_inclusive(0, len as i64 - 1) as usize)
    }

    /// Uniformly picks one element of `items`.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        self.index(items.len()).map(|i| &items[i])
    }

    /// Returns `first` or `second` with equal probability.
    fn coin_flip<T>(&mut self, first: T, second: T) -> T {
        if self.unit() < 0.5 { first } else { second }
    }
}

impl<R: RngCore> Entropy for R {
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}
