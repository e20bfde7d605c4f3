//! # Car Selection Strategy
//!
//! Strategies for drawing a car out of a category's candidate list.
//!
//! This module provides the [`CarSelector`] trait and implementations:
//! - [`UniformRandomSelector`]: every candidate equally likely
//! - [`FixedPositionSelector`]: always the same position, for tests and demos

use std::fmt;

/// Trait for car selection strategies.
///
/// A selector only chooses a position; the rental service turns it into a
/// car identifier and checks the bounds.
pub trait CarSelector: Send + Sync + fmt::Debug {
    /// Picks a position in `[0, len)`.
    ///
    /// Callers never pass `len == 0`.
    fn pick(&self, len: usize) -> usize;

    /// Returns the name of this selection strategy.
    fn name(&self) -> &'static str;
}

/// Uniform random selection.
///
/// Draws from the calling thread's generator, so concurrent rentals never
/// contend on, or correlate through, a shared RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformRandomSelector;

impl UniformRandomSelector {
    /// Creates a new uniform random selector.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CarSelector for UniformRandomSelector {
    fn pick(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        rand::random_range(0..len)
    }

    fn name(&self) -> &'static str {
        "UniformRandom"
    }
}

/// Deterministic selection of a fixed position.
///
/// The position is returned as configured, even past the end of the
/// candidate list; the rental service rejects such draws.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPositionSelector {
    position: usize,
}

impl FixedPositionSelector {
    /// Creates a selector that always picks `position`.
    #[must_use]
    pub fn new(position: usize) -> Self {
        Self { position }
    }

    /// Creates a selector that always picks the first candidate.
    #[must_use]
    pub fn first() -> Self {
        Self::new(0)
    }
}

impl CarSelector for FixedPositionSelector {
    fn pick(&self, _len: usize) -> usize {
        self.position
    }

    fn name(&self) -> &'static str {
        "FixedPosition"
    }
}
