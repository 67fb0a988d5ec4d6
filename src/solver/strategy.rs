//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::minimax;
use crate::core::{Color, Combination, Result};

/// A strategy for choosing the next guess from the consistent candidates
pub trait Strategy {
    /// Select a guess from `candidates`
    ///
    /// Returns `Ok(None)` only if `candidates` is empty.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the strategy scores candidates of
    /// differing lengths against each other.
    fn select_guess<'a>(&self, candidates: &[&'a Combination]) -> Result<Option<&'a Combination>>;

    /// Fixed first guess for combinations of `length` pegs, if the strategy has one
    fn opening(&self, _length: usize) -> Option<Combination> {
        None
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Fixed opening then minimax (default)
    Adaptive(AdaptiveStrategy),
    /// Lowest-index consistent candidate
    FirstConsistent(FirstConsistentStrategy),
    /// Pure minimax over the consistent candidates
    Minimax(MinimaxStrategy),
    /// Random selection from candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, candidates: &[&'a Combination]) -> Result<Option<&'a Combination>> {
        match self {
            Self::Adaptive(s) => s.select_guess(candidates),
            Self::FirstConsistent(s) => s.select_guess(candidates),
            Self::Minimax(s) => s.select_guess(candidates),
            Self::Random(s) => s.select_guess(candidates),
        }
    }

    fn opening(&self, length: usize) -> Option<Combination> {
        match self {
            Self::Adaptive(s) => s.opening(length),
            Self::FirstConsistent(s) => s.opening(length),
            Self::Minimax(s) => s.opening(length),
            Self::Random(s) => s.opening(length),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "adaptive", "first", "minimax", "random".
    /// Defaults to adaptive if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::with_threshold(name, MinimaxStrategy::DEFAULT_THRESHOLD)
    }

    /// Like [`StrategyType::from_name`] with an explicit minimax candidate limit
    #[must_use]
    pub fn with_threshold(name: &str, minimax_threshold: usize) -> Self {
        match name {
            "first" | "first-consistent" => Self::FirstConsistent(FirstConsistentStrategy),
            "minimax" => Self::Minimax(MinimaxStrategy::new(minimax_threshold)),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Adaptive(AdaptiveStrategy::new(minimax_threshold)),
        }
    }

    /// Short name for display
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Adaptive(_) => "adaptive",
            Self::FirstConsistent(_) => "first",
            Self::Minimax(_) => "minimax",
            Self::Random(_) => "random",
        }
    }
}

/// Always guesses the lowest-index consistent candidate
#[derive(Debug, Clone, Copy)]
pub struct FirstConsistentStrategy;

impl Strategy for FirstConsistentStrategy {
    fn select_guess<'a>(&self, candidates: &[&'a Combination]) -> Result<Option<&'a Combination>> {
        Ok(candidates.first().copied())
    }
}

/// Minimax over the consistent candidates
///
/// Scoring every candidate against every other is quadratic, so above
/// `threshold` candidates it falls back to the first consistent one.
#[derive(Debug, Clone, Copy)]
pub struct MinimaxStrategy {
    pub threshold: usize,
}

impl MinimaxStrategy {
    /// Default candidate limit for the minimax search
    pub const DEFAULT_THRESHOLD: usize = 256;

    #[must_use]
    pub const fn new(threshold: usize) -> Self {
        Self { threshold }
    }
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

impl Strategy for MinimaxStrategy {
    fn select_guess<'a>(&self, candidates: &[&'a Combination]) -> Result<Option<&'a Combination>> {
        if candidates.len() > self.threshold {
            return Ok(candidates.first().copied());
        }
        Ok(minimax::select_best_guess(candidates, candidates)?.map(|(best, _)| best))
    }
}

/// Paired-color opening followed by minimax
///
/// The opening repeats each color twice: red,red,yellow,yellow,...
#[derive(Debug, Clone, Copy, Default)]
pub struct AdaptiveStrategy {
    minimax: MinimaxStrategy,
}

impl AdaptiveStrategy {
    #[must_use]
    pub const fn new(minimax_threshold: usize) -> Self {
        Self {
            minimax: MinimaxStrategy::new(minimax_threshold),
        }
    }

    /// Candidate limit below which minimax is used
    #[must_use]
    pub const fn minimax_threshold(&self) -> usize {
        self.minimax.threshold
    }
}

impl Strategy for AdaptiveStrategy {
    fn select_guess<'a>(&self, candidates: &[&'a Combination]) -> Result<Option<&'a Combination>> {
        self.minimax.select_guess(candidates)
    }

    fn opening(&self, length: usize) -> Option<Combination> {
        let pegs = (0..length)
            .map(|i| Color::from_index((i / 2) % Color::COUNT))
            .collect::<Option<Vec<Color>>>()?;
        Combination::new(pegs).ok()
    }
}

/// Random selection from the consistent candidates
#[derive(Debug, Clone, Copy)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a>(&self, candidates: &[&'a Combination]) -> Result<Option<&'a Combination>> {
        use rand::prelude::IndexedRandom;

        Ok(candidates.choose(&mut rand::rng()).copied())
    }
}
