//! Main Mastermind solver interface

use super::space::CandidateSpace;
use super::strategy::Strategy;
use crate::core::{Combination, EngineError, Feedback, Result};
use rayon::prelude::*;
use tracing::debug;

/// Hint solver
///
/// Coordinates the solving process using a given strategy.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    space: &'a CandidateSpace,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver over an enumerated candidate space
    pub const fn new(strategy: S, space: &'a CandidateSpace) -> Self {
        Self { strategy, space }
    }

    /// Pegs per combination in this solver's space
    #[must_use]
    pub const fn length(&self) -> usize {
        self.space.length()
    }

    /// Get the next guess given previous guesses and their feedback
    ///
    /// Returns the strategy's opening on an empty history when it has one.
    /// Returns `Ok(None)` if no combination is consistent with the history.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if a guess in the history does not have
    /// [`Solver::length`] pegs.
    pub fn next_guess(&self, history: &[(Combination, Feedback)]) -> Result<Option<Combination>> {
        if history.is_empty()
            && let Some(opening) = self.strategy.opening(self.length())
        {
            return Ok(Some(opening));
        }

        let candidates = self.filter_candidates(history)?;

        match candidates.len() {
            0 => Ok(None),
            // If only one candidate remains, just guess it
            1 => Ok(Some(candidates[0].clone())),
            _ => Ok(self.strategy.select_guess(&candidates)?.cloned()),
        }
    }

    /// Filter the space to combinations consistent with the history
    ///
    /// A candidate survives if, taken as the secret, it would have produced
    /// the observed feedback for every past guess.
    fn filter_candidates(&self, history: &[(Combination, Feedback)]) -> Result<Vec<&'a Combination>> {
        if let Some((guess, _)) = history.iter().find(|(guess, _)| guess.len() != self.length()) {
            return Err(EngineError::LengthMismatch {
                secret: self.length(),
                guess: guess.len(),
            });
        }

        let candidates: Vec<&'a Combination> = self
            .space
            .combinations()
            .par_iter()
            .filter(|&candidate| {
                history.iter().all(|(guess, observed)| {
                    Feedback::calculate(candidate, guess).is_ok_and(|fb| fb == *observed)
                })
            })
            .collect();

        debug!(
            turns = history.len(),
            remaining = candidates.len(),
            "filtered candidates"
        );
        Ok(candidates)
    }

    /// Count how many candidates remain given the history
    ///
    /// # Errors
    /// Returns `LengthMismatch` for a history guess of the wrong length.
    pub fn count_candidates(&self, history: &[(Combination, Feedback)]) -> Result<usize> {
        Ok(self.filter_candidates(history)?.len())
    }

    /// Get the current candidates
    ///
    /// # Errors
    /// Returns `LengthMismatch` for a history guess of the wrong length.
    pub fn get_candidates(&self, history: &[(Combination, Feedback)]) -> Result<Vec<&'a Combination>> {
        self.filter_candidates(history)
    }
}
