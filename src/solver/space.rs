//! Enumeration of every possible secret for a combination length

use crate::core::{Combination, Difficulty, EngineError, Result};
use rayon::prelude::*;

/// All combinations of one length, in index order
#[derive(Debug, Clone)]
pub struct CandidateSpace {
    length: usize,
    combinations: Vec<Combination>,
}

impl CandidateSpace {
    /// Enumerate all `8^length` combinations
    ///
    /// # Errors
    /// Returns `EmptyCombination` for length 0 and `TooManyPegs` above
    /// [`Combination::MAX_LENGTH`].
    pub fn new(length: usize) -> Result<Self> {
        if length == 0 {
            return Err(EngineError::EmptyCombination);
        }
        if length > Combination::MAX_LENGTH {
            return Err(EngineError::TooManyPegs(length));
        }
        Ok(Self::build(length))
    }

    /// Enumerate the space for a difficulty tier
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self::build(difficulty.length())
    }

    fn build(length: usize) -> Self {
        let combinations = (0..Combination::space_size(length))
            .into_par_iter()
            .filter_map(|index| Combination::from_index(index, length))
            .collect();

        Self {
            length,
            combinations,
        }
    }

    /// Pegs per combination
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }
}
