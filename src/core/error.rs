//! Error type for engine operations
//!
//! Every variant is a caller contract violation detected synchronously.
//! None of them are retryable.

use super::difficulty::Difficulty;
use thiserror::Error;

/// Errors produced by the scoring engine and game sessions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unknown difficulty '{0}' (expected easy, medium, hard or evil)")]
    UnknownDifficulty(String),
    #[error("Guess has {guess} pegs but the secret has {secret}")]
    LengthMismatch { secret: usize, guess: usize },
    #[error("A {difficulty} secret needs {expected} pegs, got {actual}")]
    SecretLength {
        difficulty: Difficulty,
        expected: usize,
        actual: usize,
    },
    #[error("Unknown peg color '{0}'")]
    InvalidSymbol(String),
    #[error("Turn {turn} cannot be scored (valid turns are 1..={max_turns})")]
    InvalidTurn { turn: u32, max_turns: u32 },
    #[error("Combination must contain at least one peg")]
    EmptyCombination,
    #[error("Combination has {0} pegs, more than the supported maximum")]
    TooManyPegs(usize),
    #[error("Game already ended, no new guesses are accepted")]
    GameOver,
}

pub type Result<T> = std::result::Result<T, EngineError>;
