//! Game session state
//!
//! A `Game` owns one immutable secret and the ordered list of moves made
//! against it. Turn numbers start at 1 and increase by one per move.

use super::rules::{MAX_TURNS, calculate_score, generate_solution};
use crate::core::{Combination, Difficulty, EngineError, Feedback, Result};
use rand::Rng;
use std::fmt;
use tracing::{debug, info};

/// Outcome state of a game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Check if no further guesses are accepted
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in_progress",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// One recorded guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    turn_number: u32,
    guess: Combination,
    feedback: Feedback,
}

impl Move {
    #[must_use]
    pub const fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub const fn guess(&self) -> &Combination {
        &self.guess
    }

    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }
}

/// A single Mastermind game
#[derive(Debug, Clone)]
pub struct Game {
    difficulty: Difficulty,
    secret: Combination,
    max_turns: u32,
    moves: Vec<Move>,
    status: GameStatus,
    score: Option<u32>,
}

impl Game {
    /// Start a game against a known secret
    ///
    /// # Errors
    /// Returns `SecretLength` if the secret length does not match the tier,
    /// and `InvalidTurn` if `max_turns` is 0.
    pub fn new(difficulty: Difficulty, secret: Combination, max_turns: u32) -> Result<Self> {
        if secret.len() != difficulty.length() {
            return Err(EngineError::SecretLength {
                difficulty,
                expected: difficulty.length(),
                actual: secret.len(),
            });
        }
        if max_turns == 0 {
            return Err(EngineError::InvalidTurn { turn: 1, max_turns });
        }

        Ok(Self {
            difficulty,
            secret,
            max_turns,
            moves: Vec::new(),
            status: GameStatus::InProgress,
            score: None,
        })
    }

    /// Start a game with a freshly generated secret and the standard turn limit
    pub fn random<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Self {
        Self {
            difficulty,
            secret: generate_solution(difficulty, rng),
            max_turns: MAX_TURNS,
            moves: Vec::new(),
            status: GameStatus::InProgress,
            score: None,
        }
    }

    /// Override the turn limit before the first guess
    ///
    /// # Errors
    /// Returns `InvalidTurn` if `max_turns` is 0 or a guess was already made.
    pub fn with_max_turns(mut self, max_turns: u32) -> Result<Self> {
        if max_turns == 0 || !self.moves.is_empty() {
            return Err(EngineError::InvalidTurn {
                turn: self.next_turn(),
                max_turns,
            });
        }
        self.max_turns = max_turns;
        Ok(self)
    }

    /// Submit a guess for the next turn
    ///
    /// # Errors
    /// - `GameOver` once the game is won or lost
    /// - `LengthMismatch` if the guess length differs from the secret
    pub fn guess(&mut self, guess: Combination) -> Result<&Move> {
        if self.status.is_over() {
            return Err(EngineError::GameOver);
        }

        let feedback = Feedback::calculate(&self.secret, &guess)?;
        let turn_number = self.next_turn();

        debug!(turn = turn_number, %guess, %feedback, "scored guess");

        if feedback.is_win(self.secret.len()) {
            let score = calculate_score(self.difficulty, turn_number, self.max_turns)?;
            self.status = GameStatus::Won;
            self.score = Some(score);
            info!(turn = turn_number, score, "game won");
        } else if turn_number >= self.max_turns {
            self.status = GameStatus::Lost;
            info!(turn = turn_number, "game lost");
        }

        self.moves.push(Move {
            turn_number,
            guess,
            feedback,
        });
        Ok(&self.moves[self.moves.len() - 1])
    }

    /// Turn number the next guess will receive
    #[must_use]
    pub fn next_turn(&self) -> u32 {
        self.moves.len() as u32 + 1
    }

    /// Guesses left before the game is lost
    #[must_use]
    pub fn turns_remaining(&self) -> u32 {
        if self.status.is_over() {
            0
        } else {
            self.max_turns - self.moves.len() as u32
        }
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn max_turns(&self) -> u32 {
        self.max_turns
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Final score, set only when the game is won
    #[must_use]
    pub const fn score(&self) -> Option<u32> {
        self.score
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The secret combination
    ///
    /// Callers should only reveal it to the player once the game is over.
    #[must_use]
    pub const fn secret(&self) -> &Combination {
        &self.secret
    }

    /// Guess/feedback pairs in turn order, as consumed by the solver
    #[must_use]
    pub fn history(&self) -> Vec<(Combination, Feedback)> {
        self.moves
            .iter()
            .map(|m| (m.guess.clone(), m.feedback))
            .collect()
    }
}
