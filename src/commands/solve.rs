//! Secret solving command
//!
//! Lets the solver play a full game against a known secret and records
//! each turn.

use crate::core::{Combination, Difficulty, EngineError, Feedback, Result};
use crate::game::{Game, GameStatus, MAX_TURNS};
use crate::solver::{Solver, Strategy};

/// Configuration for solving a secret
pub struct SolveConfig {
    pub secret: String,
    /// Tier used for scoring when its length matches the secret
    pub difficulty: Difficulty,
    pub max_turns: u32,
}

impl SolveConfig {
    #[must_use]
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            difficulty: Difficulty::default(),
            max_turns: MAX_TURNS,
        }
    }
}

/// Result of solving a secret
pub struct SolveResult {
    pub secret: Combination,
    pub status: GameStatus,
    pub score: Option<u32>,
    pub steps: Vec<GuessStep>,
}

/// A single turn in the solution
pub struct GuessStep {
    pub guess: Combination,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific secret using the given solver
///
/// Scores with `config.difficulty` when it matches the secret's length,
/// otherwise with the tier for that length (four pegs score as `medium`).
///
/// # Errors
///
/// Returns an error if:
/// - The secret does not parse as a combination
/// - Its length does not match any tier or the solver's space
pub fn solve_secret<S: Strategy>(config: SolveConfig, solver: &Solver<S>) -> Result<SolveResult> {
    let secret: Combination = config.secret.parse()?;
    if secret.len() != solver.length() {
        return Err(EngineError::LengthMismatch {
            secret: secret.len(),
            guess: solver.length(),
        });
    }

    let difficulty = if config.difficulty.length() == secret.len() {
        config.difficulty
    } else {
        difficulty_for_length(secret.len())?
    };
    let mut game = Game::new(difficulty, secret.clone(), config.max_turns)?;
    let mut steps: Vec<GuessStep> = Vec::new();

    while !game.status().is_over() {
        let history = game.history();
        let candidates_before = solver.count_candidates(&history)?;

        // Consistent feedback from a real secret always leaves a candidate
        let Some(guess) = solver.next_guess(&history)? else {
            break;
        };

        let feedback = game.guess(guess.clone())?.feedback();
        let candidates_after = solver.count_candidates(&game.history())?;

        steps.push(GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after,
        });
    }

    Ok(SolveResult {
        secret,
        status: game.status(),
        score: game.score(),
        steps,
    })
}

/// Tier matching a combination length
///
/// # Errors
/// Returns `UnknownDifficulty` if no tier uses `length` pegs.
pub fn difficulty_for_length(length: usize) -> Result<Difficulty> {
    [Difficulty::Medium, Difficulty::Hard, Difficulty::Evil]
        .into_iter()
        .find(|tier| tier.length() == length)
        .ok_or_else(|| EngineError::UnknownDifficulty(format!("{length} pegs")))
}
