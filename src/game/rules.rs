//! Game rules: secret generation, scoring of guesses, win and score rules

use crate::core::{Color, Combination, Difficulty, EngineError, Feedback, Result};
use rand::Rng;
use tracing::debug;

/// Turn limit of a game
pub const MAX_TURNS: u32 = 12;

/// Draw a secret for `difficulty`
///
/// Each position is drawn independently and uniformly from [`Color::ALL`], so
/// colors may repeat.
///
/// # Examples
/// ```
/// use mastermind_engine::core::Difficulty;
/// use mastermind_engine::game::generate_solution;
///
/// let secret = generate_solution(Difficulty::Evil, &mut rand::rng());
/// assert_eq!(secret.len(), 6);
/// ```
///
/// # Panics
/// Will not panic - every tier length is between 1 and `Combination::MAX_LENGTH`.
pub fn generate_solution<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Combination {
    let pegs: Vec<Color> = (0..difficulty.length())
        .map(|_| Color::ALL[rng.random_range(0..Color::COUNT)])
        .collect();

    debug!(%difficulty, "generated secret");

    Combination::new(pegs).expect("tier lengths are within Combination::MAX_LENGTH")
}

/// Draw a secret for a difficulty given by name
///
/// # Errors
/// Returns `UnknownDifficulty` if `name` is not a recognized tier.
pub fn generate_solution_named<R: Rng + ?Sized>(name: &str, rng: &mut R) -> Result<Combination> {
    let difficulty: Difficulty = name.parse()?;
    Ok(generate_solution(difficulty, rng))
}

/// Draw a secret using the thread-local RNG
#[must_use]
pub fn random_solution(difficulty: Difficulty) -> Combination {
    generate_solution(difficulty, &mut rand::rng())
}

/// Score `guess` against `secret`
///
/// # Errors
/// Returns `LengthMismatch` if the combinations differ in length.
pub fn score(secret: &Combination, guess: &Combination) -> Result<Feedback> {
    Feedback::calculate(secret, guess)
}

/// Check whether `guess` matches `secret` position for position
///
/// # Errors
/// Returns `LengthMismatch` if the combinations differ in length.
pub fn is_won(secret: &Combination, guess: &Combination) -> Result<bool> {
    Ok(score(secret, guess)?.is_win(secret.len()))
}

/// Score of a game won on `turn_number`
///
/// `(max_turns - turn_number) × 10 × multiplier`, floored.
///
/// # Errors
/// Returns `InvalidTurn` if `turn_number` is 0 or greater than `max_turns`.
///
/// # Examples
/// ```
/// use mastermind_engine::core::Difficulty;
/// use mastermind_engine::game::{MAX_TURNS, calculate_score};
///
/// assert_eq!(calculate_score(Difficulty::Hard, 3, MAX_TURNS).unwrap(), 180);
/// assert!(calculate_score(Difficulty::Hard, 13, MAX_TURNS).is_err());
/// ```
pub fn calculate_score(difficulty: Difficulty, turn_number: u32, max_turns: u32) -> Result<u32> {
    if turn_number == 0 || turn_number > max_turns {
        return Err(EngineError::InvalidTurn {
            turn: turn_number,
            max_turns,
        });
    }
    Ok((max_turns - turn_number) * difficulty.points_per_turn())
}
