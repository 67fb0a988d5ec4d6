//! One-shot scoring command
//!
//! Scores a single guess against a given secret.

use crate::core::{Combination, Feedback, Result};
use crate::game::score;

/// Result of scoring one guess
pub struct ScoreResult {
    pub secret: Combination,
    pub guess: Combination,
    pub feedback: Feedback,
    pub won: bool,
}

/// Parse both combinations and score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either text contains an unknown color, is empty,
/// or the two combinations differ in length.
pub fn score_guess(secret: &str, guess: &str) -> Result<ScoreResult> {
    let secret: Combination = secret.parse()?;
    let guess: Combination = guess.parse()?;
    let feedback = score(&secret, &guess)?;
    let won = feedback.is_win(secret.len());

    Ok(ScoreResult {
        secret,
        guess,
        feedback,
        won,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineError;

    #[test]
    fn scores_partial_match() {
        let result = score_guess("red,red,blue,green", "red,blue,green,yellow").unwrap();
        assert_eq!(result.feedback, Feedback::new(1, 2));
        assert!(!result.won);
    }

    #[test]
    fn detects_win() {
        let result = score_guess("purple,white,black", "purple,white,black").unwrap();
        assert!(result.won);
        assert_eq!(result.feedback, Feedback::perfect(3));
    }

    #[test]
    fn rejects_unknown_color() {
        assert_eq!(
            score_guess("red,red", "red,pink").err(),
            Some(EngineError::InvalidSymbol("pink".to_string()))
        );
    }

    #[test]
    fn rejects_length_mismatch() {
        assert!(matches!(
            score_guess("red,red,red", "red,red"),
            Err(EngineError::LengthMismatch {
                secret: 3,
                guess: 2
            })
        ));
    }
}
