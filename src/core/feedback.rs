//! Guess feedback calculation and representation
//!
//! Feedback is a pair of peg counts:
//! - black = correct color in the correct position
//! - white = correct color in the wrong position
//!
//! Positions are tracked with one-byte consumption masks, one bit per peg,
//! so every position contributes to at most one count.

use super::Combination;
use super::error::{EngineError, Result};
use std::fmt;

/// Black/white peg counts for one guess
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    black: u8,
    white: u8,
}

impl Feedback {
    /// Create feedback from raw counts
    #[inline]
    #[must_use]
    pub const fn new(black: u8, white: u8) -> Self {
        Self { black, white }
    }

    /// Feedback of a winning guess for a combination of `length` pegs
    #[inline]
    #[must_use]
    pub const fn perfect(length: usize) -> Self {
        Self::new(length as u8, 0)
    }

    /// Exact-position matches
    #[inline]
    #[must_use]
    pub const fn black(self) -> u8 {
        self.black
    }

    /// Color-only matches
    #[inline]
    #[must_use]
    pub const fn white(self) -> u8 {
        self.white
    }

    /// Check if every one of `length` pegs is black
    #[inline]
    #[must_use]
    pub const fn is_win(self, length: usize) -> bool {
        self.black as usize == length
    }

    /// Compare `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: every position where the colors agree is black and is
    ///    consumed on both sides. This pass finishes before the second starts.
    /// 2. Second pass: for each unconsumed guess position in ascending order,
    ///    take the lowest unconsumed secret position with the same color,
    ///    consume both and count one white.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the combinations differ in length.
    ///
    /// # Examples
    /// ```
    /// use mastermind_engine::core::{Combination, Feedback};
    ///
    /// let secret: Combination = "red,red,blue,green".parse().unwrap();
    /// let guess: Combination = "red,blue,green,yellow".parse().unwrap();
    /// let feedback = Feedback::calculate(&secret, &guess).unwrap();
    ///
    /// // red is exact, blue and green are present elsewhere
    /// assert_eq!((feedback.black(), feedback.white()), (1, 2));
    /// ```
    pub fn calculate(secret: &Combination, guess: &Combination) -> Result<Self> {
        if secret.len() != guess.len() {
            return Err(EngineError::LengthMismatch {
                secret: secret.len(),
                guess: guess.len(),
            });
        }

        let secret_pegs = secret.pegs();
        let guess_pegs = guess.pegs();
        let mut secret_used = 0u8;
        let mut guess_used = 0u8;
        let mut black = 0u8;
        let mut white = 0u8;

        // First pass: exact matches
        for (i, (s, g)) in secret_pegs.iter().zip(guess_pegs).enumerate() {
            if s == g {
                secret_used |= 1 << i;
                guess_used |= 1 << i;
                black += 1;
            }
        }

        // Second pass: first free secret position of the same color
        for (i, g) in guess_pegs.iter().enumerate() {
            if guess_used & (1 << i) != 0 {
                continue;
            }
            let matched = (0..secret_pegs.len())
                .find(|&j| secret_used & (1 << j) == 0 && secret_pegs[j] == *g);
            if let Some(j) = matched {
                secret_used |= 1 << j;
                guess_used |= 1 << i;
                white += 1;
            }
        }

        Ok(Self { black, white })
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} black, {} white", self.black, self.white)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(text: &str) -> Combination {
        text.parse().unwrap()
    }

    fn counts(secret: &str, guess: &str) -> (u8, u8) {
        let feedback = Feedback::calculate(&code(secret), &code(guess)).unwrap();
        (feedback.black(), feedback.white())
    }

    #[test]
    fn identical_is_all_black() {
        assert_eq!(counts("red,yellow,blue,green", "red,yellow,blue,green"), (4, 0));
        assert_eq!(counts("red,red,red,red", "red,red,red,red"), (4, 0));
    }

    #[test]
    fn disjoint_is_empty() {
        assert_eq!(counts("red,red,blue,blue", "green,green,white,black"), (0, 0));
    }

    #[test]
    fn all_white_rotation() {
        assert_eq!(counts("red,yellow,blue,green", "yellow,blue,green,red"), (0, 4));
    }

    #[test]
    fn exact_matches_consume_before_color_matches() {
        // blue at index 2 is exact; the guess's other blue has nothing left
        assert_eq!(counts("red,red,blue,green", "red,blue,blue,yellow"), (2, 0));
    }

    #[test]
    fn duplicates_in_guess_count_once() {
        assert_eq!(counts("red,red,blue,green", "red,blue,green,yellow"), (1, 2));
        assert_eq!(counts("blue,green,yellow,white", "blue,blue,blue,blue"), (1, 0));
    }

    #[test]
    fn duplicates_in_secret_count_once() {
        assert_eq!(counts("green,green,green,red", "red,yellow,white,green"), (0, 2));
    }

    #[test]
    fn both_directions_with_duplicates() {
        let secret = "red,red,yellow,blue";
        let guess = "yellow,red,red,red";
        // exact at 1; guess red@2 -> secret red@0; guess yellow@0 -> secret yellow@2
        assert_eq!(counts(secret, guess), (1, 2));
        // reversed roles pair different positions but reach the same totals
        assert_eq!(counts(guess, secret), (1, 2));
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let result = Feedback::calculate(&code("red,blue,green"), &code("red,blue,green,red"));
        assert_eq!(
            result,
            Err(EngineError::LengthMismatch {
                secret: 3,
                guess: 4
            })
        );
    }

    #[test]
    fn perfect_and_is_win() {
        assert!(Feedback::perfect(5).is_win(5));
        assert!(!Feedback::new(4, 1).is_win(5));
    }

    #[test]
    fn display() {
        assert_eq!(Feedback::new(2, 1).to_string(), "2 black, 1 white");
    }
}
