//! Combination representation
//!
//! A Combination is an ordered, non-empty sequence of pegs, validated at
//! construction. The text form at the boundary is comma-delimited color names.

use super::color::Color;
use super::error::{EngineError, Result};
use std::fmt;
use std::str::FromStr;

/// Delimiter between color names in the text form
pub const DELIMITER: char = ',';

/// An ordered sequence of peg colors
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination {
    pegs: Vec<Color>,
}

impl Combination {
    /// Longest combination supported (consumption masks are one byte wide)
    pub const MAX_LENGTH: usize = 8;

    /// Create a combination from a sequence of pegs
    ///
    /// # Errors
    /// Returns `EmptyCombination` for an empty sequence and `TooManyPegs` when
    /// it exceeds [`Combination::MAX_LENGTH`].
    ///
    /// # Examples
    /// ```
    /// use mastermind_engine::core::{Color, Combination};
    ///
    /// let code = Combination::new(vec![Color::Red, Color::Blue]).unwrap();
    /// assert_eq!(code.len(), 2);
    /// assert!(Combination::new(vec![]).is_err());
    /// ```
    pub fn new(pegs: Vec<Color>) -> Result<Self> {
        if pegs.is_empty() {
            return Err(EngineError::EmptyCombination);
        }
        if pegs.len() > Self::MAX_LENGTH {
            return Err(EngineError::TooManyPegs(pegs.len()));
        }
        Ok(Self { pegs })
    }

    /// Decode the `index`-th combination of `length` pegs
    ///
    /// Combinations are numbered in base [`Color::COUNT`], first peg most
    /// significant, so index 0 is all red. Returns `None` if `length` is out
    /// of range or `index >= COUNT^length`.
    #[must_use]
    pub fn from_index(mut index: usize, length: usize) -> Option<Self> {
        if length == 0 || length > Self::MAX_LENGTH || index >= Self::space_size(length) {
            return None;
        }

        let mut pegs = vec![Color::Red; length];
        for slot in pegs.iter_mut().rev() {
            *slot = Color::from_index(index % Color::COUNT)?;
            index /= Color::COUNT;
        }
        Some(Self { pegs })
    }

    /// Number of distinct combinations of `length` pegs
    #[must_use]
    pub const fn space_size(length: usize) -> usize {
        Color::COUNT.pow(length as u32)
    }

    /// Get the pegs as a slice
    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[Color] {
        &self.pegs
    }

    /// Get the peg at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn peg_at(&self, position: usize) -> Color {
        self.pegs[position]
    }

    /// Number of pegs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pegs.len()
    }

    /// Always false; empty combinations cannot be constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pegs.is_empty()
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, peg) in self.pegs.iter().enumerate() {
            if i > 0 {
                write!(f, "{DELIMITER}")?;
            }
            write!(f, "{peg}")?;
        }
        Ok(())
    }
}

impl FromStr for Combination {
    type Err = EngineError;

    /// Parse `"red,blue,green,green"` style text
    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(EngineError::EmptyCombination);
        }

        let pegs = s
            .split(DELIMITER)
            .map(str::parse::<Color>)
            .collect::<Result<Vec<Color>>>()?;

        Self::new(pegs)
    }
}
