//! Peg colors
//!
//! The alphabet is closed: eight colors, each with a fixed index used by the
//! generator and by candidate enumeration.

use super::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single peg color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Yellow,
    Blue,
    Green,
    Black,
    White,
    Orange,
    Purple,
}

impl Color {
    /// Every color, in index order
    pub const ALL: [Self; 8] = [
        Self::Red,
        Self::Yellow,
        Self::Blue,
        Self::Green,
        Self::Black,
        Self::White,
        Self::Orange,
        Self::Purple,
    ];

    /// Number of colors in the alphabet
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this color in [`Color::ALL`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color at `index` in [`Color::ALL`], if in range
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Lower-case color name used in the delimited text form
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Black => "black",
            Self::White => "white",
            Self::Orange => "orange",
            Self::Purple => "purple",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| EngineError::InvalidSymbol(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_through_all() {
        for (i, color) in Color::ALL.into_iter().enumerate() {
            assert_eq!(color.index(), i);
            assert_eq!(Color::from_index(i), Some(color));
        }
        assert_eq!(Color::from_index(Color::COUNT), None);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("RED".parse::<Color>(), Ok(Color::Red));
        assert_eq!(" Purple ".parse::<Color>(), Ok(Color::Purple));
    }

    #[test]
    fn parse_rejects_unknown_color() {
        assert_eq!(
            "magenta".parse::<Color>(),
            Err(EngineError::InvalidSymbol("magenta".to_string()))
        );
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Color::Orange.to_string(), "orange");
    }
}
