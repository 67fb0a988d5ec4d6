//! Difficulty tiers
//!
//! Each tier fixes the combination length and the score multiplier.

use super::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty tier chosen when a game is created
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    /// Top tier. `hardcore` is accepted as a legacy name on input.
    #[serde(alias = "hardcore")]
    Evil,
}

impl Difficulty {
    /// Every tier, easiest first
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Evil];

    /// Number of pegs in a combination for this tier
    #[must_use]
    pub const fn length(self) -> usize {
        match self {
            Self::Easy | Self::Medium => 4,
            Self::Hard => 5,
            Self::Evil => 6,
        }
    }

    /// Score awarded per unused turn: 10 × multiplier
    ///
    /// Kept integral so the 1.5 multiplier of `medium` scores exactly.
    #[must_use]
    pub const fn points_per_turn(self) -> u32 {
        match self {
            Self::Easy => 10,
            Self::Medium => 15,
            Self::Hard => 20,
            Self::Evil => 30,
        }
    }

    /// Score multiplier relative to `easy`
    #[must_use]
    pub fn multiplier(self) -> f64 {
        f64::from(self.points_per_turn()) / 10.0
    }

    /// Canonical lower-case name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Evil => "evil",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "evil" | "hardcore" => Ok(Self::Evil),
            _ => Err(EngineError::UnknownDifficulty(s.to_string())),
        }
    }
}
