//! Game configuration
//!
//! Loaded from an optional TOML file; command-line flags override file values.

use crate::core::Difficulty;
use crate::game::MAX_TURNS;
use crate::solver::MinimaxStrategy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Errors reading or validating a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("max_turns must be at least 1")]
    ZeroTurns,
}

/// Settings for games, the solver and benchmarks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Difficulty tier for new games
    pub difficulty: Difficulty,
    /// Turn limit per game
    pub max_turns: u32,
    /// Solver strategy name (adaptive, first, minimax, random)
    pub strategy: String,
    /// Seed for secret generation; random when absent
    pub seed: Option<u64>,
    /// Candidate count at or below which minimax is used
    pub minimax_threshold: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            max_turns: MAX_TURNS,
            strategy: "adaptive".to_string(),
            seed: None,
            minimax_threshold: MinimaxStrategy::DEFAULT_THRESHOLD,
        }
    }
}

impl GameConfig {
    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` for malformed TOML or unknown values and
    /// `ConfigError::ZeroTurns` if `max_turns` is 0.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, parsed or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml(&content)?;
        info!(difficulty = %config.difficulty, max_turns = config.max_turns, "Config loaded");
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// Returns `ConfigError::ZeroTurns` if `max_turns` is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_turns == 0 {
            return Err(ConfigError::ZeroTurns);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.max_turns, 12);
        assert_eq!(config.strategy, "adaptive");
        assert_eq!(config.seed, None);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = GameConfig::from_toml("difficulty = \"hard\"\nseed = 5\n").unwrap();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.max_turns, 12);
    }

    #[test]
    fn hardcore_alias_in_file() {
        let config = GameConfig::from_toml("difficulty = \"hardcore\"").unwrap();
        assert_eq!(config.difficulty, Difficulty::Evil);
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        assert!(matches!(
            GameConfig::from_toml("difficulty = \"nightmare\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn zero_turns_is_rejected() {
        assert!(matches!(
            GameConfig::from_toml("max_turns = 0"),
            Err(ConfigError::ZeroTurns)
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "difficulty = \"easy\"\nmax_turns = 8\nstrategy = \"minimax\"").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.max_turns, 8);
        assert_eq!(config.strategy, "minimax");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        assert!(matches!(
            GameConfig::from_file("/nonexistent/mastermind.toml"),
            Err(ConfigError::Read(_))
        ));
    }
}
