//! Core domain types for Mastermind
//!
//! Pure types with no I/O: colors, combinations, difficulty tiers and the
//! black/white feedback calculation.

mod color;
mod combination;
mod difficulty;
mod error;
mod feedback;

pub use color::Color;
pub use combination::{Combination, DELIMITER};
pub use difficulty::Difficulty;
pub use error::{EngineError, Result};
pub use feedback::Feedback;
