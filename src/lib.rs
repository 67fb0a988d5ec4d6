//! Mastermind Engine
//!
//! Scoring, game sessions and an automatic solver for the Mastermind
//! code-breaking game.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_engine::core::{Combination, Difficulty, Feedback};
//! use mastermind_engine::game::{calculate_score, score};
//!
//! let secret: Combination = "red,red,blue,green".parse().unwrap();
//! let guess: Combination = "red,blue,green,yellow".parse().unwrap();
//!
//! assert_eq!(score(&secret, &guess).unwrap(), Feedback::new(1, 2));
//! assert_eq!(calculate_score(Difficulty::Hard, 3, 12).unwrap(), 180);
//! ```

// Core domain types
pub mod core;

// Secret generation, scoring rules and game sessions
pub mod game;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// File configuration
pub mod config;
