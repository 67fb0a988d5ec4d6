//! Hint solver
//!
//! Narrows the space of possible secrets using past feedback and suggests
//! the next guess.

mod engine;
pub mod minimax;
mod space;
pub mod strategy;

pub use engine::Solver;
pub use space::CandidateSpace;
pub use strategy::{
    AdaptiveStrategy, FirstConsistentStrategy, MinimaxStrategy, RandomStrategy, Strategy,
    StrategyType,
};
