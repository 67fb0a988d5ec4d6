//! Game rules and session state

mod rules;
mod session;

pub use rules::{
    MAX_TURNS, calculate_score, generate_solution, generate_solution_named, is_won,
    random_solution, score,
};
pub use session::{Game, GameStatus, Move};
