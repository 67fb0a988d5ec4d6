//! Command implementations

pub mod benchmark;
pub mod play;
pub mod score;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use play::{PlayOutcome, play_game, run_play};
pub use score::{ScoreResult, score_guess};
pub use solve::{GuessStep, SolveConfig, SolveResult, difficulty_for_length, solve_secret};
