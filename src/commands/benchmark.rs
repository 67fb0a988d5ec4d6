//! Benchmark command
//!
//! Tests solver performance across many random secrets.

use crate::core::{Difficulty, Result};
use crate::game::Game;
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::warn;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub difficulty: Difficulty,
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_turns: usize,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    pub total_score: u64,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Options for a benchmark run
pub struct BenchmarkConfig {
    pub difficulty: Difficulty,
    pub games: usize,
    pub max_turns: u32,
    pub show_progress: bool,
}

/// Play `config.games` games against random secrets
///
/// Averages and the turn distribution count solved games only.
///
/// # Errors
///
/// Returns an error if the turn limit is 0 or the solver's space does not
/// match the difficulty's length.
///
/// # Panics
///
/// Will not panic - the progress template is a constant known to be valid.
pub fn run_benchmark<S: Strategy, R: Rng + ?Sized>(
    solver: &Solver<S>,
    config: &BenchmarkConfig,
    rng: &mut R,
) -> Result<BenchmarkResult> {
    let progress = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .expect("progress template is valid")
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut solved = 0;
    let mut total_turns = 0;
    let mut min_turns = usize::MAX;
    let mut max_turns = 0;
    let mut total_score = 0u64;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for _ in 0..config.games {
        let mut game = Game::random(config.difficulty, rng).with_max_turns(config.max_turns)?;

        while !game.status().is_over() {
            let Some(guess) = solver.next_guess(&game.history())? else {
                warn!(secret = %game.secret(), "solver ran out of candidates");
                break;
            };
            game.guess(guess)?;
        }

        if let Some(score) = game.score() {
            let turns = game.moves().len();
            solved += 1;
            total_turns += turns;
            total_score += u64::from(score);
            min_turns = min_turns.min(turns);
            max_turns = max_turns.max(turns);
            *distribution.entry(turns).or_insert(0) += 1;
        }

        progress.inc(1);
        progress.set_message(format!("{solved} solved"));
    }

    progress.finish_and_clear();

    let duration = start.elapsed();
    let total_games = config.games;

    Ok(BenchmarkResult {
        difficulty: config.difficulty,
        total_games,
        solved,
        failed: total_games - solved,
        total_turns,
        average_turns: if solved == 0 {
            0.0
        } else {
            total_turns as f64 / solved as f64
        },
        min_turns: if solved == 0 { 0 } else { min_turns },
        max_turns,
        total_score,
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
