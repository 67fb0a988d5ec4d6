//! Display functions for command results

use super::formatters::{colored_combination, create_progress_bar, feedback_pegs};
use crate::commands::{BenchmarkResult, ScoreResult, SolveResult};
use crate::game::GameStatus;
use colored::Colorize;

/// Print the feedback for a single scored guess
pub fn print_score_result(result: &ScoreResult) {
    let length = result.secret.len();
    println!("Secret:   {}", colored_combination(&result.secret));
    println!("Guess:    {}", colored_combination(&result.guess));
    println!(
        "Feedback: {} {}",
        feedback_pegs(result.feedback, length),
        result.feedback.to_string().bright_yellow()
    );
    if result.won {
        println!("{}", "✓ Exact match".green().bold());
    }
}

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let length = result.secret.len();
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", colored_combination(&result.secret));
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            colored_combination(&step.guess),
            feedback_pegs(step.feedback, length)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    match (result.status, result.score) {
        (GameStatus::Won, Some(score)) => println!(
            "{}",
            format!("✓ Solved in {} turns, score {score}", result.steps.len())
                .green()
                .bold()
        ),
        _ => println!(
            "{}",
            format!("✗ Not solved in {} turns", result.steps.len())
                .red()
                .bold()
        ),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({}) ",
        "BENCHMARK RESULTS".bright_cyan().bold(),
        result.difficulty
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    if result.failed > 0 {
        println!(
            "   Failed:           {}",
            format!("{}", result.failed).red()
        );
    }
    println!(
        "   Average turns:    {}",
        format!("{:.2}", result.average_turns).bright_yellow().bold()
    );
    println!("   Best case:        {}", result.min_turns);
    println!("   Worst case:       {}", result.max_turns);
    println!(
        "   Total score:      {} (multiplier x{})",
        result.total_score,
        result.difficulty.multiplier()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.total_games == 0 {
        return;
    }

    println!("\n{}", "Distribution:".bright_cyan().bold());
    let mut turns: Vec<_> = result.distribution.keys().copied().collect();
    turns.sort_unstable();
    for turn in turns {
        let count = result.distribution[&turn];
        let pct = (count as f64 / result.total_games as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {turn:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
