//! Mastermind - CLI
//!
//! Play Mastermind in the terminal, score guesses, or let the solver crack
//! a secret.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind_engine::{
    commands::{BenchmarkConfig, SolveConfig, run_benchmark, run_play, score_guess, solve_secret},
    config::GameConfig,
    core::{Combination, Difficulty},
    output::{print_benchmark_result, print_score_result, print_solve_result},
    solver::{CandidateSpace, Solver, StrategyType},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind game, scorer and solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: easy, medium (default), hard, evil
    #[arg(short, long, global = true)]
    difficulty: Option<Difficulty>,

    /// Strategy: adaptive (default), first, minimax, random
    #[arg(short, long, global = true)]
    strategy: Option<String>,

    /// Turn limit per game
    #[arg(short = 't', long, global = true)]
    max_turns: Option<u32>,

    /// Seed for secret generation
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play,

    /// Score one guess against a secret
    Score {
        /// Secret, e.g. red,red,blue,green
        secret: String,

        /// Guess, same length as the secret
        guess: String,
    },

    /// Let the solver crack a known secret
    Solve {
        /// The secret to solve
        secret: String,

        /// Show candidate counts after each turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random secrets to solve
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

/// Apply command-line overrides on top of the file configuration
fn resolve_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(difficulty) = cli.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(strategy) = &cli.strategy {
        config.strategy.clone_from(strategy);
    }
    if let Some(max_turns) = cli.max_turns {
        config.max_turns = max_turns;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    debug!(?config, "resolved configuration");

    let strategy = StrategyType::with_threshold(&config.strategy, config.minimax_threshold);
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let space = CandidateSpace::for_difficulty(config.difficulty);
            let solver = Solver::new(strategy, &space);
            run_play(&solver, config.difficulty, config.max_turns, &mut rng)
                .context("terminal I/O failed")
        }
        Commands::Score { secret, guess } => {
            let result = score_guess(&secret, &guess).context("cannot score guess")?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Solve { secret, verbose } => {
            run_solve_command(strategy, &config, secret, verbose)
        }
        Commands::Benchmark { count } => {
            let space = CandidateSpace::for_difficulty(config.difficulty);
            let solver = Solver::new(strategy, &space);
            println!(
                "Running benchmark on {count} random {} secrets...",
                config.difficulty
            );
            let bench = BenchmarkConfig {
                difficulty: config.difficulty,
                games: count,
                max_turns: config.max_turns,
                show_progress: true,
            };
            let result = run_benchmark(&solver, &bench, &mut rng).context("benchmark failed")?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_solve_command(
    strategy: StrategyType,
    config: &GameConfig,
    secret: String,
    verbose: bool,
) -> Result<()> {
    let parsed: Combination = secret.parse().context("invalid secret")?;
    let space = CandidateSpace::new(parsed.len()).context("invalid secret length")?;
    let solver = Solver::new(strategy, &space);

    let mut solve = SolveConfig::new(secret);
    solve.difficulty = config.difficulty;
    solve.max_turns = config.max_turns;

    let result = solve_secret(solve, &solver).context("solver failed")?;
    print_solve_result(&result, verbose);
    Ok(())
}
