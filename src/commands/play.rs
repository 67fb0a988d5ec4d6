//! Interactive play mode
//!
//! Text-based game against a generated secret. Guesses are typed as
//! comma-separated color names.

use crate::core::{Color, Combination, Difficulty};
use crate::game::{Game, GameStatus};
use crate::output::formatters::{colored_combination, feedback_pegs};
use crate::solver::{Solver, Strategy};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// How a single interactive game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Won { turns: u32, score: u32 },
    Lost,
    /// Player typed `quit` or input ended
    Quit,
    /// Player typed `new`
    Restart,
}

/// Play one game, reading commands from `input`
///
/// Besides guesses the player may type `hint`, `new` or `quit`.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_game<S: Strategy, R: BufRead, W: Write>(
    game: &mut Game,
    solver: &Solver<S>,
    input: &mut R,
    output: &mut W,
) -> io::Result<PlayOutcome> {
    let length = game.secret().len();
    writeln!(
        output,
        "\nNew {} game: {length} pegs, {} turns.",
        game.difficulty(),
        game.max_turns()
    )?;

    while !game.status().is_over() {
        let Some(line) = prompt(input, output, &format!("Turn {}", game.next_turn()))? else {
            return Ok(PlayOutcome::Quit);
        };

        match line.to_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" => return Ok(PlayOutcome::Quit),
            "new" => return Ok(PlayOutcome::Restart),
            "hint" => {
                write_hint(game, solver, output)?;
                continue;
            }
            _ => {}
        }

        let guess: Combination = match line.parse() {
            Ok(guess) => guess,
            Err(e) => {
                writeln!(output, "{} {e}", "✗".red())?;
                continue;
            }
        };

        match game.guess(guess) {
            Ok(last) => {
                writeln!(
                    output,
                    "  {}  {}  {}",
                    colored_combination(last.guess()),
                    feedback_pegs(last.feedback(), length),
                    last.feedback()
                )?;
            }
            Err(e) => writeln!(output, "{} {e}", "✗".red())?,
        }
    }

    let outcome = match (game.status(), game.score()) {
        (GameStatus::Won, Some(score)) => {
            let turns = game.moves().len() as u32;
            writeln!(
                output,
                "\n{} Solved in {turns} turns, score {score}",
                "✓".green()
            )?;
            PlayOutcome::Won { turns, score }
        }
        _ => {
            writeln!(
                output,
                "\n{} Out of turns. The secret was {}",
                "✗".red(),
                colored_combination(game.secret())
            )?;
            PlayOutcome::Lost
        }
    };
    Ok(outcome)
}

fn write_hint<S: Strategy, W: Write>(
    game: &Game,
    solver: &Solver<S>,
    output: &mut W,
) -> io::Result<()> {
    if solver.length() != game.secret().len() {
        return writeln!(output, "No hints for this game.");
    }

    let history = game.history();
    let hint = solver
        .count_candidates(&history)
        .and_then(|remaining| solver.next_guess(&history).map(|hint| (remaining, hint)));
    match hint {
        Ok((remaining, Some(hint))) => writeln!(
            output,
            "  Hint: {} ({remaining} candidates remain)",
            colored_combination(&hint)
        ),
        Ok((_, None)) => writeln!(output, "  No consistent combination remains."),
        Err(e) => writeln!(output, "{} {e}", "✗".red()),
    }
}

/// Print `label: ` and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Run the interactive mode on stdin/stdout until the player stops
///
/// # Errors
///
/// Returns an error if terminal I/O fails.
pub fn run_play<S: Strategy, R: Rng + ?Sized>(
    solver: &Solver<S>,
    difficulty: Difficulty,
    max_turns: u32,
    rng: &mut R,
) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    writeln!(output, "{}", "Mastermind".bold())?;
    let colors: Vec<&str> = Color::ALL.iter().map(|c| c.name()).collect();
    writeln!(output, "Colors: {}", colors.join(", "))?;
    writeln!(output, "Enter guesses like red,blue,green,yellow.")?;
    writeln!(output, "Commands: 'hint', 'new', 'quit'")?;

    loop {
        let mut game = Game::random(difficulty, rng)
            .with_max_turns(max_turns)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let outcome = play_game(&mut game, solver, &mut input, &mut output)?;
        debug!(?outcome, "game finished");

        match outcome {
            PlayOutcome::Quit => return Ok(()),
            PlayOutcome::Restart => {}
            PlayOutcome::Won { .. } | PlayOutcome::Lost => {
                let again = prompt(&mut input, &mut output, "Play again? [y/N]")?;
                if !again.is_some_and(|answer| answer.eq_ignore_ascii_case("y")) {
                    return Ok(());
                }
            }
        }
    }
}
