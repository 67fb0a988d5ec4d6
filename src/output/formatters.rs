//! Formatting utilities for terminal output

use crate::core::{Color, Combination, Feedback};
use colored::{ColoredString, Colorize};

/// Marker for a black feedback peg
pub const BLACK_PEG: char = '●';
/// Marker for a white feedback peg
pub const WHITE_PEG: char = '○';
/// Marker for a position with no match
pub const EMPTY_PEG: char = '·';

/// Format feedback as peg markers, blacks first
///
/// ```
/// use mastermind_engine::core::Feedback;
/// use mastermind_engine::output::formatters::feedback_pegs;
///
/// assert_eq!(feedback_pegs(Feedback::new(1, 2), 4), "●○○·");
/// ```
#[must_use]
pub fn feedback_pegs(feedback: Feedback, length: usize) -> String {
    let black = usize::from(feedback.black());
    let white = usize::from(feedback.white());
    let empty = length.saturating_sub(black + white);

    let mut result = String::with_capacity(length * 3);
    result.extend(std::iter::repeat_n(BLACK_PEG, black));
    result.extend(std::iter::repeat_n(WHITE_PEG, white));
    result.extend(std::iter::repeat_n(EMPTY_PEG, empty));
    result
}

/// A color name painted in its own color
#[must_use]
pub fn colored_peg(color: Color) -> ColoredString {
    let name = color.name();
    match color {
        Color::Red => name.red(),
        Color::Yellow => name.yellow(),
        Color::Blue => name.blue(),
        Color::Green => name.green(),
        Color::Black => name.bright_black(),
        Color::White => name.white(),
        Color::Orange => name.truecolor(255, 165, 0),
        Color::Purple => name.purple(),
    }
}

/// Combination as space-separated colored names
#[must_use]
pub fn colored_combination(combination: &Combination) -> String {
    combination
        .pegs()
        .iter()
        .map(|&peg| colored_peg(peg).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
