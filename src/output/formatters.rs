//! Formatting utilities for terminal output

use crate::core::{EXACT_MARKER, Feedback, INCORRECT_MARKER, MISPLACED_MARKER};
use colored::Colorize;

/// Format a hint with each marker group in its own color
#[must_use]
pub fn feedback_colored(feedback: Feedback) -> String {
    format!(
        "{}{}{}",
        EXACT_MARKER
            .to_string()
            .repeat(feedback.exact())
            .bright_green()
            .bold(),
        MISPLACED_MARKER
            .to_string()
            .repeat(feedback.misplaced())
            .bright_yellow()
            .bold(),
        INCORRECT_MARKER
            .to_string()
            .repeat(feedback.incorrect())
            .bright_black()
    )
}

/// Create a bar showing how many turns remain
#[must_use]
pub fn turns_bar(turns_left: usize, max_turns: usize, width: usize) -> String {
    if max_turns == 0 {
        return "░".repeat(width);
    }

    let filled = (turns_left * width / max_turns).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Title banner shown when the program starts
pub const WELCOME_BANNER: &str = "\
╔══════════════════════════════════════════════════════════════╗
║                 Welcome to M A S T E R M I N D               ║
╚══════════════════════════════════════════════════════════════╝";

/// Banner shown after each session
pub const GAME_OVER_BANNER: &str = "\
╔══════════════════════════════════════════════════════════════╗
║                       G A M E   O V E R                      ║
╚══════════════════════════════════════════════════════════════╝";

/// Rules of the game, one line per entry
#[must_use]
pub fn instructions(max_turns: usize) -> Vec<String> {
    vec![
        "This is Mastermind!".to_string(),
        String::new(),
        "The goal of the game is to guess the code the computer generated.".to_string(),
        format!("You have {max_turns} attempts to guess the code."),
        "Type numbers from 1 to 8, as many as the code length you selected (4, 6 or 8)."
            .to_string(),
        String::new(),
        "Every guess earns a hint such as OOX_:".to_string(),
        "  O: one digit in the right position".to_string(),
        "  X: one digit in the wrong position".to_string(),
        "  _: one incorrect digit".to_string(),
        String::new(),
        "If the secret code is 1234 and you guess 5247, the hint is OX__:".to_string(),
        "'2' is in the right position, '4' is in the wrong position, and".to_string(),
        "'5' and '7' are incorrect. The hint only counts; it never says which".to_string(),
        "digit earned which marker.".to_string(),
        String::new(),
        "HAPPY GUESSING!".to_string(),
    ]
}
