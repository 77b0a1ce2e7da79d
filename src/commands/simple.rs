//! Simple interactive CLI mode
//!
//! Line-oriented game loop without the TUI. Reads from any `BufRead` and
//! writes to any `Write`, so whole sessions can be scripted.

use crate::core::{Code, CodeError, CodeLength, DuplicatePolicy, SessionSettings};
use crate::game::{Engine, Session, SessionStatus};
use crate::output::formatters::{
    GAME_OVER_BANNER, WELCOME_BANNER, feedback_colored, instructions, turns_bar,
};
use crate::output::write_statistics;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::debug;

/// How a session loop ended
enum SessionEnd {
    Finished,
    Quit,
}

/// Line-oriented prompt/answer channel
struct Console<I, O> {
    input: I,
    out: O,
}

impl<I: BufRead, O: Write> Console<I, O> {
    /// Print a prompt and read one trimmed line; `None` at end of input
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    fn ask_length(&mut self) -> Result<Option<CodeLength>> {
        loop {
            let Some(answer) = self.ask("Choose the code length:\n4\n6\n8\n")? else {
                return Ok(None);
            };

            match answer.parse::<CodeLength>() {
                Ok(length) => return Ok(Some(length)),
                Err(CodeError::NonDigit) => writeln!(
                    self.out,
                    "{} Invalid input type. Please enter a number.",
                    "Error:".red().bold()
                )?,
                Err(e) => writeln!(self.out, "{} {e}", "Error:".red().bold())?,
            }
        }
    }

    fn ask_policy(&mut self) -> Result<Option<DuplicatePolicy>> {
        loop {
            let Some(answer) = self.ask("Do you want to play with duplicates? [y/n]: ")? else {
                return Ok(None);
            };

            match DuplicatePolicy::from_answer(&answer) {
                Some(policy) => return Ok(Some(policy)),
                None => writeln!(
                    self.out,
                    "{} Invalid choice. Please enter 'y' or 'n'.",
                    "Error:".red().bold()
                )?,
            }
        }
    }

    /// Ask a yes/no question; anything but `y`/`yes` counts as no
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self
            .ask(prompt)?
            .is_some_and(|answer| matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes")))
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: Rng>(
    engine: &mut Engine<R>,
    input: impl BufRead,
    out: impl Write,
) -> Result<()> {
    let mut console = Console { input, out };
    writeln!(console.out, "\n{}\n", WELCOME_BANNER.bright_cyan())?;

    loop {
        let Some(length) = console.ask_length()? else {
            return Ok(());
        };
        let Some(policy) = console.ask_policy()? else {
            return Ok(());
        };

        let mut session = engine.start_session(SessionSettings::new(length, policy));
        writeln!(
            console.out,
            "\nWrite a code using the numbers from 1 to 8. You have {} turns to guess the code.",
            session.max_turns()
        )?;

        if let SessionEnd::Quit = play_session(&mut console, &mut session)? {
            debug!("session abandoned");
            return Ok(());
        }

        engine.finish_session(&mut session);

        writeln!(
            console.out,
            "\nThe code was: {}",
            session.secret().to_string().bright_white().bold()
        )?;
        writeln!(console.out, "\n{}", GAME_OVER_BANNER.bright_red())?;
        write_statistics(&mut console.out, engine)?;

        if !console.confirm("\nDo you want to play again? [y/n]: ")? {
            writeln!(console.out, "Thanks for playing! Goodbye!")?;
            return Ok(());
        }
    }
}

fn play_session<I: BufRead, O: Write>(
    console: &mut Console<I, O>,
    session: &mut Session,
) -> Result<SessionEnd> {
    let length = session.settings().length;

    while !session.is_finished() {
        writeln!(console.out, "Type 'exit' anytime to quit the game.")?;
        writeln!(console.out, "Type 'tutorial' to see game's instructions.")?;

        let Some(input) = console.ask("\nGuess: ")? else {
            return Ok(SessionEnd::Quit);
        };

        match input.as_str() {
            "exit" => {
                if console.confirm("Are you sure you want to quit? [y/n]: ")? {
                    writeln!(console.out, "Exiting game. Thanks for playing!")?;
                    return Ok(SessionEnd::Quit);
                }
                continue;
            }
            "tutorial" => {
                writeln!(console.out, "{}", "*".repeat(70))?;
                for line in instructions(session.max_turns()) {
                    writeln!(console.out, "*  {line}")?;
                }
                writeln!(console.out, "{}", "*".repeat(70))?;
                continue;
            }
            _ => {}
        }

        let guess = match Code::parse(&input, length) {
            Ok(guess) => guess,
            Err(e) => {
                writeln!(console.out, "{} {e}", "Error:".red().bold())?;
                continue;
            }
        };

        match session.submit(guess)? {
            SessionStatus::Won => {
                writeln!(
                    console.out,
                    "{}",
                    "Congratulations!! You win !!".bright_green().bold()
                )?;
            }
            SessionStatus::InProgress | SessionStatus::Lost => {
                if let Some(turn) = session.last_turn() {
                    writeln!(console.out, "Hint: {}", feedback_colored(turn.feedback))?;
                }
                writeln!(
                    console.out,
                    "Turns left: {} {}",
                    session.turns_left(),
                    turns_bar(session.turns_left(), session.max_turns(), 20).bright_blue()
                )?;
            }
        }
    }

    Ok(SessionEnd::Finished)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;

    fn play(script: &str) -> (Engine, String) {
        let mut engine = Engine::new(&GameConfig::default().with_seed(8));
        let mut out = Vec::new();
        run_simple(&mut engine, script.as_bytes(), &mut out).unwrap();
        (engine, String::from_utf8(out).unwrap())
    }

    #[test]
    fn losing_session_is_archived() {
        // A duplicate-free secret never equals 1111
        let script = format!("4\nn\n{}n\n", "1111\n".repeat(10));
        let (engine, out) = play(&script);

        assert!(out.contains("Turns left: 0"));
        assert!(out.contains("Length: 4, No duplicates - Result: Loss"));
        assert!(out.contains("Length: 4, No duplicates, Points: 0"));
        assert!(out.contains("Thanks for playing! Goodbye!"));
        assert_eq!(engine.archive().len(), 1);
    }

    #[test]
    fn invalid_settings_are_reprompted() {
        let script = "5\nabc\n6\nmaybe\ny\nexit\ny\n";
        let (engine, out) = play(script);

        assert!(out.contains("Invalid code length 5"));
        assert!(out.contains("Invalid input type. Please enter a number."));
        assert!(out.contains("Invalid choice. Please enter 'y' or 'n'."));
        assert!(out.contains("Exiting game. Thanks for playing!"));
        assert!(engine.archive().is_empty());
        assert_eq!(engine.issued().len(), 1);
    }

    #[test]
    fn invalid_guesses_cost_no_turns() {
        let script = "4\ny\n12\n12a4\n9999\nexit\ny\n";
        let (_, out) = play(script);

        assert!(out.contains("Guess length does not match the code length"));
        assert!(out.contains("Guess contains invalid characters"));
        assert!(out.contains("Only use 1 to 8"));
        assert!(!out.contains("Turns left"));
    }

    #[test]
    fn declining_exit_keeps_playing() {
        let script = "4\nn\nexit\nn\ntutorial\n";
        let (engine, out) = play(script);

        assert!(out.contains("HAPPY GUESSING!"));
        assert!(!out.contains("Exiting game"));
        // Input ran out mid-session, so nothing was archived
        assert!(engine.archive().is_empty());
    }

    #[test]
    fn end_of_input_quits_cleanly() {
        let (engine, _) = play("");
        assert!(engine.issued().is_empty());
    }
}
