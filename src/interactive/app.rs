//! TUI application state and logic

use crate::core::{Code, CodeLength, DuplicatePolicy, SessionSettings};
use crate::game::{Engine, Session, SessionStatus};
use crate::output::formatters::instructions;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub engine: Engine,
    pub session: Option<Session>,
    pub input_mode: InputMode,
    pub pending_length: Option<CodeLength>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    ChooseLength,
    ChooseDuplicates,
    Guess,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            session: None,
            input_mode: InputMode::ChooseLength,
            pending_length: None,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Choose a code length to start.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    pub fn choose_length(&mut self, length: CodeLength) {
        self.pending_length = Some(length);
        self.input_mode = InputMode::ChooseDuplicates;
    }

    pub fn choose_policy(&mut self, policy: DuplicatePolicy) {
        let Some(length) = self.pending_length.take() else {
            self.input_mode = InputMode::ChooseLength;
            return;
        };

        let session = self
            .engine
            .start_session(SessionSettings::new(length, policy));
        let text = format!(
            "New {}-digit code ({}). You have {} turns.",
            length,
            policy.label().to_lowercase(),
            session.max_turns()
        );
        self.session = Some(session);
        self.input_buffer.clear();
        self.input_mode = InputMode::Guess;
        self.add_message(&text, MessageStyle::Info);
    }

    /// Score the typed guess against the running session
    pub fn submit_guess(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let parsed = Code::parse(&self.input_buffer, session.settings().length);
        let status = match parsed.and_then(|guess| session.submit(guess)) {
            Ok(status) => status,
            Err(e) => {
                let text = e.to_string();
                self.add_message(&text, MessageStyle::Error);
                return;
            }
        };

        self.input_buffer.clear();
        let hint = session
            .last_turn()
            .map(|turn| turn.feedback.to_string())
            .unwrap_or_default();
        let turns_used = session.turns_used();
        let turns_left = session.turns_left();
        let secret = session.secret().to_string();

        if status.is_finished() {
            self.engine.finish_session(session);
            self.input_mode = InputMode::GameOver;
        }

        match status {
            SessionStatus::Won => {
                let celebration = match turns_used {
                    1 => "🎯 FIRST TRY! Extraordinary! 🌟".to_string(),
                    2..=4 => format!("🔥 Cracked it in {turns_used} turns! 🔥"),
                    _ => format!("🎉 Solved in {turns_used} turns! 🎉"),
                };
                self.add_message(&celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            SessionStatus::Lost => {
                self.add_message(
                    &format!("Out of turns! The code was {secret}."),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            SessionStatus::InProgress => {
                self.add_message(
                    &format!("Hint: {hint} ({turns_left} turns left)"),
                    MessageStyle::Info,
                );
            }
        }
    }

    /// Drop the running session without archiving it
    pub fn abandon_session(&mut self) {
        if self.session.take().is_some() {
            self.add_message("Session abandoned.", MessageStyle::Info);
        }
        self.new_game();
    }

    pub fn new_game(&mut self) {
        if self
            .session
            .as_ref()
            .is_some_and(|session| !session.is_finished())
        {
            return;
        }

        self.session = None;
        self.pending_length = None;
        self.input_buffer.clear();
        self.input_mode = InputMode::ChooseLength;
        self.add_message("Choose a code length: 4, 6 or 8.", MessageStyle::Info);
    }

    pub fn show_tutorial(&mut self) {
        let lines = instructions(self.engine.max_turns());
        for line in lines.iter().filter(|l| l.contains(": one")) {
            self.add_message(line.trim(), MessageStyle::Info);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn games_played(&self) -> usize {
        self.engine.archive().len()
    }

    #[must_use]
    pub fn games_won(&self) -> usize {
        self.engine.archive().iter().filter(|r| r.won()).count()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::ChooseLength => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char(c) => {
                        if let Ok(length) = c.to_string().parse::<CodeLength>() {
                            app.choose_length(length);
                        }
                    }
                    _ => {}
                },
                InputMode::ChooseDuplicates => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Esc => app.new_game(),
                    KeyCode::Char(c) => {
                        if let Some(policy) = DuplicatePolicy::from_answer(&c.to_string()) {
                            app.choose_policy(policy);
                        }
                    }
                    _ => {}
                },
                InputMode::Guess => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('?') => app.show_tutorial(),
                    KeyCode::Esc => app.abandon_session(),
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        let limit = app
                            .session
                            .as_ref()
                            .map_or(0, |s| s.settings().length.get());
                        if app.input_buffer.len() < limit {
                            app.input_buffer.push(c);
                        }
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => app.submit_guess(),
                    _ => {}
                },
                InputMode::GameOver => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;

    fn app() -> App {
        App::new(Engine::new(&GameConfig::default().with_seed(31)))
    }

    fn start(app: &mut App, length: CodeLength, policy: DuplicatePolicy) {
        app.choose_length(length);
        app.choose_policy(policy);
    }

    #[test]
    fn setup_flow_starts_session() {
        let mut app = app();
        assert_eq!(app.input_mode, InputMode::ChooseLength);

        app.choose_length(CodeLength::Six);
        assert_eq!(app.input_mode, InputMode::ChooseDuplicates);

        app.choose_policy(DuplicatePolicy::Allowed);
        assert_eq!(app.input_mode, InputMode::Guess);
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.settings().length, CodeLength::Six);
        assert_eq!(app.engine.issued().len(), 1);
    }

    #[test]
    fn invalid_guess_reports_error() {
        let mut app = app();
        start(&mut app, CodeLength::Four, DuplicatePolicy::Forbidden);

        app.input_buffer = "129".to_string();
        app.submit_guess();

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(app.session.as_ref().unwrap().turns_used(), 0);
        // Buffer is kept so the player can fix it
        assert_eq!(app.input_buffer, "129");
    }

    #[test]
    fn winning_guess_archives_and_ends_game() {
        let mut app = app();
        start(&mut app, CodeLength::Four, DuplicatePolicy::Allowed);

        app.input_buffer = app.session.as_ref().unwrap().secret().to_string();
        app.submit_guess();

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.games_played(), 1);
        assert_eq!(app.games_won(), 1);
        assert!(app.input_buffer.is_empty());

        app.new_game();
        assert_eq!(app.input_mode, InputMode::ChooseLength);
        assert!(app.session.is_none());
    }

    #[test]
    fn running_out_of_turns_is_a_loss() {
        let mut app = app();
        start(&mut app, CodeLength::Four, DuplicatePolicy::Forbidden);

        for _ in 0..10 {
            app.input_buffer = "1111".to_string();
            app.submit_guess();
        }

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.games_played(), 1);
        assert_eq!(app.games_won(), 0);
        assert!(app.messages.iter().any(|m| m.text.starts_with("Out of turns!")));
    }

    #[test]
    fn new_game_ignored_mid_session() {
        let mut app = app();
        start(&mut app, CodeLength::Eight, DuplicatePolicy::Forbidden);

        app.new_game();
        assert_eq!(app.input_mode, InputMode::Guess);
        assert!(app.session.is_some());
    }

    #[test]
    fn abandoned_session_is_not_archived() {
        let mut app = app();
        start(&mut app, CodeLength::Four, DuplicatePolicy::Allowed);

        app.abandon_session();
        assert_eq!(app.input_mode, InputMode::ChooseLength);
        assert_eq!(app.games_played(), 0);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
