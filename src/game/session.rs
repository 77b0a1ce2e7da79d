//! A single game session
//!
//! Owns the secret, the turn budget and the guess history. A session ends
//! on the first exact guess or when the last turn is spent.

use super::archive::OutcomeRecord;
use crate::core::{Code, CodeError, Feedback, SessionSettings};
use std::num::NonZeroUsize;
use tracing::debug;

/// Turns a player gets when none are configured
pub const DEFAULT_TURNS: NonZeroUsize = NonZeroUsize::new(10).unwrap();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Won,
    Lost,
}

impl SessionStatus {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Code,
    pub feedback: Feedback,
}

#[derive(Debug, Clone)]
pub struct Session {
    secret: Code,
    settings: SessionSettings,
    max_turns: usize,
    history: Vec<Turn>,
    status: SessionStatus,
    repeated: bool,
    archived: bool,
}

impl Session {
    /// Start a session around an already generated secret
    ///
    /// # Panics
    /// Panics in debug mode if the secret does not match the settings' length
    #[must_use]
    pub fn new(secret: Code, settings: SessionSettings, max_turns: usize) -> Self {
        debug_assert_eq!(secret.len(), settings.length.get());
        Self {
            secret,
            settings,
            max_turns,
            history: Vec::new(),
            status: SessionStatus::InProgress,
            repeated: false,
            archived: false,
        }
    }

    pub(crate) const fn mark_repeated(&mut self) {
        self.repeated = true;
    }

    /// Score a guess and advance the turn counter
    ///
    /// Submitting to a finished session changes nothing and returns its final status.
    ///
    /// # Errors
    /// Returns `CodeError::LengthMismatch` if the guess length differs from the secret's.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{CodeLength, DuplicatePolicy, SessionSettings};
    /// use mastermind::game::{Session, SessionStatus};
    ///
    /// let settings = SessionSettings::new(CodeLength::Four, DuplicatePolicy::Forbidden);
    /// let mut session = Session::new("1234".parse().unwrap(), settings, 10);
    ///
    /// let status = session.submit("5247".parse().unwrap()).unwrap();
    /// assert_eq!(status, SessionStatus::InProgress);
    /// assert_eq!(session.last_turn().unwrap().feedback.to_string(), "OX__");
    ///
    /// let status = session.submit("1234".parse().unwrap()).unwrap();
    /// assert_eq!(status, SessionStatus::Won);
    /// ```
    pub fn submit(&mut self, guess: Code) -> Result<SessionStatus, CodeError> {
        if self.status.is_finished() {
            return Ok(self.status);
        }

        let feedback = Feedback::calculate(&self.secret, &guess)?;
        debug!(%guess, %feedback, turn = self.history.len() + 1, "scored guess");
        self.history.push(Turn { guess, feedback });

        if feedback.is_solved() {
            self.status = SessionStatus::Won;
        } else if self.turns_left() == 0 {
            self.status = SessionStatus::Lost;
        }

        Ok(self.status)
    }

    /// The outcome to archive, handed out once per finished session
    pub(crate) fn take_outcome(&mut self) -> Option<OutcomeRecord> {
        if !self.status.is_finished() || self.archived {
            return None;
        }

        self.archived = true;
        Some(OutcomeRecord::new(
            self.settings,
            self.status == SessionStatus::Won,
        ))
    }

    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    #[must_use]
    pub const fn settings(&self) -> SessionSettings {
        self.settings
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Whether the secret had already been issued in an earlier session
    #[must_use]
    pub const fn is_repeat(&self) -> bool {
        self.repeated
    }

    #[must_use]
    pub const fn max_turns(&self) -> usize {
        self.max_turns
    }

    #[must_use]
    pub fn turns_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn turns_left(&self) -> usize {
        self.max_turns.saturating_sub(self.history.len())
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub fn last_turn(&self) -> Option<&Turn> {
        self.history.last()
    }
}
