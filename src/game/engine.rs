//! Game engine facade
//!
//! Ties together code generation, scoring, the outcome archive, ranking and
//! the issued-code set. Front ends drive sessions through this type only.

use super::archive::{OutcomeArchive, OutcomeRecord};
use super::config::GameConfig;
use super::generator::CodeGenerator;
use super::issued::IssuedCodes;
use super::ranker::{RankedScore, rank};
use super::session::Session;
use crate::core::{Code, CodeError, CodeLength, DuplicatePolicy, Feedback, SessionSettings};
use rand::Rng;
use rand::rngs::StdRng;
use tracing::{info, warn};

/// Main Mastermind engine
pub struct Engine<R = StdRng> {
    generator: CodeGenerator<R>,
    archive: OutcomeArchive,
    issued: IssuedCodes,
    max_turns: usize,
}

impl Engine<StdRng> {
    /// Create an engine, seeding its generator from the config or the OS
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let generator = match config.seed {
            Some(seed) => CodeGenerator::from_seed(seed),
            None => CodeGenerator::from_entropy(),
        };
        Self::with_generator(generator, config)
    }
}

impl<R: Rng> Engine<R> {
    /// Create an engine around an existing generator; `config.seed` is ignored
    #[must_use]
    pub fn with_generator(generator: CodeGenerator<R>, config: &GameConfig) -> Self {
        Self {
            generator,
            archive: OutcomeArchive::new(),
            issued: IssuedCodes::new(config.bucket_count),
            max_turns: config.max_turns.get(),
        }
    }

    /// Generate a secret without recording it
    pub fn generate_sequence(&mut self, length: CodeLength, policy: DuplicatePolicy) -> Code {
        self.generator.generate(length, policy)
    }

    /// Score a guess and render the hint string
    ///
    /// # Errors
    /// Returns `CodeError::LengthMismatch` if the codes differ in length.
    pub fn score_guess(&self, secret: &Code, guess: &Code) -> Result<String, CodeError> {
        Feedback::calculate(secret, guess).map(|feedback| feedback.to_string())
    }

    pub fn archive_outcome(&mut self, length: CodeLength, policy: DuplicatePolicy, won: bool) {
        self.archive
            .insert(OutcomeRecord::new(SessionSettings::new(length, policy), won));
    }

    /// Archive lines in key order
    #[must_use]
    pub fn dump_archive_in_order(&self) -> Vec<String> {
        self.archive.dump_in_order()
    }

    /// Archive lines ranked by points
    #[must_use]
    pub fn dump_ranked(&self) -> Vec<String> {
        self.ranked().iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn ranked(&self) -> Vec<RankedScore> {
        rank(&self.archive)
    }

    pub fn record_issued_sequence(&mut self, code: Code) {
        self.issued.record(code);
    }

    #[must_use]
    pub fn was_previously_issued(&self, code: &Code) -> bool {
        self.issued.contains(code)
    }

    #[must_use]
    pub fn dump_buckets(&self) -> Vec<String> {
        self.issued.dump_buckets()
    }

    /// Generate and record a secret, then open a session around it
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{CodeLength, DuplicatePolicy, SessionSettings};
    /// use mastermind::game::{Engine, GameConfig};
    ///
    /// let mut engine = Engine::new(&GameConfig::default().with_seed(1));
    /// let settings = SessionSettings::new(CodeLength::Six, DuplicatePolicy::Allowed);
    /// let mut session = engine.start_session(settings);
    ///
    /// let secret = session.secret().clone();
    /// session.submit(secret).unwrap();
    /// engine.finish_session(&mut session);
    ///
    /// assert_eq!(
    ///     engine.dump_archive_in_order(),
    ///     vec!["Length: 6, Duplicates - Result: Win"]
    /// );
    /// ```
    pub fn start_session(&mut self, settings: SessionSettings) -> Session {
        let secret = self.generate_sequence(settings.length, settings.policy);
        let repeated = self.was_previously_issued(&secret);
        if repeated {
            warn!(%secret, "secret code was issued before");
        }
        self.record_issued_sequence(secret.clone());

        info!(%settings, max_turns = self.max_turns, "session started");
        let mut session = Session::new(secret, settings, self.max_turns);
        if repeated {
            session.mark_repeated();
        }
        session
    }

    /// Archive a finished session's outcome
    ///
    /// Returns the archived record, or `None` if the session is still running
    /// or was already archived.
    pub fn finish_session(&mut self, session: &mut Session) -> Option<OutcomeRecord> {
        let record = session.take_outcome()?;
        info!(
            %record,
            turns = session.turns_used(),
            "session finished"
        );
        self.archive.insert(record);
        Some(record)
    }

    #[must_use]
    pub const fn archive(&self) -> &OutcomeArchive {
        &self.archive
    }

    #[must_use]
    pub const fn issued(&self) -> &IssuedCodes {
        &self.issued
    }

    #[must_use]
    pub const fn max_turns(&self) -> usize {
        self.max_turns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SessionStatus;

    fn engine() -> Engine {
        Engine::new(&GameConfig::default().with_seed(2024))
    }

    #[test]
    fn score_guess_renders_hint() {
        let engine = engine();
        let secret: Code = "1234".parse().unwrap();
        let guess: Code = "5247".parse().unwrap();
        assert_eq!(engine.score_guess(&secret, &guess).unwrap(), "OX__");
    }

    #[test]
    fn archive_and_rank() {
        let mut engine = engine();
        engine.archive_outcome(CodeLength::Eight, DuplicatePolicy::Allowed, false);
        engine.archive_outcome(CodeLength::Four, DuplicatePolicy::Forbidden, false);
        engine.archive_outcome(CodeLength::Six, DuplicatePolicy::Allowed, true);

        assert_eq!(
            engine.dump_archive_in_order(),
            vec![
                "Length: 4, No duplicates - Result: Loss",
                "Length: 6, Duplicates - Result: Win",
                "Length: 8, Duplicates - Result: Loss",
            ]
        );
        assert_eq!(
            engine.dump_ranked(),
            vec![
                "Length: 6, Duplicates, Points: 1",
                "Length: 4, No duplicates, Points: 0",
                "Length: 8, Duplicates, Points: 0",
            ]
        );
    }

    #[test]
    fn start_session_records_secret() {
        let mut engine = engine();
        let settings = SessionSettings::new(CodeLength::Four, DuplicatePolicy::Forbidden);
        let session = engine.start_session(settings);

        assert!(engine.was_previously_issued(session.secret()));
        assert!(!session.is_repeat());
        assert_eq!(session.max_turns(), 10);
        assert_eq!(engine.issued().len(), 1);
    }

    #[test]
    fn repeated_secret_is_flagged() {
        let mut engine = engine();
        let settings = SessionSettings::new(CodeLength::Four, DuplicatePolicy::Forbidden);

        // 1680 possible codes, so a repeat turns up well within 500 sessions
        let repeat = (0..500).map(|_| engine.start_session(settings)).find(Session::is_repeat);
        assert!(repeat.is_some());
    }

    #[test]
    fn finish_session_archives_once() {
        let mut engine = engine();
        let settings = SessionSettings::new(CodeLength::Four, DuplicatePolicy::Allowed);
        let mut session = engine.start_session(settings);

        assert!(engine.finish_session(&mut session).is_none());

        let secret = session.secret().clone();
        assert_eq!(session.submit(secret), Ok(SessionStatus::Won));

        assert!(engine.finish_session(&mut session).is_some());
        assert!(engine.finish_session(&mut session).is_none());
        assert_eq!(engine.archive().len(), 1);
    }

    #[test]
    fn lost_session_scores_zero() {
        let mut engine = engine();
        let settings = SessionSettings::new(CodeLength::Four, DuplicatePolicy::Forbidden);
        let mut session = engine.start_session(settings);

        // A duplicate-free secret can never equal "1111"
        while !session.is_finished() {
            session.submit("1111".parse().unwrap()).unwrap();
        }

        let record = engine.finish_session(&mut session).unwrap();
        assert!(!record.won());
        assert_eq!(engine.dump_ranked(), vec!["Length: 4, No duplicates, Points: 0"]);
    }
}
