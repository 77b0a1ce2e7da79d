//! Generate command
//!
//! Issues a batch of secret codes and reports how many repeat earlier ones.

use crate::core::{Code, SessionSettings};
use crate::game::Engine;
use rand::Rng;
use std::time::{Duration, Instant};

/// Result of a generation run
pub struct GenerateReport {
    pub settings: SessionSettings,
    pub codes: Vec<Code>,
    pub repeats: usize,
    pub with_repeated_symbols: usize,
    pub buckets: Vec<String>,
    pub duration: Duration,
}

/// Generate `count` codes, recording each one as issued
///
/// A code counts as a repeat if it was issued before it was generated,
/// including earlier in this same run.
pub fn run_generate<R: Rng>(
    engine: &mut Engine<R>,
    count: usize,
    settings: SessionSettings,
) -> GenerateReport {
    let start = Instant::now();
    let mut codes = Vec::with_capacity(count);
    let mut repeats = 0;

    for _ in 0..count {
        let code = engine.generate_sequence(settings.length, settings.policy);
        if engine.was_previously_issued(&code) {
            repeats += 1;
        }
        engine.record_issued_sequence(code.clone());
        codes.push(code);
    }

    let with_repeated_symbols = codes.iter().filter(|c| c.has_repeats()).count();

    GenerateReport {
        settings,
        codes,
        repeats,
        with_repeated_symbols,
        buckets: engine.dump_buckets(),
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CodeLength, DuplicatePolicy};
    use crate::game::GameConfig;

    fn engine() -> Engine {
        Engine::new(&GameConfig::default().with_seed(17))
    }

    #[test]
    fn generates_requested_count() {
        let mut engine = engine();
        let settings = SessionSettings::new(CodeLength::Six, DuplicatePolicy::Forbidden);
        let report = run_generate(&mut engine, 25, settings);

        assert_eq!(report.codes.len(), 25);
        assert_eq!(report.with_repeated_symbols, 0);
        assert_eq!(engine.issued().len(), 25);
        assert_eq!(report.buckets.len(), 8);
    }

    #[test]
    fn repeats_are_counted() {
        let mut engine = engine();
        let settings = SessionSettings::new(CodeLength::Four, DuplicatePolicy::Forbidden);
        let report = run_generate(&mut engine, 2000, settings);

        // 1680 distinct duplicate-free 4-symbol codes exist
        assert!(report.repeats >= 2000 - 1680);
        let distinct: std::collections::HashSet<_> = report.codes.iter().collect();
        assert_eq!(report.repeats, report.codes.len() - distinct.len());
    }

    #[test]
    fn zero_count_is_empty() {
        let mut engine = engine();
        let settings = SessionSettings::new(CodeLength::Four, DuplicatePolicy::Allowed);
        let report = run_generate(&mut engine, 0, settings);

        assert!(report.codes.is_empty());
        assert_eq!(report.repeats, 0);
        assert!(report.buckets.iter().all(|b| !b.contains("-->")));
    }
}
