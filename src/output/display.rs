//! Display functions for game statistics and command results

use crate::commands::{GenerateReport, ScoreResult};
use crate::game::Engine;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Write archive, ranking and issued-code tables
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_statistics<W: Write, R: Rng>(out: &mut W, engine: &Engine<R>) -> io::Result<()> {
    writeln!(out, "\n{}", "SCORES IN HISTORY ORDER:".bright_cyan().bold())?;
    for line in engine.dump_archive_in_order() {
        writeln!(out, "{line}")?;
    }

    writeln!(out, "\n{}", "SCORES IN POINTS ORDER:".bright_cyan().bold())?;
    for line in engine.dump_ranked() {
        writeln!(out, "{line}")?;
    }

    writeln!(out, "\n{}", "Hash Table Contents:".bright_cyan().bold())?;
    for line in engine.dump_buckets() {
        writeln!(out, "{line}")?;
    }

    Ok(())
}

/// Print the result of scoring one guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "Secret: {}  Guess: {}  Hint: {}",
        result.secret.to_string().bright_white().bold(),
        result.guess.to_string().bright_white(),
        super::formatters::feedback_colored(result.feedback)
    );
    println!(
        "  Exact: {}  Misplaced: {}  Incorrect: {}",
        result.feedback.exact().to_string().green(),
        result.feedback.misplaced().to_string().yellow(),
        result.feedback.incorrect()
    );
}

/// Print the result of a generation run
pub fn print_generate_report(report: &GenerateReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GENERATED CODES:".bright_cyan().bold(),
        report.settings.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    for code in report.codes.iter().take(20) {
        println!("   {code}");
    }
    if report.codes.len() > 20 {
        println!("   ...and {} more", report.codes.len() - 20);
    }

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Codes generated:        {}", report.codes.len());
    println!(
        "   Previously issued:      {}",
        format!("{}", report.repeats).bright_yellow().bold()
    );
    println!(
        "   With repeated symbols:  {}",
        report.with_repeated_symbols
    );
    println!(
        "   Time taken:             {:.3}s",
        report.duration.as_secs_f64()
    );

    println!("\n🗂  {}", "Hash Table Contents:".bright_cyan().bold());
    for line in &report.buckets {
        println!("   {line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CodeLength, DuplicatePolicy};
    use crate::game::GameConfig;

    #[test]
    fn statistics_sections_in_order() {
        let mut engine = Engine::new(&GameConfig::default().with_seed(1));
        engine.archive_outcome(CodeLength::Six, DuplicatePolicy::Allowed, true);
        engine.record_issued_sequence("1234".parse().unwrap());

        let mut out = Vec::new();
        write_statistics(&mut out, &engine).unwrap();
        let text = String::from_utf8(out).unwrap();

        let history = text.find("SCORES IN HISTORY ORDER").unwrap();
        let points = text.find("SCORES IN POINTS ORDER").unwrap();
        let buckets = text.find("Hash Table Contents").unwrap();
        assert!(history < points && points < buckets);

        assert!(text.contains("Length: 6, Duplicates - Result: Win"));
        assert!(text.contains("Length: 6, Duplicates, Points: 1"));
        assert!(text.contains("Bucket 0 --> 1234"));
        assert!(text.contains("Bucket 7"));
    }
}
