//! Score command
//!
//! Scores a single guess against a given secret.

use crate::core::{Code, CodeError, Feedback};

/// Result of scoring one guess
pub struct ScoreResult {
    pub secret: Code,
    pub guess: Code,
    pub feedback: Feedback,
}

/// Parse both codes and score the guess
///
/// # Errors
///
/// Returns `CodeError` if either code is malformed or their lengths differ.
pub fn score_codes(secret: &str, guess: &str) -> Result<ScoreResult, CodeError> {
    let secret: Code = secret.parse()?;
    let guess: Code = guess.parse()?;
    let feedback = Feedback::calculate(&secret, &guess)?;

    Ok(ScoreResult {
        secret,
        guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_valid_pair() {
        let result = score_codes("1234", "5247").unwrap();
        assert_eq!(result.feedback.to_string(), "OX__");
        assert_eq!(result.secret.to_string(), "1234");
    }

    #[test]
    fn rejects_malformed_codes() {
        assert_eq!(
            score_codes("1239", "1234").err(),
            Some(CodeError::SymbolOutOfRange('9'))
        );
        assert_eq!(score_codes("1234", "12x4").err(), Some(CodeError::NonDigit));
    }

    #[test]
    fn rejects_length_mismatch() {
        assert_eq!(
            score_codes("1234", "123456").err(),
            Some(CodeError::LengthMismatch {
                secret: 4,
                guess: 6
            })
        );
    }
}
