//! Code representation
//!
//! A Code is an ordered sequence of digit symbols, used both for the hidden
//! secret and for every guess scored against it.

use super::CodeLength;
use std::fmt;

/// Lowest symbol of the game alphabet
pub const MIN_SYMBOL: u8 = b'1';

/// Highest symbol of the game alphabet
pub const MAX_SYMBOL: u8 = b'8';

/// A secret code or a guess
///
/// Symbols are stored as ASCII digit bytes (`b'1'..=b'8'` for the standard alphabet).
/// Equality is element-wise and order-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    symbols: Vec<u8>,
}

/// Error type for rejected codes and guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    Empty,
    NonDigit,
    InvalidLength { expected: usize, actual: usize },
    SymbolOutOfRange(char),
    UnsupportedLength(usize),
    LengthMismatch { secret: usize, guess: usize },
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Input cannot be empty. Please try again."),
            Self::NonDigit => {
                write!(f, "Guess contains invalid characters. Use only numbers.")
            }
            Self::InvalidLength { expected, actual } => write!(
                f,
                "Guess length does not match the code length (expected {expected}, got {actual})."
            ),
            Self::SymbolOutOfRange(ch) => {
                write!(f, "Guess contains invalid numbers ('{ch}'). Only use 1 to 8.")
            }
            Self::UnsupportedLength(len) => {
                write!(f, "Invalid code length {len}. Please enter 4, 6, or 8.")
            }
            Self::LengthMismatch { secret, guess } => write!(
                f,
                "Cannot score a {guess}-symbol guess against a {secret}-symbol code"
            ),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Parse a guess typed by the player for a session of the given length
    ///
    /// Checks run in a fixed order: empty input, non-digit characters, length,
    /// then alphabet range.
    ///
    /// # Errors
    /// Returns `CodeError` describing the first rule the input breaks.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, CodeError, CodeLength};
    ///
    /// let guess = Code::parse("5247", CodeLength::Four).unwrap();
    /// assert_eq!(guess.to_string(), "5247");
    ///
    /// assert_eq!(Code::parse("12a4", CodeLength::Four), Err(CodeError::NonDigit));
    /// assert_eq!(
    ///     Code::parse("1239", CodeLength::Four),
    ///     Err(CodeError::SymbolOutOfRange('9'))
    /// );
    /// ```
    pub fn parse(input: &str, length: CodeLength) -> Result<Self, CodeError> {
        validate_digits(input)?;

        if input.len() != length.get() {
            return Err(CodeError::InvalidLength {
                expected: length.get(),
                actual: input.len(),
            });
        }

        Self::from_digits(input)
    }

    /// Build a code from raw symbols without validation
    ///
    /// Used by the generator, which only draws from a validated alphabet.
    pub(crate) const fn from_symbols(symbols: Vec<u8>) -> Self {
        Self { symbols }
    }

    fn from_digits(input: &str) -> Result<Self, CodeError> {
        if let Some(out_of_range) = input
            .bytes()
            .find(|b| !(MIN_SYMBOL..=MAX_SYMBOL).contains(b))
        {
            return Err(CodeError::SymbolOutOfRange(char::from(out_of_range)));
        }

        Ok(Self {
            symbols: input.as_bytes().to_vec(),
        })
    }

    /// Get the symbols as ASCII bytes
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Number of symbols in the code
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check whether any symbol occurs more than once
    #[must_use]
    pub fn has_repeats(&self) -> bool {
        self.symbols
            .iter()
            .enumerate()
            .any(|(i, symbol)| self.symbols[i + 1..].contains(symbol))
    }
}

fn validate_digits(input: &str) -> Result<(), CodeError> {
    if input.is_empty() {
        return Err(CodeError::Empty);
    }

    if !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(CodeError::NonDigit);
    }

    Ok(())
}

impl std::str::FromStr for Code {
    type Err = CodeError;

    /// Parse a code of any supported length (4, 6 or 8)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_digits(s)?;
        let length = CodeLength::try_from(s.len())?;
        Self::parse(s, length)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &symbol in &self.symbols {
            write!(f, "{}", char::from(symbol))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_guess() {
        let code = Code::parse("12345678", CodeLength::Eight).unwrap();
        assert_eq!(code.symbols(), b"12345678");
        assert_eq!(code.len(), 8);
        assert!(!code.is_empty());
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(Code::parse("", CodeLength::Four), Err(CodeError::Empty));
    }

    #[test]
    fn parse_rejects_non_digits_before_length() {
        // Non-digit check wins even when the length is also wrong
        assert_eq!(Code::parse("ab", CodeLength::Four), Err(CodeError::NonDigit));
        assert_eq!(Code::parse("12 4", CodeLength::Four), Err(CodeError::NonDigit));
        assert_eq!(Code::parse("-123", CodeLength::Four), Err(CodeError::NonDigit));
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            Code::parse("123456", CodeLength::Four),
            Err(CodeError::InvalidLength {
                expected: 4,
                actual: 6
            })
        );
    }

    #[test]
    fn parse_rejects_out_of_range_digits() {
        assert_eq!(
            Code::parse("0123", CodeLength::Four),
            Err(CodeError::SymbolOutOfRange('0'))
        );
        assert_eq!(
            Code::parse("123459", CodeLength::Six),
            Err(CodeError::SymbolOutOfRange('9'))
        );
    }

    #[test]
    fn from_str_infers_length() {
        let code: Code = "876543".parse().unwrap();
        assert_eq!(code.len(), 6);

        assert_eq!(
            "12345".parse::<Code>(),
            Err(CodeError::UnsupportedLength(5))
        );
    }

    #[test]
    fn display_round_trips_text() {
        let code: Code = "1122".parse().unwrap();
        assert_eq!(format!("{code}"), "1122");
    }

    #[test]
    fn equality_is_order_sensitive() {
        let a: Code = "1234".parse().unwrap();
        let b: Code = "4321".parse().unwrap();
        let c: Code = "1234".parse().unwrap();

        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn detects_repeated_symbols() {
        assert!("1123".parse::<Code>().unwrap().has_repeats());
        assert!("12345671".parse::<Code>().unwrap().has_repeats());
        assert!(!"1234".parse::<Code>().unwrap().has_repeats());
    }

    #[test]
    fn error_messages_guide_the_player() {
        assert_eq!(
            CodeError::NonDigit.to_string(),
            "Guess contains invalid characters. Use only numbers."
        );
        assert!(CodeError::SymbolOutOfRange('9').to_string().contains("1 to 8"));
    }
}
