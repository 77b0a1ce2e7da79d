//! Guess scoring and feedback representation
//!
//! Feedback is reported as counts only:
//! - `O` = right symbol, right position (exact)
//! - `X` = right symbol, wrong position (misplaced)
//! - `_` = symbol not matched (incorrect)
//!
//! The textual form always lists every `O`, then every `X`, then every `_`,
//! so it never reveals which position produced which marker.

use super::{Code, CodeError};
use rustc_hash::FxHashMap;
use std::fmt;

/// Marker for an exact match
pub const EXACT_MARKER: char = 'O';

/// Marker for a misplaced match
pub const MISPLACED_MARKER: char = 'X';

/// Marker for an incorrect symbol
pub const INCORRECT_MARKER: char = '_';

/// Score of one guess against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    exact: usize,
    misplaced: usize,
    length: usize,
}

/// Error returned when a feedback string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackParseError {
    InvalidMarker(char),
    OutOfOrder,
    UnsupportedLength(usize),
}

impl fmt::Display for FeedbackParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMarker(ch) => write!(f, "Invalid feedback marker '{ch}'"),
            Self::OutOfOrder => write!(f, "Feedback markers must be ordered O, X, _"),
            Self::UnsupportedLength(len) => write!(f, "Invalid feedback length {len}"),
        }
    }
}

impl std::error::Error for FeedbackParseError {}

impl Feedback {
    /// Create feedback from raw counts
    ///
    /// # Panics
    /// Panics in debug mode if `exact + misplaced > length`
    #[inline]
    #[must_use]
    pub const fn new(exact: usize, misplaced: usize, length: usize) -> Self {
        debug_assert!(exact + misplaced <= length, "Counts exceed code length");
        Self {
            exact,
            misplaced,
            length,
        }
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: count exact matches; every mismatched secret symbol goes
    ///    into a leftover pool
    /// 2. Second pass: walk mismatched positions left to right; a guess symbol
    ///    still present in the pool is misplaced and consumes one pool entry
    ///
    /// # Errors
    /// Returns `CodeError::LengthMismatch` if the codes differ in length.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Feedback};
    ///
    /// let secret: Code = "1234".parse().unwrap();
    /// let guess: Code = "5247".parse().unwrap();
    /// let feedback = Feedback::calculate(&secret, &guess).unwrap();
    ///
    /// // '2' is exact, '4' is misplaced, '5' and '7' are incorrect
    /// assert_eq!(feedback.exact(), 1);
    /// assert_eq!(feedback.misplaced(), 1);
    /// assert_eq!(feedback.to_string(), "OX__");
    /// ```
    pub fn calculate(secret: &Code, guess: &Code) -> Result<Self, CodeError> {
        if secret.len() != guess.len() {
            return Err(CodeError::LengthMismatch {
                secret: secret.len(),
                guess: guess.len(),
            });
        }

        let pairs = || secret.symbols().iter().zip(guess.symbols());

        let mut exact = 0;
        let mut leftover: FxHashMap<u8, usize> = FxHashMap::default();
        for (&s, &g) in pairs() {
            if s == g {
                exact += 1;
            } else {
                *leftover.entry(s).or_insert(0) += 1;
            }
        }

        let mut misplaced = 0;
        for (&s, &g) in pairs() {
            if s != g
                && let Some(count) = leftover.get_mut(&g)
                && *count > 0
            {
                misplaced += 1;
                *count -= 1;
            }
        }

        Ok(Self::new(exact, misplaced, secret.len()))
    }

    #[inline]
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact
    }

    #[inline]
    #[must_use]
    pub const fn misplaced(self) -> usize {
        self.misplaced
    }

    /// Symbols that matched neither way
    #[inline]
    #[must_use]
    pub const fn incorrect(self) -> usize {
        self.length - self.exact - self.misplaced
    }

    /// Length of the scored code
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.length == 0
    }

    /// Check if every position matched exactly
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.exact == self.length
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut hint = String::with_capacity(self.length);
        hint.extend(std::iter::repeat_n(EXACT_MARKER, self.exact));
        hint.extend(std::iter::repeat_n(MISPLACED_MARKER, self.misplaced));
        hint.extend(std::iter::repeat_n(INCORRECT_MARKER, self.incorrect()));
        f.write_str(&hint)
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackParseError;

    /// Parse a hint such as `"OOX_"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.chars().count();
        if !matches!(length, 4 | 6 | 8) {
            return Err(FeedbackParseError::UnsupportedLength(length));
        }

        let mut counts = [0usize; 3];
        let mut last_rank = 0;
        for ch in s.chars() {
            let rank = match ch {
                EXACT_MARKER => 0,
                MISPLACED_MARKER => 1,
                INCORRECT_MARKER => 2,
                other => return Err(FeedbackParseError::InvalidMarker(other)),
            };
            if rank < last_rank {
                return Err(FeedbackParseError::OutOfOrder);
            }
            last_rank = rank;
            counts[rank] += 1;
        }

        Ok(Self::new(counts[0], counts[1], length))
    }
}
