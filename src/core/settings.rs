//! Session settings: code length and duplicate policy
//!
//! Both values are chosen once per session and recorded with its outcome.
//! `SessionSettings` orders by length first, then policy, which is the key
//! the outcome archive sorts on.

use super::CodeError;
use std::fmt;

/// Supported code lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CodeLength {
    Four,
    Six,
    Eight,
}

impl CodeLength {
    /// Every supported length, shortest first
    pub const ALL: [Self; 3] = [Self::Four, Self::Six, Self::Eight];

    /// Number of symbols in a code of this length
    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        match self {
            Self::Four => 4,
            Self::Six => 6,
            Self::Eight => 8,
        }
    }
}

impl TryFrom<usize> for CodeLength {
    type Error = CodeError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::Four),
            6 => Ok(Self::Six),
            8 => Ok(Self::Eight),
            other => Err(CodeError::UnsupportedLength(other)),
        }
    }
}

impl std::str::FromStr for CodeLength {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s.trim().parse().map_err(|_| CodeError::NonDigit)?;
        Self::try_from(value)
    }
}

impl fmt::Display for CodeLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Whether a generated code may repeat symbols
///
/// `Forbidden` sorts before `Allowed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DuplicatePolicy {
    Forbidden,
    Allowed,
}

impl DuplicatePolicy {
    #[must_use]
    pub const fn from_allowed(allowed: bool) -> Self {
        if allowed { Self::Allowed } else { Self::Forbidden }
    }

    #[inline]
    #[must_use]
    pub const fn allows_duplicates(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Display label used in statistics output
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Allowed => "Duplicates",
            Self::Forbidden => "No duplicates",
        }
    }

    /// Parse a `y`/`n` answer (case-insensitive)
    #[must_use]
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Some(Self::Allowed),
            "n" | "no" => Some(Self::Forbidden),
            _ => None,
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Configuration fixed for the lifetime of one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionSettings {
    pub length: CodeLength,
    pub policy: DuplicatePolicy,
}

impl SessionSettings {
    #[must_use]
    pub const fn new(length: CodeLength, policy: DuplicatePolicy) -> Self {
        Self { length, policy }
    }
}

impl fmt::Display for SessionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Length: {}, {}", self.length, self.policy)
    }
}
