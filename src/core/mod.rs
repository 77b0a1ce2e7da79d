//! Core domain types for Mastermind
//!
//! Codes, session settings and feedback scoring. Everything here is pure
//! and deterministic; randomness and bookkeeping live in [`crate::game`].

mod code;
mod feedback;
mod settings;

pub use code::{Code, CodeError, MAX_SYMBOL, MIN_SYMBOL};
pub use feedback::{
    EXACT_MARKER, Feedback, FeedbackParseError, INCORRECT_MARKER, MISPLACED_MARKER,
};
pub use settings::{CodeLength, DuplicatePolicy, SessionSettings};
