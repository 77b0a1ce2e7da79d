//! Command implementations

pub mod generate;
pub mod score;
pub mod simple;

pub use generate::{GenerateReport, run_generate};
pub use score::{ScoreResult, score_codes};
pub use simple::run_simple;
