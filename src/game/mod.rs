//! Game engine
//!
//! Code generation, session control, the outcome archive with its ranking,
//! and the issued-code set used for repeat detection.

pub mod archive;
mod config;
mod engine;
pub mod generator;
pub mod issued;
pub mod ranker;
pub mod session;

pub use archive::{InOrder, OutcomeArchive, OutcomeRecord};
pub use config::GameConfig;
pub use engine::Engine;
pub use generator::{Alphabet, CodeGenerator, GenerateError};
pub use issued::{DEFAULT_BUCKET_COUNT, IssuedCodes, rs_hash};
pub use ranker::{RankedScore, WIN_POINTS, rank};
pub use session::{DEFAULT_TURNS, Session, SessionStatus, Turn};
