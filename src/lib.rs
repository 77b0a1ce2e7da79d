//! Mastermind
//!
//! A code-breaking game engine: secret generation, O/X/_ feedback scoring,
//! an ordered archive of past outcomes, points ranking and a hashed record
//! of every code issued.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, CodeLength, DuplicatePolicy, SessionSettings};
//! use mastermind::game::{Engine, GameConfig, SessionStatus};
//!
//! let mut engine = Engine::new(&GameConfig::default().with_seed(42));
//! let settings = SessionSettings::new(CodeLength::Four, DuplicatePolicy::Forbidden);
//! let mut session = engine.start_session(settings);
//!
//! let guess = Code::parse("1234", CodeLength::Four).unwrap();
//! let status = session.submit(guess).unwrap();
//! println!("Hint: {}", session.last_turn().unwrap().feedback);
//!
//! if status == SessionStatus::Won {
//!     engine.finish_session(&mut session);
//! }
//! ```

// Core domain types
pub mod core;

// Game engine: generation, archive, ranking, issued codes
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
