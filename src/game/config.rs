//! Engine configuration

use super::issued::DEFAULT_BUCKET_COUNT;
use super::session::DEFAULT_TURNS;
use std::num::NonZeroUsize;

/// Settings that hold for every session of one process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Guesses allowed per session
    pub max_turns: NonZeroUsize,
    /// Buckets in the issued-code table
    pub bucket_count: NonZeroUsize,
    /// Fixed seed for reproducible codes; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_TURNS,
            bucket_count: DEFAULT_BUCKET_COUNT,
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
