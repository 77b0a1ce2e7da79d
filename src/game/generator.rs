//! Secret code generation
//!
//! Draws codes by rejection sampling: the whole alphabet is reshuffled before
//! every draw and the first symbol is the candidate. When duplicates are
//! forbidden, a candidate already in the code is rejected and the next draw
//! reshuffles the full pool again.

use crate::core::{Code, CodeLength, DuplicatePolicy, MAX_SYMBOL, MIN_SYMBOL};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use rustc_hash::FxHashSet;
use std::fmt;
use tracing::debug;

/// The set of symbols a code may be drawn from
///
/// Symbols are deduplicated on construction, keeping first occurrences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<u8>,
}

impl Alphabet {
    #[must_use]
    pub fn new(symbols: impl IntoIterator<Item = u8>) -> Self {
        let mut seen = FxHashSet::default();
        let symbols = symbols.into_iter().filter(|s| seen.insert(*s)).collect();
        Self { symbols }
    }

    /// Digits `1` through `8`
    #[must_use]
    pub fn standard() -> Self {
        Self::new(MIN_SYMBOL..=MAX_SYMBOL)
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

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
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard()
    }
}

/// Error type for generation requests that can never be satisfied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    EmptyAlphabet,
    AlphabetTooSmall { alphabet: usize, length: usize },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAlphabet => write!(f, "Cannot generate a code from an empty alphabet"),
            Self::AlphabetTooSmall { alphabet, length } => write!(
                f,
                "A {length}-symbol code without duplicates needs at least {length} symbols, \
                 alphabet has {alphabet}"
            ),
        }
    }
}

impl std::error::Error for GenerateError {}

/// Random code generator with an injected random source
pub struct CodeGenerator<R = StdRng> {
    rng: R,
}

impl CodeGenerator<StdRng> {
    /// Deterministic generator for a fixed seed
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded once from the operating system
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> CodeGenerator<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a code over the standard alphabet
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{CodeLength, DuplicatePolicy};
    /// use mastermind::game::CodeGenerator;
    ///
    /// let mut generator = CodeGenerator::from_seed(7);
    /// let code = generator.generate(CodeLength::Eight, DuplicatePolicy::Forbidden);
    ///
    /// assert_eq!(code.len(), 8);
    /// assert!(!code.has_repeats());
    /// ```
    pub fn generate(&mut self, length: CodeLength, policy: DuplicatePolicy) -> Code {
        // The standard alphabet is as large as the longest supported code
        let alphabet = Alphabet::standard();
        Code::from_symbols(self.draw(length.get(), &alphabet, policy))
    }

    /// Generate a code of any length over a custom alphabet
    ///
    /// # Errors
    /// Returns `GenerateError` if the alphabet is empty, or if duplicates are
    /// forbidden and the alphabet has fewer symbols than `length`.
    pub fn generate_from(
        &mut self,
        length: usize,
        alphabet: &Alphabet,
        policy: DuplicatePolicy,
    ) -> Result<Code, GenerateError> {
        if alphabet.is_empty() {
            return Err(GenerateError::EmptyAlphabet);
        }

        if !policy.allows_duplicates() && alphabet.len() < length {
            return Err(GenerateError::AlphabetTooSmall {
                alphabet: alphabet.len(),
                length,
            });
        }

        Ok(Code::from_symbols(self.draw(length, alphabet, policy)))
    }

    fn draw(&mut self, length: usize, alphabet: &Alphabet, policy: DuplicatePolicy) -> Vec<u8> {
        let mut pool = alphabet.symbols().to_vec();
        let mut used = FxHashSet::default();
        let mut code = Vec::with_capacity(length);
        let mut attempts = 0usize;

        while code.len() < length {
            pool.shuffle(&mut self.rng);
            attempts += 1;

            let candidate = pool[0];
            if policy.allows_duplicates() || used.insert(candidate) {
                code.push(candidate);
            }
        }

        debug!(length, ?policy, attempts, "generated code");
        code
    }
}
