//! Set of previously issued secret codes
//!
//! A fixed-size hash table with separate chaining. Codes are never removed
//! and the table never resizes.

use crate::core::Code;
use std::num::NonZeroUsize;

/// Bucket count used when none is configured
pub const DEFAULT_BUCKET_COUNT: NonZeroUsize = NonZeroUsize::new(8).unwrap();

/// Robert Sedgewick's rolling string hash over the code's ASCII symbols
///
/// Wrapping 32-bit arithmetic; `a` is multiplied by `b` after every symbol.
///
/// # Examples
/// ```
/// use mastermind::game::rs_hash;
///
/// assert_eq!(rs_hash(b"1234"), 1_501_165_368);
/// ```
#[must_use]
pub fn rs_hash(symbols: &[u8]) -> u32 {
    const B: u32 = 378_551;
    let mut a: u32 = 63_689;
    let mut hash: u32 = 0;

    for &symbol in symbols {
        hash = hash.wrapping_mul(a).wrapping_add(u32::from(symbol));
        a = a.wrapping_mul(B);
    }

    hash
}

/// Chained hash set of issued codes
#[derive(Debug, Clone)]
pub struct IssuedCodes {
    buckets: Vec<Vec<Code>>,
}

impl Default for IssuedCodes {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKET_COUNT)
    }
}

impl IssuedCodes {
    #[must_use]
    pub fn new(bucket_count: NonZeroUsize) -> Self {
        Self {
            buckets: vec![Vec::new(); bucket_count.get()],
        }
    }

    /// Bucket a code hashes to
    #[must_use]
    pub fn bucket_index(&self, code: &Code) -> usize {
        rs_hash(code.symbols()) as usize % self.buckets.len()
    }

    /// Append a code to its bucket
    ///
    /// Recording the same code twice stores it twice.
    pub fn record(&mut self, code: Code) {
        let index = self.bucket_index(&code);
        self.buckets[index].push(code);
    }

    /// Check whether a code was recorded, scanning only its own bucket
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.buckets[self.bucket_index(code)].contains(code)
    }

    #[inline]
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Codes in one bucket, oldest first
    ///
    /// # Panics
    /// Panics if `index >= bucket_count()`
    #[must_use]
    pub fn bucket(&self, index: usize) -> &[Code] {
        &self.buckets[index]
    }

    /// Total number of recorded codes
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// One line per bucket: `Bucket i --> code --> code`
    #[must_use]
    pub fn dump_buckets(&self) -> Vec<String> {
        self.buckets
            .iter()
            .enumerate()
            .map(|(i, bucket)| {
                let mut line = format!("Bucket {i}");
                for code in bucket {
                    line.push_str(" --> ");
                    line.push_str(&code.to_string());
                }
                line
            })
            .collect()
    }
}
