//! Ordered archive of session outcomes
//!
//! An insert-only binary search tree keyed by [`SessionSettings`]. Nodes live in
//! an arena and refer to their children by index. Equal keys always descend to
//! the right, so records sharing a key form a right-leaning chain that
//! preserves insertion order.

use crate::core::{CodeLength, DuplicatePolicy, SessionSettings};
use std::fmt;
use tracing::debug;

/// The result of one completed session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeRecord {
    settings: SessionSettings,
    won: bool,
}

impl OutcomeRecord {
    #[must_use]
    pub const fn new(settings: SessionSettings, won: bool) -> Self {
        Self { settings, won }
    }

    /// Ordering key within the archive
    #[inline]
    #[must_use]
    pub const fn settings(&self) -> SessionSettings {
        self.settings
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> CodeLength {
        self.settings.length
    }

    #[inline]
    #[must_use]
    pub const fn policy(&self) -> DuplicatePolicy {
        self.settings.policy
    }

    #[inline]
    #[must_use]
    pub const fn won(&self) -> bool {
        self.won
    }
}

impl fmt::Display for OutcomeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Result: {}",
            self.settings,
            if self.won { "Win" } else { "Loss" }
        )
    }
}

#[derive(Debug)]
struct Node {
    record: OutcomeRecord,
    left: Option<usize>,
    right: Option<usize>,
}

/// Binary search tree of outcome records
#[derive(Debug, Default)]
pub struct OutcomeArchive {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl OutcomeArchive {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record as a new leaf
    ///
    /// Keys smaller than a node's key go left; equal or greater keys go right.
    pub fn insert(&mut self, record: OutcomeRecord) {
        let index = self.nodes.len();
        let key = record.settings();
        let mut depth = 0usize;

        if let Some(mut current) = self.root {
            loop {
                depth += 1;
                let node = &mut self.nodes[current];
                let slot = if key < node.record.settings() {
                    &mut node.left
                } else {
                    &mut node.right
                };

                match *slot {
                    Some(child) => current = child,
                    None => {
                        *slot = Some(index);
                        break;
                    }
                }
            }
        } else {
            self.root = Some(index);
        }

        self.nodes.push(Node {
            record,
            left: None,
            right: None,
        });
        debug!(%record, depth, "archived outcome");
    }

    /// Number of archived records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate records in ascending key order
    ///
    /// Records with equal keys come out in insertion order.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{CodeLength, DuplicatePolicy, SessionSettings};
    /// use mastermind::game::{OutcomeArchive, OutcomeRecord};
    ///
    /// let mut archive = OutcomeArchive::new();
    /// let long = SessionSettings::new(CodeLength::Eight, DuplicatePolicy::Allowed);
    /// let short = SessionSettings::new(CodeLength::Four, DuplicatePolicy::Allowed);
    /// archive.insert(OutcomeRecord::new(long, true));
    /// archive.insert(OutcomeRecord::new(short, false));
    ///
    /// let lengths: Vec<usize> = archive.iter().map(|r| r.length().get()).collect();
    /// assert_eq!(lengths, vec![4, 8]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> InOrder<'_> {
        InOrder {
            nodes: &self.nodes,
            stack: Vec::new(),
            next: self.root,
        }
    }

    /// One line per record in key order
    #[must_use]
    pub fn dump_in_order(&self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a OutcomeArchive {
    type Item = &'a OutcomeRecord;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order traversal driven by an explicit stack
pub struct InOrder<'a> {
    nodes: &'a [Node],
    stack: Vec<usize>,
    next: Option<usize>,
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a OutcomeRecord;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(index) = self.next {
            self.stack.push(index);
            self.next = self.nodes[index].left;
        }

        let index = self.stack.pop()?;
        let node = &self.nodes[index];
        self.next = node.right;
        Some(&node.record)
    }
}
