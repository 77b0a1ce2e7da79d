//! Ranking of archived outcomes by points
//!
//! Records are taken in archive order and stable-sorted by points, highest
//! first, with a top-down merge sort. Ties keep their archive order.

use super::archive::{OutcomeArchive, OutcomeRecord};
use std::fmt;

/// Points awarded for a won session
pub const WIN_POINTS: u32 = 1;

/// A ranked line: session label and points earned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedScore {
    pub label: String,
    pub points: u32,
}

impl From<&OutcomeRecord> for RankedScore {
    fn from(record: &OutcomeRecord) -> Self {
        Self {
            label: record.settings().to_string(),
            points: if record.won() { WIN_POINTS } else { 0 },
        }
    }
}

impl fmt::Display for RankedScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Points: {}", self.label, self.points)
    }
}

/// Rank every archived record, highest points first
///
/// # Examples
/// ```
/// use mastermind::core::{CodeLength, DuplicatePolicy, SessionSettings};
/// use mastermind::game::{OutcomeArchive, OutcomeRecord, rank};
///
/// let mut archive = OutcomeArchive::new();
/// let settings = SessionSettings::new(CodeLength::Four, DuplicatePolicy::Allowed);
/// archive.insert(OutcomeRecord::new(settings, false));
/// archive.insert(OutcomeRecord::new(settings, true));
///
/// let ranked = rank(&archive);
/// assert_eq!(ranked[0].to_string(), "Length: 4, Duplicates, Points: 1");
/// assert_eq!(ranked[1].points, 0);
/// ```
#[must_use]
pub fn rank(archive: &OutcomeArchive) -> Vec<RankedScore> {
    let mut scores: Vec<RankedScore> = archive.iter().map(RankedScore::from).collect();
    merge_sort(&mut scores);
    scores
}

fn merge_sort(scores: &mut [RankedScore]) {
    if scores.len() <= 1 {
        return;
    }

    // Left half takes the extra element on odd lengths
    let mid = scores.len().div_ceil(2);
    merge_sort(&mut scores[..mid]);
    merge_sort(&mut scores[mid..]);
    merge(scores, mid);
}

fn merge(scores: &mut [RankedScore], mid: usize) {
    let left = scores[..mid].to_vec();
    let right = scores[mid..].to_vec();
    let (mut i, mut j) = (0, 0);

    for slot in scores.iter_mut() {
        // Ties go to the left half to keep the sort stable
        let take_left = j >= right.len() || (i < left.len() && left[i].points >= right[j].points);
        if take_left {
            slot.clone_from(&left[i]);
            i += 1;
        } else {
            slot.clone_from(&right[j]);
            j += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CodeLength, DuplicatePolicy, SessionSettings};

    fn score(label: &str, points: u32) -> RankedScore {
        RankedScore {
            label: label.to_string(),
            points,
        }
    }

    #[test]
    fn empty_archive_ranks_to_nothing() {
        assert!(rank(&OutcomeArchive::new()).is_empty());
    }

    #[test]
    fn merge_sort_orders_descending() {
        let mut scores = vec![score("a", 0), score("b", 1), score("c", 0), score("d", 1)];
        merge_sort(&mut scores);

        let points: Vec<u32> = scores.iter().map(|s| s.points).collect();
        assert_eq!(points, vec![1, 1, 0, 0]);
    }

    #[test]
    fn merge_sort_is_stable() {
        let mut scores = vec![
            score("a", 0),
            score("b", 1),
            score("c", 0),
            score("d", 1),
            score("e", 0),
            score("f", 1),
            score("g", 1),
        ];
        merge_sort(&mut scores);

        let labels: Vec<&str> = scores.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "d", "f", "g", "a", "c", "e"]);
    }

    #[test]
    fn merge_sort_handles_small_inputs() {
        let mut empty: Vec<RankedScore> = Vec::new();
        merge_sort(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![score("only", 0)];
        merge_sort(&mut single);
        assert_eq!(single, vec![score("only", 0)]);
    }

    #[test]
    fn rank_keeps_archive_order_among_ties() {
        let mut archive = OutcomeArchive::new();
        let eight = SessionSettings::new(CodeLength::Eight, DuplicatePolicy::Forbidden);
        let four = SessionSettings::new(CodeLength::Four, DuplicatePolicy::Allowed);
        let six = SessionSettings::new(CodeLength::Six, DuplicatePolicy::Allowed);

        archive.insert(OutcomeRecord::new(eight, true));
        archive.insert(OutcomeRecord::new(four, false));
        archive.insert(OutcomeRecord::new(six, true));
        archive.insert(OutcomeRecord::new(four, true));

        let lines: Vec<String> = rank(&archive).iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "Length: 4, Duplicates, Points: 1",
                "Length: 6, Duplicates, Points: 1",
                "Length: 8, No duplicates, Points: 1",
                "Length: 4, Duplicates, Points: 0",
            ]
        );
    }

    #[test]
    fn rank_preserves_count() {
        let mut archive = OutcomeArchive::new();
        let settings = SessionSettings::new(CodeLength::Six, DuplicatePolicy::Forbidden);
        for i in 0..25 {
            archive.insert(OutcomeRecord::new(settings, i % 4 == 1));
        }

        let ranked = rank(&archive);
        assert_eq!(ranked.len(), 25);
        assert!(ranked.windows(2).all(|w| w[0].points >= w[1].points));
    }
}
