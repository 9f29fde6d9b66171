//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::index_set::IndexSet;
use crate::matchable::{verdict_by_identity, Identifiable, Matchable};
use crate::types::{Match, SequenceIndex, Verdict};
use std::collections::BTreeSet;

/// A list row with an identity (`id`) separate from its content (`label`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: u32,
    pub label: String,
}

impl Identifiable for Row {
    type Identifier = u32;

    fn identifier(&self) -> &u32 {
        &self.id
    }
}

impl Matchable for Row {
    fn match_with(&self, other: &Self) -> Verdict {
        verdict_by_identity(self, other)
    }
}

/// Create a row.
///
/// This is the canonical implementation used across all tests.
pub fn row(id: u32, label: &str) -> Row {
    Row {
        id,
        label: label.to_string(),
    }
}

/// Create rows from `(id, label)` pairs.
pub fn rows(pairs: &[(u32, &str)]) -> Vec<Row> {
    pairs.iter().map(|&(id, label)| row(id, label)).collect()
}

/// Bound matches as raw `(source, destination)` pairs, in set order.
pub fn raw_pairs(matches: &BTreeSet<Match>) -> Vec<(usize, usize)> {
    matches.iter().filter_map(Match::positions).collect()
}

/// Index set as raw positions.
pub fn raw_indices<I: SequenceIndex>(set: &IndexSet<I>) -> Vec<usize> {
    set.iter().map(SequenceIndex::raw).collect()
}
