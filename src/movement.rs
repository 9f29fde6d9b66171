// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Movement classification: which shifted elements actually moved?
//!
//! After the scan, an element that went from source position 4 to destination
//! position 6 did not necessarily *move*. If two rows were inserted above it,
//! it just got pushed down. Telling the view to animate a move there would be
//! wrong (and ugly). This module separates "pushed around by churn" from
//! "actually moved".
//!
//! # The test
//!
//! For a bound pair `(src, dst)` with `src != dst`:
//!
//! ```text
//! offset   = inserted_before(dst) - deleted_before(src) - overtaken(src, dst)
//! moved   <=> src + offset != dst
//! ```
//!
//! where `overtaken(src, dst)` counts the confirmed movements `(src2, dst2)`
//! with `src2 < src` and `dst2 > dst`: elements that started ahead of this one
//! and jumped past it. Each of those freed a slot in front, so the expected
//! position drops by one.
//!
//! # Evaluation order
//!
//! `overtaken` only looks at movements with a *smaller* source index. So the
//! predicate over the final movement set has exactly one solution, and it is
//! found by deciding candidates in increasing source order: when a candidate
//! is decided, every movement it depends on has already been decided. Nothing
//! depends on the iteration order of a hash set.
//!
//! # Example
//!
//! ```text
//! source       0 1 2 3          destination  0 2 1 4
//! bound        (0,0) (1,2) (2,1)   deleted {3}   inserted {3}
//!
//! (1,2): offset = 0 - 0 - 0 = 0    1 + 0 = 1 != 2  -> moved
//! (2,1): offset = 0 - 0 - 1 = -1   2 - 1 = 1 == 1  -> stays (1 jumped over it)
//! ```
//!
//! # Complexity
//!
//! O(k log m) for k candidates over m destination positions: the rank queries
//! on the inserted/deleted sets are binary searches, and `overtaken` is a
//! Fenwick tree over the destinations of confirmed movements.

use crate::index_set::IndexSet;
use crate::tracing_macros::{debug, trace};
use crate::types::{DestinationIndex, Match, SourceIndex};
use crate::verify::contracts;
use std::collections::BTreeSet;

/// Classify the bound `matches` into movements.
///
/// `destination_len` is the length of the destination sequence; every bound
/// destination must be below it.
pub fn classify_movements(
    matches: &[Match],
    inserted: &IndexSet<DestinationIndex>,
    deleted: &IndexSet<SourceIndex>,
    destination_len: usize,
) -> BTreeSet<Match> {
    let mut candidates: Vec<(Match, usize, usize)> = matches
        .iter()
        .filter(|m| m.is_positional_shift())
        .filter_map(|m| m.positions().map(|(src, dst)| (*m, src, dst)))
        .collect();
    // Sources are unique among bound matches, so this order is total.
    candidates.sort_unstable_by_key(|&(_, src, _)| src);

    let mut moved_destinations = Fenwick::new(destination_len);
    let mut moved = BTreeSet::new();

    for (record, src, dst) in candidates {
        let insertions_before = inserted.count_below(DestinationIndex(dst));
        let deletions_before = deleted.count_below(SourceIndex(src));
        // Every movement recorded so far has a smaller source index.
        let overtaken = moved_destinations.count_above(dst);

        let expected = expected_position(
            src,
            insertions_before,
            deletions_before,
            overtaken,
            destination_len,
        );

        if expected != dst {
            trace!(src, dst, expected, "movement: moved");
            moved_destinations.add(dst);
            moved.insert(record);
        } else {
            trace!(src, dst, "movement: explained by churn");
        }
    }

    debug!(moved = moved.len(), "movement: done");
    moved
}

/// Where the element at `src` would land if nothing moved.
///
/// Never negative and always inside the destination for well-formed input;
/// anything else is a bug in the scan or the classifier, so it panics.
pub fn expected_position(
    src: usize,
    insertions_before: usize,
    deletions_before: usize,
    overtaken: usize,
    destination_len: usize,
) -> usize {
    let gained = src + insertions_before;
    let lost = deletions_before + overtaken;
    contracts::check_expected_position(src, gained, lost, destination_len);
    gained - lost
}

/// Binary indexed tree counting marked destination positions.
struct Fenwick {
    tree: Vec<usize>,
    total: usize,
}

impl Fenwick {
    fn new(len: usize) -> Self {
        Self {
            tree: vec![0; len + 1],
            total: 0,
        }
    }

    fn add(&mut self, position: usize) {
        debug_assert!(position + 1 < self.tree.len(), "fenwick position out of range");
        let mut i = position + 1;
        while i < self.tree.len() {
            self.tree[i] += 1;
            i += i & i.wrapping_neg();
        }
        self.total += 1;
    }

    /// Marked positions in `[0, position]`.
    fn count_through(&self, position: usize) -> usize {
        let mut i = (position + 1).min(self.tree.len() - 1);
        let mut sum = 0;
        while i > 0 {
            sum += self.tree[i];
            i -= i & i.wrapping_neg();
        }
        sum
    }

    /// Marked positions strictly greater than `position`.
    fn count_above(&self, position: usize) -> usize {
        self.total - self.count_through(position)
    }
}
