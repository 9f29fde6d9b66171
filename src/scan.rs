// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Greedy first-match scan: bind source elements to destination elements.
//!
//! # Algorithm
//!
//! ```text
//! source:       A  B  C            destination:  B  A' D
//!
//! i=0 (A):  j=0 B? no   j=1 A'? Changed -> bind (0 -> 1), claim 1
//! i=1 (B):  j=0 B? Equal -> bind (1 -> 0), claim 0
//! i=2 (C):  j=2 D? no   -> deleted {2}
//!
//! unclaimed destinations -> inserted {2}
//! ```
//!
//! Each source element takes the first unclaimed destination element that
//! compares `Equal` or `Changed`. Once claimed, a destination element is gone
//! for every later source element, even one that would match it better. This
//! is a deliberate choice: one forward pass, no global optimization.
//!
//! # Complexity
//!
//! O(n·m) comparisons in the worst case (a source element that matches nothing
//! looks at every unclaimed destination). Claimed destinations are never
//! compared, and a leading run of them is skipped without even being visited.
//! Comparisons are pure (see [`Matchable`](crate::Matchable)), so skipping a
//! claimed destination gives the same result as comparing it and discarding
//! the verdict.

use crate::index_set::IndexSet;
use crate::tracing_macros::{debug, trace};
use crate::types::{DestinationIndex, Match, SourceIndex, Verdict};

/// What the scan found, before movement classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Bound records (`Changed` or `Equal`), in increasing source order.
    pub matches: Vec<Match>,
    /// Source elements with no partner.
    pub deleted: IndexSet<SourceIndex>,
    /// Destination elements nobody claimed.
    pub inserted: IndexSet<DestinationIndex>,
}

impl ScanOutcome {
    fn all_inserted(destination_len: usize) -> Self {
        Self {
            matches: Vec::new(),
            deleted: IndexSet::new(),
            inserted: IndexSet::full(destination_len),
        }
    }

    fn all_deleted(source_len: usize) -> Self {
        Self {
            matches: Vec::new(),
            deleted: IndexSet::full(source_len),
            inserted: IndexSet::new(),
        }
    }
}

/// Run the scan with `compare(source_element, destination_element)`.
///
/// Empty inputs take a fast path and never call `compare`.
pub fn scan<T, F>(source: &[T], destination: &[T], mut compare: F) -> ScanOutcome
where
    F: FnMut(&T, &T) -> Verdict,
{
    if source.is_empty() {
        debug!(destination_len = destination.len(), "scan: empty source, all inserted");
        return ScanOutcome::all_inserted(destination.len());
    }
    if destination.is_empty() {
        debug!(source_len = source.len(), "scan: empty destination, all deleted");
        return ScanOutcome::all_deleted(source.len());
    }

    // Function-local scan state: which destinations are still selectable.
    let mut claimed = vec![false; destination.len()];
    let mut first_unclaimed = 0usize;

    let mut matches = Vec::with_capacity(source.len().min(destination.len()));
    let mut deleted = IndexSet::new();

    for (i, source_element) in source.iter().enumerate() {
        let bound = (first_unclaimed..destination.len())
            .filter(|&j| !claimed[j])
            .find_map(|j| {
                let verdict = compare(source_element, &destination[j]);
                verdict.is_match().then_some((j, verdict))
            });

        match bound {
            Some((j, verdict)) => {
                claimed[j] = true;
                while first_unclaimed < claimed.len() && claimed[first_unclaimed] {
                    first_unclaimed += 1;
                }
                let record = Match::new(SourceIndex(i), DestinationIndex(j), verdict);
                trace!(source = i, destination = j, ?verdict, "scan: bound");
                matches.push(record);
            }
            None => {
                trace!(source = i, "scan: no partner");
                deleted.insert(SourceIndex(i));
            }
        }
    }

    let inserted: IndexSet<DestinationIndex> = claimed
        .iter()
        .enumerate()
        .filter(|&(_, &taken)| !taken)
        .map(|(j, _)| DestinationIndex(j))
        .collect();

    debug!(
        matched = matches.len(),
        deleted = deleted.len(),
        inserted = inserted.len(),
        "scan: done"
    );

    ScanOutcome {
        matches,
        deleted,
        inserted,
    }
}
