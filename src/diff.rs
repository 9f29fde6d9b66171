// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The diff entry points and the result they produce.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   scan.rs   │────▶│ movement.rs  │────▶│ DiffResult  │
//! │ (bind, del, │     │ (classify    │     │ (immutable) │
//! │  inserted)  │     │  shifts)     │     │             │
//! └─────────────┘     └──────────────┘     └─────────────┘
//! ```
//!
//! The scan must finish before classification starts: movement offsets need
//! the complete inserted and deleted sets.

use crate::index_set::IndexSet;
use crate::matchable::Matchable;
use crate::movement::classify_movements;
use crate::scan::{scan, ScanOutcome};
use crate::tracing_macros::debug;
use crate::types::{DestinationIndex, Match, SourceIndex, Verdict};
use crate::verify::{contracts, validate_diff, InvariantError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// What happened to every element between two sequences.
///
/// # Invariants
///
/// - `inserted` and the destinations of `equal ∪ changed` partition
///   `[0, destination_len)`.
/// - `deleted` and the sources of `equal ∪ changed` partition `[0, source_len)`.
/// - `moved ⊆ equal ∪ changed`.
/// - No two bound matches share a source or a destination.
///
/// A result produced by [`compute_diff`] always satisfies these. One that came
/// from somewhere else (say, deserialized) can be checked with
/// [`DiffResult::validate`] or [`WellFormedDiff`](crate::WellFormedDiff).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiffResult {
    inserted: IndexSet<DestinationIndex>,
    deleted: IndexSet<SourceIndex>,
    equal_matches: BTreeSet<Match>,
    changed_matches: BTreeSet<Match>,
    moved_matches: BTreeSet<Match>,
}

impl DiffResult {
    /// Destination positions with no source counterpart.
    pub fn inserted(&self) -> &IndexSet<DestinationIndex> {
        &self.inserted
    }

    /// Source positions with no destination counterpart.
    pub fn deleted(&self) -> &IndexSet<SourceIndex> {
        &self.deleted
    }

    pub fn equal_matches(&self) -> &BTreeSet<Match> {
        &self.equal_matches
    }

    pub fn changed_matches(&self) -> &BTreeSet<Match> {
        &self.changed_matches
    }

    /// Bound matches that need an explicit move. Each keeps its verdict, so a
    /// moved element may also be in `changed_matches`.
    pub fn moved_matches(&self) -> &BTreeSet<Match> {
        &self.moved_matches
    }

    /// All bound matches (`equal ∪ changed`) in increasing source order.
    pub fn matches(&self) -> impl Iterator<Item = Match> + '_ {
        self.equal_matches
            .union(&self.changed_matches)
            .copied()
    }

    /// The bound match for `source`, if it was not deleted.
    pub fn match_for_source(&self, source: SourceIndex) -> Option<Match> {
        // `Unmatched` sorts first among records sharing a source.
        let floor = Match::Unmatched { source };
        [&self.equal_matches, &self.changed_matches]
            .into_iter()
            .filter_map(|set| set.range(floor..).next().copied())
            .find(|m| m.source() == source)
    }

    pub fn is_moved(&self, record: &Match) -> bool {
        self.moved_matches.contains(record)
    }

    /// Number of source elements this result describes.
    pub fn source_len(&self) -> usize {
        self.deleted.len() + self.equal_matches.len() + self.changed_matches.len()
    }

    /// Number of destination elements this result describes.
    pub fn destination_len(&self) -> usize {
        self.inserted.len() + self.equal_matches.len() + self.changed_matches.len()
    }

    /// True when nothing was inserted, deleted, changed or moved.
    pub fn is_identity(&self) -> bool {
        self.inserted.is_empty()
            && self.deleted.is_empty()
            && self.changed_matches.is_empty()
            && self.moved_matches.is_empty()
    }

    /// Check every structural invariant against the given sequence lengths.
    pub fn validate(&self, source_len: usize, destination_len: usize) -> Result<(), InvariantError> {
        validate_diff(self, source_len, destination_len)
    }

    /// Assemble a result from its parts without checking anything.
    ///
    /// Meant for tests and tools that need malformed results on purpose; use
    /// [`WellFormedDiff::new`](crate::WellFormedDiff::new) to check one.
    #[doc(hidden)]
    pub fn from_parts(
        inserted: IndexSet<DestinationIndex>,
        deleted: IndexSet<SourceIndex>,
        equal_matches: BTreeSet<Match>,
        changed_matches: BTreeSet<Match>,
        moved_matches: BTreeSet<Match>,
    ) -> Self {
        Self {
            inserted,
            deleted,
            equal_matches,
            changed_matches,
            moved_matches,
        }
    }
}

impl fmt::Display for DiffResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} inserted, {} deleted, {} equal, {} changed, {} moved",
            self.inserted.len(),
            self.deleted.len(),
            self.equal_matches.len(),
            self.changed_matches.len(),
            self.moved_matches.len()
        )
    }
}

/// Diff two sequences using the elements' own [`Matchable`] comparison.
///
/// # Example
///
/// ```
/// use movediff::compute_diff;
///
/// let diff = compute_diff(&[0, 1, 2, 3], &[0, 2, 1, 4]);
/// assert_eq!(diff.inserted().len(), 1);
/// assert_eq!(diff.deleted().len(), 1);
/// assert_eq!(diff.moved_matches().len(), 1);
/// ```
pub fn compute_diff<T: Matchable>(source: &[T], destination: &[T]) -> DiffResult {
    compute_diff_by(source, destination, T::match_with)
}

/// Diff two sequences with a caller-supplied comparison.
///
/// `compare(source_element, destination_element)` must be deterministic; see
/// [`Matchable`] for the contract.
pub fn compute_diff_by<T, F>(source: &[T], destination: &[T], compare: F) -> DiffResult
where
    F: FnMut(&T, &T) -> Verdict,
{
    debug!(
        source_len = source.len(),
        destination_len = destination.len(),
        "diff: start"
    );

    let ScanOutcome {
        matches,
        deleted,
        inserted,
    } = scan(source, destination, compare);

    let moved_matches = classify_movements(&matches, &inserted, &deleted, destination.len());

    let (equal_matches, changed_matches): (BTreeSet<Match>, BTreeSet<Match>) = matches
        .into_iter()
        .partition(|m| m.verdict() == Verdict::Equal);

    let result = DiffResult {
        inserted,
        deleted,
        equal_matches,
        changed_matches,
        moved_matches,
    };

    contracts::check_diff_well_formed(&result, source.len(), destination.len());
    debug!(%result, "diff: done");
    result
}

/// A [`DiffResult`] together with the sequences it was computed from.
///
/// Handy for consumers that want elements, not positions: "reload this card
/// with its new content", "animate this row from here to there".
#[derive(Debug, Clone)]
pub struct Diff<'a, T> {
    source: &'a [T],
    destination: &'a [T],
    result: DiffResult,
}

impl<'a, T: Matchable> Diff<'a, T> {
    /// Diff `source` against `destination` with `T`'s comparison.
    pub fn new(source: &'a [T], destination: &'a [T]) -> Self {
        Self {
            source,
            destination,
            result: compute_diff(source, destination),
        }
    }
}

impl<'a, T> Diff<'a, T> {
    /// Diff with a caller-supplied comparison.
    pub fn with_comparison<F>(source: &'a [T], destination: &'a [T], compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Verdict,
    {
        Self {
            source,
            destination,
            result: compute_diff_by(source, destination, compare),
        }
    }

    pub fn source(&self) -> &'a [T] {
        self.source
    }

    pub fn destination(&self) -> &'a [T] {
        self.destination
    }

    pub fn result(&self) -> &DiffResult {
        &self.result
    }

    pub fn into_result(self) -> DiffResult {
        self.result
    }

    /// Inserted destination elements with their positions.
    pub fn inserted_elements(&self) -> impl Iterator<Item = (DestinationIndex, &'a T)> + '_ {
        // Positions come from a result built over these very slices.
        let destination = self.destination;
        self.result
            .inserted()
            .iter()
            .map(move |j| (j, &destination[j.get()]))
    }

    /// Deleted source elements with their positions.
    pub fn deleted_elements(&self) -> impl Iterator<Item = (SourceIndex, &'a T)> + '_ {
        let source = self.source;
        self.result
            .deleted()
            .iter()
            .map(move |i| (i, &source[i.get()]))
    }

    /// `(before, after)` for every element whose content changed.
    pub fn changed_pairs(&self) -> impl Iterator<Item = (&'a T, &'a T)> + '_ {
        self.pairs(self.result.changed_matches())
    }

    /// `(before, after)` for every element that needs an explicit move.
    pub fn moved_pairs(&self) -> impl Iterator<Item = (&'a T, &'a T)> + '_ {
        self.pairs(self.result.moved_matches())
    }

    fn pairs<'s>(
        &'s self,
        records: &'s BTreeSet<Match>,
    ) -> impl Iterator<Item = (&'a T, &'a T)> + 's {
        let (source, destination) = (self.source, self.destination);
        records
            .iter()
            .filter_map(Match::positions)
            .map(move |(i, j)| (&source[i], &destination[j]))
    }
}
