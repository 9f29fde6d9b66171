// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Checked diff results.
//!
//! `compute_diff` only builds well-formed results, and in debug builds it
//! proves it to itself via `contracts`. A result that arrives from anywhere
//! else (deserialized, built by hand, produced by another version) is just a
//! bag of sets. Wrap it in [`WellFormedDiff`] and the invariants are checked
//! once, then guaranteed for as long as you hold the wrapper.
//!
//! # What's Checked
//!
//! | Invariant                | Meaning                                         |
//! |--------------------------|-------------------------------------------------|
//! | bounds                   | every index lies inside its sequence            |
//! | source partition         | `deleted ⊎ sources(matches) = [0, n)`           |
//! | destination partition    | `inserted ⊎ destinations(matches) = [0, m)`     |
//! | verdict filing           | equal set holds `Equal`, changed set `Changed`  |
//! | moved ⊆ matches          | movements are bound matches                     |
//! | movement predicate       | moved exactly where churn can't explain a shift |
//!
//! # Example
//!
//! ```
//! use movediff::{compute_diff, DiffResult, WellFormedDiff};
//!
//! let diff = compute_diff(&["a", "b"], &["b", "a"]);
//! let json = serde_json::to_string(&diff).unwrap();
//!
//! let received: DiffResult = serde_json::from_str(&json).unwrap();
//! let checked = WellFormedDiff::new(received, 2, 2).unwrap();
//! assert_eq!(checked.moved_matches().len(), 1);
//! ```

use crate::{DestinationIndex, DiffResult, Match, SourceIndex, Verdict};
use std::fmt;
use std::ops::Deref;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A source index is `>= source_len`.
    SourceOutOfRange { index: SourceIndex, source_len: usize },
    /// A destination index is `>= destination_len`.
    DestinationOutOfRange {
        index: DestinationIndex,
        destination_len: usize,
    },
    /// A source index is both deleted and bound, or bound twice.
    SourceClaimedTwice { index: SourceIndex },
    /// A destination index is both inserted and bound, or bound twice.
    DestinationClaimedTwice { index: DestinationIndex },
    /// A source index is neither deleted nor bound.
    SourceUnaccounted { index: SourceIndex },
    /// A destination index is neither inserted nor bound.
    DestinationUnaccounted { index: DestinationIndex },
    /// A match record sits in the set for a different verdict.
    MisfiledMatch { record: Match, expected: Verdict },
    /// A moved record is not one of the bound matches.
    MovementNotBound { record: Match },
    /// A record's movement classification disagrees with the movement test.
    MovementMisclassified { record: Match, moved: bool },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::SourceOutOfRange { index, source_len } => {
                write!(f, "source index {} >= source_len {}", index, source_len)
            }
            InvariantError::DestinationOutOfRange {
                index,
                destination_len,
            } => {
                write!(
                    f,
                    "destination index {} >= destination_len {}",
                    index, destination_len
                )
            }
            InvariantError::SourceClaimedTwice { index } => {
                write!(f, "source index {} is accounted for more than once", index)
            }
            InvariantError::DestinationClaimedTwice { index } => {
                write!(
                    f,
                    "destination index {} is accounted for more than once",
                    index
                )
            }
            InvariantError::SourceUnaccounted { index } => {
                write!(f, "source index {} is neither deleted nor matched", index)
            }
            InvariantError::DestinationUnaccounted { index } => {
                write!(
                    f,
                    "destination index {} is neither inserted nor matched",
                    index
                )
            }
            InvariantError::MisfiledMatch { record, expected } => {
                write!(f, "match {} filed under {:?}", record, expected)
            }
            InvariantError::MovementNotBound { record } => {
                write!(f, "moved record {} is not a bound match", record)
            }
            InvariantError::MovementMisclassified { record, moved } => {
                if *moved {
                    write!(f, "match {} is marked moved but churn explains it", record)
                } else {
                    write!(f, "match {} moved but is not marked", record)
                }
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Check every structural invariant of `result` against the sequence lengths.
///
/// The lengths are untrusted: a length larger than what `result` describes is
/// reported as an unaccounted index before anything is sized from it.
pub fn validate_diff(
    result: &DiffResult,
    source_len: usize,
    destination_len: usize,
) -> Result<(), InvariantError> {
    if source_len > result.source_len() {
        let claimed = result
            .deleted()
            .iter()
            .chain(result.matches().map(|m| m.source()))
            .map(SourceIndex::get);
        return Err(InvariantError::SourceUnaccounted {
            index: SourceIndex(first_gap(claimed)),
        });
    }
    if destination_len > result.destination_len() {
        let claimed = result
            .inserted()
            .iter()
            .chain(result.matches().filter_map(|m| m.destination()))
            .map(DestinationIndex::get);
        return Err(InvariantError::DestinationUnaccounted {
            index: DestinationIndex(first_gap(claimed)),
        });
    }

    let mut source_seen = vec![false; source_len];
    let mut destination_seen = vec![false; destination_len];

    let mut claim_source = |index: SourceIndex| -> Result<(), InvariantError> {
        let seen = source_seen
            .get_mut(index.get())
            .ok_or(InvariantError::SourceOutOfRange { index, source_len })?;
        if std::mem::replace(seen, true) {
            return Err(InvariantError::SourceClaimedTwice { index });
        }
        Ok(())
    };
    let mut claim_destination = |index: DestinationIndex| -> Result<(), InvariantError> {
        let seen = destination_seen.get_mut(index.get()).ok_or(
            InvariantError::DestinationOutOfRange {
                index,
                destination_len,
            },
        )?;
        if std::mem::replace(seen, true) {
            return Err(InvariantError::DestinationClaimedTwice { index });
        }
        Ok(())
    };

    for index in result.deleted() {
        claim_source(index)?;
    }
    for index in result.inserted() {
        claim_destination(index)?;
    }

    let filed = [
        (result.equal_matches(), Verdict::Equal),
        (result.changed_matches(), Verdict::Changed),
    ];
    for (set, expected) in filed {
        for record in set {
            let destination = match record.destination() {
                Some(destination) if record.verdict() == expected => destination,
                _ => {
                    return Err(InvariantError::MisfiledMatch {
                        record: *record,
                        expected,
                    })
                }
            };
            claim_source(record.source())?;
            claim_destination(destination)?;
        }
    }

    if let Some(index) = source_seen.iter().position(|seen| !seen) {
        return Err(InvariantError::SourceUnaccounted {
            index: SourceIndex(index),
        });
    }
    if let Some(index) = destination_seen.iter().position(|seen| !seen) {
        return Err(InvariantError::DestinationUnaccounted {
            index: DestinationIndex(index),
        });
    }

    for record in result.moved_matches() {
        let bound = result.equal_matches().contains(record)
            || result.changed_matches().contains(record);
        if !bound {
            return Err(InvariantError::MovementNotBound { record: *record });
        }
    }

    check_movement_predicate(result)
}

/// Smallest position missing from `claimed`.
///
/// Bounded by the number of claims, so it never exceeds what the result
/// itself describes.
fn first_gap(claimed: impl Iterator<Item = usize>) -> usize {
    let mut positions: Vec<usize> = claimed.collect();
    positions.sort_unstable();
    positions.dedup();
    positions
        .iter()
        .enumerate()
        .find(|&(expected, &position)| expected != position)
        .map_or(positions.len(), |(expected, _)| expected)
}

/// Re-evaluate the movement test for every bound match against the final
/// movement set, straight from its definition (no incremental bookkeeping).
fn check_movement_predicate(result: &DiffResult) -> Result<(), InvariantError> {
    let moved = result.moved_matches();
    for record in result.matches() {
        let Some((src, dst)) = record.positions() else {
            continue;
        };
        let should_move = src != dst && {
            let overtaken = moved
                .iter()
                .filter_map(Match::positions)
                .filter(|&(src2, dst2)| src2 < src && dst2 > dst)
                .count();
            let offset = result.inserted().count_below(DestinationIndex(dst)) as isize
                - result.deleted().count_below(SourceIndex(src)) as isize
                - overtaken as isize;
            src as isize + offset != dst as isize
        };
        let is_moved = moved.contains(&record);
        if should_move != is_moved {
            return Err(InvariantError::MovementMisclassified {
                record,
                moved: is_moved,
            });
        }
    }
    Ok(())
}

/// A diff result whose invariants have been checked against known sequence
/// lengths.
///
/// # Invariants (enforced at construction)
/// - every index is in range
/// - sources and destinations are each partitioned exactly once
/// - verdict sets hold only their verdict
/// - movements are bound matches and agree with the movement test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WellFormedDiff {
    inner: DiffResult,
    source_len: usize,
    destination_len: usize,
}

impl WellFormedDiff {
    /// Validate `result` for sequences of the given lengths.
    pub fn new(
        result: DiffResult,
        source_len: usize,
        destination_len: usize,
    ) -> Result<Self, InvariantError> {
        validate_diff(&result, source_len, destination_len)?;
        Ok(Self {
            inner: result,
            source_len,
            destination_len,
        })
    }

    pub fn source_len(&self) -> usize {
        self.source_len
    }

    pub fn destination_len(&self) -> usize {
        self.destination_len
    }

    /// Get the underlying result.
    pub fn inner(&self) -> &DiffResult {
        &self.inner
    }

    /// Convert back to an unchecked `DiffResult`.
    pub fn into_inner(self) -> DiffResult {
        self.inner
    }
}

impl Deref for WellFormedDiff {
    type Target = DiffResult;

    fn deref(&self) -> &DiffResult {
        &self.inner
    }
}
