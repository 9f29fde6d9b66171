// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The vocabulary of a diff: index spaces, verdicts and match records.
//!
//! Source and destination positions live in two different coordinate spaces.
//! Mixing them up is the classic bug in list diffing (an index that was valid
//! "before" gets used "after"), so each space gets its own newtype and there is
//! no conversion between them. If you need the raw number, call `get()` and
//! take responsibility for it.
//!
//! # Invariants
//!
//! - **Match**: a destination exists iff the verdict is `Changed` or `Equal`.
//!   This is structural: `Match::Unmatched` has no destination field.
//!
//! - **Verdict**: `NoMatch < Changed < Equal`. The order reflects how much of
//!   the element survived, nothing in the engine depends on it.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

// =============================================================================
// NEWTYPES: Type-safe indices for the two sequence spaces
// =============================================================================

/// Position of an element in the source ("before") sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct SourceIndex(pub usize);

impl SourceIndex {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for SourceIndex {
    fn from(index: usize) -> Self {
        SourceIndex(index)
    }
}

impl fmt::Display for SourceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of an element in the destination ("after") sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct DestinationIndex(pub usize);

impl DestinationIndex {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for DestinationIndex {
    fn from(index: usize) -> Self {
        DestinationIndex(index)
    }
}

impl fmt::Display for DestinationIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Common surface of the two index spaces, so containers like `IndexSet` can
/// be written once while still refusing to mix spaces.
pub trait SequenceIndex: Copy + Ord + fmt::Debug {
    /// Wrap a raw position.
    fn from_raw(raw: usize) -> Self;
    /// Unwrap to a raw position.
    fn raw(self) -> usize;
}

impl SequenceIndex for SourceIndex {
    #[inline]
    fn from_raw(raw: usize) -> Self {
        SourceIndex(raw)
    }

    #[inline]
    fn raw(self) -> usize {
        self.0
    }
}

impl SequenceIndex for DestinationIndex {
    #[inline]
    fn from_raw(raw: usize) -> Self {
        DestinationIndex(raw)
    }

    #[inline]
    fn raw(self) -> usize {
        self.0
    }
}

// =============================================================================
// VERDICT
// =============================================================================

/// Outcome of comparing one source element against one destination element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The elements are unrelated.
    NoMatch,
    /// Same element (same identity), different content. The view reloads it.
    Changed,
    /// Same element, same content.
    Equal,
}

impl Verdict {
    /// True for `Changed` and `Equal`: the pair can be bound by the scan.
    #[inline]
    pub fn is_match(self) -> bool {
        !matches!(self, Verdict::NoMatch)
    }
}

// =============================================================================
// MATCH
// =============================================================================

/// A source element's association with the destination sequence.
///
/// Only `Changed` and `Equal` records are retained in a [`DiffResult`];
/// `Unmatched` is what the scan produces for a source element that found no
/// partner, and it ends up in the deleted set instead.
///
/// [`DiffResult`]: crate::DiffResult
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Match {
    /// No destination element matched this source element.
    Unmatched { source: SourceIndex },
    /// Bound to a destination element with different content.
    Changed {
        source: SourceIndex,
        destination: DestinationIndex,
    },
    /// Bound to an equal destination element.
    Equal {
        source: SourceIndex,
        destination: DestinationIndex,
    },
}

impl Match {
    /// Build the record for `source` compared against `destination`.
    ///
    /// A `NoMatch` verdict drops the destination: an unmatched element has
    /// nowhere to go.
    pub fn new(source: SourceIndex, destination: DestinationIndex, verdict: Verdict) -> Self {
        match verdict {
            Verdict::NoMatch => Match::Unmatched { source },
            Verdict::Changed => Match::Changed {
                source,
                destination,
            },
            Verdict::Equal => Match::Equal {
                source,
                destination,
            },
        }
    }

    /// Source-space position.
    #[inline]
    pub fn source(&self) -> SourceIndex {
        match *self {
            Match::Unmatched { source }
            | Match::Changed { source, .. }
            | Match::Equal { source, .. } => source,
        }
    }

    /// Destination-space position, absent for `Unmatched`.
    #[inline]
    pub fn destination(&self) -> Option<DestinationIndex> {
        match *self {
            Match::Unmatched { .. } => None,
            Match::Changed { destination, .. } | Match::Equal { destination, .. } => {
                Some(destination)
            }
        }
    }

    #[inline]
    pub fn verdict(&self) -> Verdict {
        match self {
            Match::Unmatched { .. } => Verdict::NoMatch,
            Match::Changed { .. } => Verdict::Changed,
            Match::Equal { .. } => Verdict::Equal,
        }
    }

    /// Bound pair as raw positions, `None` for `Unmatched`.
    #[inline]
    pub fn positions(&self) -> Option<(usize, usize)> {
        self.destination()
            .map(|destination| (self.source().get(), destination.get()))
    }

    /// True when the element sits at a different raw position after the diff.
    ///
    /// Only these records are candidates for movement classification.
    #[inline]
    pub fn is_positional_shift(&self) -> bool {
        self.positions()
            .is_some_and(|(source, destination)| source != destination)
    }
}

impl Ord for Match {
    fn cmp(&self, other: &Self) -> Ordering {
        self.source()
            .cmp(&other.source())
            .then_with(|| self.destination().cmp(&other.destination()))
            .then_with(|| self.verdict().cmp(&other.verdict()))
    }
}

impl PartialOrd for Match {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Match::Unmatched { source } => write!(f, "❌ ({})", source),
            Match::Changed {
                source,
                destination,
            } => write!(f, "🔄 ({} -> {})", source, destination),
            Match::Equal {
                source,
                destination,
            } => write!(f, "✅ ({} -> {})", source, destination),
        }
    }
}
