// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structural list diffing with move detection.
//!
//! Given a "before" and an "after" sequence, this crate says what happened to
//! every element: inserted, deleted, unchanged, changed, or moved. The output
//! is meant to drive incremental view updates (animated list and grid changes)
//! instead of full reloads.
//!
//! The subtle part is telling a *move* from a *shift*. When a row is inserted
//! at the top, everything below it changes position, yet nothing moved.
//! The classifier in [`movement`] accounts for insertions, deletions and
//! elements that jumped ahead before it calls anything a move.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌──────────────┐
//! │ matchable.rs │────▶│   scan.rs   │────▶│ movement.rs  │
//! │  (Verdict    │     │ (greedy     │     │ (shift vs.   │
//! │   per pair)  │     │  first-match│     │  move)       │
//! └──────────────┘     └─────────────┘     └──────────────┘
//!        │                    │                    │
//!        ▼                    ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     diff.rs                         │
//! │        (DiffResult, compute_diff, Diff view)        │
//! └─────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     verify/                         │
//! │   (WellFormedDiff, InvariantError, contracts)       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use movediff::{compute_diff, Matchable};
//!
//! #[derive(Debug, PartialEq, Matchable)]
//! struct Card {
//!     #[matchable(id)]
//!     id: u32,
//!     title: &'static str,
//! }
//!
//! let before = [Card { id: 1, title: "a" }, Card { id: 2, title: "b" }];
//! let after = [Card { id: 2, title: "B" }, Card { id: 1, title: "a" }];
//!
//! let diff = compute_diff(&before, &after);
//! assert_eq!(diff.changed_matches().len(), 1);
//! assert_eq!(diff.moved_matches().len(), 1);
//! assert!(diff.inserted().is_empty() && diff.deleted().is_empty());
//! ```
//!
//! # Features
//!
//! | Feature    | Default | What it does                                   |
//! |------------|---------|------------------------------------------------|
//! | `derive`   | yes     | `#[derive(Matchable)]`                          |
//! | `parallel` | yes     | rayon-backed [`diff_batch_parallel`]            |
//! | `tracing`  | no      | `tracing` events from the scan and classifier   |

// Lets the derive's `::movediff::` paths resolve inside this crate too.
extern crate self as movediff;

// Module declarations
pub mod batch;
mod diff;
pub mod dynamic;
mod index_set;
mod matchable;
pub mod movement;
pub mod scan;
pub mod testing;
mod tracing_macros;
mod types;
pub mod verify;

// Re-exports for public API
pub use batch::{diff_batch, diff_batch_parallel, SequencePair};
pub use diff::{compute_diff, compute_diff_by, Diff, DiffResult};
pub use dynamic::DynMatchable;
pub use index_set::IndexSet;
pub use matchable::{verdict_by_eq, verdict_by_identity, Identifiable, Matchable};
pub use types::{DestinationIndex, Match, SequenceIndex, SourceIndex, Verdict};
pub use verify::{InvariantError, WellFormedDiff};

#[cfg(feature = "derive")]
pub use movediff_macros::Matchable;
