// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Diffing many independent sequence pairs at once.
//!
//! A single diff is strictly sequential: the scan threads its claimed set
//! through every source element, and classification waits for the whole scan.
//! Separate diffs share nothing, though, so a screen with forty sections can
//! diff them all side by side.
//!
//! # Parallelism
//!
//! With the `parallel` feature, `diff_batch_parallel` fans the pairs out over
//! the rayon pool. Without it, the same function runs sequentially, so callers
//! don't need their own `cfg`.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::diff::{compute_diff, DiffResult};
use crate::matchable::Matchable;
use crate::tracing_macros::debug;

/// A `(source, destination)` pair to diff.
pub type SequencePair<'a, T> = (&'a [T], &'a [T]);

/// Diff every pair in order.
pub fn diff_batch<T: Matchable>(pairs: &[SequencePair<'_, T>]) -> Vec<DiffResult> {
    debug!(pairs = pairs.len(), "batch: sequential");
    pairs
        .iter()
        .map(|&(source, destination)| compute_diff(source, destination))
        .collect()
}

/// Diff every pair on the rayon pool. Results keep the input order.
#[cfg(feature = "parallel")]
pub fn diff_batch_parallel<T: Matchable + Sync>(pairs: &[SequencePair<'_, T>]) -> Vec<DiffResult> {
    debug!(pairs = pairs.len(), "batch: parallel");
    pairs
        .par_iter()
        .map(|&(source, destination)| compute_diff(source, destination))
        .collect()
}

/// Sequential fallback when the `parallel` feature is off.
#[cfg(not(feature = "parallel"))]
pub fn diff_batch_parallel<T: Matchable + Sync>(pairs: &[SequencePair<'_, T>]) -> Vec<DiffResult> {
    diff_batch(pairs)
}
