//! Structural invariants that must hold for every diff.

use super::common::{assert_diff_well_formed, raw_indices, raw_pairs, Row};
use movediff::{compute_diff, diff_batch, diff_batch_parallel, SequencePair, WellFormedDiff};
use proptest::prelude::*;
use std::collections::BTreeSet;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small alphabet so duplicates and matches are common.
fn sequence_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..6, 0..16)
}

/// Rows with few ids and few labels, so Changed verdicts are common.
fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec((0u32..5, prop::sample::select(vec!["a", "b"])), 0..12).prop_map(
        |pairs| {
            pairs
                .into_iter()
                .map(|(id, label)| super::common::row(id, label))
                .collect()
        },
    )
}

/// A list of distinct values and an order-preserving edit of it: some
/// elements dropped, fresh ones inserted, none reordered.
fn order_preserving_edit() -> impl Strategy<Value = (Vec<u32>, Vec<u32>)> {
    (0usize..14)
        .prop_flat_map(|len| {
            (
                prop::collection::vec(any::<bool>(), len),
                prop::collection::vec(any::<prop::sample::Index>(), 0..6),
            )
        })
        .prop_map(|(keep, insert_at)| {
            let source: Vec<u32> = (0..keep.len() as u32).collect();
            let mut destination: Vec<u32> = source
                .iter()
                .zip(&keep)
                .filter(|&(_, &k)| k)
                .map(|(&v, _)| v)
                .collect();
            for (k, at) in insert_at.iter().enumerate() {
                let position = at.index(destination.len() + 1);
                destination.insert(position, 100 + k as u32);
            }
            (source, destination)
        })
}

// ============================================================================
// PARTITION AND INJECTIVITY
// ============================================================================

proptest! {
    /// Property: every diff of plain values is well-formed.
    #[test]
    fn prop_diff_always_well_formed(
        source in sequence_strategy(),
        destination in sequence_strategy(),
    ) {
        let diff = compute_diff(&source, &destination);
        assert_diff_well_formed(&diff, source.len(), destination.len());
        prop_assert!(WellFormedDiff::new(diff, source.len(), destination.len()).is_ok());
    }

    /// Property: every diff of identity-carrying rows is well-formed.
    #[test]
    fn prop_row_diff_always_well_formed(
        source in rows_strategy(),
        destination in rows_strategy(),
    ) {
        let diff = compute_diff(&source, &destination);
        assert_diff_well_formed(&diff, source.len(), destination.len());
    }

    /// Property: lengths derived from the result agree with the inputs.
    #[test]
    fn prop_lengths_recovered(
        source in sequence_strategy(),
        destination in sequence_strategy(),
    ) {
        let diff = compute_diff(&source, &destination);
        prop_assert_eq!(diff.source_len(), source.len());
        prop_assert_eq!(diff.destination_len(), destination.len());
    }

    /// Property: moved matches are bound matches whose position changed.
    #[test]
    fn prop_moved_are_shifted_bound_matches(
        source in rows_strategy(),
        destination in rows_strategy(),
    ) {
        let diff = compute_diff(&source, &destination);
        let bound: BTreeSet<_> = diff.matches().collect();
        for record in diff.moved_matches() {
            prop_assert!(bound.contains(record), "{} is not bound", record);
            prop_assert!(record.is_positional_shift(), "{} did not shift", record);
        }
    }

    /// Property: bound matches really compare as their verdict says.
    #[test]
    fn prop_verdicts_agree_with_comparison(
        source in rows_strategy(),
        destination in rows_strategy(),
    ) {
        use movediff::{Matchable, Verdict};
        let diff = compute_diff(&source, &destination);
        for record in diff.matches() {
            let (i, j) = record.positions().unwrap();
            let verdict = source[i].match_with(&destination[j]);
            prop_assert_eq!(verdict, record.verdict());
            prop_assert_ne!(verdict, Verdict::NoMatch);
        }
    }
}

// ============================================================================
// SHIFTS VERSUS MOVES
// ============================================================================

proptest! {
    /// Property: diffing a sequence against itself changes nothing.
    #[test]
    fn prop_identity(source in rows_strategy()) {
        let diff = compute_diff(&source, &source);
        prop_assert!(diff.is_identity());
        let expected: Vec<(usize, usize)> = (0..source.len()).map(|i| (i, i)).collect();
        prop_assert_eq!(raw_pairs(diff.equal_matches()), expected);
    }

    /// Property: floats, NaN and infinities included, diff to the identity.
    #[test]
    fn prop_identity_floats(source in prop::collection::vec(any::<f64>(), 0..16)) {
        let diff = compute_diff(&source, &source);
        prop_assert!(diff.is_identity(), "{} for {:?}", diff, source);
    }

    /// Property: dropping and inserting without reordering never moves anything.
    #[test]
    fn prop_order_preserving_edits_never_move((source, destination) in order_preserving_edit()) {
        let diff = compute_diff(&source, &destination);
        prop_assert!(
            diff.moved_matches().is_empty(),
            "unexpected moves {:?} for {:?} -> {:?}",
            raw_pairs(diff.moved_matches()), source, destination
        );
        let kept = destination.iter().filter(|&&v| v < 100).count();
        prop_assert_eq!(raw_indices(diff.inserted()).len(), destination.len() - kept);
        prop_assert_eq!(raw_indices(diff.deleted()).len(), source.len() - kept);
    }

    /// Property: same inputs, same result.
    #[test]
    fn prop_deterministic(
        source in rows_strategy(),
        destination in rows_strategy(),
    ) {
        prop_assert_eq!(
            compute_diff(&source, &destination),
            compute_diff(&source, &destination)
        );
    }
}

// ============================================================================
// BATCHES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: batch diffs equal one-by-one diffs, in order.
    #[test]
    fn prop_batch_equals_individual(
        lists in prop::collection::vec((sequence_strategy(), sequence_strategy()), 0..8),
    ) {
        let pairs: Vec<SequencePair<'_, u8>> = lists
            .iter()
            .map(|(s, d)| (s.as_slice(), d.as_slice()))
            .collect();
        let individual: Vec<_> = pairs.iter().map(|&(s, d)| compute_diff(s, d)).collect();
        prop_assert_eq!(&diff_batch(&pairs), &individual);
        prop_assert_eq!(&diff_batch_parallel(&pairs), &individual);
    }
}
