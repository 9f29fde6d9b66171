//! Shared test utilities and fixtures.

#![allow(dead_code)]

use movediff::{compute_diff, DiffResult, Matchable, WellFormedDiff};
use std::sync::Once;

// Re-export canonical test utilities from movediff::testing
pub use movediff::testing::{raw_indices, raw_pairs, row, rows, Row};

// ============================================================================
// LOGGING
// ============================================================================

static INIT_LOGGING: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
///
/// Only produces output when the crate is built with the `tracing` feature.
pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();
    });
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert that a result is well-formed for the given lengths.
/// Panics with the violated invariant on failure.
pub fn assert_diff_well_formed(result: &DiffResult, source_len: usize, destination_len: usize) {
    if let Err(e) = result.validate(source_len, destination_len) {
        panic!("diff not well-formed ({source_len} -> {destination_len}): {e}\n{result:?}");
    }
}

/// Diff two sequences and check the result before handing it back.
pub fn checked_diff<T: Matchable>(source: &[T], destination: &[T]) -> WellFormedDiff {
    let result = compute_diff(source, destination);
    match WellFormedDiff::new(result, source.len(), destination.len()) {
        Ok(checked) => checked,
        Err(e) => panic!("diff not well-formed: {e}"),
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

/// A feed of rows with ids `0..len`, labelled by id.
pub fn feed(len: u32) -> Vec<Row> {
    (0..len).map(|id| row(id, &format!("item {id}"))).collect()
}
