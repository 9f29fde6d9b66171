// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the diff engine.
//!
//! Two kinds of checks live here:
//!
//! 1. **Hard contracts** (`assert!`): cheap arithmetic guards that run in every
//!    build. If one fires, the engine has a bug and continuing would hand the
//!    view a nonsense position.
//! 2. **Debug contracts** (`debug_assert!` / `cfg(debug_assertions)`): whole-result
//!    checks that are too expensive for release builds but catch algorithmic
//!    bugs whenever tests run.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Invariant                                          |
//! |----------------------------|----------------------------------------------------|
//! | `check_expected_position`  | `0 <= src + offset < destination_len`              |
//! | `check_diff_well_formed`   | partitions, injectivity, verdict filing, movements |

use crate::DiffResult;

/// Guard the classifier's position arithmetic.
///
/// `gained = src + insertions_before`, `lost = deletions_before + overtaken`.
/// For a well-formed scan, `lost <= src <= gained` (every deleted or overtaking
/// element sits before `src` in the source) and the expected position is a
/// valid destination index.
///
/// # Panics
/// Always (release builds included) if the offset would underflow, and in
/// debug builds if the position is outside the destination.
#[inline]
pub fn check_expected_position(src: usize, gained: usize, lost: usize, destination_len: usize) {
    assert!(
        lost <= gained,
        "Contract violation: movement offset underflow - \
         source {} loses {} positions but only gains {}",
        src,
        lost,
        gained
    );
    debug_assert!(
        gained - lost < destination_len,
        "Contract violation: expected position {} for source {} is outside destination of length {}",
        gained - lost,
        src,
        destination_len
    );
}

/// Check the full result against the input lengths.
///
/// # Panics (debug builds only)
/// Panics with the violated invariant if the result is malformed.
#[inline]
pub fn check_diff_well_formed(result: &DiffResult, source_len: usize, destination_len: usize) {
    if cfg!(debug_assertions) {
        if let Err(violation) = super::validate_diff(result, source_len, destination_len) {
            panic!("Contract violation: DiffResult.WellFormed - {}", violation);
        }
    }
}
