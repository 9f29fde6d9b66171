// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the movediff scan and movement classifier.
//!
//! This standalone crate extracts the scan and the classifier arithmetic
//! over fixed-size arrays and proves them for every input up to `MAX_LEN`
//! elements per side.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No underflow**: `src + ins - del - overtaken` never goes negative
//! 2. **In range**: the expected position is always a destination index
//! 3. **Moved ⊆ candidates**: only shifted pairs are ever classified as moved
//! 4. **Order preserved**: strictly increasing sequences never produce moves

/// Largest sequence length the proofs cover.
pub const MAX_LEN: usize = 4;

/// Sentinel for "no partner".
pub const NONE: usize = usize::MAX;

// ============================================================================
// SCAN (extracted from src/scan.rs, equality only)
// ============================================================================

/// Greedy first-match over equal values.
///
/// Returns the destination bound to each source position (or `NONE`) and
/// which destination positions were claimed.
pub fn scan(
    source: &[u8],
    destination: &[u8],
) -> ([usize; MAX_LEN], [bool; MAX_LEN]) {
    let mut partner = [NONE; MAX_LEN];
    let mut claimed = [false; MAX_LEN];

    for i in 0..source.len() {
        for j in 0..destination.len() {
            if !claimed[j] && source[i] == destination[j] {
                claimed[j] = true;
                partner[i] = j;
                break;
            }
        }
    }
    (partner, claimed)
}

// ============================================================================
// CLASSIFIER (extracted from src/movement.rs, without the Fenwick tree)
// ============================================================================

/// Outcome of classifying one scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classified {
    pub moved: [bool; MAX_LEN],
    /// Set when `lost > gained` for some candidate.
    pub underflow: bool,
    /// Set when an expected position fell outside the destination.
    pub out_of_range: bool,
}

/// Decide movements in increasing source order.
pub fn classify(
    partner: &[usize; MAX_LEN],
    claimed: &[bool; MAX_LEN],
    source_len: usize,
    destination_len: usize,
) -> Classified {
    let mut out = Classified {
        moved: [false; MAX_LEN],
        underflow: false,
        out_of_range: false,
    };

    for src in 0..source_len {
        let dst = partner[src];
        if dst == NONE || dst == src {
            continue;
        }

        let insertions_before = (0..dst).filter(|&j| !claimed[j]).count();
        let deletions_before = (0..src).filter(|&i| partner[i] == NONE).count();
        let overtaken = (0..src)
            .filter(|&i| out.moved[i] && partner[i] > dst)
            .count();

        let gained = src + insertions_before;
        let lost = deletions_before + overtaken;
        if lost > gained {
            out.underflow = true;
            continue;
        }
        let expected = gained - lost;
        if expected >= destination_len {
            out.out_of_range = true;
        }
        out.moved[src] = expected != dst;
    }
    out
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    fn any_sequence() -> ([u8; MAX_LEN], usize) {
        let values: [u8; MAX_LEN] = kani::any();
        let len: usize = kani::any();
        kani::assume(len <= MAX_LEN);
        // A small alphabet keeps duplicates in play without blowing up the state space.
        for v in values {
            kani::assume(v < 3);
        }
        (values, len)
    }

    /// Proof: classification never underflows and never leaves the destination.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_expected_position_in_bounds() {
        let (source, n) = any_sequence();
        let (destination, m) = any_sequence();

        let (partner, claimed) = scan(&source[..n], &destination[..m]);
        let out = classify(&partner, &claimed, n, m);

        assert!(!out.underflow);
        assert!(!out.out_of_range);
    }

    /// Proof: only bound, shifted pairs are moved.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_moved_subset_of_candidates() {
        let (source, n) = any_sequence();
        let (destination, m) = any_sequence();

        let (partner, claimed) = scan(&source[..n], &destination[..m]);
        let out = classify(&partner, &claimed, n, m);

        for src in 0..MAX_LEN {
            if out.moved[src] {
                assert!(src < n);
                assert!(partner[src] != NONE);
                assert!(partner[src] != src);
            }
        }
    }

    /// Proof: strictly increasing inputs keep their relative order, so
    /// nothing moves.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_order_preserving_edits_never_move() {
        let (source, n) = any_sequence();
        let (destination, m) = any_sequence();
        for i in 1..MAX_LEN {
            kani::assume(i >= n || source[i - 1] < source[i]);
            kani::assume(i >= m || destination[i - 1] < destination[i]);
        }

        let (partner, claimed) = scan(&source[..n], &destination[..m]);
        let out = classify(&partner, &claimed, n, m);

        assert!(out.moved.iter().all(|&moved| !moved));
    }
}
