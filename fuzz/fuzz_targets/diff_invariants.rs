// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the structural invariants of plain-value diffs.
//!
//! Small alphabets make duplicates and partial overlaps common, which is where
//! the greedy scan and the movement offsets get interesting. Any panic here is
//! a contract violation inside the engine.

#![no_main]

use libfuzzer_sys::fuzz_target;
use movediff::{compute_diff, WellFormedDiff};

#[derive(Debug, arbitrary::Arbitrary)]
struct DiffInput {
    source: Vec<u8>,
    destination: Vec<u8>,
    alphabet: u8,
}

fuzz_target!(|input: DiffInput| {
    let alphabet = input.alphabet.max(1);
    let source: Vec<u8> = input.source.iter().map(|b| b % alphabet).collect();
    let destination: Vec<u8> = input.destination.iter().map(|b| b % alphabet).collect();

    let diff = compute_diff(&source, &destination);
    if let Err(e) = WellFormedDiff::new(diff.clone(), source.len(), destination.len()) {
        panic!("ill-formed diff {:?} -> {:?}: {}", source, destination, e);
    }

    // Diffing a sequence against itself is always the identity
    let same = compute_diff(&source, &source);
    assert!(same.is_identity(), "identity diff reported changes: {}", same);

    // Derived lengths agree with the inputs
    assert_eq!(diff.source_len(), source.len());
    assert_eq!(diff.destination_len(), destination.len());
});
