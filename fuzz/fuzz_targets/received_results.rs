// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for checking untrusted results.
//!
//! Arbitrary JSON that happens to deserialize as a `DiffResult` must be either
//! accepted or rejected by `WellFormedDiff::new`. It must never panic, even
//! for lengths near `usize::MAX`, and an accepted result must survive a round
//! trip unchanged.

#![no_main]

use libfuzzer_sys::fuzz_target;
use movediff::{DiffResult, WellFormedDiff};

/// Claimed sequence length: usually small, sometimes absurd.
#[derive(Debug, arbitrary::Arbitrary)]
enum Length {
    Small(u8),
    Huge(u8),
}

impl Length {
    fn get(&self) -> usize {
        match *self {
            Length::Small(n) => n.into(),
            Length::Huge(n) => usize::MAX - usize::from(n),
        }
    }
}

fuzz_target!(|input: (Length, Length, &[u8])| {
    let (source_len, destination_len, bytes) = input;
    let (source_len, destination_len) = (source_len.get(), destination_len.get());
    let Ok(received) = serde_json::from_slice::<DiffResult>(bytes) else {
        return;
    };

    if let Ok(checked) = WellFormedDiff::new(received, source_len, destination_len) {
        assert_eq!(checked.source_len(), checked.inner().source_len());
        assert_eq!(checked.destination_len(), checked.inner().destination_len());

        let json = serde_json::to_vec(checked.inner()).expect("serialize");
        let back: DiffResult = serde_json::from_slice(&json).expect("deserialize");
        assert_eq!(&back, checked.inner());
    }
});
