// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for identity-carrying rows (Equal / Changed / NoMatch).
//!
//! Rows share ids often and labels sometimes, so every verdict shows up and
//! changed rows get moved around.

#![no_main]

use libfuzzer_sys::fuzz_target;
use movediff::testing::{row, Row};
use movediff::{compute_diff, Matchable, Verdict};

#[derive(Debug, Clone)]
struct RowsInput {
    source: Vec<Row>,
    destination: Vec<Row>,
}

fn arbitrary_rows(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Vec<Row>> {
    let len = u.int_in_range(0..=24)?;
    (0..len)
        .map(|_| {
            let id = u.int_in_range(0..=7)?;
            let label = ["a", "b", "c"][u.int_in_range(0..=2)?];
            Ok(row(id, label))
        })
        .collect()
}

impl<'a> arbitrary::Arbitrary<'a> for RowsInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(RowsInput {
            source: arbitrary_rows(u)?,
            destination: arbitrary_rows(u)?,
        })
    }
}

fuzz_target!(|input: RowsInput| {
    let diff = compute_diff(&input.source, &input.destination);
    if let Err(e) = diff.validate(input.source.len(), input.destination.len()) {
        panic!("ill-formed diff: {}\n{:?}", e, input);
    }

    // Bound pairs compare the way they were filed
    for record in diff.matches() {
        if let Some((i, j)) = record.positions() {
            let verdict = input.source[i].match_with(&input.destination[j]);
            assert_eq!(verdict, record.verdict(), "misfiled {}", record);
        }
    }

    // Deleted rows really have no unclaimed partner left. A deleted row could
    // only pair with an inserted row, and the scan would have taken it.
    for i in diff.deleted() {
        for j in diff.inserted() {
            assert_eq!(
                input.source[i.get()].match_with(&input.destination[j.get()]),
                Verdict::NoMatch,
                "deleted {} could have matched inserted {}",
                i,
                j
            );
        }
    }
});
