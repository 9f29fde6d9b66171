// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for heterogeneous sequences of type-erased elements.
//!
//! Values of different concrete types must never be bound to each other, no
//! matter how the sequences interleave.

#![no_main]

use libfuzzer_sys::fuzz_target;
use movediff::{compute_diff, DynMatchable};

#[derive(Debug, arbitrary::Arbitrary)]
enum Element {
    Small(u8),
    Wide(u16),
    Flag(bool),
}

impl Element {
    fn erase(&self) -> DynMatchable {
        match *self {
            Element::Small(v) => DynMatchable::new(v % 4),
            Element::Wide(v) => DynMatchable::new(v % 4),
            Element::Flag(v) => DynMatchable::new(v),
        }
    }
}

fuzz_target!(|input: (Vec<Element>, Vec<Element>)| {
    let (source, destination) = input;
    let erased_source: Vec<DynMatchable> = source.iter().map(Element::erase).collect();
    let erased_destination: Vec<DynMatchable> = destination.iter().map(Element::erase).collect();

    let diff = compute_diff(&erased_source, &erased_destination);
    if let Err(e) = diff.validate(source.len(), destination.len()) {
        panic!("ill-formed diff: {}", e);
    }

    for record in diff.matches() {
        if let Some((i, j)) = record.positions() {
            assert_eq!(
                erased_source[i].value_type_id(),
                erased_destination[j].value_type_id(),
                "{} binds {} to {}",
                record,
                erased_source[i].type_name(),
                erased_destination[j].type_name()
            );
        }
    }
});
