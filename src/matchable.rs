// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! How elements compare: the `Matchable` capability.
//!
//! A diff needs more than equality. To tell "this row was edited" apart from
//! "this row was replaced", an element needs an identity that survives content
//! changes. `Matchable` folds both questions into a single three-valued
//! [`Verdict`]:
//!
//! | Identity | Content | Verdict   |
//! |----------|---------|-----------|
//! | same     | same    | `Equal`   |
//! | same     | differs | `Changed` |
//! | differs  | -       | `NoMatch` |
//!
//! Types without a separate identity can only ever be `Equal` or `NoMatch`;
//! [`verdict_by_eq`] and `#[derive(Matchable)]` give you that for free.
//!
//! # Contract
//!
//! `match_with` must be a pure, deterministic function of the two values.
//! It does not have to be symmetric. A comparison that changes its mind
//! between calls corrupts the diff (the engine does not detect it).

use crate::types::Verdict;

/// Per-type comparison producing a [`Verdict`].
pub trait Matchable {
    /// Compare `self` (a source element) against `other` (a destination element).
    fn match_with(&self, other: &Self) -> Verdict;
}

/// Elements that carry an identity distinct from their content.
///
/// Two elements with equal identifiers are "the same element", even if the
/// rest of their fields differ.
pub trait Identifiable {
    type Identifier: PartialEq;

    fn identifier(&self) -> &Self::Identifier;
}

/// `Equal` if the values are equal, `NoMatch` otherwise.
#[inline]
pub fn verdict_by_eq<T: PartialEq + ?Sized>(a: &T, b: &T) -> Verdict {
    if a == b {
        Verdict::Equal
    } else {
        Verdict::NoMatch
    }
}

/// `Equal` if the values are equal, `Changed` if only their identifiers are,
/// `NoMatch` otherwise.
#[inline]
pub fn verdict_by_identity<T: Identifiable + PartialEq + ?Sized>(a: &T, b: &T) -> Verdict {
    if a == b {
        Verdict::Equal
    } else if a.identifier() == b.identifier() {
        Verdict::Changed
    } else {
        Verdict::NoMatch
    }
}

macro_rules! impl_matchable_by_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Matchable for $ty {
                #[inline]
                fn match_with(&self, other: &Self) -> Verdict {
                    verdict_by_eq(self, other)
                }
            }
        )*
    };
}

impl_matchable_by_eq!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, str, String,
);

// Floats compare by IEEE total order so every value, NaN included, equals
// itself. `0.0` and `-0.0` are different elements.
macro_rules! impl_matchable_by_total_order {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Matchable for $ty {
                #[inline]
                fn match_with(&self, other: &Self) -> Verdict {
                    if self.total_cmp(other).is_eq() {
                        Verdict::Equal
                    } else {
                        Verdict::NoMatch
                    }
                }
            }
        )*
    };
}

impl_matchable_by_total_order!(f32, f64);

impl<T: Matchable + ?Sized> Matchable for &T {
    #[inline]
    fn match_with(&self, other: &Self) -> Verdict {
        (**self).match_with(*other)
    }
}

impl<T: Matchable + ?Sized> Matchable for Box<T> {
    #[inline]
    fn match_with(&self, other: &Self) -> Verdict {
        (**self).match_with(&**other)
    }
}

impl<T: Matchable> Matchable for Option<T> {
    fn match_with(&self, other: &Self) -> Verdict {
        match (self, other) {
            (Some(a), Some(b)) => a.match_with(b),
            (None, None) => Verdict::Equal,
            _ => Verdict::NoMatch,
        }
    }
}
