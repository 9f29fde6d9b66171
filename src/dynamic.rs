// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type-erased elements for heterogeneous sequences.
//!
//! A grid that mixes headers, cards and footers still wants one diff over the
//! whole list. `DynMatchable` boxes any `Matchable` value together with the
//! comparison function for its concrete type. Comparing two wrappers downcasts
//! the other side; if the concrete types differ the verdict is `NoMatch`.

use crate::matchable::Matchable;
use crate::types::Verdict;
use std::any::{Any, TypeId};
use std::fmt;

type CompareFn = fn(&dyn Any, &dyn Any) -> Verdict;

/// A `Matchable` value with its concrete type erased.
pub struct DynMatchable {
    value: Box<dyn Any + Send + Sync>,
    compare: CompareFn,
    type_name: &'static str,
}

impl DynMatchable {
    /// Wrap `value`, binding `T`'s comparison.
    pub fn new<T>(value: T) -> Self
    where
        T: Matchable + Any + Send + Sync,
    {
        Self {
            value: Box::new(value),
            compare: compare_as::<T>,
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Borrow the wrapped value if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// `TypeId` of the wrapped value.
    pub fn value_type_id(&self) -> TypeId {
        (*self.value).type_id()
    }

    /// Name of the wrapped type, for diagnostics only.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

fn compare_as<T: Matchable + Any>(lhs: &dyn Any, rhs: &dyn Any) -> Verdict {
    match (lhs.downcast_ref::<T>(), rhs.downcast_ref::<T>()) {
        (Some(lhs), Some(rhs)) => lhs.match_with(rhs),
        _ => Verdict::NoMatch,
    }
}

impl Matchable for DynMatchable {
    fn match_with(&self, other: &Self) -> Verdict {
        // The bound function belongs to self's type; it downcasts both sides.
        (self.compare)(&*self.value, &*other.value)
    }
}

impl fmt::Debug for DynMatchable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynMatchable")
            .field("type", &self.type_name)
            .finish_non_exhaustive()
    }
}
