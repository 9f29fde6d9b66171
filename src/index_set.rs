// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ordered sets of sequence positions.
//!
//! Backed by a sorted, duplicate-free `Vec`. The movement classifier asks
//! "how many members are below `i`" once per candidate, which is a binary
//! search here instead of a walk.

use crate::types::SequenceIndex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An ordered set of indices from a single index space.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IndexSet<I> {
    members: Vec<I>,
}

impl<I: SequenceIndex> IndexSet<I> {
    /// Empty set.
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Every index in `[0, len)`.
    pub fn full(len: usize) -> Self {
        Self {
            members: (0..len).map(I::from_raw).collect(),
        }
    }

    /// Insert `index`. Returns false if it was already present.
    pub fn insert(&mut self, index: I) -> bool {
        // Appends in order are the common case (the scan walks forward).
        if self.members.last().is_none_or(|&last| last < index) {
            self.members.push(index);
            return true;
        }
        match self.members.binary_search(&index) {
            Ok(_) => false,
            Err(pos) => {
                self.members.insert(pos, index);
                true
            }
        }
    }

    /// Remove `index`. Returns false if it was not present.
    pub fn remove(&mut self, index: I) -> bool {
        match self.members.binary_search(&index) {
            Ok(pos) => {
                self.members.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    pub fn contains(&self, index: I) -> bool {
        self.members.binary_search(&index).is_ok()
    }

    /// Number of members strictly less than `index`.
    #[inline]
    pub fn count_below(&self, index: I) -> usize {
        self.members.partition_point(|&member| member < index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in increasing order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = I> + ExactSizeIterator + '_ {
        self.members.iter().copied()
    }

    /// Members as a sorted slice.
    pub fn as_slice(&self) -> &[I] {
        &self.members
    }
}

impl<I: SequenceIndex> Default for IndexSet<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: SequenceIndex> FromIterator<I> for IndexSet<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        let mut members: Vec<I> = iter.into_iter().collect();
        members.sort_unstable();
        members.dedup();
        Self { members }
    }
}

impl<I: SequenceIndex> Extend<I> for IndexSet<I> {
    fn extend<T: IntoIterator<Item = I>>(&mut self, iter: T) {
        for index in iter {
            self.insert(index);
        }
    }
}

impl<'a, I: SequenceIndex> IntoIterator for &'a IndexSet<I> {
    type Item = I;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter().copied()
    }
}

impl<I: SequenceIndex> fmt::Debug for IndexSet<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.members.iter().map(|i| i.raw()))
            .finish()
    }
}

// Serialized as a plain sorted array of positions. Deserialization goes
// through `FromIterator`, so unsorted or duplicated input is normalized.
impl<I: SequenceIndex + Serialize> Serialize for IndexSet<I> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.members.serialize(serializer)
    }
}

impl<'de, I: SequenceIndex + Deserialize<'de>> Deserialize<'de> for IndexSet<I> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let members = Vec::<I>::deserialize(deserializer)?;
        Ok(members.into_iter().collect())
    }
}
