// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Procedural macros for `movediff`.
//!
//! Most element types compare in one of two ways: by plain equality, or by
//! "same identity, maybe different content". Writing `match_with` by hand for
//! either is boilerplate, so `#[derive(Matchable)]` writes it for you.
//!
//! # Example
//!
//! ```ignore
//! use movediff::Matchable;
//!
//! // Equal or NoMatch.
//! #[derive(PartialEq, Matchable)]
//! struct Tag(String);
//!
//! // Equal, Changed (same id, new content), or NoMatch.
//! #[derive(PartialEq, Matchable)]
//! struct Card {
//!     #[matchable(id)]
//!     id: u64,
//!     title: String,
//! }
//! ```

use proc_macro::TokenStream;

mod matchable;

/// Derive macro for `movediff::Matchable`.
///
/// # Field Attributes
///
/// - `#[matchable(id)]` - Field is part of the element's identity. Struct
///   fields only; several fields may be marked.
///
/// # Generated Output
///
/// - Without identity fields: `Equal` when `self == other`, else `NoMatch`.
/// - With identity fields: `Equal` when `self == other`, `Changed` when every
///   identity field is equal, else `NoMatch`.
///
/// The type must implement `PartialEq`; the generated impl carries a
/// `Self: PartialEq` bound.
#[proc_macro_derive(Matchable, attributes(matchable))]
pub fn derive_matchable(input: TokenStream) -> TokenStream {
    matchable::derive(input)
}
