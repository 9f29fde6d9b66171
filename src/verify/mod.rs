// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: checked results and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Type-level wrapper** (`WellFormedDiff`) that can only be built from a
//!    result that passed every invariant. If you hold one, it is valid.
//!
//! 2. **Runtime contracts** that panic when the engine contradicts itself.
//!    The cheap ones run always, the expensive ones only in debug builds.
//!
//! Use both. The wrapper guards results crossing a trust boundary. The contracts
//! catch algorithmic errors when tests run.

mod types;
pub mod contracts;

pub use types::*;
