// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Logging for the scan and the movement classifier.
//!
//! `trace!` marks per-element decisions (a binding, a movement) and `debug!`
//! marks the summary of a whole phase, diff or batch. Both forward to
//! `tracing` when the `tracing` feature is on or under `cfg(test)`. Otherwise
//! they expand to nothing and their arguments are never formatted.

/// Per-element event: one binding or one movement decision.
#[cfg(any(test, feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*);
    };
}

#[cfg(not(any(test, feature = "tracing")))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

/// Summary event for a phase, a diff or a batch.
#[cfg(any(test, feature = "tracing"))]
macro_rules! debug {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*);
    };
}

#[cfg(not(any(test, feature = "tracing")))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

pub(crate) use debug;
pub(crate) use trace;
