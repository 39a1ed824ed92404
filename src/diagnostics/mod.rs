// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording gesture activity.
//!
//! The controller pushes a [`GestureDiagnostic`] for every phase change,
//! committed zoom, tap and ignored input into a memory-bounded
//! [`CircularBuffer`], so a host can inspect what led to an unexpected
//! transform without enabling a logger.

mod buffer;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use events::{GestureDiagnostic, GestureDiagnosticKind, IgnoredReason};
