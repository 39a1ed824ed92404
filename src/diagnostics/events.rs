// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for gesture tracking.

use crate::pan_zoom::GesturePhase;
use std::time::Instant;

/// What happened inside the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureDiagnosticKind {
    /// The gesture machine changed phase.
    Phase { from: GesturePhase, to: GesturePhase },
    /// A double-tap was consumed.
    DoubleTap,
    /// A tap was reported to the listener.
    Tap,
    /// Zoom was committed.
    Zoom { zoom: f32, is_reset: bool },
    /// Input was dropped because a flag disabled it or the surface was unmounted.
    Ignored { reason: IgnoredReason },
    /// The controller was destroyed.
    Destroyed,
}

/// Why an input or operation was a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    Unmounted,
    Destroyed,
    PanDisabled,
    ZoomDisabled,
    WheelDisabled,
    TouchDisabled,
    IgnoredButton,
}

/// A timestamped diagnostic entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureDiagnostic {
    pub at: Instant,
    pub kind: GestureDiagnosticKind,
}

impl GestureDiagnostic {
    #[must_use]
    pub fn new(at: Instant, kind: GestureDiagnosticKind) -> Self {
        Self { at, kind }
    }
}
