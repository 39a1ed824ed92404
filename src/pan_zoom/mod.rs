// SPDX-License-Identifier: MPL-2.0
//! Pan-and-zoom gesture engine.
//!
//! A [`PanZoomController`] owns the zoom level and pan fraction of one
//! [`Surface`] (typically a video frame inside its viewport) and updates them
//! from mouse drags, the wheel, single-finger drags, two-finger pinches and
//! double-taps. After a drag is released the pan keeps moving with linearly
//! decaying velocity, driven by a [`FrameScheduler`].
//!
//! The engine is host-neutral: input arrives as [`GestureInput`] values and
//! notifications leave through a [`PanZoomListener`]. The `input` module
//! translates iced events into this vocabulary.

mod controller;
mod deceleration;
mod gesture;
mod listener;
mod orientation;
mod scheduler;
mod surface;
mod transform;
mod zoom;

pub use controller::PanZoomController;
pub use deceleration::Deceleration;
pub use gesture::{button_index, GestureInput, GesturePhase};
pub use listener::{EventQueue, PanZoomEvent, PanZoomListener};
pub use orientation::Orientation;
pub use scheduler::{FrameHandle, FrameQueue, FrameScheduler};
pub use surface::{Surface, ViewportSurface};
pub use transform::{slack, CursorAffordance, TransformState, Translate, MAX_TRANSLATE};
pub use zoom::{ZoomBounds, ZoomStep};
