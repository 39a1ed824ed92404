// SPDX-License-Identifier: MPL-2.0
//! Pan/zoom controller.
//!
//! Converts raw mouse, touch and wheel input into a bounded scale+translate
//! transform applied to one [`Surface`], with inertial deceleration after a
//! drag is released.
//!
//! All public geometric operations (`set_pos`, `move_by`, `zoom_to_zone`,
//! `full_zoom_in_on_position`) work in content axes. Raw [`GestureInput`]
//! positions are screen axes and go through [`Orientation::map_point`]
//! before use; the surface receives the transform mapped back to screen axes.

use super::deceleration::Deceleration;
use super::gesture::{
    button_index, pinch_distance, DoubleTapDetector, GestureInput, GestureKind, GesturePhase,
    GestureSession,
};
use super::listener::PanZoomListener;
use super::orientation::Orientation;
use super::scheduler::{FrameHandle, FrameQueue, FrameScheduler};
use super::surface::Surface;
use super::transform::{
    clamp_axis, slack, CursorAffordance, TransformState, Translate,
};
use super::zoom::ZoomBounds;
use crate::config::{
    PanZoomConfig, ANCHOR_OVERFLOW_GUARD, PINCH_DISTANCE_DIVISOR, TAP_MAX_DURATION_MS,
    WHEEL_TRANSITION_SECS,
};
use crate::diagnostics::{
    BufferCapacity, CircularBuffer, GestureDiagnostic, GestureDiagnosticKind, IgnoredReason,
};
use crate::error::Result;
use iced::event::Status;
use iced::{Point, Size, Vector};
use std::time::{Duration, Instant};

/// Below this distance from 1.0 a zoom is treated as unscaled when rescaling.
const UNIT_ZOOM_EPSILON: f32 = 1e-6;

/// Where the pan should end up after an update.
#[derive(Debug, Clone, Copy)]
enum PanTarget {
    /// Keep the current fraction.
    Keep,
    /// Absolute pixel offset of the content centre, clamped on conversion.
    Pixels(Vector),
}

/// Pan-and-zoom gesture engine for one surface.
pub struct PanZoomController<S: Surface, F: FrameScheduler = FrameQueue> {
    config: PanZoomConfig,
    bounds: ZoomBounds,
    state: TransformState,
    cursor: CursorAffordance,
    surface: S,
    scheduler: F,
    listener: Option<Box<dyn PanZoomListener>>,
    phase: GesturePhase,
    session: Option<GestureSession>,
    deceleration: Option<Deceleration>,
    pending_frame: Option<FrameHandle>,
    double_tap: DoubleTapDetector,
    touch_started_at: Option<Instant>,
    diagnostics: CircularBuffer<GestureDiagnostic>,
    destroyed: bool,
}

impl<S: Surface> PanZoomController<S, FrameQueue> {
    /// Creates a controller driven by a polled [`FrameQueue`].
    ///
    /// Fails when the configuration would corrupt the clamp formulas
    /// (for example `min_zoom >= max_zoom`).
    pub fn new(config: PanZoomConfig, surface: S) -> Result<Self> {
        Self::with_scheduler(config, surface, FrameQueue::default())
    }
}

impl<S: Surface, F: FrameScheduler> PanZoomController<S, F> {
    pub fn with_scheduler(config: PanZoomConfig, surface: S, scheduler: F) -> Result<Self> {
        if let Err(err) = config.validate() {
            log::warn!("rejecting pan/zoom configuration: {err}");
            return Err(err.into());
        }

        let bounds = ZoomBounds::from_config(&config);
        let state = TransformState::new(bounds.normalize(config.initial_zoom));

        let mut controller = Self {
            config,
            bounds,
            state,
            cursor: CursorAffordance::Auto,
            surface,
            scheduler,
            listener: None,
            phase: GesturePhase::Idle,
            session: None,
            deceleration: None,
            pending_frame: None,
            double_tap: DoubleTapDetector::default(),
            touch_started_at: None,
            diagnostics: CircularBuffer::new(BufferCapacity::default()),
            destroyed: false,
        };
        if controller.surface.viewport_size().is_some() {
            controller.surface.apply_transform(&controller.state);
        }
        Ok(controller)
    }

    /// Builder variant of [`Self::set_listener`].
    #[must_use]
    pub fn with_listener(mut self, listener: impl PanZoomListener + 'static) -> Self {
        self.set_listener(listener);
        self
    }

    /// Installs the listener receiving change and tap notifications.
    /// Ignored once the controller is destroyed.
    pub fn set_listener(&mut self, listener: impl PanZoomListener + 'static) {
        if !self.destroyed {
            self.listener = Some(Box::new(listener));
        }
    }

    // ======================================================================
    // Accessors
    // ======================================================================

    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.state.zoom
    }

    #[must_use]
    pub fn translate(&self) -> Translate {
        self.state.translate
    }

    #[must_use]
    pub fn transform(&self) -> &TransformState {
        &self.state
    }

    /// Absolute pixel offset of the content centre, in content axes.
    #[must_use]
    pub fn pixel_offset(&self) -> Option<Vector> {
        let viewport = self.viewport()?;
        Some(self.state.translate.to_pixels(viewport, self.state.zoom))
    }

    #[must_use]
    pub fn cursor(&self) -> CursorAffordance {
        self.cursor
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    #[must_use]
    pub fn is_decelerating(&self) -> bool {
        self.phase == GesturePhase::Decelerating
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    #[must_use]
    pub fn config(&self) -> &PanZoomConfig {
        &self.config
    }

    #[must_use]
    pub fn zoom_bounds(&self) -> ZoomBounds {
        self.bounds
    }

    #[must_use]
    pub fn diagnostics(&self) -> &CircularBuffer<GestureDiagnostic> {
        &self.diagnostics
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    /// The deceleration frame this controller is waiting for.
    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    // ======================================================================
    // Flags
    // ======================================================================

    pub fn set_allow_zoom(&mut self, allow: bool) {
        self.config.allow_zoom = allow;
    }

    pub fn set_allow_pan(&mut self, allow: bool) {
        self.config.allow_pan = allow;
        if !allow {
            self.cancel_gesture();
        }
    }

    pub fn set_allow_wheel(&mut self, allow: bool) {
        self.config.allow_wheel = allow;
    }

    pub fn set_allow_touch_events(&mut self, allow: bool) {
        self.config.allow_touch_events = allow;
        if !allow {
            self.double_tap.clear();
            self.touch_started_at = None;
            // The closing touch event would be dropped, so end the gesture now.
            if self
                .session
                .as_ref()
                .is_some_and(|s| s.kind != GestureKind::Mouse)
            {
                self.cancel_gesture();
            }
        }
    }

    /// Handles the player's "zoom unsupported" notification.
    pub fn disable_zoom(&mut self) {
        self.set_allow_zoom(false);
        self.reset();
    }

    // ======================================================================
    // Public operations
    // ======================================================================

    /// Sets the zoom, clamped and rounded. Position is kept as a fraction.
    pub fn set_zoom(&mut self, zoom: f32, is_reset: bool) {
        if !self.allows_zoom() {
            return;
        }
        let transition = self.config.anim_duration;
        self.update(Some(zoom), PanTarget::Keep, is_reset, transition);
    }

    /// Moves the content centre to an absolute pixel offset (content axes).
    pub fn set_pos(&mut self, offset: Vector) {
        if !self.allows_pan() {
            return;
        }
        self.update(None, PanTarget::Pixels(offset), false, 0.0);
    }

    pub fn zoom_in(&mut self, step: f32) {
        self.zoom_by(step);
    }

    pub fn zoom_out(&mut self, step: f32) {
        self.zoom_by(-step);
    }

    /// Zooms so the zone (viewport pixels, content axes) fills the viewport
    /// and is centred.
    pub fn zoom_to_zone(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if !self.allows_zoom() {
            return;
        }
        let Some(viewport) = self.viewport() else {
            self.ignore(IgnoredReason::Unmounted, Instant::now());
            return;
        };
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return;
        }

        let zoom = self.bounds.normalize(
            (viewport.width / width)
                .min(viewport.height / height)
                .min(self.bounds.max()),
        );
        let zone_center = Point::new(x + width / 2.0, y + height / 2.0);
        let pixels = (center_of(viewport) - zone_center) * zoom;

        let transition = self.config.anim_duration;
        self.update(Some(zoom), PanTarget::Pixels(pixels), false, transition);
    }

    /// Zooms to the maximum, pulling `(x, y)` (content axes) toward the
    /// viewport centre.
    pub fn full_zoom_in_on_position(&mut self, x: f32, y: f32) {
        if !self.allows_zoom() {
            return;
        }
        let Some(viewport) = self.viewport() else {
            self.ignore(IgnoredReason::Unmounted, Instant::now());
            return;
        };

        let zoom = self.bounds.max();
        let pull = zoom.min(ANCHOR_OVERFLOW_GUARD);
        let pixels = (center_of(viewport) - Point::new(x, y)) * pull;

        let transition = self.config.anim_duration;
        self.update(Some(zoom), PanTarget::Pixels(pixels), false, transition);
    }

    /// Pans by a pixel delta (content axes).
    pub fn move_by(&mut self, shift_x: f32, shift_y: f32, transition_seconds: f32) {
        if !self.allows_pan() {
            return;
        }
        let Some(viewport) = self.viewport() else {
            self.ignore(IgnoredReason::Unmounted, Instant::now());
            return;
        };

        let zoom = self.state.zoom;
        let current = self.state.translate.to_pixels(viewport, zoom);
        let limit = slack(viewport, zoom);
        let target = Vector::new(
            clamp_axis(current.x, current.x + shift_x, limit.x),
            clamp_axis(current.y, current.y + shift_y, limit.y),
        );

        self.update(None, PanTarget::Pixels(target), false, transition_seconds);
        self.set_cursor(CursorAffordance::from_slack(limit, self.state.orientation));
    }

    /// Returns to the initial zoom, centred, with the default cursor.
    pub fn reset(&mut self) {
        if self.destroyed {
            return;
        }
        self.cancel_gesture();
        if self.viewport().is_none() {
            self.ignore(IgnoredReason::Unmounted, Instant::now());
            return;
        }
        let transition = self.config.anim_duration;
        self.update(
            Some(self.config.initial_zoom),
            PanTarget::Pixels(Vector::new(0.0, 0.0)),
            true,
            transition,
        );
        self.set_cursor(CursorAffordance::Auto);
    }

    /// Switches the X↔Y coordinate swap used for simulated landscape layouts.
    pub fn set_transform(&mut self, rotated: bool) {
        if self.destroyed {
            return;
        }
        let orientation = Orientation::from_rotated(rotated);
        if orientation == self.state.orientation {
            return;
        }
        // Cursor and shift memory are in the old axes.
        self.cancel_gesture();
        self.state.orientation = orientation;
        log::debug!("pan/zoom orientation set to {orientation:?}");
        if self.surface.viewport_size().is_some() {
            self.surface.apply_transform(&self.state);
        }
    }

    /// Detaches the listener and surface and cancels any pending frame.
    /// Safe to call more than once.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.cancel_gesture();
        self.destroyed = true;
        self.listener = None;
        self.surface.detach();
        self.record(Instant::now(), GestureDiagnosticKind::Destroyed);
        log::debug!("pan/zoom controller destroyed");
    }

    // ======================================================================
    // Input
    // ======================================================================

    /// Feeds one raw input event. Returns [`Status::Captured`] when the host
    /// should stop propagation (the wheel is always captured while mounted).
    pub fn handle_input(&mut self, input: GestureInput, now: Instant) -> Status {
        if self.destroyed {
            return Status::Ignored;
        }
        if self.viewport().is_none() {
            self.ignore(IgnoredReason::Unmounted, now);
            return Status::Ignored;
        }
        if input.is_touch() && !self.config.allow_touch_events {
            self.ignore(IgnoredReason::TouchDisabled, now);
            return Status::Ignored;
        }

        match input {
            GestureInput::MouseDown { position, button } => {
                if !self.config.allow_pan {
                    self.ignore(IgnoredReason::PanDisabled, now);
                    return Status::Ignored;
                }
                if self.config.ignores_button(button_index(button)) {
                    self.ignore(IgnoredReason::IgnoredButton, now);
                    return Status::Ignored;
                }
                let origin = self.state.orientation.map_point(position);
                self.start_drag(GestureKind::Mouse, origin, now);
                Status::Captured
            }
            GestureInput::MouseMove { position } => {
                if self.is_dragging(GestureKind::Mouse) {
                    let cursor = self.state.orientation.map_point(position);
                    self.drag_to(cursor);
                    Status::Captured
                } else {
                    Status::Ignored
                }
            }
            GestureInput::MouseUp { button }
                if self.config.ignores_button(button_index(button)) =>
            {
                Status::Ignored
            }
            GestureInput::MouseUp { .. } | GestureInput::MouseLeave => {
                if self.is_dragging(GestureKind::Mouse) {
                    self.release(now);
                    Status::Captured
                } else {
                    Status::Ignored
                }
            }
            GestureInput::Wheel { delta_y } => {
                self.wheel(delta_y, now);
                Status::Captured
            }
            GestureInput::TouchStart { touches } => self.touch_start(&touches, now),
            GestureInput::TouchMove { touches } => self.touch_move(&touches),
            GestureInput::TouchEnd { touches } => self.touch_end(&touches, now),
            GestureInput::TouchCancel => {
                self.touch_started_at = None;
                self.end_touch_gesture(now);
                Status::Captured
            }
        }
    }

    /// Delivers a frame previously requested from the scheduler.
    /// Stale handles (cancelled runs) are ignored.
    pub fn on_frame(&mut self, handle: FrameHandle, now: Instant) {
        if self.destroyed || self.pending_frame != Some(handle) {
            return;
        }
        self.pending_frame = None;
        self.scheduler.cancel_frame(handle);

        let Some(run) = self.deceleration else {
            return;
        };
        match run.step(now) {
            Some(shift) => {
                self.move_by(shift.x, shift.y, 0.0);
                self.pending_frame = Some(self.scheduler.request_frame());
            }
            None => {
                self.deceleration = None;
                self.set_phase(GesturePhase::Idle, now);
            }
        }
    }

    /// Delivers the scheduler's pending frame, if any.
    pub fn tick(&mut self, now: Instant) {
        if let Some(handle) = self.scheduler.pending() {
            self.on_frame(handle, now);
        }
    }

    // ======================================================================
    // Gesture machine
    // ======================================================================

    fn is_dragging(&self, kind: GestureKind) -> bool {
        self.phase == GesturePhase::Dragging
            && self.session.as_ref().is_some_and(|s| s.kind == kind)
    }

    fn start_drag(&mut self, kind: GestureKind, origin: Point, now: Instant) {
        self.cancel_deceleration(now);
        self.session = Some(GestureSession::drag(kind, origin, now));
        self.set_phase(GesturePhase::Dragging, now);
    }

    fn drag_to(&mut self, cursor: Point) {
        let shift = self.session.as_mut().and_then(|s| s.advance(cursor));
        if let Some(shift) = shift {
            self.move_by(shift.x, shift.y, 0.0);
        }
    }

    /// Ends a drag, seeding deceleration with the last shift if there is one.
    fn release(&mut self, now: Instant) {
        let seed = self.session.take().and_then(|s| s.last_shift);
        let duration = self.config.deceleration();

        match seed {
            Some(seed) if !duration.is_zero() => {
                self.deceleration = Some(Deceleration::new(seed, now, duration));
                self.pending_frame = Some(self.scheduler.request_frame());
                self.set_phase(GesturePhase::Decelerating, now);
            }
            _ => self.set_phase(GesturePhase::Idle, now),
        }
    }

    fn start_pinch(&mut self, touches: &[Point], now: Instant) {
        let Some(distance) = pinch_distance(touches) else {
            return;
        };
        self.cancel_deceleration(now);
        self.session = Some(GestureSession::pinch(distance, self.state.zoom, now));
        self.set_phase(GesturePhase::Pinching, now);
    }

    fn pinch_to(&mut self, distance: f32) {
        let (min, max) = (self.bounds.min(), self.bounds.max());
        let allow_zoom = self.config.allow_zoom;

        let Some(track) = self.session.as_mut().and_then(|s| s.pinch.as_mut()) else {
            return;
        };
        let delta = distance - track.last_distance;
        track.last_distance = distance;
        if !allow_zoom {
            return;
        }
        track.zoom = (track.zoom + delta / PINCH_DISTANCE_DIVISOR).clamp(min, max);
        let zoom = track.zoom;

        self.update(Some(zoom), PanTarget::Keep, false, 0.0);
    }

    fn touch_start(&mut self, touches: &[Point], now: Instant) -> Status {
        match touches.len() {
            0 => Status::Ignored,
            1 => {
                if self.touch_started_at.is_none() {
                    self.touch_started_at = Some(now);
                }
                let delay = self.config.double_tap_delay();
                let cooldown = self.config.double_tap_cooldown();
                let position = self.state.orientation.map_point(touches[0]);

                if self.double_tap.register(now, delay, cooldown) && self.config.allow_zoom {
                    self.double_tap_at(position, now);
                    return Status::Captured;
                }
                if !self.config.allow_pan {
                    self.ignore(IgnoredReason::PanDisabled, now);
                    return Status::Ignored;
                }
                self.start_drag(GestureKind::SingleTouch, position, now);
                Status::Captured
            }
            _ => {
                if self.touch_started_at.is_none() {
                    self.touch_started_at = Some(now);
                }
                self.start_pinch(touches, now);
                Status::Captured
            }
        }
    }

    fn touch_move(&mut self, touches: &[Point]) -> Status {
        match (self.phase, touches) {
            (GesturePhase::Pinching, [_, _, ..]) => {
                if let Some(distance) = pinch_distance(touches) {
                    self.pinch_to(distance);
                }
                Status::Captured
            }
            (GesturePhase::Dragging, [touch]) if self.is_dragging(GestureKind::SingleTouch) => {
                let cursor = self.state.orientation.map_point(*touch);
                self.drag_to(cursor);
                Status::Captured
            }
            _ => Status::Ignored,
        }
    }

    fn touch_end(&mut self, remaining: &[Point], now: Instant) -> Status {
        match remaining {
            [] => {
                let tapped = self.touch_started_at.take().is_some_and(|start| {
                    now.saturating_duration_since(start)
                        < Duration::from_millis(TAP_MAX_DURATION_MS)
                });
                self.end_touch_gesture(now);
                if tapped {
                    self.record(now, GestureDiagnosticKind::Tap);
                    if let Some(listener) = self.listener.as_mut() {
                        listener.on_tap();
                    }
                }
            }
            [touch] if self.phase == GesturePhase::Pinching => {
                // Falls back to a drag; pinch distance memory is dropped.
                self.session = None;
                if self.config.allow_pan {
                    let origin = self.state.orientation.map_point(*touch);
                    self.start_drag(GestureKind::SingleTouch, origin, now);
                } else {
                    self.set_phase(GesturePhase::Idle, now);
                }
            }
            _ if self.phase == GesturePhase::Pinching => {
                // A third finger left; measure the remaining pair from scratch.
                if let (Some(distance), Some(track)) = (
                    pinch_distance(remaining),
                    self.session.as_mut().and_then(|s| s.pinch.as_mut()),
                ) {
                    track.last_distance = distance;
                }
            }
            _ => {}
        }
        Status::Captured
    }

    fn end_touch_gesture(&mut self, now: Instant) {
        match self.phase {
            GesturePhase::Dragging if self.is_dragging(GestureKind::SingleTouch) => {
                self.release(now);
            }
            GesturePhase::Pinching => {
                self.session = None;
                self.set_phase(GesturePhase::Idle, now);
            }
            _ => {}
        }
    }

    fn double_tap_at(&mut self, position: Point, now: Instant) {
        self.cancel_deceleration(now);
        self.session = None;
        self.set_phase(GesturePhase::Idle, now);
        self.record(now, GestureDiagnosticKind::DoubleTap);

        if self.bounds.is_min(self.state.zoom) {
            self.full_zoom_in_on_position(position.x, position.y);
        } else {
            self.reset();
        }
    }

    fn wheel(&mut self, delta_y: f32, now: Instant) {
        if !self.config.allow_zoom {
            self.ignore(IgnoredReason::ZoomDisabled, now);
            return;
        }
        if !self.config.allow_wheel {
            self.ignore(IgnoredReason::WheelDisabled, now);
            return;
        }
        if delta_y == 0.0 || !delta_y.is_finite() {
            return;
        }
        let velocity = self.config.scroll_velocity.copysign(delta_y);
        let zoom = self.state.zoom + velocity;
        self.update(Some(zoom), PanTarget::Keep, false, WHEEL_TRANSITION_SECS);
    }

    fn zoom_by(&mut self, step: f32) {
        if !self.allows_zoom() {
            return;
        }
        let Some(viewport) = self.viewport() else {
            self.ignore(IgnoredReason::Unmounted, Instant::now());
            return;
        };

        let old_zoom = self.state.zoom;
        let new_zoom = self.bounds.normalize(old_zoom + step);
        if new_zoom == old_zoom {
            return;
        }

        let pixels = self.state.translate.to_pixels(viewport, old_zoom);
        let old_excess = old_zoom - 1.0;
        let rescaled = if old_excess.abs() <= UNIT_ZOOM_EPSILON {
            pixels
        } else {
            pixels * ((new_zoom - 1.0) / old_excess)
        };

        let transition = self.config.anim_duration;
        self.update(Some(new_zoom), PanTarget::Pixels(rescaled), false, transition);
    }

    /// Stops any drag, pinch or deceleration without seeding inertia.
    fn cancel_gesture(&mut self) {
        let now = Instant::now();
        self.cancel_deceleration(now);
        self.session = None;
        self.set_phase(GesturePhase::Idle, now);
    }

    fn cancel_deceleration(&mut self, now: Instant) {
        if let Some(handle) = self.pending_frame.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.deceleration = None;
        if self.phase == GesturePhase::Decelerating {
            self.set_phase(GesturePhase::Idle, now);
        }
    }

    // ======================================================================
    // State writes
    // ======================================================================

    /// Single write path: mutates state, paints, then notifies.
    fn update(&mut self, zoom: Option<f32>, pan: PanTarget, is_reset: bool, transition: f32) {
        let Some(viewport) = self.viewport() else {
            self.ignore(IgnoredReason::Unmounted, Instant::now());
            return;
        };

        let old_zoom = self.state.zoom;
        let old_translate = self.state.translate;

        let new_zoom = zoom.map_or(old_zoom, |z| self.bounds.normalize(z));
        let new_translate = if new_zoom <= 1.0 {
            Translate::ZERO
        } else {
            match pan {
                PanTarget::Keep => old_translate,
                PanTarget::Pixels(pixels) => Translate::from_pixels(pixels, viewport, new_zoom),
            }
        };

        let zoom_changed = new_zoom != old_zoom;
        let translate_changed = !new_translate.approx_eq(old_translate);
        if !zoom_changed && !translate_changed {
            return;
        }

        self.state.zoom = new_zoom;
        self.state.translate = new_translate;
        self.state.transition_seconds = transition;
        self.surface.apply_transform(&self.state);

        if zoom_changed && self.cursor != CursorAffordance::Auto {
            self.set_cursor(CursorAffordance::from_slack(
                slack(viewport, new_zoom),
                self.state.orientation,
            ));
        }

        if zoom_changed {
            self.record(
                Instant::now(),
                GestureDiagnosticKind::Zoom {
                    zoom: new_zoom,
                    is_reset,
                },
            );
            if let Some(listener) = self.listener.as_mut() {
                listener.on_change(new_zoom, is_reset);
            }
        }
        if translate_changed {
            if let Some(listener) = self.listener.as_mut() {
                listener.on_translate_change(new_translate);
            }
        }
    }

    fn set_cursor(&mut self, cursor: CursorAffordance) {
        if self.cursor != cursor {
            self.cursor = cursor;
            self.surface.set_cursor(cursor);
        }
    }

    fn set_phase(&mut self, to: GesturePhase, now: Instant) {
        let from = self.phase;
        if from == to {
            return;
        }
        self.phase = to;
        log::debug!("pan/zoom gesture {from:?} -> {to:?}");
        self.record(now, GestureDiagnosticKind::Phase { from, to });
    }

    /// Viewport size in content axes, `None` when unmounted or destroyed.
    fn viewport(&self) -> Option<Size> {
        if self.destroyed {
            return None;
        }
        self.surface
            .viewport_size()
            .map(|size| self.state.orientation.map_size(size))
    }

    fn allows_zoom(&mut self) -> bool {
        if self.destroyed {
            return false;
        }
        if !self.config.allow_zoom {
            self.ignore(IgnoredReason::ZoomDisabled, Instant::now());
            return false;
        }
        true
    }

    fn allows_pan(&mut self) -> bool {
        if self.destroyed {
            return false;
        }
        if !self.config.allow_pan {
            self.ignore(IgnoredReason::PanDisabled, Instant::now());
            return false;
        }
        true
    }

    fn ignore(&mut self, reason: IgnoredReason, now: Instant) {
        let reason = if self.destroyed {
            IgnoredReason::Destroyed
        } else {
            reason
        };
        self.record(now, GestureDiagnosticKind::Ignored { reason });
    }

    fn record(&mut self, at: Instant, kind: GestureDiagnosticKind) {
        self.diagnostics.push(GestureDiagnostic::new(at, kind));
    }
}

fn center_of(viewport: Size) -> Point {
    Point::new(viewport.width / 2.0, viewport.height / 2.0)
}

impl<S: Surface, F: FrameScheduler> Drop for PanZoomController<S, F> {
    fn drop(&mut self) {
        self.destroy();
    }
}
