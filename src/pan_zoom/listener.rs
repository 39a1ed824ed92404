// SPDX-License-Identifier: MPL-2.0
//! Callbacks raised by the controller.

use super::transform::Translate;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Receives controller notifications. Every method defaults to a no-op.
///
/// Notifications fire only when the value actually changed, and always
/// after the controller state has been updated.
pub trait PanZoomListener {
    fn on_change(&mut self, _zoom: f32, _is_reset: bool) {}

    fn on_translate_change(&mut self, _translate: Translate) {}

    fn on_tap(&mut self) {}
}

/// A notification as a value, for hosts that process them later.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanZoomEvent {
    ZoomChanged { zoom: f32, is_reset: bool },
    TranslateChanged(Translate),
    Tap,
}

/// Listener queueing notifications for the host to drain.
///
/// Clones share the same queue, so the host keeps one clone and hands the
/// other to the controller.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: Rc<RefCell<VecDeque<PanZoomEvent>>>,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns every queued notification, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<PanZoomEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    fn push(&self, event: PanZoomEvent) {
        self.events.borrow_mut().push_back(event);
    }
}

impl PanZoomListener for EventQueue {
    fn on_change(&mut self, zoom: f32, is_reset: bool) {
        self.push(PanZoomEvent::ZoomChanged { zoom, is_reset });
    }

    fn on_translate_change(&mut self, translate: Translate) {
        self.push(PanZoomEvent::TranslateChanged(translate));
    }

    fn on_tap(&mut self) {
        self.push(PanZoomEvent::Tap);
    }
}
