// SPDX-License-Identifier: MPL-2.0
//! Frame scheduling for the deceleration loop.
//!
//! The controller asks for "one more frame" and keeps the returned handle.
//! Cancelling invalidates the handle, so a frame delivered late for a
//! cancelled run is recognised as stale and ignored.

/// Handle to one requested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Schedules the next tick of an animation, with a cancel handle.
pub trait FrameScheduler {
    /// Requests a single frame callback.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancels a previously requested frame. Unknown handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// The frame waiting to be delivered, if any.
    fn pending(&self) -> Option<FrameHandle>;
}

/// Polled scheduler holding at most one pending frame.
///
/// The host checks [`FrameQueue::pending`] (or subscribes to a frame clock
/// while it is `Some`) and hands the frame back to the controller.
#[derive(Debug, Clone, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: Option<FrameHandle>,
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id = self.next_id.wrapping_add(1);
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }

    fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }
}
