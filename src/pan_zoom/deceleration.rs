// SPDX-License-Identifier: MPL-2.0
//! Inertial pan after a drag is released.
//!
//! The release shift decays linearly to zero over the deceleration window.
//! Decay is computed from elapsed wall-clock time, never from the number of
//! frames delivered, so a slow or irregular frame clock only lowers
//! smoothness.

use crate::config::DECELERATION_MIN_SHIFT_PX;
use iced::Vector;
use std::time::{Duration, Instant};

/// One deceleration run, seeded with the last drag shift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deceleration {
    seed: Vector,
    started_at: Instant,
    duration: Duration,
}

impl Deceleration {
    #[must_use]
    pub fn new(seed: Vector, started_at: Instant, duration: Duration) -> Self {
        Self {
            seed,
            started_at,
            duration,
        }
    }

    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Remaining share of the seed shift at `now`, in `[0, 1]`.
    #[must_use]
    pub fn ratio(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let remaining = self.duration.saturating_sub(elapsed);
        (remaining.as_secs_f32() / self.duration.as_secs_f32()).max(0.0)
    }

    /// Shift to apply for the frame at `now`, or `None` once the run is over.
    ///
    /// The run ends when the window has elapsed or the decayed shift drops
    /// to one pixel or less on both axes.
    #[must_use]
    pub fn step(&self, now: Instant) -> Option<Vector> {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            return None;
        }
        let shift = self.seed * self.ratio(now);
        if shift.x.abs().max(shift.y.abs()) > DECELERATION_MIN_SHIFT_PX {
            Some(shift)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const WINDOW: Duration = Duration::from_millis(750);

    #[test]
    fn ratio_decays_linearly() {
        let t0 = Instant::now();
        let run = Deceleration::new(Vector::new(30.0, 0.0), t0, WINDOW);
        assert_abs_diff_eq!(run.ratio(t0), 1.0);
        assert_abs_diff_eq!(run.ratio(t0 + Duration::from_millis(375)), 0.5, epsilon = 1e-4);
        assert_abs_diff_eq!(run.ratio(t0 + Duration::from_secs(5)), 0.0);
    }

    #[test]
    fn step_scales_seed() {
        let t0 = Instant::now();
        let run = Deceleration::new(Vector::new(40.0, -20.0), t0, WINDOW);
        let shift = run.step(t0 + Duration::from_millis(375)).expect("still moving");
        assert_abs_diff_eq!(shift.x, 20.0, epsilon = 1e-2);
        assert_abs_diff_eq!(shift.y, -10.0, epsilon = 1e-2);
    }

    #[test]
    fn step_stops_on_small_shift() {
        let t0 = Instant::now();
        let run = Deceleration::new(Vector::new(1.5, 0.5), t0, WINDOW);
        assert!(run.step(t0).is_some());
        // 1.5 * 0.6 = 0.9 px: below threshold.
        assert!(run.step(t0 + Duration::from_millis(300)).is_none());
    }

    #[test]
    fn huge_seed_still_stops_at_window_end() {
        let t0 = Instant::now();
        let run = Deceleration::new(Vector::new(1.0e9, -1.0e9), t0, WINDOW);
        assert!(run.step(t0 + Duration::from_millis(749)).is_some());
        assert!(run.step(t0 + WINDOW).is_none());
    }

    #[test]
    fn zero_window_never_moves() {
        let t0 = Instant::now();
        let run = Deceleration::new(Vector::new(100.0, 100.0), t0, Duration::ZERO);
        assert!(run.step(t0).is_none());
    }
}
