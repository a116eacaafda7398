//! Gesture tracking: direction classification, axis lock and release decision

use tracing::{debug, info};

use crate::types::{AxisLock, Offset, SwipeDirection};

/// What to do with the card when the finger lifts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    Exit(SwipeDirection),
    Reset,
}

#[derive(Debug, Clone, Copy, Default)]
struct GestureSession {
    lock: AxisLock,
    offset: Offset,
}

/// Consumes origin-relative drag deltas for one touch at a time
#[derive(Debug, Clone)]
pub struct GestureTracker {
    lock_threshold: f32,
    swipe_threshold: f32,
    session: Option<GestureSession>,
}

impl GestureTracker {
    pub fn new(lock_threshold: f32, swipe_threshold: f32) -> Self {
        Self {
            lock_threshold,
            swipe_threshold,
            session: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn lock(&self) -> AxisLock {
        self.session.map(|s| s.lock).unwrap_or_default()
    }

    /// Start a new session, discarding any previous one
    pub fn begin(&mut self) {
        self.session = Some(GestureSession::default());
    }

    pub fn cancel(&mut self) {
        self.session = None;
    }

    /// Feed one drag sample; returns the constrained card offset, or `None`
    /// when no session is active.
    pub fn track(&mut self, dx: f32, dy: f32) -> Option<Offset> {
        let lock_threshold = self.lock_threshold;
        let session = self.session.as_mut()?;

        if session.lock == AxisLock::None && (dx.abs() > lock_threshold || dy.abs() > lock_threshold) {
            session.lock = if dy.abs() > dx.abs() {
                AxisLock::Vertical
            } else {
                AxisLock::Horizontal
            };
            info!(lock = ?session.lock, dx, dy, "Gesture axis locked");
        }

        session.offset = match session.lock {
            AxisLock::None => Offset::new(dx, dy),
            AxisLock::Horizontal => Offset::new(dx, 0.0),
            AxisLock::Vertical => Offset::new(0.0, dy.max(0.0)),
        };
        Some(session.offset)
    }

    /// End the session with its final sample and decide between exit and reset
    pub fn release(&mut self, dx: f32, dy: f32) -> Release {
        if self.track(dx, dy).is_none() {
            return Release::Reset;
        }
        let lock = self.lock();
        self.session = None;

        let decision = match lock {
            AxisLock::None => Release::Reset,
            AxisLock::Horizontal if dx.abs() >= self.swipe_threshold => {
                Release::Exit(if dx > 0.0 { SwipeDirection::Yes } else { SwipeDirection::No })
            }
            AxisLock::Vertical if dy >= self.swipe_threshold => Release::Exit(SwipeDirection::Save),
            AxisLock::Horizontal | AxisLock::Vertical => Release::Reset,
        };
        debug!(?lock, dx, dy, ?decision, "Gesture released");
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> GestureTracker {
        let mut tracker = GestureTracker::new(20.0, 80.0);
        tracker.begin();
        tracker
    }

    #[test]
    fn test_free_movement_below_lock_threshold() {
        let mut tracker = tracker();
        for (dx, dy) in [(0.0, 0.0), (5.0, -7.0), (-19.5, 12.0), (20.0, -20.0)] {
            assert_eq!(tracker.track(dx, dy), Some(Offset::new(dx, dy)));
        }
        assert_eq!(tracker.lock(), AxisLock::None);
    }

    #[test]
    fn test_horizontal_lock_pins_y_for_rest_of_session() {
        let mut tracker = tracker();
        tracker.track(10.0, 4.0);
        assert_eq!(tracker.track(25.0, 10.0), Some(Offset::new(25.0, 0.0)));
        assert_eq!(tracker.lock(), AxisLock::Horizontal);

        // Later frames dominated by dy still report y = 0
        assert_eq!(tracker.track(30.0, 150.0), Some(Offset::new(30.0, 0.0)));
        assert_eq!(tracker.track(-5.0, -90.0), Some(Offset::new(-5.0, 0.0)));
        assert_eq!(tracker.lock(), AxisLock::Horizontal);
    }

    #[test]
    fn test_vertical_lock_suppresses_upward_motion() {
        let mut tracker = tracker();
        assert_eq!(tracker.track(3.0, 30.0), Some(Offset::new(0.0, 30.0)));
        assert_eq!(tracker.lock(), AxisLock::Vertical);
        assert_eq!(tracker.track(40.0, -50.0), Some(Offset::new(0.0, 0.0)));
    }

    #[test]
    fn test_upward_vertical_release_never_exits() {
        let mut tracker = tracker();
        tracker.track(0.0, -30.0);
        assert_eq!(tracker.lock(), AxisLock::Vertical);
        assert_eq!(tracker.release(0.0, -200.0), Release::Reset);
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_release_threshold_boundaries() {
        let mut tracker = tracker();
        tracker.track(25.0, 0.0);
        assert_eq!(tracker.release(85.0, 0.0), Release::Exit(SwipeDirection::Yes));

        let mut tracker = self::tracker();
        tracker.track(25.0, 0.0);
        assert_eq!(tracker.release(79.0, 0.0), Release::Reset);

        let mut tracker = self::tracker();
        assert_eq!(tracker.release(-80.0, 3.0), Release::Exit(SwipeDirection::No));
    }

    #[test]
    fn test_downward_release_saves() {
        let mut tracker = tracker();
        tracker.track(2.0, 40.0);
        assert_eq!(tracker.release(10.0, 80.0), Release::Exit(SwipeDirection::Save));
    }

    #[test]
    fn test_ambiguous_release_resets() {
        let mut tracker = tracker();
        assert_eq!(tracker.release(0.0, 0.0), Release::Reset);

        let mut tracker = self::tracker();
        assert_eq!(tracker.release(15.0, -15.0), Release::Reset);
    }

    #[test]
    fn test_release_decided_by_locked_axis_not_final_delta() {
        let mut tracker = tracker();
        tracker.track(30.0, 0.0);
        assert_eq!(tracker.lock(), AxisLock::Horizontal);
        // Vertical travel past the threshold does not count once locked horizontal
        assert_eq!(tracker.release(30.0, 150.0), Release::Reset);
    }

    #[test]
    fn test_tie_locks_horizontal() {
        let mut tracker = tracker();
        tracker.track(30.0, 30.0);
        assert_eq!(tracker.lock(), AxisLock::Horizontal);
    }

    #[test]
    fn test_no_session_ignores_input() {
        let mut tracker = GestureTracker::new(20.0, 80.0);
        assert_eq!(tracker.track(100.0, 0.0), None);
        assert_eq!(tracker.release(100.0, 0.0), Release::Reset);
    }

    #[test]
    fn test_begin_clears_previous_lock() {
        let mut tracker = tracker();
        tracker.track(50.0, 0.0);
        tracker.begin();
        assert_eq!(tracker.lock(), AxisLock::None);
        assert_eq!(tracker.track(5.0, 5.0), Some(Offset::new(5.0, 5.0)));
    }
}
