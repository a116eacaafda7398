//! Exit animation: drives the top card off-screen, then hands over to the next card
//!
//! Phases run `Idle -> [Nudging ->] Running -> Holding -> Idle`. Anything other
//! than `Idle` counts as in flight, and a second exit request while in flight
//! is dropped. A driver that ends unfinished abandons the exit and springs the
//! card back to the origin instead of advancing.

use tracing::{debug, info, warn};

use super::position::PositionModel;
use crate::animation::{AnimationId, Completion, Easing};
use crate::types::{Offset, SwipeDirection};

/// Timing parameters for one exit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExitTiming {
    /// Travel along the exit axis, before sign
    pub distance: f32,
    pub duration_ms: f32,
    pub hold_ms: f32,
    pub nudge_ms: f32,
    /// Nudge target, matching the gesture lock threshold
    pub nudge_distance: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExitPhase {
    Idle,
    /// Synthesised drag past the lock threshold (action buttons only)
    Nudging { animation: AnimationId, direction: SwipeDirection },
    Running { animation: AnimationId, direction: SwipeDirection },
    /// Card at its final position with rendering suppressed
    Holding { remaining_ms: f32, direction: SwipeDirection },
}

/// Result of an exit leaving flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    Completed(SwipeDirection),
    Abandoned(SwipeDirection),
}

#[derive(Debug)]
pub struct ExitAnimator {
    timing: ExitTiming,
    phase: ExitPhase,
}

impl ExitAnimator {
    pub fn new(timing: ExitTiming) -> Self {
        Self { timing, phase: ExitPhase::Idle }
    }

    pub fn in_flight(&self) -> bool {
        self.phase != ExitPhase::Idle
    }

    pub fn is_holding(&self) -> bool {
        matches!(self.phase, ExitPhase::Holding { .. })
    }

    /// Animate the card out along `direction`. No-op while in flight.
    pub fn start(&mut self, position: &mut PositionModel, direction: SwipeDirection) -> bool {
        if self.in_flight() {
            debug!(?direction, phase = ?self.phase, "Exit already in flight, ignoring");
            return false;
        }
        self.run(position, direction);
        true
    }

    /// Button path: nudge past the lock threshold first, then exit.
    /// No-op while in flight.
    pub fn start_with_nudge(&mut self, position: &mut PositionModel, direction: SwipeDirection) -> bool {
        if self.in_flight() {
            debug!(?direction, phase = ?self.phase, "Exit already in flight, ignoring button");
            return false;
        }
        let animation = position.animate_to(
            direction.axis(),
            direction.sign() * self.timing.nudge_distance,
            self.timing.nudge_ms,
            Easing::EaseInOut,
        );
        self.phase = ExitPhase::Nudging { animation, direction };
        debug!(?direction, "Exit nudge started");
        true
    }

    /// Route a position driver completion. Returns an outcome when the exit
    /// leaves flight because of it.
    pub fn on_completion(&mut self, position: &mut PositionModel, completion: Completion) -> Option<ExitOutcome> {
        match self.phase {
            ExitPhase::Nudging { animation, direction } if animation == completion.id => {
                if completion.finished {
                    self.run(position, direction);
                    None
                } else {
                    Some(self.abandon(position, direction))
                }
            }
            ExitPhase::Running { animation, direction } if animation == completion.id => {
                if completion.finished {
                    self.phase = ExitPhase::Holding { remaining_ms: self.timing.hold_ms, direction };
                    debug!(?direction, hold_ms = self.timing.hold_ms, "Exit animation finished, holding");
                    None
                } else {
                    Some(self.abandon(position, direction))
                }
            }
            _ => None,
        }
    }

    /// Count down the post-exit hold; on expiry the card returns to the
    /// origin and the exit completes. Call before routing the same frame's
    /// completions so the hold starts on the frame after the exit lands.
    pub fn tick_hold(&mut self, position: &mut PositionModel, dt_ms: f32) -> Option<ExitOutcome> {
        let ExitPhase::Holding { remaining_ms, direction } = self.phase else {
            return None;
        };
        let remaining_ms = remaining_ms - dt_ms;
        if remaining_ms > 0.0 {
            self.phase = ExitPhase::Holding { remaining_ms, direction };
            return None;
        }

        position.set(Offset::ZERO);
        self.phase = ExitPhase::Idle;
        info!(?direction, "Exit completed");
        Some(ExitOutcome::Completed(direction))
    }

    fn run(&mut self, position: &mut PositionModel, direction: SwipeDirection) {
        let target = direction.sign() * self.timing.distance;
        let animation = position.animate_to(direction.axis(), target, self.timing.duration_ms, Easing::EaseOut);
        self.phase = ExitPhase::Running { animation, direction };
        info!(?direction, target, duration_ms = self.timing.duration_ms, "Exit animation started");
    }

    fn abandon(&mut self, position: &mut PositionModel, direction: SwipeDirection) -> ExitOutcome {
        warn!(?direction, "Exit interrupted, springing card back");
        self.phase = ExitPhase::Idle;
        position.spring_to_origin();
        ExitOutcome::Abandoned(direction)
    }
}
