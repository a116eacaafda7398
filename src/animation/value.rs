//! Animatable 2D value
//!
//! `AnimatedXY` owns an `Offset` and at most one driver per axis. Drivers are
//! advanced by an external frame clock through [`AnimatedXY::tick`], which
//! reports every driver that ended since the previous tick. A driver that is
//! replaced, stopped, or overridden by a direct `set` is reported with
//! `finished = false`.

use super::easing::Easing;
use super::spring::{Spring, SpringConfig};
use super::timing::Timing;
use crate::types::{Axis, Offset};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationId(u64);

/// End of a driver's life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub id: AnimationId,
    pub finished: bool,
}

#[derive(Debug)]
enum DriverKind {
    Spring { x: Option<Spring>, y: Option<Spring> },
    Timing { axis: Axis, timing: Timing },
}

#[derive(Debug)]
struct Driver {
    id: AnimationId,
    kind: DriverKind,
}

impl Driver {
    fn controls(&self, axis: Axis) -> bool {
        match &self.kind {
            DriverKind::Spring { .. } => true,
            DriverKind::Timing { axis: driven, .. } => *driven == axis,
        }
    }
}

#[derive(Debug, Default)]
pub struct AnimatedXY {
    value: Offset,
    drivers: Vec<Driver>,
    next_id: u64,
    interrupted: Vec<Completion>,
}

impl AnimatedXY {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> Offset {
        self.value
    }

    pub fn is_animating(&self) -> bool {
        !self.drivers.is_empty()
    }

    /// Jump to `value`, interrupting every running driver
    pub fn set(&mut self, value: Offset) {
        self.interrupt_where(|_| true);
        self.value = value;
    }

    pub fn stop(&mut self) {
        self.interrupt_where(|_| true);
    }

    /// Spring both axes toward `target`
    pub fn spring_to(&mut self, target: Offset, config: SpringConfig) -> AnimationId {
        self.interrupt_where(|_| true);
        let id = self.allocate_id();
        self.drivers.push(Driver {
            id,
            kind: DriverKind::Spring {
                x: Some(Spring::new(config, target.x)),
                y: Some(Spring::new(config, target.y)),
            },
        });
        id
    }

    /// Timed animation of a single axis
    pub fn animate_axis(&mut self, axis: Axis, to: f32, duration_ms: f32, easing: Easing) -> AnimationId {
        self.interrupt_where(|driver| driver.controls(axis));
        let id = self.allocate_id();
        let from = self.value.get(axis);
        self.drivers.push(Driver {
            id,
            kind: DriverKind::Timing { axis, timing: Timing::new(from, to, duration_ms, easing) },
        });
        id
    }

    /// Advance every driver by `dt_ms` and collect completions, interruptions first.
    pub fn tick(&mut self, dt_ms: f32) -> Vec<Completion> {
        let mut completions = std::mem::take(&mut self.interrupted);

        let mut value = self.value;
        self.drivers.retain_mut(|driver| {
            let done = match &mut driver.kind {
                DriverKind::Spring { x, y } => {
                    step_spring(x, &mut value.x, dt_ms);
                    step_spring(y, &mut value.y, dt_ms);
                    x.is_none() && y.is_none()
                }
                DriverKind::Timing { axis, timing } => {
                    let (next, done) = timing.step(dt_ms);
                    value.set(*axis, next);
                    done
                }
            };
            if done {
                completions.push(Completion { id: driver.id, finished: true });
            }
            !done
        });
        self.value = value;

        completions
    }

    fn allocate_id(&mut self) -> AnimationId {
        self.next_id += 1;
        AnimationId(self.next_id)
    }

    fn interrupt_where(&mut self, mut predicate: impl FnMut(&Driver) -> bool) {
        let interrupted = &mut self.interrupted;
        self.drivers.retain(|driver| {
            if predicate(driver) {
                interrupted.push(Completion { id: driver.id, finished: false });
                false
            } else {
                true
            }
        });
    }
}

fn step_spring(spring: &mut Option<Spring>, value: &mut f32, dt_ms: f32) {
    if let Some(active) = spring {
        let (next, at_rest) = active.step(*value, dt_ms);
        *value = next;
        if at_rest {
            *spring = None;
        }
    }
}
