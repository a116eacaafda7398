//! Top card translation and derived rotation

use crate::animation::{AnimatedXY, AnimationId, Completion, Easing, SpringConfig};
use crate::constants::swipe::MAX_ROTATION_DEG;
use crate::types::{Axis, Offset};

#[derive(Debug)]
pub struct PositionModel {
    value: AnimatedXY,
    screen_width: f32,
    reset_spring: SpringConfig,
}

impl PositionModel {
    pub fn new(screen_width: f32, reset_spring: SpringConfig) -> Self {
        Self {
            value: AnimatedXY::new(),
            screen_width,
            reset_spring,
        }
    }

    pub fn offset(&self) -> Offset {
        self.value.value()
    }

    pub fn is_animating(&self) -> bool {
        self.value.is_animating()
    }

    /// Rotation in degrees: linear from -10° to +10° across ±half a screen
    /// width of horizontal travel, clamped beyond.
    pub fn rotation_deg(&self) -> f32 {
        let half = self.screen_width / 2.0;
        if half <= 0.0 {
            return 0.0;
        }
        (self.offset().x / half).clamp(-1.0, 1.0) * MAX_ROTATION_DEG
    }

    /// Direct set, used while dragging
    pub fn set(&mut self, offset: Offset) {
        self.value.set(offset);
    }

    pub fn stop(&mut self) {
        self.value.stop();
    }

    pub fn spring_to_origin(&mut self) -> AnimationId {
        self.value.spring_to(Offset::ZERO, self.reset_spring)
    }

    pub fn animate_to(&mut self, axis: Axis, target: f32, duration_ms: f32, easing: Easing) -> AnimationId {
        self.value.animate_axis(axis, target, duration_ms, easing)
    }

    pub fn tick(&mut self, dt_ms: f32) -> Vec<Completion> {
        self.value.tick(dt_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> PositionModel {
        PositionModel::new(400.0, SpringConfig::new(40.0, 5.0))
    }

    #[test]
    fn test_rotation_interpolates_and_clamps() {
        let mut model = model();
        assert_eq!(model.rotation_deg(), 0.0);

        model.set(Offset::new(100.0, 0.0));
        assert!((model.rotation_deg() - 5.0).abs() < 1e-5);

        model.set(Offset::new(-200.0, 30.0));
        assert!((model.rotation_deg() + 10.0).abs() < 1e-5);

        model.set(Offset::new(5000.0, 0.0));
        assert!((model.rotation_deg() - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_rotation_ignores_vertical_travel() {
        let mut model = model();
        model.set(Offset::new(0.0, 300.0));
        assert_eq!(model.rotation_deg(), 0.0);
    }

    #[test]
    fn test_timed_animation_reaches_target() {
        let mut model = model();
        let id = model.animate_to(Axis::X, 800.0, 400.0, Easing::EaseOut);
        let mut done = Vec::new();
        for _ in 0..30 {
            done.extend(model.tick(16.0));
        }
        assert_eq!(done, vec![Completion { id, finished: true }]);
        assert_eq!(model.offset(), Offset::new(800.0, 0.0));
    }

    #[test]
    fn test_spring_to_origin_returns_home() {
        let mut model = model();
        model.set(Offset::new(50.0, 0.0));
        model.spring_to_origin();
        for _ in 0..500 {
            model.tick(16.0);
        }
        assert_eq!(model.offset(), Offset::ZERO);
        assert!(!model.is_animating());
    }
}
