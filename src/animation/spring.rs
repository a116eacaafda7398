//! Damped spring driven by tension/friction values

use crate::constants::animation::{SPRING_MAX_STEP_MS, SPRING_REST_EPSILON};

/// Spring configuration in the tension/friction space UI toolkits expose
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub tension: f32,
    pub friction: f32,
}

impl SpringConfig {
    pub fn new(tension: f32, friction: f32) -> Self {
        Self { tension, friction }
    }

    fn stiffness(&self) -> f32 {
        ((self.tension - 30.0) * 3.62 + 194.0).max(1.0)
    }

    fn damping(&self) -> f32 {
        ((self.friction - 8.0) * 3.0 + 25.0).max(0.0)
    }
}

/// One-dimensional spring toward a fixed target
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    target: f32,
    velocity: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, target: f32) -> Self {
        Self { config, target, velocity: 0.0 }
    }

    /// Advance `value` by `dt_ms`. Returns the new value and whether the
    /// spring came to rest (in which case the value is exactly the target).
    pub fn step(&mut self, mut value: f32, dt_ms: f32) -> (f32, bool) {
        let stiffness = self.config.stiffness();
        let damping = self.config.damping();

        // Keep h * damping and h * sqrt(stiffness) under 0.5 so the
        // integration stays stable for stiff or heavily damped springs
        let substep_ms = SPRING_MAX_STEP_MS
            .min(500.0 / damping.max(f32::EPSILON))
            .min(500.0 / stiffness.sqrt());

        let mut remaining = dt_ms.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(substep_ms) / 1000.0;
            remaining -= substep_ms;

            let force = -stiffness * (value - self.target) - damping * self.velocity;
            self.velocity += force * h;
            value += self.velocity * h;
        }

        if self.is_at_rest(value) {
            self.velocity = 0.0;
            (self.target, true)
        } else {
            (value, false)
        }
    }

    fn is_at_rest(&self, value: f32) -> bool {
        (value - self.target).abs() <= SPRING_REST_EPSILON && self.velocity.abs() <= SPRING_REST_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(spring: &mut Spring, mut value: f32) -> (f32, u32) {
        for frame in 1..=1000 {
            let (next, done) = spring.step(value, 16.0);
            value = next;
            if done {
                return (value, frame);
            }
        }
        (value, u32::MAX)
    }

    #[test]
    fn test_spring_settles_on_target() {
        let mut spring = Spring::new(SpringConfig::new(40.0, 5.0), 0.0);
        let (value, frames) = settle(&mut spring, 120.0);
        assert_eq!(value, 0.0);
        assert!(frames < 1000, "spring never came to rest");
    }

    #[test]
    fn test_underdamped_spring_overshoots() {
        let mut spring = Spring::new(SpringConfig::new(40.0, 5.0), 0.0);
        let mut value = 100.0;
        let mut min_seen = value;
        for _ in 0..60 {
            value = spring.step(value, 16.0).0;
            min_seen = min_seen.min(value);
        }
        assert!(min_seen < 0.0, "low friction spring should cross its target");
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut spring = Spring::new(SpringConfig::new(40.0, 5.0), 0.0);
        let (value, done) = spring.step(50.0, 0.0);
        assert_eq!(value, 50.0);
        assert!(!done);
    }

    #[test]
    fn test_heavily_damped_spring_stays_finite_and_settles() {
        let mut spring = Spring::new(SpringConfig::new(40.0, 100.0), 0.0);
        let mut value = 50.0;
        for _ in 0..2000 {
            let (next, done) = spring.step(value, 16.0);
            assert!(next.is_finite(), "spring diverged");
            value = next;
            if done {
                break;
            }
        }
        assert_eq!(value, 0.0);
    }

    #[test]
    fn test_stiff_spring_stays_finite() {
        let mut spring = Spring::new(SpringConfig::new(1000.0, 5.0), 0.0);
        let (value, frames) = settle(&mut spring, 120.0);
        assert_eq!(value, 0.0);
        assert!(frames < 1000, "stiff spring never came to rest");
    }

    #[test]
    fn test_spring_at_target_is_immediately_at_rest() {
        let mut spring = Spring::new(SpringConfig::new(40.0, 5.0), 10.0);
        assert_eq!(spring.step(10.0, 16.0), (10.0, true));
    }
}
