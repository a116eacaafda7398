//! Fixed-duration tween

use super::easing::Easing;

#[derive(Debug, Clone, PartialEq)]
pub struct Timing {
    from: f32,
    to: f32,
    duration_ms: f32,
    elapsed_ms: f32,
    easing: Easing,
}

impl Timing {
    pub fn new(from: f32, to: f32, duration_ms: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            elapsed_ms: 0.0,
            easing,
        }
    }

    /// Advance by `dt_ms`, returning the current value and whether the
    /// tween reached its end.
    pub fn step(&mut self, dt_ms: f32) -> (f32, bool) {
        self.elapsed_ms += dt_ms.max(0.0);
        if self.duration_ms <= 0.0 || self.elapsed_ms >= self.duration_ms {
            return (self.to, true);
        }
        let progress = self.easing.apply(self.elapsed_ms / self.duration_ms);
        (self.from + (self.to - self.from) * progress, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_progress() {
        let mut timing = Timing::new(0.0, 100.0, 400.0, Easing::Linear);
        assert_eq!(timing.step(100.0), (25.0, false));
        assert_eq!(timing.step(100.0), (50.0, false));
        assert_eq!(timing.step(200.0), (100.0, true));
    }

    #[test]
    fn test_overshooting_frame_lands_on_target() {
        let mut timing = Timing::new(-20.0, -780.0, 400.0, Easing::EaseOut);
        assert_eq!(timing.step(1000.0), (-780.0, true));
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut timing = Timing::new(0.0, 5.0, 0.0, Easing::Linear);
        assert_eq!(timing.step(0.0), (5.0, true));
    }
}
