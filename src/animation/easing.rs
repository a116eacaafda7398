//! Easing curves for timed animations

/// Easing applied to normalised progress in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Cubic bézier (0.42, 0, 1, 1), an ease-in curve
    Ease,
    /// Mirror of [`Easing::Ease`]: `1 - ease(1 - t)`
    EaseOut,
    /// Ease-in for the first half, mirrored for the second
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Ease => EASE.solve(t),
            Easing::EaseOut => 1.0 - EASE.solve(1.0 - t),
            Easing::EaseInOut if t < 0.5 => EASE.solve(t * 2.0) / 2.0,
            Easing::EaseInOut => 1.0 - EASE.solve((1.0 - t) * 2.0) / 2.0,
        }
    }
}

const EASE: CubicBezier = CubicBezier { x1: 0.42, y1: 0.0, x2: 1.0, y2: 1.0 };

#[derive(Debug, Clone, Copy)]
struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    fn component(t: f32, p1: f32, p2: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    }

    fn slope(t: f32, p1: f32, p2: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
    }

    /// y for the curve point whose x equals `x`
    fn solve(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..8 {
            let err = Self::component(t, self.x1, self.x2) - x;
            if err.abs() < 1e-5 {
                return Self::component(t, self.y1, self.y2);
            }
            let d = Self::slope(t, self.x1, self.x2);
            if d.abs() < 1e-6 {
                break;
            }
            t = (t - err / d).clamp(0.0, 1.0);
        }

        // Newton stalled near a flat tangent, bisect instead
        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        t = x;
        for _ in 0..32 {
            let value = Self::component(t, self.x1, self.x2);
            if (value - x).abs() < 1e-5 {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) * 0.5;
        }
        Self::component(t, self.y1, self.y2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::Ease, Easing::EaseOut, Easing::EaseInOut] {
            assert!(easing.apply(0.0).abs() < 1e-4, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-4, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_ease_out_leads_linear() {
        // Decelerating curve covers more than half the distance at half time
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!(Easing::Ease.apply(0.5) < 0.5);
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let a = Easing::EaseInOut.apply(0.25);
        let b = Easing::EaseInOut.apply(0.75);
        assert!((a + b - 1.0).abs() < 1e-3);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_monotonic() {
        let mut last = 0.0;
        for step in 1..=100 {
            let value = Easing::EaseOut.apply(step as f32 / 100.0);
            assert!(value >= last - 1e-5);
            last = value;
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Easing::Linear.apply(-2.0), 0.0);
        assert_eq!(Easing::Linear.apply(7.0), 1.0);
    }
}
