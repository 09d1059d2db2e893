use crate::constants::ENTRANCE_EASE;

/// CSS-style cubic bezier timing curve through (0,0), (x1,y1), (x2,y2), (1,1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    /// `x1` and `x2` are clamped to [0, 1] so the curve stays a function of time.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }

    /// Strong ease-out used by the entrance animation.
    pub fn entrance() -> Self {
        let [x1, y1, x2, y2] = ENTRANCE_EASE;
        Self::new(x1, y1, x2, y2)
    }

    #[inline]
    fn sample(a1: f32, a2: f32, u: f32) -> f32 {
        // B(u) = 3(1-u)^2 u a1 + 3(1-u) u^2 a2 + u^3
        let inv = 1.0 - u;
        3.0 * inv * inv * u * a1 + 3.0 * inv * u * u * a2 + u * u * u
    }

    #[inline]
    fn sample_slope(a1: f32, a2: f32, u: f32) -> f32 {
        let inv = 1.0 - u;
        3.0 * inv * inv * a1 + 6.0 * inv * u * (a2 - a1) + 3.0 * u * u * (1.0 - a2)
    }

    /// Find the curve parameter whose x equals `t`.
    fn solve_u(&self, t: f32) -> f32 {
        let mut u = t;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, u) - t;
            if err.abs() < 1e-6 {
                return u;
            }
            let slope = Self::sample_slope(self.x1, self.x2, u);
            if slope.abs() < 1e-6 {
                break;
            }
            u -= err / slope;
        }
        // Newton stalled on a flat segment; bisect instead.
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        u = t;
        for _ in 0..32 {
            let x = Self::sample(self.x1, self.x2, u);
            if (x - t).abs() < 1e-6 {
                break;
            }
            if x < t {
                lo = u;
            } else {
                hi = u;
            }
            u = 0.5 * (lo + hi);
        }
        u
    }

    /// Eased progress for linear progress `t` in [0, 1].
    pub fn ease(&self, t: f32) -> f32 {
        if !t.is_finite() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.solve_u(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        let e = CubicBezier::entrance();
        assert_eq!(e.ease(0.0), 0.0);
        assert_eq!(e.ease(1.0), 1.0);
        assert_eq!(e.ease(-3.0), 0.0);
        assert_eq!(e.ease(7.0), 1.0);
    }

    #[test]
    fn entrance_curve_is_front_loaded_and_monotonic() {
        let e = CubicBezier::entrance();
        assert!(e.ease(0.25) > 0.6, "got {}", e.ease(0.25));
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = e.ease(i as f32 / 100.0);
            assert!(v + 1e-4 >= prev, "dropped at {}: {} < {}", i, v, prev);
            prev = v;
        }
    }

    #[test]
    fn linear_control_points_give_identity() {
        let linear = CubicBezier::new(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
        for t in [0.1_f32, 0.35, 0.5, 0.8] {
            assert!((linear.ease(t) - t).abs() < 1e-3);
        }
    }
}
