//! Easing functions for animations

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    /// Cubic ease-in
    EaseIn,
    /// Cubic ease-out
    EaseOut,
    /// Cubic ease-in-out
    #[default]
    EaseInOut,
    /// CSS-style cubic bezier with control points (x1, y1), (x2, y2)
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// The Material standard curve, `cubic-bezier(0.4, 0.0, 0.2, 1.0)`
    pub const STANDARD: Easing = Easing::CubicBezier(0.4, 0.0, 0.2, 1.0);

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier_ease(t, *x1, *y1, *x2, *y2),
        }
    }
}

/// Cubic bezier easing with implicit endpoints (0,0) and (1,1).
///
/// Solves x(p) == t by bisection, then evaluates y(p). Bisection always
/// converges because x(p) is monotone for CSS-valid control points.
/// Computed in f64 to keep per-frame samples jitter-free.
fn cubic_bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let target = t as f64;
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    let mut p = target;
    for _ in 0..32 {
        let x = bezier_axis(p, x1 as f64, x2 as f64);
        if (x - target).abs() < 1e-7 {
            break;
        }
        if x < target {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    bezier_axis(p, y1 as f64, y2 as f64) as f32
}

/// One axis of the bezier: B(p) = 3(1-p)²p·c1 + 3(1-p)p²·c2 + p³
#[inline]
fn bezier_axis(p: f64, c1: f64, c2: f64) -> f64 {
    let inv = 1.0 - p;
    3.0 * inv * inv * p * c1 + 3.0 * inv * p * p * c2 + p * p * p
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::STANDARD,
    ];

    #[test]
    fn test_endpoints_exact() {
        for easing in CURVES {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_out_of_range_clamps() {
        for easing in CURVES {
            assert_eq!(easing.apply(-1.0), 0.0);
            assert_eq!(easing.apply(2.0), 1.0);
        }
    }

    #[test]
    fn test_monotonic_no_overshoot() {
        for easing in CURVES {
            let mut prev = 0.0f32;
            for i in 0..=100 {
                let v = easing.apply(i as f32 / 100.0);
                assert!(v >= prev - 1e-5, "{easing:?} not monotone at step {i}");
                assert!((0.0..=1.0).contains(&v), "{easing:?} overshoots at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_ease_in_out_midpoint() {
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_standard_curve_front_loaded() {
        // The Material standard curve accelerates quickly and settles slowly
        assert!(Easing::STANDARD.apply(0.5) > 0.5);
    }
}
