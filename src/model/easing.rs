//! Timing curves for animated layout properties.

/// Timing function applied to a transition's linear progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// CSS `ease`, i.e. `cubic-bezier(0.25, 0.1, 0.25, 1.0)`.
    Ease,
    /// Constant speed.
    Linear,
}

const EASE_CONTROL_POINTS: (f64, f64, f64, f64) = (0.25, 0.1, 0.25, 1.0);

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 40;
const EPSILON: f64 = 1e-7;

impl Easing {
    /// Map linear progress `t` in `[0, 1]` to eased progress in `[0, 1]`.
    ///
    /// Inputs outside the range are clamped, so `apply(0.0) == 0.0` and
    /// `apply(1.0) == 1.0` exactly.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }

        match self {
            Self::Linear => t,
            Self::Ease => {
                let (x1, y1, x2, y2) = EASE_CONTROL_POINTS;
                let s = solve_curve_x(x1, x2, t);
                bezier(y1, y2, s)
            }
        }
    }

    /// CSS keyword for this curve.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Ease => "ease",
            Self::Linear => "linear",
        }
    }
}

/// One coordinate of a cubic bezier anchored at 0 and 1.
fn bezier(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Find the curve parameter whose x coordinate is `x`.
fn solve_curve_x(x1: f64, x2: f64, x: f64) -> f64 {
    let mut s = x;
    for _ in 0..NEWTON_ITERATIONS {
        let error = bezier(x1, x2, s) - x;
        if error.abs() < EPSILON {
            return s;
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= error / slope;
    }

    // Newton wandered off; x is monotonic in s so bisection always converges.
    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..BISECTION_ITERATIONS {
        let value = bezier(x1, x2, s);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}
