// Copyright 2025 the Kinetic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier timing functions.

/// A CSS-style `cubic-bezier(x1, y1, x2, y2)` timing function.
///
/// The curve runs from `(0, 0)` to `(1, 1)`; x is time and y is progress.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier {
    /// First control point, x.
    pub x1: f64,
    /// First control point, y.
    pub y1: f64,
    /// Second control point, x.
    pub x2: f64,
    /// Second control point, y.
    pub y2: f64,
}

impl CubicBezier {
    /// Material standard easing, a strong deceleration.
    pub const STANDARD: Self = Self::new(0.2, 0.0, 0.0, 1.0);
    /// `ease-out`.
    pub const EASE_OUT: Self = Self::new(0.0, 0.0, 0.58, 1.0);
    /// Linear timing.
    pub const LINEAR: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// Create a timing function from its two control points.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// `true` if both control points lie within `[0, 1]` on the time axis.
    ///
    /// Outside that range x(t) is not monotonic and the function is undefined.
    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.x1) && (0.0..=1.0).contains(&self.x2)
    }

    /// Map linear time `t` in `[0, 1]` to eased progress.
    ///
    /// Inputs are clamped to `[0, 1]`; the endpoints map exactly to `0` and `1`.
    pub fn ease(&self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let s = self.solve_x(t);
        sample(self.y1, self.y2, s)
    }

    /// Find the curve parameter whose x equals `x`.
    fn solve_x(&self, x: f64) -> f64 {
        const EPSILON: f64 = 1e-7;

        // Newton's method converges in a handful of steps for well-behaved curves.
        let mut s = x;
        for _ in 0..8 {
            let err = sample(self.x1, self.x2, s) - x;
            if err.abs() < EPSILON {
                return s;
            }
            let slope = sample_derivative(self.x1, self.x2, s);
            if slope.abs() < 1e-6 {
                break;
            }
            s -= err / slope;
        }

        // Flat spots stall Newton; bisection always terminates.
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        s = x;
        while hi - lo > EPSILON {
            let v = sample(self.x1, self.x2, s);
            if (v - x).abs() < EPSILON {
                break;
            }
            if v < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) * 0.5;
        }
        s
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// One coordinate of a cubic Bézier with endpoints 0 and 1.
fn sample(p1: f64, p2: f64, s: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    ((a * s + b) * s + c) * s
}

fn sample_derivative(p1: f64, p2: f64, s: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * s + 2.0 * b) * s + c
}
