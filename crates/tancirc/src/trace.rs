//! Trace of an input plane inside the circle plane.
//!
//! Within the local frame, plane `n·x + d = 0` becomes the 2D line
//! `A x + B y + C = 0`. A circle through the frame origin centered at
//! `(x, y)` is tangent to that line iff
//! `(A x + B y + C)² = L² (x² + y²)` with `L = hypot(A, B)`.

use tancirc_math::Plane;

use crate::frame::LocalFrame;

/// Line `a x + b y + c = 0` in local coordinates, with `len = hypot(a, b)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineTrace {
    /// Coefficient of `x`.
    pub a: f64,
    /// Coefficient of `y`.
    pub b: f64,
    /// Constant term.
    pub c: f64,
    /// `hypot(a, b)`.
    pub len: f64,
}

impl LineTrace {
    /// Trace of `plane` in `frame`.
    pub fn of_plane(plane: &Plane, frame: &LocalFrame) -> Self {
        let a = plane.normal.dot(&frame.e1);
        let b = plane.normal.dot(&frame.e2);
        let c = plane.evaluate(&frame.origin);
        Self {
            a,
            b,
            c,
            len: a.hypot(b),
        }
    }

    /// `true` if the plane does not cut the circle plane in a usable line.
    pub fn is_degenerate(&self, eps: f64) -> bool {
        self.len.abs() <= eps
    }

    /// `a x + b y + c` at a local point.
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        self.a * x + self.b * y + self.c
    }

    /// Left minus right side of the tangency equation.
    #[cfg(test)]
    pub(crate) fn tangency_residual(&self, x: f64, y: f64) -> f64 {
        let s = self.evaluate(x, y);
        s * s - self.len * self.len * (x * x + y * y)
    }
}
