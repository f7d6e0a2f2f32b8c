//! Bisector construction and line/tangency-quadratic intersection.
//!
//! A center equidistant (in the unsigned sense) from both traces lies on
//! one of the two angle bisectors
//! `(A1 − k A2) x + (B1 − k B2) y + (C1 − k C2) = 0`, `k = ±L1/L2`.
//! Intersecting a bisector with the tangency quadratic of the first trace
//! yields at most two centers per sign.

use log::trace;
use tancirc_math::{nearly_zero, Point2, Vec2};

use crate::config::Tolerances;
use crate::trace::LineTrace;

/// Which of the two angle bisectors to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BisectorSign {
    /// `k = +L1/L2`.
    Positive,
    /// `k = -L1/L2`.
    Negative,
}

impl BisectorSign {
    /// Both signs, in solve order.
    pub const ALL: [BisectorSign; 2] = [BisectorSign::Positive, BisectorSign::Negative];

    fn factor(self) -> f64 {
        match self {
            BisectorSign::Positive => 1.0,
            BisectorSign::Negative => -1.0,
        }
    }
}

/// Bisector line of two traces for the given sign.
///
/// The `len` field is left at `hypot(a, b)` of the bisector itself.
pub fn bisector_line(first: &LineTrace, second: &LineTrace, sign: BisectorSign) -> LineTrace {
    let k = sign.factor() * (first.len / second.len);
    let a = first.a - k * second.a;
    let b = first.b - k * second.b;
    let c = first.c - k * second.c;
    LineTrace {
        a,
        b,
        c,
        len: a.hypot(b),
    }
}

// =============================================================================
// Quadratic
// =============================================================================

/// Real roots of `qa t² + qb t + qc = 0` under the solver's tolerance policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadraticRoots {
    /// No real root (or a vanishing linear equation).
    None,
    /// `qa ≈ 0`: the single root of `qb t + qc = 0`.
    Linear(f64),
    /// Double root, including slightly negative discriminants.
    Double(f64),
    /// Two distinct roots, smaller-offset (`−√disc`) root first.
    Two(f64, f64),
}

impl QuadraticRoots {
    /// Roots as a vector, in order.
    pub fn to_vec(self) -> Vec<f64> {
        match self {
            QuadraticRoots::None => Vec::new(),
            QuadraticRoots::Linear(t) | QuadraticRoots::Double(t) => vec![t],
            QuadraticRoots::Two(t1, t2) => vec![t1, t2],
        }
    }
}

/// Solve `qa t² + qb t + qc = 0`.
pub fn solve_quadratic(qa: f64, qb: f64, qc: f64, tol: &Tolerances) -> QuadraticRoots {
    if nearly_zero(qa, tol.coefficient) {
        if nearly_zero(qb, tol.coefficient) {
            return QuadraticRoots::None;
        }
        return QuadraticRoots::Linear(-qc / qb);
    }

    let disc = qb * qb - 4.0 * qa * qc;
    if disc < -tol.discriminant {
        return QuadraticRoots::None;
    }
    if disc < 0.0 {
        return QuadraticRoots::Double(-qb / (2.0 * qa));
    }

    let sqrt_disc = disc.sqrt();
    let t1 = (-qb - sqrt_disc) / (2.0 * qa);
    let t2 = (-qb + sqrt_disc) / (2.0 * qa);
    if (t2 - t1).abs() > tol.root_merge {
        QuadraticRoots::Two(t1, t2)
    } else {
        QuadraticRoots::Double(t1)
    }
}

// =============================================================================
// Line / tangency intersection
// =============================================================================

/// Explicit parameterization `origin + t * dir` of a bisector line, with one
/// coordinate of `dir` fixed to 1.
#[derive(Debug, Clone, Copy)]
struct ParamLine {
    origin: Vec2,
    dir: Vec2,
}

impl ParamLine {
    /// `y = p x + q` (requires `b ≠ 0`).
    fn y_of_x(line: &LineTrace) -> Self {
        let inv_b = 1.0 / line.b;
        let p = -line.a * inv_b;
        let q = -line.c * inv_b;
        Self {
            origin: Vec2::new(0.0, q),
            dir: Vec2::new(1.0, p),
        }
    }

    /// `x = p y + q` (requires `a ≠ 0`).
    fn x_of_y(line: &LineTrace) -> Self {
        let inv_a = 1.0 / line.a;
        let p = -line.b * inv_a;
        let q = -line.c * inv_a;
        Self {
            origin: Vec2::new(q, 0.0),
            dir: Vec2::new(p, 1.0),
        }
    }

    fn at(&self, t: f64) -> Point2 {
        Point2::new(self.origin.x + self.dir.x * t, self.origin.y + self.dir.y * t)
    }
}

/// Intersect `line` with the tangency quadratic of `tangent`.
///
/// Returns up to two local centers. Substitutes the better-conditioned
/// variable: `y(x)` when `|b|` is non-negligible, otherwise `x(y)`.
pub fn intersect_tangency(line: &LineTrace, tangent: &LineTrace, tol: &Tolerances) -> Vec<Point2> {
    if nearly_zero(line.a, tol.coefficient) && nearly_zero(line.b, tol.coefficient) {
        trace!("degenerate bisector line ({}, {}, {})", line.a, line.b, line.c);
        return Vec::new();
    }

    let param = if nearly_zero(line.b, tol.coefficient) {
        ParamLine::x_of_y(line)
    } else {
        ParamLine::y_of_x(line)
    };

    // (A (o + t d) + C)^2 = L^2 |o + t d|^2
    let lin = tangent.a * param.dir.x + tangent.b * param.dir.y;
    let con = tangent.a * param.origin.x + tangent.b * param.origin.y + tangent.c;
    let l2 = tangent.len * tangent.len;
    let r_tt = l2 * param.dir.norm_squared();
    let r_t = l2 * (2.0 * param.dir.dot(&param.origin));
    let r_c = l2 * param.origin.norm_squared();

    let qa = lin * lin - r_tt;
    let qb = 2.0 * lin * con - r_t;
    let qc = con * con - r_c;

    let roots = solve_quadratic(qa, qb, qc, tol);
    if roots == QuadraticRoots::None {
        trace!("no real roots on bisector ({}, {}, {})", line.a, line.b, line.c);
    }
    roots.to_vec().into_iter().map(|t| param.at(t)).collect()
}

/// Candidate local centers for one bisector sign.
pub fn branch_candidates(
    first: &LineTrace,
    second: &LineTrace,
    sign: BisectorSign,
    tol: &Tolerances,
) -> Vec<Point2> {
    let bisector = bisector_line(first, second, sign);
    intersect_tangency(&bisector, first, tol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::SQRT_2;

    const TOL: Tolerances = Tolerances::DEFAULT;

    // Traces of y = 0 and x = 0 seen from P = (1, 1, 0).
    fn first() -> LineTrace {
        LineTrace {
            a: 1.0,
            b: 0.0,
            c: 1.0,
            len: 1.0,
        }
    }

    fn second() -> LineTrace {
        LineTrace {
            a: 0.0,
            b: 1.0,
            c: 1.0,
            len: 1.0,
        }
    }

    #[test]
    fn test_quadratic_two_roots() {
        // (t - 1)(t - 3)
        assert_eq!(solve_quadratic(1.0, -4.0, 3.0, &TOL), QuadraticRoots::Two(1.0, 3.0));
        // negative leading coefficient flips the order
        assert_eq!(solve_quadratic(-1.0, 4.0, -3.0, &TOL), QuadraticRoots::Two(3.0, 1.0));
    }

    #[test]
    fn test_quadratic_linear() {
        assert_eq!(solve_quadratic(0.0, 2.0, -4.0, &TOL), QuadraticRoots::Linear(2.0));
        assert_eq!(solve_quadratic(1e-13, 2.0, -4.0, &TOL), QuadraticRoots::Linear(2.0));
        assert_eq!(solve_quadratic(0.0, 1e-13, 1.0, &TOL), QuadraticRoots::None);
    }

    #[test]
    fn test_quadratic_discriminant_policy() {
        // disc = 1 - 4 * 1 * 1 = -3
        assert_eq!(solve_quadratic(1.0, 1.0, 1.0, &TOL), QuadraticRoots::None);
        // disc = 4 - 4 * (1 + 1e-13) ≈ -4e-13, collapses to the double root
        match solve_quadratic(1.0, -2.0, 1.0 + 1e-13, &TOL) {
            QuadraticRoots::Double(t) => assert!((t - 1.0).abs() < 1e-12),
            other => panic!("Expected Double, got {:?}", other),
        }
        // exact double root
        assert_eq!(solve_quadratic(1.0, -2.0, 1.0, &TOL), QuadraticRoots::Double(1.0));
    }

    #[test]
    fn test_quadratic_merges_close_roots() {
        let tol = Tolerances {
            root_merge: 1e-3,
            ..TOL
        };
        // roots 1 and 1.0001
        match solve_quadratic(1.0, -2.0001, 1.0001, &tol) {
            QuadraticRoots::Double(t) => assert!((t - 1.0).abs() < 1e-9),
            other => panic!("Expected Double, got {:?}", other),
        }
    }

    #[test]
    fn test_bisector_lines() {
        let pos = bisector_line(&first(), &second(), BisectorSign::Positive);
        assert_eq!((pos.a, pos.b, pos.c), (1.0, -1.0, 0.0));
        let neg = bisector_line(&first(), &second(), BisectorSign::Negative);
        assert_eq!((neg.a, neg.b, neg.c), (1.0, 1.0, 2.0));
    }

    #[test]
    fn test_bisector_scales_by_trace_length() {
        let scaled = LineTrace {
            a: 0.0,
            b: 3.0,
            c: 3.0,
            len: 3.0,
        };
        let pos = bisector_line(&first(), &scaled, BisectorSign::Positive);
        assert!((pos.a - 1.0).abs() < 1e-15);
        assert!((pos.b + 1.0).abs() < 1e-15);
        assert!(pos.c.abs() < 1e-15);
    }

    #[test]
    fn test_branch_positive_has_two_centers() {
        let centers = branch_candidates(&first(), &second(), BisectorSign::Positive, &TOL);
        assert_eq!(centers.len(), 2);
        assert!((centers[0].x - (1.0 + SQRT_2)).abs() < 1e-12);
        assert!((centers[0].y - (1.0 + SQRT_2)).abs() < 1e-12);
        assert!((centers[1].x - (1.0 - SQRT_2)).abs() < 1e-12);
        assert!((centers[1].y - (1.0 - SQRT_2)).abs() < 1e-12);
        for c in &centers {
            assert!(first().tangency_residual(c.x, c.y).abs() < 1e-9);
            assert!(second().tangency_residual(c.x, c.y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_branch_negative_has_no_roots() {
        let centers = branch_candidates(&first(), &second(), BisectorSign::Negative, &TOL);
        assert!(centers.is_empty());
    }

    #[test]
    fn test_vertical_bisector_uses_x_of_y() {
        // Line x = 2 (b = 0) against tangent line y = -1.
        let line = LineTrace {
            a: 1.0,
            b: 0.0,
            c: -2.0,
            len: 1.0,
        };
        let tangent = LineTrace {
            a: 0.0,
            b: 1.0,
            c: 1.0,
            len: 1.0,
        };
        // (y + 1)^2 = 4 + y^2  =>  y = 1.5
        let centers = intersect_tangency(&line, &tangent, &TOL);
        assert_eq!(centers.len(), 1);
        assert!((centers[0].x - 2.0).abs() < 1e-12);
        assert!((centers[0].y - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_bisector() {
        let line = LineTrace {
            a: 1e-13,
            b: -1e-13,
            c: 5.0,
            len: 1.4e-13,
        };
        assert!(intersect_tangency(&line, &first(), &TOL).is_empty());
    }
}
