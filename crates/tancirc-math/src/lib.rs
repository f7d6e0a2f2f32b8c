#![warn(missing_docs)]

//! Math types for the tancirc solver.
//!
//! Thin wrappers around nalgebra providing the vector aliases and the
//! implicit-plane type (`n·x + d = 0`) the tangency solver works with.

use nalgebra::{Unit, Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A point in a local 2D frame.
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in 2D space.
pub type Vec2 = Vector2<f64>;

/// Threshold below which a line direction counts as parallel to a plane.
pub const LINE_PARALLEL_TOL: f64 = 1e-9;

/// `true` when `|v| <= eps`.
#[inline]
pub fn nearly_zero(v: f64, eps: f64) -> bool {
    v.abs() <= eps
}

// =============================================================================
// Plane
// =============================================================================

/// An implicit plane `normal · x + offset = 0`.
///
/// The normal does not have to be unit length. Distances are always
/// measured in true units by dividing by `‖normal‖`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Plane normal (any non-zero length).
    pub normal: Vec3,
    /// Constant term `d` of `n·x + d = 0`.
    pub offset: f64,
}

impl Plane {
    /// Create a plane from its implicit coefficients.
    pub fn new(normal: Vec3, offset: f64) -> Self {
        Self { normal, offset }
    }

    /// Plane through `point` with the given normal.
    pub fn from_point_normal(point: &Point3, normal: Vec3) -> Self {
        Self {
            normal,
            offset: -normal.dot(&point.coords),
        }
    }

    /// The XY plane (`z = 0`).
    pub fn xy() -> Self {
        Self::new(Vec3::z(), 0.0)
    }

    /// The XZ plane (`y = 0`).
    pub fn xz() -> Self {
        Self::new(Vec3::y(), 0.0)
    }

    /// The YZ plane (`x = 0`).
    pub fn yz() -> Self {
        Self::new(Vec3::x(), 0.0)
    }

    /// Unit normal, or `None` for a zero normal.
    pub fn unit_normal(&self) -> Option<Dir3> {
        Dir3::try_new(self.normal, 0.0)
    }

    /// Raw value of `n·p + d`. Scales with `‖n‖`.
    pub fn evaluate(&self, p: &Point3) -> f64 {
        self.normal.dot(&p.coords) + self.offset
    }

    /// Signed distance from a point to this plane, positive on the normal side.
    pub fn signed_distance(&self, p: &Point3) -> f64 {
        self.evaluate(p) / self.normal.norm()
    }

    /// Unsigned distance from a point to this plane.
    pub fn distance(&self, p: &Point3) -> f64 {
        self.evaluate(p).abs() / self.normal.norm()
    }

    /// Orthogonal projection of a point onto this plane.
    pub fn project_point(&self, p: &Point3) -> Point3 {
        let nn = self.normal.norm_squared();
        p - self.normal * (self.evaluate(p) / nn)
    }

    /// `true` if every coefficient is finite.
    pub fn is_finite(&self) -> bool {
        self.normal.iter().all(|c| c.is_finite()) && self.offset.is_finite()
    }

    /// Intersect an infinite line with this plane.
    pub fn intersect_line(&self, line: &Line3) -> LineIntersection {
        let denom = self.normal.dot(&line.direction);
        if denom.abs() < LINE_PARALLEL_TOL {
            if self.evaluate(&line.origin).abs() < LINE_PARALLEL_TOL {
                return LineIntersection::Contained;
            }
            return LineIntersection::Parallel;
        }
        let t = -self.evaluate(&line.origin) / denom;
        LineIntersection::Point(line.at(t))
    }
}

// =============================================================================
// Line
// =============================================================================

/// An infinite line `origin + t * direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line3 {
    /// A point on the line.
    pub origin: Point3,
    /// Direction (not necessarily normalized).
    pub direction: Vec3,
}

impl Line3 {
    /// Create a line through `origin` along `direction`.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t`.
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }
}

/// Result of a line-plane intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineIntersection {
    /// Single crossing point.
    Point(Point3),
    /// Line is parallel to the plane and off it.
    Parallel,
    /// Line lies in the plane.
    Contained,
}
