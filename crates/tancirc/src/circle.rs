//! The solver's result type.

use serde::{Deserialize, Serialize};
use tancirc_math::{Dir3, Plane, Point3, Vec3};

use crate::config::Tolerances;

/// A circle in 3D space.
///
/// Parameterization: `P(t) = center + radius * (cos(t) * x_dir + sin(t) * y_dir)`
/// where `x_dir`, `y_dir` are derived from `plane_n` (see [`Circle3D::in_plane_axes`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle3D {
    /// Center of the circle.
    pub center: Point3,
    /// Unit normal of the plane the circle lies in.
    pub plane_n: Dir3,
    /// Radius (always positive for solver output).
    pub radius: f64,
}

impl Circle3D {
    /// Create a circle.
    pub fn new(center: Point3, plane_n: Dir3, radius: f64) -> Self {
        Self {
            center,
            plane_n,
            radius,
        }
    }

    /// An orthonormal pair spanning the circle plane.
    pub fn in_plane_axes(&self) -> (Vec3, Vec3) {
        let n = self.plane_n.as_ref();
        let arbitrary = if n.x.abs() < 0.9 { Vec3::x() } else { Vec3::y() };
        let x = arbitrary.cross(n).normalize();
        let y = n.cross(&x);
        (x, y)
    }

    /// Point on the circle at angle `t` (radians).
    pub fn evaluate(&self, t: f64) -> Point3 {
        let (sin_t, cos_t) = t.sin_cos();
        let (x, y) = self.in_plane_axes();
        self.center + self.radius * (cos_t * x + sin_t * y)
    }

    /// Point where this circle touches `plane`, i.e. the foot of the center.
    ///
    /// Only meaningful when the circle is tangent to `plane`.
    pub fn tangent_point(&self, plane: &Plane) -> Point3 {
        plane.project_point(&self.center)
    }

    /// `true` if `p` lies on the circle within `tol`.
    pub fn passes_through(&self, p: &Point3, tol: f64) -> bool {
        let d = p - self.center;
        d.dot(self.plane_n.as_ref()).abs() <= tol && (d.norm() - self.radius).abs() <= tol
    }

    /// Approximate equality used for deduplication. All three of center,
    /// radius and normal must agree.
    pub fn approx_eq(&self, other: &Self, tol: &Tolerances) -> bool {
        (self.center - other.center).norm() < tol.dedup_center
            && (self.radius - other.radius).abs() < tol.dedup_radius
            && (self.plane_n.as_ref() - other.plane_n.as_ref()).norm() < tol.dedup_normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn unit_xy_circle() -> Circle3D {
        Circle3D::new(Point3::new(1.0, 2.0, 3.0), Dir3::new_normalize(Vec3::z()), 2.0)
    }

    #[test]
    fn test_evaluate_stays_on_circle() {
        let c = unit_xy_circle();
        for i in 0..8 {
            let p = c.evaluate(i as f64 * PI / 4.0);
            assert!((p.z - 3.0).abs() < 1e-12);
            assert!(((p - c.center).norm() - 2.0).abs() < 1e-12);
            assert!(c.passes_through(&p, 1e-9));
        }
    }

    #[test]
    fn test_passes_through_rejects_off_plane() {
        let c = unit_xy_circle();
        assert!(!c.passes_through(&Point3::new(1.0, 2.0, 5.0), 1e-9));
        assert!(!c.passes_through(&Point3::new(1.0, 2.0, 3.0), 1e-9));
    }

    #[test]
    fn test_tangent_point() {
        // Circle of radius 2 in the XY plane at z = 3, touching plane x = -1.
        let c = unit_xy_circle();
        let plane = Plane::new(Vec3::x(), 1.0);
        let t = c.tangent_point(&plane);
        assert!((t - Point3::new(-1.0, 2.0, 3.0)).norm() < 1e-12);
        assert!(c.passes_through(&t, 1e-9));
    }

    #[test]
    fn test_approx_eq_requires_all_three() {
        let tol = Tolerances::DEFAULT;
        let a = unit_xy_circle();
        let mut b = a;
        b.center.x += 1e-10;
        assert!(a.approx_eq(&b, &tol));

        let mut r = a;
        r.radius += 1e-6;
        assert!(!a.approx_eq(&r, &tol));

        let flipped = Circle3D::new(a.center, Dir3::new_normalize(-Vec3::z()), a.radius);
        assert!(!a.approx_eq(&flipped, &tol));
    }

    #[test]
    fn test_in_plane_axes_orthonormal() {
        let c = Circle3D::new(Point3::origin(), Dir3::new_normalize(Vec3::new(1.0, 0.1, 0.0)), 1.0);
        let (x, y) = c.in_plane_axes();
        let n = c.plane_n.into_inner();
        assert!((x.norm() - 1.0).abs() < 1e-12);
        assert!((y.norm() - 1.0).abs() < 1e-12);
        assert!(x.dot(&y).abs() < 1e-12);
        assert!(x.dot(&n).abs() < 1e-12);
        assert!(y.dot(&n).abs() < 1e-12);
    }
}
