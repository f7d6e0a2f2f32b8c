//! Orthonormal frame of the circle plane.
//!
//! A circle tangent to both planes lies in a plane whose normal is
//! `u = n1 × n2 / ‖n1 × n2‖`. The frame puts its origin at the query point
//! and spans that plane with `{e1, e2}`.

use tancirc_math::{nearly_zero, Dir3, Point2, Point3, Vec3};

use crate::config::Tolerances;

/// Local 2D coordinate system of the circle plane.
#[derive(Debug, Clone, Copy)]
pub struct LocalFrame {
    /// Frame origin (the query point).
    pub origin: Point3,
    /// First in-plane axis.
    pub e1: Vec3,
    /// Second in-plane axis, `u × e1`.
    pub e2: Vec3,
    /// Circle-plane normal `u`.
    pub normal: Dir3,
}

impl LocalFrame {
    /// Build the frame for planes with normals `n1`, `n2`.
    ///
    /// Returns `None` when the normals are parallel within `tol.parallel`.
    pub fn new(n1: &Vec3, n2: &Vec3, origin: Point3, tol: &Tolerances) -> Option<Self> {
        let cross = n1.cross(n2);
        let cross_len = cross.norm();
        if nearly_zero(cross_len, tol.parallel) {
            return None;
        }
        let u = cross / cross_len;

        // e1: n1 projected into the circle plane
        let e1 = n1 - n1.dot(&u) * u;
        let e1_len = e1.norm();
        let e1 = if nearly_zero(e1_len, tol.coefficient) {
            let helper = if u.x.abs() > 0.9 { Vec3::y() } else { Vec3::x() };
            (helper - helper.dot(&u) * u).normalize()
        } else {
            e1 / e1_len
        };
        let e2 = u.cross(&e1);

        Some(Self {
            origin,
            e1,
            e2,
            normal: Dir3::new_unchecked(u),
        })
    }

    /// Map local coordinates back to 3D.
    pub fn lift(&self, p: &Point2) -> Point3 {
        self.origin + p.x * self.e1 + p.y * self.e2
    }

    /// Express a 3D point in local coordinates (drops the normal component).
    #[cfg(test)]
    fn project(&self, p: &Point3) -> Point2 {
        let d = p - self.origin;
        Point2::new(d.dot(&self.e1), d.dot(&self.e2))
    }
}
