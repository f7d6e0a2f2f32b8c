//! Lifting, re-verification and deduplication of candidate centers.

use log::trace;
use tancirc_math::{Plane, Point2};

use crate::circle::Circle3D;
use crate::config::Tolerances;
use crate::frame::LocalFrame;

/// Turn local candidate centers into verified circles.
///
/// A candidate is dropped when its radius is at most `tol.eps`, or when the
/// true distance from the lifted center to either plane differs from the
/// radius by more than `tol.verify`.
pub fn validate_candidates(
    candidates: &[Point2],
    frame: &LocalFrame,
    planes: [&Plane; 2],
    tol: &Tolerances,
) -> Vec<Circle3D> {
    let mut circles = Vec::with_capacity(candidates.len());
    for local in candidates {
        let r = local.coords.norm();
        if r <= tol.eps {
            trace!("dropping zero-radius candidate ({}, {})", local.x, local.y);
            continue;
        }

        let center = frame.lift(local);
        let verified = planes
            .iter()
            .all(|plane| (r - plane.distance(&center)).abs() <= tol.verify);
        if !verified {
            trace!("dropping candidate at {:?}: not tangent within {}", center, tol.verify);
            continue;
        }

        circles.push(Circle3D::new(center, frame.normal, r));
    }
    circles
}

/// Remove near-duplicate circles, keeping the first occurrence.
pub fn dedup_circles(circles: Vec<Circle3D>, tol: &Tolerances) -> Vec<Circle3D> {
    let mut unique: Vec<Circle3D> = Vec::with_capacity(circles.len());
    for circle in circles {
        if !unique.iter().any(|u| circle.approx_eq(u, tol)) {
            unique.push(circle);
        }
    }
    unique
}
