//! Driver: frame → traces → bisector branches → validation → dedup.

use log::debug;
use tancirc_math::{Plane, Point3};

use crate::bisector::{branch_candidates, BisectorSign};
use crate::circle::Circle3D;
use crate::config::Tolerances;
use crate::error::{Result, TangentError};
use crate::frame::LocalFrame;
use crate::trace::LineTrace;
use crate::validate::{dedup_circles, validate_candidates};

/// Which input plane a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSlot {
    /// The first plane argument.
    First,
    /// The second plane argument.
    Second,
}

/// Why a configuration produced no circles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    /// The plane normals are parallel; no unique circle plane exists.
    ParallelPlanes,
    /// A plane does not cut the circle plane in a proper line.
    DegenerateTrace {
        /// The offending plane.
        plane: PlaneSlot,
    },
    /// Neither bisector yields a candidate center: no real roots, a
    /// degenerate bisector line, or a vanishing linear equation.
    NoRealRoots,
}

/// Result of a solve.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Verified, deduplicated circles. May be empty when every real root
    /// was rejected (for example a zero radius when the point lies on both
    /// planes).
    Circles(Vec<Circle3D>),
    /// The configuration is degenerate.
    Degenerate(Degeneracy),
}

impl Outcome {
    /// The circles found, empty for a degenerate configuration.
    pub fn circles(&self) -> &[Circle3D] {
        match self {
            Outcome::Circles(circles) => circles,
            Outcome::Degenerate(_) => &[],
        }
    }

    /// Consume into the circle list.
    pub fn into_circles(self) -> Vec<Circle3D> {
        match self {
            Outcome::Circles(circles) => circles,
            Outcome::Degenerate(_) => Vec::new(),
        }
    }

    /// The degeneracy reason, if any.
    pub fn degeneracy(&self) -> Option<Degeneracy> {
        match self {
            Outcome::Circles(_) => None,
            Outcome::Degenerate(reason) => Some(*reason),
        }
    }
}

/// Find every circle through `point` tangent to both planes, using default
/// tolerances.
///
/// Degenerate configurations yield an empty list. Errors are reserved for
/// non-finite input.
pub fn solve(first: &Plane, second: &Plane, point: &Point3) -> Result<Vec<Circle3D>> {
    solve_with(first, second, point, &Tolerances::DEFAULT).map(Outcome::into_circles)
}

/// Find every circle through `point` tangent to both planes.
///
/// Circles from the positive bisector come before those from the negative
/// one; within a bisector they follow root order.
pub fn solve_with(
    first: &Plane,
    second: &Plane,
    point: &Point3,
    tol: &Tolerances,
) -> Result<Outcome> {
    tol.validate()?;
    if !first.is_finite() {
        return Err(TangentError::NonFinite { input: "first plane" });
    }
    if !second.is_finite() {
        return Err(TangentError::NonFinite { input: "second plane" });
    }
    if !point.coords.iter().all(|c| c.is_finite()) {
        return Err(TangentError::NonFinite { input: "point" });
    }

    let Some(frame) = LocalFrame::new(&first.normal, &second.normal, *point, tol) else {
        debug!("planes are parallel, no circle plane");
        return Ok(Outcome::Degenerate(Degeneracy::ParallelPlanes));
    };

    let t1 = LineTrace::of_plane(first, &frame);
    let t2 = LineTrace::of_plane(second, &frame);
    for (trace, slot) in [(&t1, PlaneSlot::First), (&t2, PlaneSlot::Second)] {
        if trace.is_degenerate(tol.eps) {
            debug!("{:?} plane has a degenerate trace (L = {})", slot, trace.len);
            return Ok(Outcome::Degenerate(Degeneracy::DegenerateTrace { plane: slot }));
        }
    }

    let candidates: Vec<_> = BisectorSign::ALL
        .iter()
        .flat_map(|&sign| branch_candidates(&t1, &t2, sign, tol))
        .collect();
    if candidates.is_empty() {
        debug!("neither bisector yields a candidate center");
        return Ok(Outcome::Degenerate(Degeneracy::NoRealRoots));
    }

    let circles = validate_candidates(&candidates, &frame, [first, second], tol);
    Ok(Outcome::Circles(dedup_circles(circles, tol)))
}
