#![warn(missing_docs)]

//! Circles through a point tangent to two planes.
//!
//! Given planes `n1·x + d1 = 0`, `n2·x + d2 = 0` (not parallel) and a point
//! `P`, finds every circle that passes through `P` and touches both planes.
//!
//! The circle must lie in a plane whose normal is `n1 × n2`; inside that
//! plane each input plane becomes a line, the center lies on one of the two
//! angle bisectors of those lines, and intersecting each bisector with the
//! tangency condition gives a quadratic with at most two roots.
//!
//! # Example
//!
//! ```
//! use tancirc::{solve, Plane, Point3};
//!
//! let circles = solve(&Plane::xz(), &Plane::yz(), &Point3::new(1.0, 1.0, 0.0)).unwrap();
//! assert_eq!(circles.len(), 2);
//! for c in &circles {
//!     assert!((Plane::xz().distance(&c.center) - c.radius).abs() < 1e-9);
//! }
//! ```

pub mod bisector;
mod circle;
mod config;
mod error;
pub mod frame;
mod solver;
pub mod trace;
pub mod validate;

pub use circle::Circle3D;
pub use config::Tolerances;
pub use error::{Result, TangentError};
pub use solver::{solve, solve_with, Degeneracy, Outcome, PlaneSlot};
pub use tancirc_math::{Dir3, Line3, LineIntersection, Plane, Point2, Point3, Vec3};
