//! Numerical tolerances used by each solver stage.
//!
//! The stages deliberately use different magnitudes; tightening one of them
//! changes which near-degenerate inputs are accepted, so each is kept as its
//! own field.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TangentError};

/// Tolerance set for one solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// `‖n1 × n2‖` at or below this means the planes are parallel.
    pub parallel: f64,
    /// Near-zero test for bisector, substitution and quadratic coefficients,
    /// and for the in-plane basis projection.
    pub coefficient: f64,
    /// Trace length `L` and circle radius at or below this are degenerate.
    pub eps: f64,
    /// Negative discriminants down to `-discriminant` collapse to a double root.
    pub discriminant: f64,
    /// Two quadratic roots closer than this are reported once.
    pub root_merge: f64,
    /// Maximum mismatch between the radius and each recomputed plane distance.
    pub verify: f64,
    /// Dedup: center distance.
    pub dedup_center: f64,
    /// Dedup: radius difference.
    pub dedup_radius: f64,
    /// Dedup: plane-normal difference.
    pub dedup_normal: f64,
}

impl Tolerances {
    /// Default tolerances.
    pub const DEFAULT: Self = Self {
        parallel: 1e-14,
        coefficient: 1e-12,
        eps: 1e-10,
        discriminant: 1e-12,
        root_merge: 1e-12,
        verify: 1e-6,
        dedup_center: 1e-8,
        dedup_radius: 1e-8,
        dedup_normal: 1e-8,
    };

    /// Defaults with a custom degeneracy threshold `eps`.
    pub fn with_eps(eps: f64) -> Self {
        Self {
            eps,
            ..Self::DEFAULT
        }
    }

    /// Parse a TOML table. Missing keys keep their default value.
    ///
    /// ```
    /// let tol = tancirc::Tolerances::from_toml_str("eps = 1e-9\nverify = 1e-5").unwrap();
    /// assert_eq!(tol.eps, 1e-9);
    /// assert_eq!(tol.parallel, 1e-14);
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let tol: Self = toml::from_str(s)?;
        tol.validate()?;
        Ok(tol)
    }

    /// Check that every field is finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("parallel", self.parallel),
            ("coefficient", self.coefficient),
            ("eps", self.eps),
            ("discriminant", self.discriminant),
            ("root_merge", self.root_merge),
            ("verify", self.verify),
            ("dedup_center", self.dedup_center),
            ("dedup_radius", self.dedup_radius),
            ("dedup_normal", self.dedup_normal),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(TangentError::InvalidTolerance { name, value });
            }
        }
        Ok(())
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::DEFAULT
    }
}
