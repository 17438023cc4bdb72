use std::error::Error;
use std::fmt;

/// Malformed operand detected synchronously at a call boundary.
/// These indicate a programming or configuration defect, so there is no
/// retry or recovery path; the error surfaces directly to the caller.
/// Degenerate-but-valid inputs (two bodies at the same point) are not
/// errors and are handled by the zero-distance fallback instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidInput {
    /// Masses must be strictly positive kilograms.
    NonPositiveMass(f64),
    /// Separation distances cannot be negative.
    NegativeDistance(f64),
    /// Time steps cannot be negative seconds.
    NegativeTimeStep(f64),
    /// Visual radii must be strictly positive.
    NonPositiveRadius(f64),
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveMass(m) => write!(f, "mass must be positive, got {m}"),
            Self::NegativeDistance(d) => write!(f, "distance must be non-negative, got {d}"),
            Self::NegativeTimeStep(dt) => write!(f, "time step must be non-negative, got {dt}"),
            Self::NonPositiveRadius(r) => write!(f, "radius must be positive, got {r}"),
        }
    }
}

impl Error for InvalidInput {}
