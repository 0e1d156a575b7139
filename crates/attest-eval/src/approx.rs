//! Tolerant floating-point equality.

use std::fmt;

const DEFAULT_ABS_TOL: f64 = 1e-10;
const DEFAULT_REL_TOL: f64 = 1e-10;

/// A comparison target with combined absolute/relative tolerance.
///
/// Usable on either side of an equality: `x == Approx::new(1.0)` and
/// `Approx::new(1.0) == x` agree. A value matches when
/// `|value - target| <= max(abs_tol, rel_tol * max(|value|, |target|))`,
/// with both tolerances fixed at `1e-10`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Approx {
    target: f64,
}

impl Approx {
    /// Creates a tolerant target around `target`.
    pub fn new(target: f64) -> Self {
        Self { target }
    }

    /// Returns the exact comparison target.
    pub fn target(&self) -> f64 {
        self.target
    }

    fn matches(&self, value: f64) -> bool {
        (value - self.target).abs()
            <= DEFAULT_ABS_TOL.max(DEFAULT_REL_TOL * value.abs().max(self.target.abs()))
    }
}

impl PartialEq<f64> for Approx {
    fn eq(&self, other: &f64) -> bool {
        self.matches(*other)
    }
}

impl PartialEq<Approx> for f64 {
    fn eq(&self, other: &Approx) -> bool {
        other.matches(*self)
    }
}

impl PartialEq<f32> for Approx {
    fn eq(&self, other: &f32) -> bool {
        self.matches(f64::from(*other))
    }
}

impl PartialEq<Approx> for f32 {
    fn eq(&self, other: &Approx) -> bool {
        other.matches(f64::from(*self))
    }
}

impl fmt::Display for Approx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Approx( {})", self.target)
    }
}
