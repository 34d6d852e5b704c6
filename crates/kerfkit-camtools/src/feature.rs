//! The seam between generators and the drawing composer.

use kerfkit_core::{Kerf, Point, Result};

/// Which of the two index-aligned paths is being traced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Kerf applied: the path sent to the cutter.
    Compensated,
    /// Kerf forced to zero: the reference geometry.
    Nominal,
}

impl Pass {
    /// The kerf to use for this pass.
    pub fn kerf(&self, kerf: f64) -> f64 {
        match self {
            Pass::Compensated => kerf,
            Pass::Nominal => 0.0,
        }
    }

    /// The kerf pair to use for this pass.
    pub fn kerf_pair(&self, kerf: Kerf) -> Kerf {
        match self {
            Pass::Compensated => kerf,
            Pass::Nominal => Kerf::ZERO,
        }
    }
}

/// Effect of a feature on the drawing cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// The cursor moves to the end of the nominal path.
    Shifting,
    /// The cursor stays where it was.
    Static,
}

/// A parametric feature that can be traced into a point sequence.
///
/// Points are returned in world orientation relative to the cursor (the
/// caller translates them). Both passes must return the same number of points
/// with breaks at the same indices.
pub trait Feature {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    fn motion(&self) -> Motion;

    fn trace(&self, pass: Pass) -> Result<Vec<Point>>;
}
