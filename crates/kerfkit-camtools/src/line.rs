//! Straight edges

use crate::feature::{Feature, Motion, Pass};
use kerfkit_core::error::ensure_finite;
use kerfkit_core::{Kerf, LineCode, Point, Result};
use tracing::trace;

/// A straight edge along a compass direction
///
/// The cut is offset sideways by the kerf (toward the outside, or the inside
/// for a lowercase letter) and each end is extended or pulled back by the kerf
/// according to its sign, so four lines traced around a perimeter meet at the
/// offset corners.
#[derive(Debug, Clone)]
pub struct Line {
    code: LineCode,
    length: f64,
    kerf: f64,
}

impl Line {
    pub fn new(code: &str, length: f64, kerf: f64) -> Result<Self> {
        let code: LineCode = code.parse()?;
        ensure_finite("length", length)?;
        ensure_finite("kerf", kerf)?;
        Ok(Self { code, length, kerf })
    }

    pub fn profile(&self, kerf: f64) -> Vec<Point> {
        let (start, end) = self.code.end_signs;
        vec![
            Point::new(-start.factor() * kerf, kerf),
            Point::new(self.length + end.factor() * kerf, kerf),
        ]
    }
}

impl Feature for Line {
    fn name(&self) -> &'static str {
        "line"
    }

    fn motion(&self) -> Motion {
        Motion::Shifting
    }

    fn trace(&self, pass: Pass) -> Result<Vec<Point>> {
        trace!("line {:?}: {} along {}", pass, self.length, self.code.orientation.letter());
        Ok(self.code.orientation.apply(self.profile(pass.kerf(self.kerf))))
    }
}

/// A straight edge to an explicit relative target
///
/// The compensated cut is the nominal segment translated by the kerf pair.
#[derive(Debug, Clone)]
pub struct LineVector {
    target: Point,
    kerf: Kerf,
}

impl LineVector {
    pub fn new(dx: f64, dy: f64, kerf: Kerf) -> Result<Self> {
        ensure_finite("dx", dx)?;
        ensure_finite("dy", dy)?;
        ensure_finite("kerf.x", kerf.x)?;
        ensure_finite("kerf.y", kerf.y)?;
        Ok(Self {
            target: Point::new(dx, dy),
            kerf,
        })
    }
}

impl Feature for LineVector {
    fn name(&self) -> &'static str {
        "line_vector"
    }

    fn motion(&self) -> Motion {
        Motion::Shifting
    }

    fn trace(&self, pass: Pass) -> Result<Vec<Point>> {
        let k = pass.kerf_pair(self.kerf);
        Ok(vec![
            Point::new(k.x, k.y),
            self.target.offset(k.x, k.y),
        ])
    }
}
