//! Slot rows that receive the fingers of a mating tooth edge

use crate::feature::{Feature, Motion, Pass};
use kerfkit_core::error::ensure_finite;
use kerfkit_core::{Error, Orientation, Point, Result, SlitCode};
use tracing::trace;

/// A row of rectangular slots, one per cut segment
#[derive(Debug, Clone)]
pub struct Slit {
    code: SlitCode,
    steps: usize,
    width: f64,
    height: f64,
    kerf: f64,
}

impl Slit {
    pub fn new(code: &str, steps: usize, width: f64, height: f64, kerf: f64) -> Result<Self> {
        let code: SlitCode = code.parse()?;
        ensure_finite("width", width)?;
        ensure_finite("height", height)?;
        ensure_finite("kerf", kerf)?;
        if steps == 0 {
            return Err(Error::invalid_argument(
                "steps",
                "a slit row needs at least one segment",
            ));
        }
        if width <= 0.0 {
            return Err(Error::invalid_argument(
                "width",
                format!("must be positive, got {}", width),
            ));
        }
        Ok(Self {
            code,
            steps,
            width,
            height,
            kerf,
        })
    }

    /// Number of slots the row produces.
    pub fn slot_count(&self) -> usize {
        (0..self.steps).filter(|&i| self.code.is_cut(i)).count()
    }

    /// Slot loops in the local frame, separated by breaks.
    pub fn profile(&self, kerf: f64) -> Vec<Point> {
        let mut points = Vec::with_capacity(6 * self.slot_count());
        for i in (0..self.steps).filter(|&i| self.code.is_cut(i)) {
            if !points.is_empty() {
                points.push(Point::BREAK);
            }
            let x0 = i as f64 * self.width + kerf;
            let x1 = (i + 1) as f64 * self.width - kerf;
            let y0 = kerf;
            let y1 = self.height - kerf;
            points.extend([
                Point::new(x0, y0),
                Point::new(x1, y0),
                Point::new(x1, y1),
                Point::new(x0, y1),
                Point::new(x0, y0),
            ]);
        }
        points
    }
}

impl Feature for Slit {
    fn name(&self) -> &'static str {
        "slit"
    }

    fn motion(&self) -> Motion {
        Motion::Static
    }

    fn trace(&self, pass: Pass) -> Result<Vec<Point>> {
        let local = self.profile(pass.kerf(self.kerf));
        trace!("slit {:?}: {} slots", pass, self.slot_count());
        // Case selects the parity here; the slots themselves are never mirrored.
        let orientation = Orientation::new(self.code.orientation.direction, false);
        Ok(orientation.apply(local))
    }
}
