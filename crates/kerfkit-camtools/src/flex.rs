//! Living-hinge slit patterns
//!
//! Rows of cuts run along the travel axis and are spread evenly across
//! `height`. Rows alternate between one long cut with solid margins at both
//! ends and two cuts that leave a solid bridge in the middle, which staggers
//! the bridges like brickwork. The pattern is structural, so no kerf is applied.

use crate::feature::{Feature, Motion, Pass};
use kerfkit_core::error::ensure_finite;
use kerfkit_core::{Error, FlexCode, Point, Result};
use tracing::trace;

#[derive(Debug, Clone)]
pub struct Flex {
    code: FlexCode,
    length: f64,
    height: f64,
    count: usize,
    margin: f64,
}

impl Flex {
    pub fn new(code: &str, length: f64, height: f64, count: usize, margin: f64) -> Result<Self> {
        let code: FlexCode = code.parse()?;
        ensure_finite("length", length)?;
        ensure_finite("height", height)?;
        ensure_finite("margin", margin)?;
        if count == 0 {
            return Err(Error::invalid_argument("count", "must be at least 1"));
        }
        if margin < 0.0 {
            return Err(Error::invalid_argument(
                "margin",
                format!("must not be negative, got {}", margin),
            ));
        }
        if 2.0 * margin >= length {
            return Err(Error::invalid_argument(
                "margin",
                format!("margins of {} leave nothing to cut on {}", margin, length),
            ));
        }
        Ok(Self {
            code,
            length,
            height,
            count,
            margin,
        })
    }

    /// Cut intervals along the travel axis for row `j`.
    fn row_cuts(&self, j: usize) -> Vec<(f64, f64)> {
        let (l, m) = (self.length, self.margin);
        if self.code.parity ^ (j % 2 == 1) {
            vec![(0.0, l / 2.0 - m / 2.0), (l / 2.0 + m / 2.0, l)]
        } else {
            vec![(m, l - m)]
        }
    }

    pub fn profile(&self) -> Vec<Point> {
        let spacing = if self.count > 1 {
            self.height / (self.count - 1) as f64
        } else {
            0.0
        };
        let mut points = Vec::new();
        for j in 0..self.count {
            let y = j as f64 * spacing;
            for (x0, x1) in self.row_cuts(j) {
                if !points.is_empty() {
                    points.push(Point::BREAK);
                }
                points.push(Point::new(x0, y));
                points.push(Point::new(x1, y));
            }
        }
        points
    }
}

impl Feature for Flex {
    fn name(&self) -> &'static str {
        "flex"
    }

    fn motion(&self) -> Motion {
        Motion::Static
    }

    fn trace(&self, pass: Pass) -> Result<Vec<Point>> {
        let points = self.profile();
        trace!("flex {:?}: {} rows -> {} points", pass, self.count, points.len());
        Ok(self.code.orientation.apply(points))
    }
}
