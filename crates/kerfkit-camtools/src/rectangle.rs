//! Sharp and rounded rectangles
//!
//! The rectangle is anchored with one corner on the cursor and spans
//! `(width, height)` from it; negative dimensions mirror it across the cursor.
//! Kerf offsets the outline: sides move by `kerf.x` / `kerf.y` and the corner
//! radii grow by the same amounts around fixed centres, so a rounded corner
//! stays a true offset curve.

use crate::feature::{Feature, Motion, Pass};
use kerfkit_core::error::ensure_finite;
use kerfkit_core::{Error, Kerf, Point, Result, DEFAULT_RESOLUTION};
use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangleOptions {
    /// Corner radius; zero gives sharp corners.
    pub radius: f64,
    /// Segments per quarter corner.
    pub resolution: usize,
}

impl Default for RectangleOptions {
    fn default() -> Self {
        Self {
            radius: 0.0,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl RectangleOptions {
    pub fn rounded(radius: f64) -> Self {
        Self {
            radius,
            ..Self::default()
        }
    }
}

/// Exact unit vector for multiples of 90 degrees, trigonometry otherwise.
pub(crate) fn unit(degrees: f64) -> Point {
    let turn = degrees.rem_euclid(360.0);
    if turn == 0.0 {
        Point::new(1.0, 0.0)
    } else if turn == 90.0 {
        Point::new(0.0, 1.0)
    } else if turn == 180.0 {
        Point::new(-1.0, 0.0)
    } else if turn == 270.0 {
        Point::new(0.0, -1.0)
    } else {
        let (s, c) = degrees.to_radians().sin_cos();
        Point::new(c, s)
    }
}

#[derive(Debug, Clone)]
pub struct Rectangle {
    width: f64,
    height: f64,
    kerf: Kerf,
    radius: f64,
    resolution: usize,
}

impl Rectangle {
    pub fn new(width: f64, height: f64, kerf: Kerf, options: RectangleOptions) -> Result<Self> {
        ensure_finite("width", width)?;
        ensure_finite("height", height)?;
        ensure_finite("kerf.x", kerf.x)?;
        ensure_finite("kerf.y", kerf.y)?;
        ensure_finite("radius", options.radius)?;
        if options.radius < 0.0 {
            return Err(Error::invalid_argument(
                "radius",
                format!("must not be negative, got {}", options.radius),
            ));
        }
        let limit = width.abs().min(height.abs()) / 2.0;
        if options.radius > limit {
            return Err(Error::invalid_argument(
                "radius",
                format!("{} exceeds half the shorter side ({})", options.radius, limit),
            ));
        }
        if options.resolution == 0 {
            return Err(Error::invalid_argument("resolution", "must be at least 1"));
        }
        Ok(Self {
            width,
            height,
            kerf,
            radius: options.radius,
            resolution: options.resolution,
        })
    }

    pub fn is_rounded(&self) -> bool {
        self.radius > 0.0
    }

    /// Outline for the first quadrant (positive width and height).
    fn outline(&self, kerf: Kerf) -> Vec<Point> {
        let a = self.width.abs();
        let b = self.height.abs();

        if !self.is_rounded() {
            let (x0, x1) = (-kerf.x, a + kerf.x);
            let (y0, y1) = (-kerf.y, b + kerf.y);
            return vec![
                Point::new(x0, y0),
                Point::new(x1, y0),
                Point::new(x1, y1),
                Point::new(x0, y1),
                Point::new(x0, y0),
            ];
        }

        let r = self.radius;
        let rx = (r + kerf.x).max(0.0);
        let ry = (r + kerf.y).max(0.0);
        let res = self.resolution;
        // (centre, start angle) clockwise-in-order from the bottom-right corner
        let corners = [
            (Point::new(a - r, r), -90.0),
            (Point::new(a - r, b - r), 0.0),
            (Point::new(r, b - r), 90.0),
            (Point::new(r, r), 180.0),
        ];

        let mut points = Vec::with_capacity(1 + 4 * (res + 1));
        points.push(Point::new(r, r - ry));
        for (centre, start) in corners {
            for j in 0..=res {
                let u = unit(start + 90.0 * j as f64 / res as f64);
                points.push(centre.offset(rx * u.x, ry * u.y));
            }
        }
        points
    }

    pub fn profile(&self, kerf: Kerf) -> Vec<Point> {
        let sx = if self.width < 0.0 { -1.0 } else { 1.0 };
        let sy = if self.height < 0.0 { -1.0 } else { 1.0 };
        self.outline(kerf)
            .into_iter()
            .map(|p| Point::new(sx * p.x, sy * p.y))
            .collect()
    }
}

impl Feature for Rectangle {
    fn name(&self) -> &'static str {
        "rectangle"
    }

    fn motion(&self) -> Motion {
        Motion::Static
    }

    fn trace(&self, pass: Pass) -> Result<Vec<Point>> {
        let points = self.profile(pass.kerf_pair(self.kerf));
        trace!(
            "rectangle {:?}: {}x{} r={} -> {} points",
            pass,
            self.width,
            self.height,
            self.radius,
            points.len()
        );
        Ok(points)
    }
}
