//! Full circles, optionally at several centres in one call

use crate::feature::{Feature, Motion, Pass};
use kerfkit_core::error::ensure_finite;
use kerfkit_core::{Error, Point, Result, DEFAULT_RESOLUTION};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleOptions {
    /// Segments around the circle.
    pub resolution: usize,
    /// Centres relative to the cursor; empty means the cursor itself.
    pub centers: Vec<Point>,
}

impl Default for CircleOptions {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            centers: Vec::new(),
        }
    }
}

impl CircleOptions {
    pub fn at(centers: impl IntoIterator<Item = Point>) -> Self {
        Self {
            centers: centers.into_iter().collect(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct Circle {
    radius: f64,
    kerf: f64,
    resolution: usize,
    centers: Vec<Point>,
}

impl Circle {
    pub fn new(radius: f64, kerf: f64, options: CircleOptions) -> Result<Self> {
        ensure_finite("radius", radius)?;
        ensure_finite("kerf", kerf)?;
        if radius < 0.0 {
            return Err(Error::invalid_argument(
                "radius",
                format!("must not be negative, got {}", radius),
            ));
        }
        if options.resolution < 3 {
            return Err(Error::invalid_argument(
                "resolution",
                format!("a circle needs at least 3 segments, got {}", options.resolution),
            ));
        }
        for c in &options.centers {
            ensure_finite("center.x", c.x)?;
            ensure_finite("center.y", c.y)?;
        }
        let centers = if options.centers.is_empty() {
            vec![Point::ORIGIN]
        } else {
            options.centers
        };
        Ok(Self {
            radius,
            kerf,
            resolution: options.resolution,
            centers,
        })
    }

    pub fn profile(&self, kerf: f64) -> Vec<Point> {
        let res = self.resolution;
        let radius = (self.radius + kerf).max(0.0);
        let mut points = Vec::with_capacity(self.centers.len() * (res + 2));
        for center in &self.centers {
            if !points.is_empty() {
                points.push(Point::BREAK);
            }
            points.extend((0..=res).map(|j| {
                // The last sample repeats the first exactly.
                let (s, c) = (TAU * (j % res) as f64 / res as f64).sin_cos();
                center.offset(radius * c, radius * s)
            }));
        }
        points
    }
}

impl Feature for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn motion(&self) -> Motion {
        Motion::Static
    }

    fn trace(&self, pass: Pass) -> Result<Vec<Point>> {
        let points = self.profile(pass.kerf(self.kerf));
        trace!(
            "circle {:?}: r={} at {} centres",
            pass,
            self.radius,
            self.centers.len()
        );
        Ok(points)
    }
}
