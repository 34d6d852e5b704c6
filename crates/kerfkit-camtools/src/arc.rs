//! Circular arcs through the cursor and a target
//!
//! The arc is solved from its chord `c` and sweep `θ`: `R = c / (2 sin(θ/2))`.
//! In the local frame the chord runs along +x and a positive sweep bulges
//! toward +y; a negative sweep mirrors the arc across the chord.

use crate::feature::{Feature, Motion, Pass};
use kerfkit_core::error::ensure_finite;
use kerfkit_core::{Error, Orientation, Point, Result, DEFAULT_RESOLUTION};
use nalgebra::{Rotation2, Vector2};
use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcOptions {
    /// Segments along the arc.
    pub resolution: usize,
}

impl Default for ArcOptions {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

/// Arc geometry independent of how the chord is placed
#[derive(Debug, Clone, Copy)]
struct ArcShape {
    chord: f64,
    sweep: f64,
    resolution: usize,
}

impl ArcShape {
    fn new(chord: f64, sweep: f64, options: ArcOptions) -> Result<Self> {
        ensure_finite("chord", chord)?;
        ensure_finite("sweep", sweep)?;
        if sweep.abs() >= 360.0 {
            return Err(Error::DegenerateGeometry(format!(
                "arc sweep of {} degrees does not describe a unique arc",
                sweep
            )));
        }
        if chord == 0.0 && sweep != 0.0 {
            return Err(Error::DegenerateGeometry(
                "arc with a zero-length chord and a nonzero sweep".to_string(),
            ));
        }
        if chord < 0.0 {
            return Err(Error::invalid_argument(
                "width",
                format!("must not be negative, got {}", chord),
            ));
        }
        if options.resolution == 0 {
            return Err(Error::invalid_argument("resolution", "must be at least 1"));
        }
        Ok(Self {
            chord,
            sweep,
            resolution: options.resolution,
        })
    }

    /// The kerf must not turn the offset radius negative.
    fn check_offset(&self, kerf: f64) -> Result<()> {
        let radius = self.radius();
        if radius + kerf < 0.0 {
            return Err(Error::DegenerateGeometry(format!(
                "kerf {} exceeds the arc radius {}",
                kerf, radius
            )));
        }
        Ok(())
    }

    /// Radius of the nominal arc; infinite for a straight chord.
    fn radius(&self) -> f64 {
        let half = self.sweep.abs().to_radians() / 2.0;
        self.chord / (2.0 * half.sin())
    }

    fn profile(&self, kerf: f64) -> Vec<Point> {
        let res = self.resolution;
        let c = self.chord;

        if self.sweep == 0.0 {
            return (0..=res)
                .map(|j| Point::new(c * j as f64 / res as f64, kerf))
                .collect();
        }

        let theta = self.sweep.abs().to_radians();
        let radius = self.radius();
        let d = radius * (theta / 2.0).cos();
        let (cx, cy) = (c / 2.0, -d);
        let start = d.atan2(-c / 2.0);
        let offset_radius = radius + kerf;

        let mut points: Vec<Point> = (0..=res)
            .map(|j| {
                let a = start - theta * j as f64 / res as f64;
                let (s, co) = a.sin_cos();
                Point::new(cx + offset_radius * co, cy + offset_radius * s)
            })
            .collect();

        // Pin the ends to the chord so the cursor lands exactly on the target.
        let (s0, c0) = start.sin_cos();
        let (s1, c1) = (start - theta).sin_cos();
        points[0] = Point::new(kerf * c0, kerf * s0);
        points[res] = Point::new(c + kerf * c1, kerf * s1);

        if self.sweep < 0.0 {
            points.iter_mut().for_each(|p| *p = p.mirrored());
        }
        points
    }
}

/// Arc whose chord runs along a compass direction
#[derive(Debug, Clone)]
pub struct Arc {
    orientation: Orientation,
    shape: ArcShape,
    kerf: f64,
}

impl Arc {
    pub fn new(code: &str, width: f64, sweep: f64, kerf: f64, options: ArcOptions) -> Result<Self> {
        if code.chars().count() != 1 {
            return Err(Error::invalid_code(code, "arc codes have 1 character"));
        }
        let orientation = Orientation::parse_leading(code)?;
        ensure_finite("kerf", kerf)?;
        let shape = ArcShape::new(width, sweep, options)?;
        shape.check_offset(kerf)?;
        Ok(Self {
            orientation,
            shape,
            kerf,
        })
    }

    /// Arc to an explicit relative target.
    pub fn to(dx: f64, dy: f64, sweep: f64, kerf: f64, options: ArcOptions) -> Result<ArcTo> {
        ArcTo::new(dx, dy, sweep, kerf, options)
    }

    pub fn radius(&self) -> f64 {
        self.shape.radius()
    }
}

impl Feature for Arc {
    fn name(&self) -> &'static str {
        "arc"
    }

    fn motion(&self) -> Motion {
        Motion::Shifting
    }

    fn trace(&self, pass: Pass) -> Result<Vec<Point>> {
        let local = self.shape.profile(pass.kerf(self.kerf));
        trace!(
            "arc {:?}: chord {} sweep {} -> {} points",
            pass,
            self.shape.chord,
            self.shape.sweep,
            local.len()
        );
        Ok(self.orientation.apply(local))
    }
}

/// Arc whose chord runs from the cursor to `(dx, dy)`
#[derive(Debug, Clone)]
pub struct ArcTo {
    target: Point,
    shape: ArcShape,
    kerf: f64,
}

impl ArcTo {
    pub fn new(dx: f64, dy: f64, sweep: f64, kerf: f64, options: ArcOptions) -> Result<Self> {
        ensure_finite("dx", dx)?;
        ensure_finite("dy", dy)?;
        ensure_finite("kerf", kerf)?;
        let shape = ArcShape::new(dx.hypot(dy), sweep, options)?;
        shape.check_offset(kerf)?;
        Ok(Self {
            target: Point::new(dx, dy),
            shape,
            kerf,
        })
    }
}

impl Feature for ArcTo {
    fn name(&self) -> &'static str {
        "arc_to"
    }

    fn motion(&self) -> Motion {
        Motion::Shifting
    }

    fn trace(&self, pass: Pass) -> Result<Vec<Point>> {
        let local = self.shape.profile(pass.kerf(self.kerf));
        let rotation = Rotation2::new(self.target.y.atan2(self.target.x));
        let chord_end = Point::new(self.shape.chord, 0.0);
        let last = local.len() - 1;

        Ok(local
            .iter()
            .enumerate()
            .map(|(j, p)| {
                if j == last {
                    // Rotate only the kerf offset so the end stays on the target.
                    let v = rotation * Vector2::new(p.x - chord_end.x, p.y - chord_end.y);
                    self.target.offset(v.x, v.y)
                } else {
                    let v = rotation * Vector2::new(p.x, p.y);
                    Point::new(v.x, v.y)
                }
            })
            .collect())
    }
}
