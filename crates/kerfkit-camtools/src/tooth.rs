//! Finger-joint edges
//!
//! A tooth edge is a square wave of `steps` segments of equal width. Raised
//! segments are the fingers; base segments sit on the edge line (protruding
//! edges) or are sunk one level below it (notched edges).
//!
//! Kerf is applied the same way the box maker does it: every level moves
//! outward by the kerf and the two outer ends are pushed outward or inward.
//! Transitions are named by cut depth, measured into the sheet (local -y), so
//! a finger is shallow and a base segment is deep. At a falling transition
//! (base to finger) the segment before shrinks by the kerf and the one after
//! grows; at a rising transition (finger to base) it is the other way round.
//! Either way the finger grows on both flanks and the total span is kept. The
//! nominal end point is always `steps * width` plus the grown corner heights
//! away from the start, whatever the kerf.

use crate::feature::{Feature, Motion, Pass};
use kerfkit_core::error::ensure_finite;
use kerfkit_core::{Error, KerfSign, Point, Result, ToothCode};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Tooth options beyond the positional parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToothOptions {
    /// Number of segments; `None` splits the width into two halves.
    pub steps: Option<usize>,
    /// Fingers stand out past the edge line instead of ending flush with it.
    pub protrude: bool,
}

impl Default for ToothOptions {
    fn default() -> Self {
        Self {
            steps: None,
            protrude: true,
        }
    }
}

impl ToothOptions {
    pub fn steps(steps: usize) -> Self {
        Self {
            steps: Some(steps),
            ..Self::default()
        }
    }

    pub fn notched(mut self) -> Self {
        self.protrude = false;
        self
    }
}

/// Left corner, finger and right corner heights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Heights {
    pub left: f64,
    pub center: f64,
    pub right: f64,
}

impl Heights {
    pub fn uniform(height: f64) -> Self {
        Self {
            left: height,
            center: height,
            right: height,
        }
    }

    /// Accepts `[h]` or `[left, center, right]`.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        for (i, v) in values.iter().enumerate() {
            ensure_finite(&format!("heights[{}]", i), *v)?;
        }
        match *values {
            [h] => Ok(Self::uniform(h)),
            [left, center, right] => Ok(Self {
                left,
                center,
                right,
            }),
            _ => Err(Error::invalid_argument(
                "heights",
                format!("expected 1 or 3 values, got {}", values.len()),
            )),
        }
    }
}

/// A finger-joint edge
#[derive(Debug, Clone)]
pub struct Tooth {
    code: ToothCode,
    steps: usize,
    width: f64,
    heights: Heights,
    kerf: f64,
    protrude: bool,
}

impl Tooth {
    pub fn new(
        code: &str,
        width: f64,
        heights: &[f64],
        kerf: f64,
        options: ToothOptions,
    ) -> Result<Self> {
        let code: ToothCode = code.parse()?;
        Self::from_code(code, width, Heights::from_slice(heights)?, kerf, options)
    }

    pub fn from_code(
        code: ToothCode,
        width: f64,
        heights: Heights,
        kerf: f64,
        options: ToothOptions,
    ) -> Result<Self> {
        ensure_finite("width", width)?;
        ensure_finite("kerf", kerf)?;
        let (steps, width) = match options.steps {
            Some(0) => {
                return Err(Error::invalid_argument(
                    "steps",
                    "a tooth edge needs at least one segment",
                ))
            }
            Some(n) => (n, width),
            None => (2, width / 2.0),
        };
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
            heights,
            kerf,
            protrude: options.protrude,
        })
    }

    pub fn code(&self) -> &ToothCode {
        &self.code
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Width of a single segment.
    pub fn width(&self) -> f64 {
        self.width
    }

    fn lead(&self) -> f64 {
        if self.code.left.grow {
            self.heights.left
        } else {
            0.0
        }
    }

    fn tail(&self) -> f64 {
        if self.code.right.grow {
            self.heights.right
        } else {
            0.0
        }
    }

    /// Nominal length of the edge along the travel axis.
    pub fn span(&self) -> f64 {
        self.lead() + self.steps as f64 * self.width + self.tail()
    }

    /// Profile in the local frame (+x along travel, +y outside).
    pub fn profile(&self, kerf: f64) -> Vec<Point> {
        let code = &self.code;
        let finger = self.heights.center;
        let sink = if self.protrude { 0.0 } else { -finger };
        // The level lying on the edge line.
        let base = !self.protrude;
        let level_y = |raised: bool| (if raised { finger } else { 0.0 }) + sink + kerf;
        let (start_sign, end_sign) = code.end_signs.unwrap_or_else(|| {
            let sign = KerfSign::from_protrude(self.protrude);
            (sign, sign)
        });

        // (start x, raised) per segment, grown corners included
        let lead = self.lead();
        let mut segments: Vec<(f64, bool)> = Vec::with_capacity(self.steps + 2);
        if code.left.grow {
            segments.push((0.0, base));
        }
        for (i, raised) in code.levels.expand(self.steps).into_iter().enumerate() {
            segments.push((lead + i as f64 * self.width, raised));
        }
        if code.right.grow {
            segments.push((lead + self.steps as f64 * self.width, base));
        }
        let last_index = segments.len() - 1;

        let mut points = Vec::with_capacity(2 * segments.len() + 4);
        let start_x = -start_sign.factor() * kerf;
        points.push(Point::new(start_x, level_y(base)));
        if code.left.is_open() {
            points.push(Point::BREAK);
        } else if segments[0].1 != base {
            points.push(Point::new(start_x, level_y(segments[0].1)));
        }

        for j in 1..segments.len() {
            let (x, raised) = segments[j];
            let previous = segments[j - 1].1;
            let seam = (j == 1 && code.left.is_open()) || (j == last_index && code.right.is_open());
            if previous != raised {
                // Falling depth moves the boundary back, rising moves it on.
                let x = if raised { x - kerf } else { x + kerf };
                points.push(Point::new(x, level_y(previous)));
                points.push(Point::new(x, level_y(raised)));
            } else if seam {
                points.push(Point::new(x, level_y(raised)));
            }
        }

        let last = segments[last_index].1;
        let end_x = self.span() + end_sign.factor() * kerf;
        if code.right.is_open() {
            points.push(Point::BREAK);
            points.push(Point::new(end_x, level_y(base)));
        } else {
            points.push(Point::new(end_x, level_y(last)));
            if last != base {
                points.push(Point::new(end_x, level_y(base)));
            }
        }

        points
    }
}

impl Feature for Tooth {
    fn name(&self) -> &'static str {
        "tooth"
    }

    fn motion(&self) -> Motion {
        Motion::Shifting
    }

    fn trace(&self, pass: Pass) -> Result<Vec<Point>> {
        let local = self.profile(pass.kerf(self.kerf));
        trace!(
            "tooth {:?}: heading {}, {} segments of {} -> {} points",
            pass,
            self.code.orientation.direction.heading(),
            self.steps,
            self.width,
            local.len()
        );
        Ok(self.code.orientation.apply(local))
    }
}
