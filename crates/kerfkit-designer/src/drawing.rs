//! Drawing composer
//!
//! A [`Drawing`] owns two point sequences of equal length: the compensated
//! path (kerf applied, sent to the cutter) and the nominal path (kerf-free
//! reference). Every operation keeps them index-aligned, with pen-up breaks at
//! the same positions.
//!
//! The drawing also tracks three pieces of state:
//!
//! - the **cursor**, where the next feature starts; shifting features move it
//!   to the end of their nominal path
//! - the **pivot**, a point plus the index from which [`Drawing::rotate`]
//!   transforms already drawn geometry
//! - the **subpath start**, the index [`Drawing::close`] joins back to
//!
//! Indices are zero-based positions into the sequences: `begin()` and
//! `pivot()` both record the index the next appended point will get.

use crate::svg::{self, ExportOptions};
use kerfkit_camtools::{
    Arc, ArcOptions, Circle, CircleOptions, Feature, Flex, Line, LineVector, Motion, Pass,
    Rectangle, RectangleOptions, Slit, Tooth, ToothOptions, Wave, WaveOptions,
};
use kerfkit_core::{BoundingBox, Error, Kerf, Point, Result};
use std::path::Path;
use tracing::{debug, warn};

/// Rotation origin and the first sequence index it applies to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pivot {
    pub point: Point,
    pub index: usize,
}

#[derive(Debug, Clone)]
pub struct Drawing {
    compensated: Vec<Point>,
    nominal: Vec<Point>,
    cursor: Point,
    pivot: Pivot,
    begin: usize,
}

impl Default for Drawing {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawing {
    /// Empty drawing with the cursor at the origin.
    pub fn new() -> Self {
        Self::with_cursor(Point::ORIGIN)
    }

    /// Empty drawing with the cursor (and pivot) at `start`.
    pub fn with_cursor(start: Point) -> Self {
        Self {
            compensated: Vec::new(),
            nominal: Vec::new(),
            cursor: start,
            pivot: Pivot {
                point: start,
                index: 0,
            },
            begin: 0,
        }
    }

    pub fn compensated(&self) -> &[Point] {
        &self.compensated
    }

    pub fn nominal(&self) -> &[Point] {
        &self.nominal
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn pivot_state(&self) -> Pivot {
        self.pivot
    }

    /// Index the next `close()` joins back to.
    pub fn subpath_begin(&self) -> usize {
        self.begin
    }

    pub fn len(&self) -> usize {
        self.compensated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compensated.is_empty()
    }

    // ---- cursor and subpath state ----

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.cursor = Point::new(x, y);
        self
    }

    /// Move the cursor to the last drawn point of the nominal path.
    ///
    /// Leaves the cursor alone when nothing has been drawn yet.
    pub fn move_to_end(&mut self) -> &mut Self {
        if let Some(end) = self.nominal.iter().rev().find(|p| !p.is_break()) {
            self.cursor = *end;
        }
        self
    }

    pub fn shift(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.move_to(self.cursor.x + dx, self.cursor.y + dy)
    }

    /// Start a new subpath at the next appended point.
    pub fn begin(&mut self) -> &mut Self {
        self.begin = self.len();
        self
    }

    /// Lift the pen: append a break to both paths and start a new subpath.
    pub fn cut(&mut self) -> &mut Self {
        self.compensated.push(Point::BREAK);
        self.nominal.push(Point::BREAK);
        debug!("cut at index {}", self.len() - 1);
        self.begin()
    }

    /// Join the current subpath back to its first point.
    pub fn close(&mut self) -> &mut Self {
        if self.is_empty() {
            return self;
        }
        let first = (self.begin..self.len()).find(|&i| !self.compensated[i].is_break());
        match first {
            Some(i) => {
                let (c, n) = (self.compensated[i], self.nominal[i]);
                self.compensated.push(c);
                self.nominal.push(n);
                debug!("closed subpath {}..{}", i, self.len() - 1);
            }
            None => warn!("close() with no points since index {}", self.begin),
        }
        self
    }

    /// Rotate everything appended from now on about the cursor.
    pub fn pivot(&mut self) -> &mut Self {
        let cursor = self.cursor;
        self.pivot_at(cursor.x, cursor.y)
    }

    /// Rotate everything appended from now on about `(x, y)`.
    pub fn pivot_at(&mut self, x: f64, y: f64) -> &mut Self {
        self.pivot = Pivot {
            point: Point::new(x, y),
            index: self.len(),
        };
        debug!("pivot {:?} at index {}", self.pivot.point, self.pivot.index);
        self
    }

    /// Rotate both paths from the pivot index onward, counter-clockwise in degrees.
    ///
    /// Points before the pivot index are untouched. The cursor is not moved.
    pub fn rotate(&mut self, degrees: f64) -> &mut Self {
        let Pivot { point, index } = self.pivot;
        let start = index.min(self.len());
        for p in self.compensated[start..]
            .iter_mut()
            .chain(self.nominal[start..].iter_mut())
        {
            if !p.is_break() {
                *p = p.rotated_about(point, degrees);
            }
        }
        debug!(
            "rotated {} points by {} degrees about {:?}",
            self.len() - start,
            degrees,
            point
        );
        self
    }

    // ---- composition ----

    /// Append local point sequences, offset by the cursor.
    ///
    /// Both sequences must have the same length with breaks at the same
    /// indices. The cursor is not moved.
    pub fn append(&mut self, compensated: &[Point], nominal: &[Point]) -> Result<&mut Self> {
        if compensated.len() != nominal.len() {
            return Err(Error::invalid_argument(
                "nominal",
                format!(
                    "{} compensated points but {} nominal points",
                    compensated.len(),
                    nominal.len()
                ),
            ));
        }
        if let Some(i) = (0..compensated.len())
            .find(|&i| compensated[i].is_break() != nominal[i].is_break())
        {
            return Err(Error::invalid_argument(
                "nominal",
                format!("break at index {} is not shared by both paths", i),
            ));
        }
        let origin = self.cursor;
        let place = |p: &Point| {
            if p.is_break() {
                Point::BREAK
            } else {
                *p + origin
            }
        };
        self.compensated.extend(compensated.iter().map(place));
        self.nominal.extend(nominal.iter().map(place));
        Ok(self)
    }

    /// Trace a feature in both passes and append it at the cursor.
    ///
    /// Shifting features then move the cursor to their nominal end. On error
    /// the drawing is left unchanged.
    pub fn add(&mut self, feature: &dyn Feature) -> Result<&mut Self> {
        let compensated = feature.trace(Pass::Compensated)?;
        let nominal = feature.trace(Pass::Nominal)?;
        self.append(&compensated, &nominal)?;
        if feature.motion() == Motion::Shifting {
            self.move_to_end();
        }
        debug!(
            "{}: appended {} points, cursor {:?}",
            feature.name(),
            compensated.len(),
            self.cursor
        );
        Ok(self)
    }

    /// Append a copy of `other`, offset by `offset` (the cursor by default).
    ///
    /// The cursor, pivot and subpath start of this drawing are left as they
    /// were, even though the merged points now follow them.
    pub fn merge(&mut self, other: &Drawing, offset: Option<Point>) -> &mut Self {
        let offset = offset.unwrap_or(self.cursor);
        let place = |p: &Point| {
            if p.is_break() {
                Point::BREAK
            } else {
                *p + offset
            }
        };
        self.compensated.extend(other.compensated.iter().map(place));
        self.nominal.extend(other.nominal.iter().map(place));
        debug!("merged {} points at {:?}", other.len(), offset);
        self
    }

    // ---- feature wrappers ----

    pub fn tooth(
        &mut self,
        code: &str,
        width: f64,
        heights: &[f64],
        kerf: f64,
        options: ToothOptions,
    ) -> Result<&mut Self> {
        self.add(&Tooth::new(code, width, heights, kerf, options)?)
    }

    pub fn slit(
        &mut self,
        code: &str,
        steps: usize,
        width: f64,
        height: f64,
        kerf: f64,
    ) -> Result<&mut Self> {
        self.add(&Slit::new(code, steps, width, height, kerf)?)
    }

    pub fn wave(
        &mut self,
        code: &str,
        periods: usize,
        width: f64,
        height: f64,
        kerf: f64,
        options: WaveOptions,
    ) -> Result<&mut Self> {
        self.add(&Wave::new(code, periods, width, height, kerf, options)?)
    }

    pub fn line(&mut self, code: &str, length: f64, kerf: f64) -> Result<&mut Self> {
        self.add(&Line::new(code, length, kerf)?)
    }

    pub fn line_vector(&mut self, dx: f64, dy: f64, kerf: impl Into<Kerf>) -> Result<&mut Self> {
        self.add(&LineVector::new(dx, dy, kerf.into())?)
    }

    pub fn rectangle(
        &mut self,
        width: f64,
        height: f64,
        kerf: impl Into<Kerf>,
        options: RectangleOptions,
    ) -> Result<&mut Self> {
        self.add(&Rectangle::new(width, height, kerf.into(), options)?)
    }

    pub fn arc(
        &mut self,
        code: &str,
        width: f64,
        sweep: f64,
        kerf: f64,
        options: ArcOptions,
    ) -> Result<&mut Self> {
        self.add(&Arc::new(code, width, sweep, kerf, options)?)
    }

    pub fn arc_to(
        &mut self,
        dx: f64,
        dy: f64,
        sweep: f64,
        kerf: f64,
        options: ArcOptions,
    ) -> Result<&mut Self> {
        self.add(&Arc::to(dx, dy, sweep, kerf, options)?)
    }

    pub fn circle(&mut self, radius: f64, kerf: f64, options: CircleOptions) -> Result<&mut Self> {
        self.add(&Circle::new(radius, kerf, options)?)
    }

    pub fn flex(
        &mut self,
        code: &str,
        length: f64,
        height: f64,
        count: usize,
        margin: f64,
    ) -> Result<&mut Self> {
        self.add(&Flex::new(code, length, height, count, margin)?)
    }

    // ---- output ----

    /// Maximal runs of drawn points in the compensated path.
    pub fn subpaths(&self) -> Vec<&[Point]> {
        self.compensated
            .split(|p| p.is_break())
            .filter(|run| !run.is_empty())
            .collect()
    }

    /// Bounds of the compensated path, `None` when nothing is drawn.
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.compensated)
    }

    /// Write the drawing as an SVG document, replacing `path` atomically.
    pub fn export(&self, path: impl AsRef<Path>, options: &ExportOptions) -> Result<()> {
        svg::export(self, path.as_ref(), options)
    }
}
