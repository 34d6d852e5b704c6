//! Planar points, kerf pairs and bounding boxes.

use nalgebra::{Point2, Rotation2, Vector2};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D point in millimetres.
///
/// A point with both coordinates NaN is the pen-up sentinel ([`Point::BREAK`]);
/// it separates subpaths inside a point sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Pen-up marker between two strokes.
    pub const BREAK: Point = Point {
        x: f64::NAN,
        y: f64::NAN,
    };

    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_break(&self) -> bool {
        self.x.is_nan() && self.y.is_nan()
    }

    /// Bitwise equality, treating two breaks as equal.
    pub fn same(&self, other: &Point) -> bool {
        if self.is_break() || other.is_break() {
            return self.is_break() && other.is_break();
        }
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }

    /// Translate by a vector; breaks stay breaks.
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        if self.is_break() {
            return *self;
        }
        Self::new(self.x + dx, self.y + dy)
    }

    /// Reflect across the local x axis.
    pub fn mirrored(&self) -> Self {
        if self.is_break() {
            return *self;
        }
        Self::new(self.x, -self.y)
    }

    /// Rotate counter-clockwise by `degrees` about `center`.
    pub fn rotated_about(&self, center: Point, degrees: f64) -> Self {
        if self.is_break() {
            return *self;
        }
        let rotation = Rotation2::new(degrees.to_radians());
        let relative = Vector2::new(self.x - center.x, self.y - center.y);
        let turned = rotation * relative;
        Self::new(turned.x + center.x, turned.y + center.y)
    }

    pub fn distance(&self, other: &Point) -> f64 {
        nalgebra::distance(&Point2::from(*self), &Point2::from(*other))
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl From<Point> for Point2<f64> {
    fn from(p: Point) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl From<Point2<f64>> for Point {
    fn from(p: Point2<f64>) -> Self {
        Point::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        self.offset(rhs.x, rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        self.offset(-rhs.x, -rhs.y)
    }
}

/// Cut-width compensation as an independent horizontal/vertical pair.
///
/// Positive values grow material outward, negative values open clearance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Kerf {
    pub x: f64,
    pub y: f64,
}

impl Kerf {
    pub const ZERO: Kerf = Kerf { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn uniform(k: f64) -> Self {
        Self { x: k, y: k }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl From<f64> for Kerf {
    fn from(k: f64) -> Self {
        Kerf::uniform(k)
    }
}

/// Axis-aligned bounds of the drawable points of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Bounds of all non-break points, or `None` when there are none.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut bounds: Option<BoundingBox> = None;
        for p in points.into_iter().filter(|p| !p.is_break()) {
            bounds = Some(match bounds {
                None => BoundingBox {
                    min_x: p.x,
                    min_y: p.y,
                    max_x: p.x,
                    max_y: p.y,
                },
                Some(b) => BoundingBox {
                    min_x: b.min_x.min(p.x),
                    min_y: b.min_y.min(p.y),
                    max_x: b.max_x.max(p.x),
                    max_y: b.max_y.max(p.y),
                },
            });
        }
        bounds
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}
