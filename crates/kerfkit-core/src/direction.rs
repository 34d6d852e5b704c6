//! Compass directions and local-frame orientation
//!
//! Generators work in a local frame whose +x axis runs along the direction of
//! travel and whose +y axis is the outside of the edge (left of travel).
//! Directions are compass headings measured clockwise from north, so a closed
//! perimeter traced N, E, S, W from its lower-left corner keeps the outside on
//! local +y for every edge.
//!
//! A lowercase letter selects the same direction with the geometry mirrored
//! across the travel axis, which produces the complementary face of a joint.

use crate::error::{Error, Result};
use crate::point::Point;
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compass direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// World +y
    North,
    /// World +x
    East,
    /// World -y
    South,
    /// World -x
    West,
}

impl Direction {
    /// Heading in degrees, clockwise from north.
    pub fn heading(&self) -> f64 {
        match self {
            Direction::North => 0.0,
            Direction::East => 90.0,
            Direction::South => 180.0,
            Direction::West => 270.0,
        }
    }

    /// Exact (cos, sin) of the counter-clockwise angle taking local +x to the heading.
    fn basis(&self) -> (f64, f64) {
        match self {
            Direction::North => (0.0, 1.0),
            Direction::East => (1.0, 0.0),
            Direction::South => (0.0, -1.0),
            Direction::West => (-1.0, 0.0),
        }
    }

    /// Unit vector of travel in world coordinates.
    pub fn travel(&self) -> Point {
        let (c, s) = self.basis();
        Point::new(c, s)
    }

    pub fn letter(&self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A direction plus the mirror flag carried by the letter case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Orientation {
    pub direction: Direction,
    pub mirrored: bool,
}

impl Orientation {
    pub fn new(direction: Direction, mirrored: bool) -> Self {
        Self {
            direction,
            mirrored,
        }
    }

    /// Parse a single compass letter; lowercase sets the mirror flag.
    pub fn from_char(c: char) -> Option<Self> {
        let direction = match c.to_ascii_uppercase() {
            'N' => Direction::North,
            'E' => Direction::East,
            'S' => Direction::South,
            'W' => Direction::West,
            _ => return None,
        };
        Some(Self::new(direction, c.is_ascii_lowercase()))
    }

    /// Parse the leading letter of a feature code.
    pub fn parse_leading(code: &str) -> Result<Self> {
        let first = code
            .chars()
            .next()
            .ok_or_else(|| Error::invalid_code(code, "empty code"))?;
        Self::from_char(first)
            .ok_or_else(|| Error::invalid_code(code, format!("unknown direction '{}'", first)))
    }

    /// Map a local-frame point into world orientation (no translation).
    pub fn to_world(&self, local: Point) -> Point {
        if local.is_break() {
            return local;
        }
        let local = if self.mirrored {
            local.mirrored()
        } else {
            local
        };
        let (c, s) = self.direction.basis();
        let rotation = Matrix2::new(c, -s, s, c);
        let v = rotation * Vector2::new(local.x, local.y);
        Point::new(v.x, v.y)
    }

    /// Map a whole local point sequence into world orientation.
    pub fn apply(&self, points: Vec<Point>) -> Vec<Point> {
        points.into_iter().map(|p| self.to_world(p)).collect()
    }

    pub fn letter(&self) -> char {
        let c = self.direction.letter();
        if self.mirrored {
            c.to_ascii_lowercase()
        } else {
            c
        }
    }
}

impl From<Direction> for Orientation {
    fn from(direction: Direction) -> Self {
        Orientation::new(direction, false)
    }
}
