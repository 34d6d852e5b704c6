//! # KerfKit Core
//!
//! Core types shared by the generator, drawing and settings crates:
//!
//! - [`Point`] with the pen-up [`Point::BREAK`] sentinel, [`Kerf`] and [`BoundingBox`]
//! - [`Error`] and the crate-wide [`Result`] alias
//! - [`Direction`] / [`Orientation`], the compass-letter frame helper
//! - Feature-code descriptors ([`code`]) parsed once at the API boundary
//! - Number formatting for exported coordinates ([`units`])

pub mod code;
pub mod direction;
pub mod error;
pub mod point;
pub mod units;

pub use code::{
    EdgeModifier, FlexCode, KerfSign, LevelPattern, LineCode, SlitCode, ToothCode, WaveCode,
    WavePhase,
};
pub use direction::{Direction, Orientation};
pub use error::{Error, Result};
pub use point::{BoundingBox, Kerf, Point};

/// Default number of samples per curved element (quarter corner, arc, period, circle).
pub const DEFAULT_RESOLUTION: usize = 16;

/// Default number of decimals for exported coordinates.
pub const DEFAULT_PRECISION: usize = 4;
