//! # KerfKit CAM Tools
//!
//! Pure feature generators. Each generator turns an orientation code, shape
//! parameters and a kerf into a point sequence relative to the cursor, once
//! with the kerf applied (the path sent to the cutter) and once without it
//! (the nominal reference path).
//!
//! ## Generators
//!
//! - **Tooth**: finger-joint edges with grown corners and kerf redistribution
//! - **Slit**: rows of rectangular slots that receive mating fingers
//! - **Wave**: sinusoidal edges offset along the true curve normal
//! - **Line**: straight edges, by compass code or by explicit vector
//! - **Rectangle**: sharp or rounded rectangles
//! - **Arc**: circular arcs solved from a chord and a sweep angle
//! - **Circle**: full circles, optionally at several centres
//! - **Flex**: living-hinge slit patterns
//!
//! "Shifting" generators (tooth, wave, line, arc) move the cursor to the end of
//! their nominal path; "static" ones (slit, rectangle, circle, flex) leave it.

pub mod arc;
pub mod circle;
pub mod feature;
pub mod flex;
pub mod line;
pub mod rectangle;
pub mod slit;
pub mod tooth;
pub mod wave;

pub use arc::{Arc, ArcOptions, ArcTo};
pub use circle::{Circle, CircleOptions};
pub use feature::{Feature, Motion, Pass};
pub use flex::Flex;
pub use line::{Line, LineVector};
pub use rectangle::{Rectangle, RectangleOptions};
pub use slit::Slit;
pub use tooth::{Heights, Tooth, ToothOptions};
pub use wave::{Wave, WaveOptions};
