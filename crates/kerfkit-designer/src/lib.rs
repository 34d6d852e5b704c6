//! # KerfKit Designer
//!
//! Composes generator output into a multi-stroke drawing and exports it.
//!
//! ## Components
//!
//! - **Drawing**: two index-aligned paths (kerf-compensated and nominal), the
//!   cursor, the pivot used by retroactive rotation and the subpath start used
//!   by `close`
//! - **SVG export**: one `<path>` per stroke, sized from the bounding box and
//!   written atomically
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kerfkit_designer::{Drawing, ExportOptions};
//! use kerfkit_camtools::ToothOptions;
//!
//! let mut drawing = Drawing::new();
//! drawing
//!     .tooth("N-0-", 30.0, &[3.0], 0.1, ToothOptions::steps(5))?
//!     .tooth("E-1-", 30.0, &[3.0], 0.1, ToothOptions::steps(5))?;
//! drawing.close();
//! drawing.export("panel.svg", &ExportOptions::default())?;
//! ```

pub mod drawing;
pub mod svg;

pub use drawing::{Drawing, Pivot};
pub use svg::{to_svg_string, ExportOptions};
