//! # KerfKit
//!
//! Parametric, kerf-compensated 2D toolpaths for laser and CNC cutting.
//!
//! ## Architecture
//!
//! KerfKit is organized as a workspace with multiple crates:
//!
//! 1. **kerfkit-core** - Points, errors, compass orientation, feature codes
//! 2. **kerfkit-camtools** - Pure feature generators (tooth, slit, wave, line,
//!    rectangle, arc, circle, flex)
//! 3. **kerfkit-designer** - The drawing composer and SVG export
//! 4. **kerfkit-settings** - Generator defaults and export options on disk
//! 5. **kerfkit** - This facade
//!
//! ## Example
//!
//! ```rust,ignore
//! use kerfkit::{Drawing, ExportOptions, RectangleOptions};
//!
//! kerfkit::init_logging()?;
//! let mut drawing = Drawing::new();
//! drawing.rectangle(100.0, 60.0, 0.1, RectangleOptions::rounded(5.0))?;
//! drawing.export("plate.svg", &ExportOptions::default())?;
//! ```

pub use kerfkit_camtools as camtools;
pub use kerfkit_core as core;
pub use kerfkit_designer as designer;
pub use kerfkit_settings as settings;

pub use kerfkit_core::{
    BoundingBox, Direction, Error, Kerf, Orientation, Point, Result, DEFAULT_PRECISION,
    DEFAULT_RESOLUTION,
};

pub use kerfkit_camtools::{
    Arc, ArcOptions, ArcTo, Circle, CircleOptions, Feature, Flex, Heights, Line, LineVector,
    Motion, Pass, Rectangle, RectangleOptions, Slit, Tooth, ToothOptions, Wave, WaveOptions,
};

pub use kerfkit_designer::{to_svg_string, Drawing, ExportOptions, Pivot};

pub use kerfkit_settings::{Config, GeneratorDefaults, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output style of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable, multi-line records
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(LogFormat::Pretty)
}

/// Initialize logging to stdout in the given format.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging_with(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .with_level(true)
                .with_line_number(true)
                .pretty();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .json();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    Ok(())
}
