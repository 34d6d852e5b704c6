//! SVG export
//!
//! Each stroke of the compensated path becomes one `<path>` element made of
//! absolute `M`/`L` commands. Coordinates are written as drawn (no y flip) and
//! the viewBox is the bounding box of the drawn points, grown to include the
//! optional container rectangle.

use crate::drawing::Drawing;
use kerfkit_core::units::{format_coord, format_length_mm, format_pair};
use kerfkit_core::{BoundingBox, Error, Result, DEFAULT_PRECISION};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{info, warn};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Styling and sizing of an exported document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Decimals per coordinate.
    pub precision: usize,
    pub stroke_color: String,
    /// Stroke width in drawing units.
    pub stroke_width: f64,
    /// Stock sheet size, drawn as a rectangle anchored at the origin.
    pub container: Option<(f64, f64)>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            stroke_color: "red".to_string(),
            stroke_width: 0.1,
            container: None,
        }
    }
}

impl ExportOptions {
    pub fn with_container(mut self, width: f64, height: f64) -> Self {
        self.container = Some((width, height));
        self
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Path data for one stroke, or `None` when it has fewer than two distinct points.
fn path_data(run: &[kerfkit_core::Point], precision: usize) -> Option<String> {
    let mut coords: Vec<String> = Vec::with_capacity(run.len());
    for p in run {
        let pair = format_pair(p.x, p.y, precision);
        if coords.last() != Some(&pair) {
            coords.push(pair);
        }
    }
    if coords.len() < 2 {
        return None;
    }
    let mut d = format!("M {}", coords[0]);
    for pair in &coords[1..] {
        d.push_str(" L ");
        d.push_str(pair);
    }
    Some(d)
}

/// Render the drawing as an SVG document.
pub fn to_svg_string(drawing: &Drawing, options: &ExportOptions) -> String {
    let precision = options.precision;
    let container = options.container.map(|(w, h)| BoundingBox {
        min_x: 0.0,
        min_y: 0.0,
        max_x: w,
        max_y: h,
    });
    let bounds = match (drawing.bounds(), container) {
        (Some(b), Some(c)) => Some(b.union(&c)),
        (b, c) => b.or(c),
    };
    let (min_x, min_y, width, height) = match bounds {
        Some(b) => (b.min_x, b.min_y, b.width(), b.height()),
        None => (0.0, 0.0, 0.0, 0.0),
    };

    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"{} {} {} {}\">\n",
        SVG_NS,
        format_length_mm(width, precision),
        format_length_mm(height, precision),
        format_coord(min_x, precision),
        format_coord(min_y, precision),
        format_coord(width, precision),
        format_coord(height, precision),
    ));
    svg.push_str(&format!(
        "<g fill=\"none\" stroke=\"{}\" stroke-width=\"{}\">\n",
        escape_attr(&options.stroke_color),
        format_coord(options.stroke_width, precision),
    ));

    if let Some((w, h)) = options.container {
        svg.push_str(&format!(
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\"/>\n",
            format_coord(w, precision),
            format_coord(h, precision),
        ));
    }

    for run in drawing.subpaths() {
        if let Some(d) = path_data(run, precision) {
            svg.push_str(&format!("<path d=\"{}\"/>\n", d));
        }
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}

/// Number of `<path>` elements [`to_svg_string`] emits for `drawing`.
pub fn path_count(drawing: &Drawing, precision: usize) -> usize {
    drawing
        .subpaths()
        .into_iter()
        .filter(|run| path_data(run, precision).is_some())
        .count()
}

/// Write the document next to `path` and move it into place once complete.
pub fn export(drawing: &Drawing, path: &Path, options: &ExportOptions) -> Result<()> {
    let paths = path_count(drawing, options.precision);
    if paths == 0 {
        warn!("exporting {} with no drawable subpath", path.display());
    }
    let svg = to_svg_string(drawing, options);

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staging = NamedTempFile::new_in(dir)?;
    staging.write_all(svg.as_bytes())?;
    staging.flush()?;
    staging.persist(path).map_err(|e| Error::Io(e.error))?;

    info!(
        "exported {} paths to {} (bounds {:?})",
        paths,
        path.display(),
        drawing.bounds()
    );
    Ok(())
}
