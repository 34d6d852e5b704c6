//! Number formatting for exported geometry
//!
//! Coordinates are written with a fixed number of decimals and then trimmed,
//! so integral values come out as `10` rather than `10.0000`.

/// Length unit suffix used by the exported document
pub const MM_SUFFIX: &str = "mm";

/// Format a coordinate with at most `precision` decimals.
///
/// Trailing zeros and a dangling decimal point are removed, and negative zero
/// is written as `0`.
pub fn format_coord(value: f64, precision: usize) -> String {
    let mut text = format!("{:.*}", precision, value);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

/// Format a point as `x,y`.
pub fn format_pair(x: f64, y: f64, precision: usize) -> String {
    format!("{},{}", format_coord(x, precision), format_coord(y, precision))
}

/// Format a length with the millimetre suffix, e.g. `12.5mm`.
pub fn format_length_mm(value: f64, precision: usize) -> String {
    format!("{}{}", format_coord(value, precision), MM_SUFFIX)
}
