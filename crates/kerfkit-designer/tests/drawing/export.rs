use kerfkit_camtools::{CircleOptions, RectangleOptions};
use kerfkit_core::{Error, Point};
use kerfkit_designer::{to_svg_string, Drawing, ExportOptions};
use std::fs;
use tempfile::TempDir;

fn path_elements(svg: &str) -> Vec<&str> {
    svg.lines().filter(|l| l.starts_with("<path")).collect()
}

#[test]
fn test_rectangle_close_export() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("rect.svg");

    let mut d = Drawing::new();
    d.rectangle(10.0, 5.0, 0.0, RectangleOptions::default())
        .unwrap();
    d.close();
    assert_eq!(d.len(), 6);
    assert_eq!(*d.compensated().last().unwrap(), Point::new(0.0, 0.0));

    d.export(&file, &ExportOptions::default()).unwrap();
    let svg = fs::read_to_string(&file).unwrap();

    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains("viewBox=\"0 0 10 5\""));
    assert!(svg.contains("width=\"10mm\" height=\"5mm\""));

    let paths = path_elements(&svg);
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0], "<path d=\"M 0,0 L 10,0 L 10,5 L 0,5 L 0,0\"/>");
    let commands = paths[0].matches('M').count() + paths[0].matches('L').count();
    assert_eq!(commands, 5);
}

#[test]
fn test_one_path_per_stroke() {
    let mut d = Drawing::new();
    d.line("E", 10.0, 0.0).unwrap();
    d.cut();
    d.circle(
        1.0,
        0.0,
        CircleOptions::at([Point::new(2.0, 2.0), Point::new(6.0, 2.0)]),
    )
    .unwrap();
    let svg = to_svg_string(&d, &ExportOptions::default());
    assert_eq!(path_elements(&svg).len(), 3);
}

#[test]
fn test_bounds_follow_compensated_path() {
    let mut d = Drawing::new();
    d.rectangle(4.0, 2.0, 0.5, RectangleOptions::default())
        .unwrap();
    let svg = to_svg_string(&d, &ExportOptions::default());
    assert!(svg.contains("viewBox=\"-0.5 -0.5 5 3\""));
}

#[test]
fn test_export_replaces_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("out.svg");
    fs::write(&file, "stale").unwrap();

    let mut d = Drawing::new();
    d.line("N", 3.0, 0.0).unwrap();
    d.export(&file, &ExportOptions::default()).unwrap();

    let svg = fs::read_to_string(&file).unwrap();
    assert!(svg.ends_with("</svg>\n"));
    // Only the final document is left in the directory.
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
}

#[test]
fn test_export_to_missing_directory_fails_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("missing").join("out.svg");

    let mut d = Drawing::new();
    d.line("E", 1.0, 0.0).unwrap();
    let result = d.export(&file, &ExportOptions::default());
    assert!(matches!(result, Err(Error::Io(_))));
    assert!(!file.exists());
}

#[test]
fn test_empty_drawing_exports_empty_document() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("empty.svg");
    Drawing::new()
        .export(&file, &ExportOptions::default())
        .unwrap();
    let svg = fs::read_to_string(&file).unwrap();
    assert!(svg.contains("viewBox=\"0 0 0 0\""));
    assert!(path_elements(&svg).is_empty());
}
