use kerfkit_camtools::{RectangleOptions, ToothOptions};
use kerfkit_core::Point;
use kerfkit_designer::Drawing;

fn assert_aligned(d: &Drawing) {
    assert_eq!(d.compensated().len(), d.nominal().len());
    for (c, n) in d.compensated().iter().zip(d.nominal()) {
        assert_eq!(c.is_break(), n.is_break());
    }
}

#[test]
fn test_tooth_corner_lands_on_square() {
    for kerf in [0.0, 0.1, -0.15, 0.5] {
        for protrude in [true, false] {
            let options = ToothOptions {
                steps: Some(2),
                protrude,
            };
            let mut d = Drawing::new();
            d.tooth("N-0-", 3.0, &[1.0], kerf, options)
                .unwrap()
                .tooth("E-0-", 3.0, &[1.0], kerf, options)
                .unwrap();
            assert_eq!(d.cursor(), Point::new(6.0, 6.0), "kerf {} protrude {}", kerf, protrude);
            assert_aligned(&d);
        }
    }
}

#[test]
fn test_close_duplicates_subpath_start() {
    let mut d = Drawing::new();
    d.line("N", 2.0, 0.1).unwrap().line("E", 3.0, 0.1).unwrap();
    let first_c = d.compensated()[0];
    let first_n = d.nominal()[0];
    let len = d.len();
    d.close();
    assert_eq!(d.len(), len + 1);
    assert_eq!(*d.compensated().last().unwrap(), first_c);
    assert_eq!(*d.nominal().last().unwrap(), first_n);
}

#[test]
fn test_cut_then_close_joins_only_new_stroke() {
    let mut d = Drawing::new();
    d.line("E", 5.0, 0.0).unwrap();
    d.cut();
    assert!(d.compensated()[2].is_break());
    assert_eq!(d.subpath_begin(), 3);

    d.move_to(0.0, 10.0);
    d.line("E", 2.0, 0.0).unwrap().line("N", 2.0, 0.0).unwrap();
    d.close();
    assert_eq!(*d.nominal().last().unwrap(), Point::new(0.0, 10.0));
    assert_aligned(&d);
}

#[test]
fn test_begin_moves_close_target() {
    let mut d = Drawing::new();
    d.line("E", 1.0, 0.0).unwrap();
    d.begin();
    d.line("N", 1.0, 0.0).unwrap();
    d.close();
    assert_eq!(*d.nominal().last().unwrap(), Point::new(1.0, 0.0));
}

#[test]
fn test_merge_copies_with_offset() {
    let mut part = Drawing::new();
    part.rectangle(2.0, 1.0, 0.0, RectangleOptions::default())
        .unwrap();

    let mut sheet = Drawing::new();
    sheet.line("E", 10.0, 0.0).unwrap();
    sheet.cut();
    let (cursor, pivot, begin) = (sheet.cursor(), sheet.pivot_state(), sheet.subpath_begin());

    sheet.merge(&part, None);
    sheet.merge(&part, Some(Point::new(0.0, 5.0)));

    assert_eq!(sheet.len(), 3 + 2 * part.len());
    assert_eq!(sheet.compensated()[3], Point::new(10.0, 0.0));
    assert_eq!(sheet.compensated()[8], Point::new(0.0, 5.0));
    // Host state is left as it was.
    assert_eq!(sheet.cursor(), cursor);
    assert_eq!(sheet.pivot_state(), pivot);
    assert_eq!(sheet.subpath_begin(), begin);
    // The source is copied, not shared.
    assert_eq!(part.len(), 5);
    assert_aligned(&sheet);
}

#[test]
fn test_clone_is_deep() {
    let mut a = Drawing::new();
    a.line("E", 1.0, 0.0).unwrap();
    let mut b = a.clone();
    b.line("N", 1.0, 0.0).unwrap();
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 4);
}

#[test]
fn test_box_panel_is_closed_and_aligned() {
    let options = ToothOptions::steps(5);
    let mut d = Drawing::new();
    d.tooth("Ng0101g", 6.0, &[3.0], 0.1, options)
        .unwrap()
        .tooth("Eg1010g", 6.0, &[3.0], 0.1, options)
        .unwrap()
        .tooth("Sg0101g", 6.0, &[3.0], 0.1, options)
        .unwrap()
        .tooth("Wg1010g", 6.0, &[3.0], 0.1, options)
        .unwrap();
    // Four edges of 5 x 6 plus two grown corners each bring the cursor home.
    let end = d.cursor();
    assert!(end.x.abs() < 1e-9 && end.y.abs() < 1e-9);
    d.close();
    assert_eq!(d.subpaths().len(), 1);
    assert_aligned(&d);
}
