use kerfkit_camtools::ToothOptions;
use kerfkit_core::Point;
use kerfkit_designer::Drawing;
use proptest::prelude::*;

fn near(a: Point, b: Point) -> bool {
    a.distance(&b) < 1e-9
}

#[test]
fn test_rotate_about_pivot() {
    let mut d = Drawing::new();
    d.line("E", 4.0, 0.0).unwrap();
    d.pivot();
    d.line("E", 2.0, 0.0).unwrap();
    d.rotate(90.0);

    // Points before the pivot index are untouched.
    assert_eq!(d.nominal()[0], Point::new(0.0, 0.0));
    assert_eq!(d.nominal()[1], Point::new(4.0, 0.0));
    assert!(near(d.nominal()[2], Point::new(4.0, 0.0)));
    assert!(near(d.nominal()[3], Point::new(4.0, 2.0)));
    // The cursor stays where the last feature left it.
    assert_eq!(d.cursor(), Point::new(6.0, 0.0));
}

#[test]
fn test_pivot_at_explicit_point() {
    let mut d = Drawing::new();
    d.pivot_at(1.0, 1.0);
    d.line("E", 2.0, 0.0).unwrap();
    d.rotate(180.0);
    assert!(near(d.nominal()[0], Point::new(2.0, 2.0)));
    assert!(near(d.nominal()[1], Point::new(0.0, 2.0)));
}

#[test]
fn test_rotate_keeps_breaks_in_place() {
    let mut d = Drawing::new();
    d.line("E", 1.0, 0.1).unwrap().cut().line("N", 1.0, 0.1).unwrap();
    d.rotate(30.0);
    assert!(d.compensated()[2].is_break());
    assert!(d.nominal()[2].is_break());
}

#[test]
fn test_later_features_are_not_rotated() {
    let mut d = Drawing::new();
    d.pivot();
    d.line("E", 1.0, 0.0).unwrap();
    d.rotate(90.0);
    d.move_to(0.0, 0.0);
    d.line("E", 1.0, 0.0).unwrap();
    assert_eq!(d.nominal()[3], Point::new(1.0, 0.0));
}

proptest! {
    #[test]
    fn prop_rotate_leaves_prefix_bit_identical(
        degrees in -360.0f64..360.0,
        kerf in -0.5f64..0.5,
        px in -10.0f64..10.0,
        py in -10.0f64..10.0,
    ) {
        let mut d = Drawing::new();
        d.tooth("N-0-", 3.0, &[1.0], kerf, ToothOptions::steps(3)).unwrap();
        let prefix_c = d.compensated().to_vec();
        let prefix_n = d.nominal().to_vec();
        d.pivot_at(px, py);
        d.tooth("E-1-", 3.0, &[1.0], kerf, ToothOptions::steps(3)).unwrap();
        let before = d.compensated().to_vec();
        d.rotate(degrees);

        for (i, p) in prefix_c.iter().enumerate() {
            prop_assert!(p.same(&d.compensated()[i]));
            prop_assert!(prefix_n[i].same(&d.nominal()[i]));
        }
        let pivot = Point::new(px, py);
        for i in prefix_c.len()..d.len() {
            let expected = before[i].rotated_about(pivot, degrees);
            prop_assert!(expected.same(&d.compensated()[i]));
        }
    }
}
