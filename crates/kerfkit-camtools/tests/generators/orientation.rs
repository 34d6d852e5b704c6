use kerfkit_camtools::{Feature, Line, Pass, Tooth, ToothOptions, Wave, WaveOptions};
use kerfkit_core::{Direction, Point};

/// Coordinates along and across the travel axis.
fn split(p: &Point, direction: Direction) -> (f64, f64) {
    let t = direction.travel();
    (p.x * t.x + p.y * t.y, p.y * t.x - p.x * t.y)
}

fn assert_reflected(upper: &dyn Feature, lower: &dyn Feature, direction: Direction) {
    let a = upper.trace(Pass::Compensated).unwrap();
    let b = lower.trace(Pass::Compensated).unwrap();
    assert_eq!(a.len(), b.len());
    for (p, q) in a.iter().zip(&b) {
        if p.is_break() {
            assert!(q.is_break());
            continue;
        }
        let (along_p, side_p) = split(p, direction);
        let (along_q, side_q) = split(q, direction);
        assert_eq!(along_p, along_q);
        assert_eq!(side_p, -side_q);
    }
}

const ALL: [(char, Direction); 4] = [
    ('N', Direction::North),
    ('E', Direction::East),
    ('S', Direction::South),
    ('W', Direction::West),
];

#[test]
fn test_line_mirror_law() {
    for (letter, direction) in ALL {
        let upper = Line::new(&format!("{}+-", letter), 9.0, 0.4).unwrap();
        let lower = Line::new(&format!("{}+-", letter.to_ascii_lowercase()), 9.0, 0.4).unwrap();
        assert_reflected(&upper, &lower, direction);
    }
}

#[test]
fn test_tooth_mirror_law() {
    for (letter, direction) in ALL {
        let upper = Tooth::new(&format!("{}g1o", letter), 2.0, &[1.0], 0.1, ToothOptions::steps(3))
            .unwrap();
        let lower = Tooth::new(
            &format!("{}g1o", letter.to_ascii_lowercase()),
            2.0,
            &[1.0],
            0.1,
            ToothOptions::steps(3),
        )
        .unwrap();
        assert_reflected(&upper, &lower, direction);
    }
}

#[test]
fn test_wave_mirror_law() {
    let upper = Wave::new("Sr", 2, 6.0, 2.0, 0.2, WaveOptions::default()).unwrap();
    let lower = Wave::new("sr", 2, 6.0, 2.0, 0.2, WaveOptions::default()).unwrap();
    let a = upper.trace(Pass::Compensated).unwrap();
    let b = lower.trace(Pass::Compensated).unwrap();
    for (p, q) in a.iter().zip(&b) {
        let (along_p, side_p) = split(p, Direction::South);
        let (along_q, side_q) = split(q, Direction::South);
        assert!((along_p - along_q).abs() < 1e-12);
        assert!((side_p + side_q).abs() < 1e-12);
    }
}

#[test]
fn test_travel_directions() {
    for (letter, direction) in ALL {
        let line = Line::new(&letter.to_string(), 5.0, 0.0).unwrap();
        let end = line.trace(Pass::Nominal).unwrap()[1];
        let t = direction.travel();
        assert_eq!(end, Point::new(5.0 * t.x, 5.0 * t.y));
    }
}
