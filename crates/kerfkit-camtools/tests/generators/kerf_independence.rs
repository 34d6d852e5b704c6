use kerfkit_camtools::{
    Arc, ArcOptions, Circle, CircleOptions, Feature, Flex, Line, LineVector, Pass, Rectangle,
    RectangleOptions, Slit, Tooth, ToothOptions, Wave, WaveOptions,
};
use kerfkit_core::{Kerf, Point};
use proptest::prelude::*;

fn last_drawn(points: &[Point]) -> Point {
    *points.iter().rev().find(|p| !p.is_break()).unwrap()
}

fn assert_identical(feature: &dyn Feature) {
    let compensated = feature.trace(Pass::Compensated).unwrap();
    let nominal = feature.trace(Pass::Nominal).unwrap();
    assert_eq!(compensated.len(), nominal.len(), "{}", feature.name());
    for (i, (a, b)) in compensated.iter().zip(&nominal).enumerate() {
        assert!(a.same(b), "{} differs at {}: {:?} vs {:?}", feature.name(), i, a, b);
    }
}

fn assert_aligned(feature: &dyn Feature) {
    let compensated = feature.trace(Pass::Compensated).unwrap();
    let nominal = feature.trace(Pass::Nominal).unwrap();
    assert_eq!(compensated.len(), nominal.len(), "{}", feature.name());
    for (a, b) in compensated.iter().zip(&nominal) {
        assert_eq!(a.is_break(), b.is_break(), "{}", feature.name());
    }
}

#[test]
fn test_zero_kerf_gives_nominal_for_every_generator() {
    let features: Vec<Box<dyn Feature>> = vec![
        Box::new(Tooth::new("Ng0110o+-", 3.0, &[2.0, 1.0, 2.0], 0.0, ToothOptions::steps(6)).unwrap()),
        Box::new(Tooth::new("e-1-", 5.0, &[1.0], 0.0, ToothOptions::default().notched()).unwrap()),
        Box::new(Slit::new("S1", 5, 3.0, 1.0, 0.0).unwrap()),
        Box::new(Wave::new("Wt", 3, 10.0, 2.0, 0.0, WaveOptions::default()).unwrap()),
        Box::new(Line::new("s-+", 12.0, 0.0).unwrap()),
        Box::new(LineVector::new(3.0, -7.0, Kerf::ZERO).unwrap()),
        Box::new(Rectangle::new(10.0, 5.0, Kerf::ZERO, RectangleOptions::default()).unwrap()),
        Box::new(Rectangle::new(-10.0, 5.0, Kerf::ZERO, RectangleOptions::rounded(2.0)).unwrap()),
        Box::new(Arc::new("E", 10.0, 135.0, 0.0, ArcOptions::default()).unwrap()),
        Box::new(Arc::to(-4.0, 2.0, -200.0, 0.0, ArcOptions::default()).unwrap()),
        Box::new(Circle::new(3.0, 0.0, CircleOptions::at([Point::new(1.0, 1.0), Point::new(9.0, 1.0)])).unwrap()),
        Box::new(Flex::new("N0", 30.0, 10.0, 6, 3.0).unwrap()),
    ];
    for feature in &features {
        assert_identical(feature.as_ref());
    }
}

#[test]
fn test_passes_stay_index_aligned_under_kerf() {
    let features: Vec<Box<dyn Feature>> = vec![
        Box::new(Tooth::new("Wo0101g", 3.0, &[1.5], 0.2, ToothOptions::steps(5)).unwrap()),
        Box::new(Slit::new("e0", 4, 3.0, 1.0, -0.1).unwrap()),
        Box::new(Wave::new("Nr", 2, 10.0, 2.0, 0.3, WaveOptions::default()).unwrap()),
        Box::new(Rectangle::new(10.0, 5.0, Kerf::new(0.1, 0.4), RectangleOptions::rounded(1.0)).unwrap()),
        Box::new(Arc::new("S", 6.0, 90.0, -0.2, ArcOptions { resolution: 5 }).unwrap()),
        Box::new(Circle::new(3.0, 0.15, CircleOptions::default()).unwrap()),
    ];
    for feature in &features {
        assert_aligned(feature.as_ref());
    }
}

fn tooth_code() -> impl Strategy<Value = String> {
    let direction = prop::sample::select(vec!['N', 'E', 'S', 'W', 'n', 'e', 's', 'w']);
    let edge = prop::sample::select(vec!['-', 'g', 'o']);
    let bits = prop::collection::vec(prop::sample::select(vec!['0', '1']), 4);
    let signs = prop::option::of((
        prop::sample::select(vec!['+', '-']),
        prop::sample::select(vec!['+', '-']),
    ));
    (direction, edge.clone(), bits, edge, signs).prop_map(|(d, l, b, r, s)| {
        let mut code = format!("{}{}{}{}", d, l, b.iter().collect::<String>(), r);
        if let Some((a, z)) = s {
            code.push(a);
            code.push(z);
        }
        code
    })
}

proptest! {
    #[test]
    fn prop_tooth_nominal_end_ignores_kerf(
        code in tooth_code(),
        steps in 1usize..9,
        width in 0.5f64..20.0,
        left in 0.5f64..5.0,
        center in 0.5f64..5.0,
        right in 0.5f64..5.0,
        kerf in -1.0f64..1.0,
        protrude in any::<bool>(),
    ) {
        let options = ToothOptions { steps: Some(steps), protrude };
        let tooth = Tooth::new(&code, width, &[left, center, right], kerf, options).unwrap();
        let nominal = tooth.trace(Pass::Nominal).unwrap();
        let compensated = tooth.trace(Pass::Compensated).unwrap();
        prop_assert_eq!(nominal.len(), compensated.len());

        let mut expected = steps as f64 * width;
        if code.as_bytes()[1] != b'-' {
            expected += left;
        }
        if code.as_bytes()[6] != b'-' {
            expected += right;
        }
        let end = last_drawn(&nominal);
        let travel = tooth.code().orientation.direction.travel();
        prop_assert!((end.x - expected * travel.x).abs() < 1e-9);
        prop_assert!((end.y - expected * travel.y).abs() < 1e-9);
    }

    #[test]
    fn prop_wave_offset_is_parallel(
        periods in 1usize..4,
        width in 1.0f64..20.0,
        height in 0.0f64..10.0,
        kerf in -0.5f64..0.5,
    ) {
        let wave = Wave::new("Ec", periods, width, height, kerf, WaveOptions::default()).unwrap();
        let nominal = wave.trace(Pass::Nominal).unwrap();
        let compensated = wave.trace(Pass::Compensated).unwrap();
        for (n, c) in nominal.iter().zip(&compensated) {
            prop_assert!((n.distance(c) - kerf.abs()).abs() < 1e-9);
        }
    }
}
