use super::*;

#[test]
fn midpoint_disables_symmetric_jitter() {
    let p = Point::new(1.0, 2.0);
    assert_eq!(jitter_point(&mut Midpoint, p, 0.02), p);
}

#[test]
fn seeded_sources_repeat() {
    let mut a = Seeded::new(7);
    let mut b = Seeded::new(7);
    for _ in 0..32 {
        assert_eq!(a.uniform(-1.0, 1.0), b.uniform(-1.0, 1.0));
    }
}

#[test]
fn jitter_stays_within_epsilon() {
    let mut src = Seeded::new(99);
    for _ in 0..256 {
        let v = jitter_offset(&mut src, 0.02);
        assert!(v.x.abs() <= 0.02 && v.y.abs() <= 0.02);
    }
}

#[test]
fn degenerate_ranges_do_not_panic() {
    let mut src = Seeded::new(1);
    assert_eq!(src.uniform(0.5, 0.5), 0.5);
    let v = src.uniform(1.0, -1.0);
    assert!((-1.0..=1.0).contains(&v));
    assert_eq!(jitter_offset(&mut src, 0.0), Vec2::ZERO);
}
