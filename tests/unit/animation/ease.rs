use super::*;

const ALL: [Ease; 8] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::Smooth,
];

#[test]
fn every_curve_pins_its_endpoints() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?}");
        assert_eq!(ease.apply(-3.0), ease.apply(0.0));
        assert_eq!(ease.apply(7.0), ease.apply(1.0));
    }
}

#[test]
fn curves_are_monotonic() {
    for ease in ALL {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease.apply(i as f64 / 100.0);
            assert!(v + 1e-12 >= prev, "{ease:?} at {i}");
            prev = v;
        }
    }
}

#[test]
fn smooth_is_symmetric_and_default() {
    assert_eq!(Ease::default(), Ease::Smooth);
    assert!((Ease::Smooth.apply(0.5) - 0.5).abs() < 1e-12);
    let a = Ease::Smooth.apply(0.2);
    let b = Ease::Smooth.apply(0.8);
    assert!((a + b - 1.0).abs() < 1e-12);
    assert!(a < 0.2);
}
