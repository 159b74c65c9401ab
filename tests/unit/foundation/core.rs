use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn fps_rounds_to_nearest_boundary() {
    let fps = Fps::new(16, 1).unwrap();
    assert_eq!(fps.secs_to_frames_round(0.5), 8);
    assert_eq!(fps.secs_to_frames_round(0.05), 1);
    assert_eq!(fps.secs_to_frames_round(0.02), 0);
    assert!((fps.frames_to_secs(16) - 1.0).abs() < 1e-12);
}

#[test]
fn fps_rejects_zero() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(16, 0).is_err());
}

#[test]
fn affine_parts_recovers_scale_and_rotation() {
    let a = Affine::rotate(degrees(90.0)) * Affine::scale(2.0);
    let (scale, rot) = affine_parts(a);
    assert!((scale - 2.0).abs() < 1e-9);
    assert!((rot - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
}
