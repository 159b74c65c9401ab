use super::*;
use crate::{foundation::color::Color, shapes::primitive::Style};

fn bar() -> ShapeGroup {
    ShapeGroup::new("bar").with(Primitive::line(
        "shaft",
        Point::new(-1.0, 0.0),
        Point::new(1.0, 0.0),
        Style::stroke(Color::BLACK, 2.0),
    ))
}

#[test]
fn move_to_recenters_on_target() {
    let mut g = bar();
    g.move_to(Point::new(3.0, -2.0));
    assert_eq!(g.center(), Point::new(3.0, -2.0));
}

#[test]
fn anchors_follow_transforms() {
    let mut g = bar();
    g.set_anchor("tip", Point::new(1.0, 0.0));
    g.rotate_about(std::f64::consts::FRAC_PI_2, Point::ORIGIN);
    let tip = g.anchor("tip").unwrap();
    assert!(tip.x.abs() < 1e-12);
    assert!((tip.y - 1.0).abs() < 1e-12);
}

#[test]
fn edge_helpers_fall_back_to_drawn_bounds() {
    let g = bar();
    assert_eq!(g.left(), Point::new(-1.0, 0.0));
    assert_eq!(g.right(), Point::new(1.0, 0.0));
    assert_eq!(g.top(), Point::new(0.0, 0.0));
}

#[test]
fn frozen_bounds_ignore_later_geometry_edits() {
    let mut g = bar();
    g.freeze_bounds();
    if let crate::shapes::primitive::Geometry::Line { to, .. } = &mut g.primitives[0].geometry {
        *to = Point::new(5.0, 0.0);
    }
    assert_eq!(g.right(), Point::new(1.0, 0.0));
}

#[test]
fn scale_about_center_keeps_center() {
    let mut g = bar();
    g.shift(Vec2::new(2.0, 0.0));
    let c = g.center();
    g.scale_about(1.2, c);
    assert!((g.center() - c).hypot() < 1e-9);
    assert!((g.width() - 2.4).abs() < 1e-9);
}

#[test]
fn empty_group_has_origin_bounds() {
    let g = ShapeGroup::new("empty");
    assert!(g.is_empty());
    assert_eq!(g.center(), Point::ORIGIN);
}
