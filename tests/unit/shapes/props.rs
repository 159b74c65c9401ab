use super::*;
use crate::{
    foundation::core::Rect,
    shapes::{
        jitter::{Midpoint, Seeded},
        text::ApproxTextMeasure,
    },
};

fn owner_at(center: Point) -> ShapeGroup {
    let mut g = ShapeGroup::new("owner");
    g.set_anchor("center", center);
    g
}

#[test]
fn light_stick_hangs_off_owner_center() {
    let stick = light_stick(&owner_at(Point::new(-3.5, 0.0)), &mut Midpoint);
    match &stick.primitives[0].geometry {
        Geometry::Line { from, to } => {
            assert!((*from - Point::new(-3.2, 0.5)).hypot() < 1e-12);
            assert!((to.y - 1.3).abs() < 1e-12);
        }
        other => panic!("unexpected geometry {other:?}"),
    }
    assert_eq!(stick.primitives[0].color(), LIGHT_STICK_COLOR);
    assert_eq!(stick.primitives[0].style.stroke_width, 12.0);
}

#[test]
fn suction_arrow_differs_only_in_tip() {
    let plain = arrow(SUCTION_SHAFT_COLOR);
    let suction = suction_arrow();
    assert_eq!(plain.len(), 2);
    assert_eq!(suction.len(), 2);
    assert!(matches!(plain.primitives[1].geometry, Geometry::Polygon { .. }));
    assert!(matches!(suction.primitives[1].geometry, Geometry::Arc { .. }));
    assert_eq!(suction.primitives[1].color(), SUCTION_CUP_COLOR);
}

#[test]
fn suction_cup_is_centered_on_shaft_end() {
    let cup = suction_arrow().primitive("cup").unwrap().bounding_box();
    assert!((cup.center().x - 0.5).abs() < 1e-9);
    assert!(cup.center().y.abs() < 1e-9);
    assert!((cup.height() - 0.4).abs() < 1e-9);
    assert!((cup.width() - 0.2).abs() < 1e-9);
}

#[test]
fn moving_an_arrow_carries_its_tip_anchor() {
    let mut a = arrow(Color::BLACK);
    let before = a.anchor(TIP).unwrap() - a.center();
    a.move_to(Point::new(2.0, 1.0));
    let after = a.anchor(TIP).unwrap() - a.center();
    assert!((before - after).hypot() < 1e-12);
}

#[test]
fn bow_limb_bulges_through_the_grip() {
    let grip = Point::new(1.0, 0.0);
    let b = bow(Color::BLACK, grip);
    let limb = b.primitive("limb").unwrap().bounding_box();
    assert!((limb.x0 - grip.x).abs() < 1e-9);
    assert_eq!(b.anchor("grip"), Some(grip));
}

#[test]
fn ground_spans_the_frame_below_the_figures() {
    let g = ground();
    let b: Rect = g.bounding_box().unwrap();
    assert_eq!((b.x0, b.x1), (-7.0, 7.0));
    assert_eq!(b.y0, -1.8);
}

#[test]
fn peace_sign_is_moved_onto_target() {
    let p = peace_sign(Color::BLACK, Point::new(0.5, -0.3));
    assert_eq!(p.len(), 2);
    assert!((p.center() - Point::new(0.5, -0.3)).hypot() < 1e-12);
}

#[test]
fn title_underline_sits_below_title() {
    let card = title_card(
        "NEW AESTHETIC UNLOCKED",
        Color::BLACK,
        Color::WHITE,
        &mut ApproxTextMeasure::default(),
        &mut Midpoint,
    )
    .unwrap();
    let title = card.primitive("title").unwrap().bounding_box();
    match &card.primitive("underline").unwrap().geometry {
        Geometry::Line { from, to } => {
            assert!((from.y - (title.center().y - 0.3)).abs() < 1e-12);
            assert!((from.x - title.x0).abs() < 1e-12);
            assert!((to.x - title.x1).abs() < 1e-12);
        }
        other => panic!("unexpected geometry {other:?}"),
    }
}

#[test]
fn underline_wiggle_is_bounded_and_fixed_at_build_time() {
    let build = |seed| {
        title_card(
            "A NEW CHALLENGER",
            Color::BLACK,
            Color::WHITE,
            &mut ApproxTextMeasure::default(),
            &mut Seeded::new(seed),
        )
        .unwrap()
    };
    for seed in 0..32 {
        let card = build(seed);
        let title = card.primitive("title").unwrap().bounding_box();
        let Geometry::Line { from, to } = card.primitive("underline").unwrap().geometry else {
            panic!("underline is not a line");
        };
        let y = title.center().y - 0.3;
        assert!((from.y - y).abs() < 1e-12 && (to.y - y).abs() < 1e-12);
        assert!((from.x - title.x0).abs() <= UNDERLINE_WIGGLE + 1e-12, "seed {seed}");
        assert!((to.x - title.x1).abs() <= UNDERLINE_WIGGLE + 1e-12, "seed {seed}");
        assert_eq!(build(seed).primitive("underline"), card.primitive("underline"));
    }
}

#[test]
fn caption_hangs_below_reference() {
    let phone = phone_frame();
    let cap = caption("#newaesthetic #worthit", &phone, 0.3, &mut ApproxTextMeasure::default())
        .unwrap();
    let top = cap.bounding_box().unwrap().y1;
    assert!((top - (phone.bottom().y - 0.3)).abs() < 1e-9);
}
