//! Weapons and scene dressing.

use std::f64::consts::PI;

use crate::{
    foundation::color::Color,
    foundation::core::{DOWN, Point, RIGHT, UP, Vec2, degrees},
    foundation::error::SketchResult,
    shapes::group::ShapeGroup,
    shapes::jitter::{RandomSource, jitter_point},
    shapes::primitive::{Geometry, Primitive, Style},
    shapes::text::{TextMeasure, TextStyle, text_primitive},
};

pub const LIGHT_STICK_COLOR: Color = Color::rgb(0x00, 0xff, 0xff);
pub const LIGHT_STICK_WIGGLE: f64 = 0.01;
pub const SUCTION_SHAFT_COLOR: Color = Color::rgb(0xff, 0xa5, 0x00);
pub const SUCTION_CUP_COLOR: Color = Color::rgb(0xff, 0x44, 0x44);
pub const GROUND_COLOR: Color = Color::rgb(0x88, 0x88, 0x88);
pub const UNDERLINE_WIGGLE: f64 = 0.02;

/// Anchor at the business end of an arrow.
pub const TIP: &str = "tip";

/// Glowing stick held upright beside `owner`.
pub fn light_stick(owner: &ShapeGroup, jitter: &mut dyn RandomSource) -> ShapeGroup {
    let c = owner.center();
    let from = c + RIGHT * 0.3 + UP * 0.5;
    let to = c + RIGHT * 0.3 + UP * 1.3;
    let mut g = ShapeGroup::new("light_stick").with(Primitive::line(
        "blade",
        jitter_point(jitter, from, LIGHT_STICK_WIGGLE),
        jitter_point(jitter, to, LIGHT_STICK_WIGGLE),
        Style::stroke(LIGHT_STICK_COLOR, 12.0),
    ));
    g.set_anchor("hilt", from);
    g
}

/// Comic arrow pointing right, built around the origin; callers `move_to` it.
pub fn arrow(color: Color) -> ShapeGroup {
    let mut g = ShapeGroup::new("arrow")
        .with(Primitive::line(
            "shaft",
            Point::new(-0.2, 0.0),
            Point::new(0.6, 0.0),
            Style::stroke(color, 4.0),
        ))
        .with(Primitive::new(
            "tip",
            Geometry::Polygon {
                points: vec![
                    Point::new(0.6, 0.05),
                    Point::new(0.7, 0.0),
                    Point::new(0.6, -0.05),
                ],
            },
            Style::stroke(color, 4.0).filled(color, 1.0),
        ));
    g.set_anchor(TIP, Point::new(0.7, 0.0));
    g
}

/// Arrow with a rubber suction cup where the point should be.
///
/// Same shaft as [`arrow`], only the tip geometry differs: a half-circle cup opening to the right.
pub fn suction_arrow() -> ShapeGroup {
    let cup_radius = 0.2;
    // The cup's bounding box is centered on the shaft end, so the arc center sits one half-radius
    // behind it.
    let cup_center = Point::new(0.5 - cup_radius * 0.5, 0.0);
    let mut g = ShapeGroup::new("suction_arrow")
        .with(Primitive::line(
            "shaft",
            Point::new(-0.2, 0.0),
            Point::new(0.5, 0.0),
            Style::stroke(SUCTION_SHAFT_COLOR, 4.0),
        ))
        .with(Primitive::new(
            "cup",
            Geometry::Arc {
                center: cup_center,
                radius: cup_radius,
                start_angle: degrees(-90.0),
                sweep_angle: PI,
                wobble: Vec::new(),
            },
            Style::stroke(SUCTION_CUP_COLOR, 6.0),
        ));
    g.set_anchor(TIP, Point::new(0.5 + cup_radius * 0.5, 0.0));
    g
}

/// Bow held at `grip`: a limb arc bulging toward -x with a straight string.
pub fn bow(color: Color, grip: Point) -> ShapeGroup {
    let radius = 0.5;
    let half_sweep = degrees(70.0);
    let center = grip + RIGHT * radius;
    let start = PI - half_sweep;
    let sweep = 2.0 * half_sweep;
    let end_a = center + Vec2::from_angle(start) * radius;
    let end_b = center + Vec2::from_angle(start + sweep) * radius;

    let mut g = ShapeGroup::new("bow")
        .with(Primitive::new(
            "limb",
            Geometry::Arc {
                center,
                radius,
                start_angle: start,
                sweep_angle: sweep,
                wobble: Vec::new(),
            },
            Style::stroke(color, 5.0),
        ))
        .with(Primitive::line(
            "string",
            end_a,
            end_b,
            Style::stroke(color, 1.5),
        ));
    g.set_anchor("grip", grip);
    g
}

/// Horizontal ground line across the whole frame.
pub fn ground() -> ShapeGroup {
    let y = DOWN * 1.8;
    ShapeGroup::new("ground").with(Primitive::line(
        "line",
        Point::new(-7.0, 0.0) + y,
        Point::new(7.0, 0.0) + y,
        Style::stroke(GROUND_COLOR, 3.0),
    ))
}

/// Two raised fingers, centered on `at`.
pub fn peace_sign(color: Color, at: Point) -> ShapeGroup {
    let finger = |x: f64| {
        Primitive::line(
            "finger",
            Point::new(x, 0.3),
            Point::new(x, 0.6),
            Style::stroke(color, 4.0),
        )
    };
    let mut g = ShapeGroup::new("peace_sign")
        .with(finger(0.2))
        .with(finger(0.4));
    g.move_to(at);
    g
}

/// Portrait phone outline for the selfie frame.
pub fn phone_frame() -> ShapeGroup {
    ShapeGroup::new("phone").with(Primitive::new(
        "frame",
        Geometry::RoundedRect {
            center: Point::ORIGIN,
            width: 3.0,
            height: 6.0,
            corner_radius: 0.3,
            rotation: 0.0,
        },
        Style::stroke(Color::rgb(0x33, 0x33, 0x33), 6.0),
    ))
}

/// Bold centered title with a sketchy underline 0.3 below it.
pub fn title_card(
    text: &str,
    color: Color,
    underline: Color,
    measure: &mut dyn TextMeasure,
    jitter: &mut dyn RandomSource,
) -> SketchResult<ShapeGroup> {
    let style = TextStyle::new(48.0).bold();
    let title = text_primitive("title", text, color, Point::ORIGIN, &style, measure)?;
    let b = title.bounding_box();
    let left = Point::new(b.x0, b.center().y) + DOWN * 0.3;
    let right = Point::new(b.x1, b.center().y) + DOWN * 0.3;
    let line = Primitive::line(
        "underline",
        wiggle_x(left, jitter),
        wiggle_x(right, jitter),
        Style::stroke(underline, 8.0),
    );
    Ok(ShapeGroup::new("title_card").with(title).with(line))
}

fn wiggle_x(p: Point, jitter: &mut dyn RandomSource) -> Point {
    p + Vec2::new(jitter.uniform(-UNDERLINE_WIGGLE, UNDERLINE_WIGGLE), 0.0)
}

/// Small gray caption placed `buff` below `above`.
pub fn caption(
    text: &str,
    above: &ShapeGroup,
    buff: f64,
    measure: &mut dyn TextMeasure,
) -> SketchResult<ShapeGroup> {
    let style = TextStyle::new(20.0);
    let size = measure.measure(text, &style)?;
    let center = above.bottom() + DOWN * (buff + size.height * 0.5);
    let prim = text_primitive(
        "caption",
        text,
        Color::rgb(0x66, 0x66, 0x66),
        center,
        &style,
        measure,
    )?;
    Ok(ShapeGroup::new("caption").with(prim))
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/props.rs"]
mod tests;
