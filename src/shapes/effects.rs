//! Comic effect marks: impact bursts, speed lines, dust.

use crate::{
    foundation::color::Color,
    foundation::core::{Point, Vec2, degrees},
    shapes::group::ShapeGroup,
    shapes::jitter::RandomSource,
    shapes::primitive::{Geometry, Primitive, Style},
};

pub const IMPACT_COLOR: Color = Color::rgb(0xff, 0xaa, 0x00);
pub const IMPACT_RAYS: usize = 8;
pub const IMPACT_LENGTH: f64 = 0.2;
pub const MOTION_LINE_COLOR: Color = Color::rgb(0xcc, 0xcc, 0xcc);
pub const MOTION_LINES: usize = 5;
pub const DUST_COLOR: Color = Color::rgb(0xaa, 0xaa, 0xaa);
pub const DUST_SPECKS: usize = 10;

/// Eight rays, 45 degrees apart, radiating from `position`.
pub fn impact(position: Point) -> ShapeGroup {
    let style = Style::stroke(IMPACT_COLOR, 3.0);
    let mut g = ShapeGroup::new("impact");
    for i in 0..IMPACT_RAYS {
        let dir = Vec2::from_angle(degrees(45.0 * i as f64));
        g.push(Primitive::line(
            format!("ray_{i}"),
            position,
            position + dir * IMPACT_LENGTH,
            style.clone(),
        ));
    }
    g
}

/// Speed lines trailing `owner` while it travels along `direction`.
///
/// Line `i` starts `0.1 * i` behind the trailing edge and is `0.3` long.
pub fn motion_lines(owner: &ShapeGroup, direction: Vec2) -> ShapeGroup {
    let back = if direction.x < 0.0 {
        Vec2::new(1.0, 0.0)
    } else {
        Vec2::new(-1.0, 0.0)
    };
    let edge = if direction.x < 0.0 {
        owner.right()
    } else {
        owner.left()
    };
    let style = Style::stroke(MOTION_LINE_COLOR, 2.0);
    let mut g = ShapeGroup::new("motion_lines");
    for i in 0..MOTION_LINES {
        let near = 0.1 * i as f64;
        g.push(Primitive::line(
            format!("line_{i}"),
            edge + back * near,
            edge + back * (near + 0.3),
            style.clone(),
        ));
    }
    g
}

/// Ten gray specks scattered around `position`.
pub fn dust(position: Point, rng: &mut dyn RandomSource) -> ShapeGroup {
    let style = Style::stroke(DUST_COLOR, 0.0).filled(DUST_COLOR, 1.0);
    let mut g = ShapeGroup::new("dust");
    for i in 0..DUST_SPECKS {
        let offset = Vec2::new(rng.uniform(-0.5, 0.5), rng.uniform(-0.3, 0.3));
        let radius = rng.uniform(0.01, 0.03);
        g.push(Primitive::new(
            format!("speck_{i}"),
            Geometry::Dot {
                center: position + offset,
                radius,
            },
            style.clone(),
        ));
    }
    g
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/effects.rs"]
mod tests;
