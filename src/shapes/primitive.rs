use kurbo::Shape as _;

use crate::{
    foundation::color::Color,
    foundation::core::{Affine, Point, Rect, Size, Vec2, affine_parts},
    shapes::jitter::{RandomSource, jitter_offset, jitter_point},
};

/// Number of rim vertices that receive independent jitter on round primitives.
pub const RIM_VERTICES: usize = 8;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Paint attributes shared by every primitive.
pub struct Style {
    /// Outline color. For text this is the glyph color.
    pub stroke: Color,
    /// Outline width in renderer stroke units.
    pub stroke_width: f64,
    /// Outline opacity in `[0, 1]`.
    pub stroke_opacity: f64,
    /// Optional interior color.
    pub fill: Option<Color>,
    /// Interior opacity in `[0, 1]`.
    pub fill_opacity: f64,
}

impl Style {
    pub fn stroke(color: Color, width: f64) -> Self {
        Self {
            stroke: color,
            stroke_width: width,
            stroke_opacity: 1.0,
            fill: None,
            fill_opacity: 0.0,
        }
    }

    pub fn filled(mut self, fill: Color, opacity: f64) -> Self {
        self.fill = Some(fill);
        self.fill_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_stroke_opacity(mut self, opacity: f64) -> Self {
        self.stroke_opacity = opacity.clamp(0.0, 1.0);
        self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    Line {
        from: Point,
        to: Point,
    },
    Circle {
        center: Point,
        radius: f64,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        wobble: Vec<Vec2>,
    },
    Dot {
        center: Point,
        radius: f64,
    },
    Polygon {
        points: Vec<Point>,
    },
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        sweep_angle: f64,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        wobble: Vec<Vec2>,
    },
    RoundedRect {
        center: Point,
        width: f64,
        height: f64,
        corner_radius: f64,
        #[serde(default)]
        rotation: f64,
    },
    /// Text block; `width`/`height` are the measured extents in scene units.
    Text {
        text: String,
        center: Point,
        width: f64,
        height: f64,
        font_size: f64,
        font: String,
        bold: bool,
        #[serde(default)]
        rotation: f64,
    },
}

impl Geometry {
    pub fn transform(&mut self, a: Affine) {
        let (scale, rot) = affine_parts(a);
        match self {
            Self::Line { from, to } => {
                *from = a * *from;
                *to = a * *to;
            }
            Self::Circle {
                center,
                radius,
                wobble,
            } => {
                *center = a * *center;
                *radius *= scale;
                transform_offsets(wobble, a);
            }
            Self::Dot { center, radius } => {
                *center = a * *center;
                *radius *= scale;
            }
            Self::Polygon { points } => {
                for p in points.iter_mut() {
                    *p = a * *p;
                }
            }
            Self::Arc {
                center,
                radius,
                start_angle,
                wobble,
                ..
            } => {
                *center = a * *center;
                *radius *= scale;
                *start_angle += rot;
                transform_offsets(wobble, a);
            }
            Self::RoundedRect {
                center,
                width,
                height,
                corner_radius,
                rotation,
            } => {
                *center = a * *center;
                *width *= scale;
                *height *= scale;
                *corner_radius *= scale;
                *rotation += rot;
            }
            Self::Text {
                center,
                width,
                height,
                font_size,
                rotation,
                ..
            } => {
                *center = a * *center;
                *width *= scale;
                *height *= scale;
                *font_size *= scale;
                *rotation += rot;
            }
        }
    }

    /// Axis-aligned bounds of the undistorted shape (rim wobble is ignored).
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Line { from, to } => kurbo::Line::new(*from, *to).bounding_box(),
            Self::Circle { center, radius, .. } | Self::Dot { center, radius } => {
                Rect::from_center_size(*center, Size::new(2.0 * radius, 2.0 * radius))
            }
            Self::Polygon { points } => points_bounds(points.iter().copied()),
            Self::Arc {
                center,
                radius,
                start_angle,
                sweep_angle,
                ..
            } => arc_bounds(*center, *radius, *start_angle, *sweep_angle),
            Self::RoundedRect {
                center,
                width,
                height,
                rotation,
                ..
            }
            | Self::Text {
                center,
                width,
                height,
                rotation,
                ..
            } => rotated_box_bounds(*center, *width, *height, *rotation),
        }
    }

    fn jitter(&mut self, src: &mut dyn RandomSource, epsilon: f64) {
        match self {
            Self::Line { from, to } => {
                *from = jitter_point(src, *from, epsilon);
                *to = jitter_point(src, *to, epsilon);
            }
            Self::Polygon { points } => {
                for p in points.iter_mut() {
                    *p = jitter_point(src, *p, epsilon);
                }
            }
            Self::Circle { wobble, .. } | Self::Arc { wobble, .. } => {
                wobble.resize(RIM_VERTICES, Vec2::ZERO);
                for w in wobble.iter_mut() {
                    *w += jitter_offset(src, epsilon);
                }
            }
            Self::Dot { center, .. } => *center = jitter_point(src, *center, epsilon),
            // Boxes and text are laid out from measured sizes and stay crisp.
            Self::RoundedRect { .. } | Self::Text { .. } => {}
        }
    }
}

fn transform_offsets(offsets: &mut [Vec2], a: Affine) {
    let origin = a * Point::ORIGIN;
    for v in offsets.iter_mut() {
        *v = (a * v.to_point()) - origin;
    }
}

pub(crate) fn points_bounds(mut points: impl Iterator<Item = Point>) -> Rect {
    let Some(first) = points.next() else {
        return Rect::ZERO;
    };
    points.fold(Rect::from_points(first, first), |r, p| r.union_pt(p))
}

/// Exact arc bounds: both endpoints plus every axis extreme the sweep passes through.
fn arc_bounds(center: Point, radius: f64, start: f64, sweep: f64) -> Rect {
    let (lo, hi) = if sweep >= 0.0 {
        (start, start + sweep)
    } else {
        (start + sweep, start)
    };
    let at = |angle: f64| center + Vec2::from_angle(angle) * radius;
    let quarter = std::f64::consts::FRAC_PI_2;
    let first = (lo / quarter).ceil() as i64;
    let last = (hi / quarter).floor() as i64;
    let extremes = (first..=last).map(|k| at(k as f64 * quarter));
    points_bounds([at(lo), at(hi)].into_iter().chain(extremes))
}

fn rotated_box_bounds(center: Point, width: f64, height: f64, rotation: f64) -> Rect {
    let half = Vec2::new(width * 0.5, height * 0.5);
    let rot = Affine::rotate_about(rotation, center);
    points_bounds(
        [
            center - half,
            center + Vec2::new(half.x, -half.y),
            center + half,
            center + Vec2::new(-half.x, half.y),
        ]
        .into_iter()
        .map(|p| rot * p),
    )
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One labeled, styled shape inside a [`crate::ShapeGroup`].
pub struct Primitive {
    pub label: String,
    pub geometry: Geometry,
    pub style: Style,
}

impl Primitive {
    pub fn new(label: impl Into<String>, geometry: Geometry, style: Style) -> Self {
        Self {
            label: label.into(),
            geometry,
            style,
        }
    }

    pub fn line(label: impl Into<String>, from: Point, to: Point, style: Style) -> Self {
        Self::new(label, Geometry::Line { from, to }, style)
    }

    pub fn circle(label: impl Into<String>, center: Point, radius: f64, style: Style) -> Self {
        Self::new(
            label,
            Geometry::Circle {
                center,
                radius,
                wobble: Vec::new(),
            },
            style,
        )
    }

    pub fn color(&self) -> Color {
        self.style.stroke
    }

    pub fn bounding_box(&self) -> Rect {
        self.geometry.bounding_box()
    }

    pub fn transform(&mut self, a: Affine) {
        self.geometry.transform(a);
    }

    /// Apply independent per-vertex jitter within `±epsilon`.
    pub fn jitter(&mut self, src: &mut dyn RandomSource, epsilon: f64) {
        self.geometry.jitter(src, epsilon);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/primitive.rs"]
mod tests;
