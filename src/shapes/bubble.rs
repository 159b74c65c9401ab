//! Speech and thought bubbles sized from measured text.

use crate::{
    foundation::color::Color,
    foundation::core::{DOWN, LEFT, Point, RIGHT, Size, UP},
    foundation::error::SketchResult,
    shapes::group::ShapeGroup,
    shapes::primitive::{Geometry, Primitive, Style},
    shapes::text::{TextMeasure, TextStyle, text_primitive},
};

/// Added to the measured text extents to get the bubble size.
pub const BUBBLE_PADDING: Size = Size::new(0.6, 0.4);
/// Gap between the speaker's top and the bottom of the text.
pub const BUBBLE_LIFT: f64 = 0.8;
const BUBBLE_FILL_OPACITY: f64 = 0.9;
const THOUGHT_DOTS: [(f64, f64); 3] = [(0.08, 0.1), (0.06, 0.05), (0.04, 0.03)];

/// Text appearance for a bubble.
#[derive(Clone, Debug, PartialEq)]
pub struct BubbleText {
    pub color: Color,
    pub font_size: f64,
    pub bold: bool,
}

impl BubbleText {
    pub fn speech() -> Self {
        Self {
            color: Color::BLACK,
            font_size: 28.0,
            bold: false,
        }
    }

    pub fn thought() -> Self {
        Self {
            color: Color::rgb(0x66, 0x66, 0x66),
            font_size: 26.0,
            bold: false,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn style(&self) -> TextStyle {
        let s = TextStyle::new(self.font_size);
        if self.bold { s.bold() } else { s }
    }
}

pub fn bubble_size(text: Size) -> Size {
    Size::new(text.width + BUBBLE_PADDING.width, text.height + BUBBLE_PADDING.height)
}

struct Layout {
    text: Primitive,
    center: Point,
    size: Size,
}

fn layout_text(
    text: &str,
    speaker: &ShapeGroup,
    look: &BubbleText,
    measure: &mut dyn TextMeasure,
) -> SketchResult<Layout> {
    let style = look.style();
    let measured = measure.measure(text, &style)?;
    let center = speaker.top() + UP * (BUBBLE_LIFT + measured.height * 0.5);
    let text = text_primitive("text", text, look.color, center, &style, measure)?;
    Ok(Layout {
        text,
        center,
        size: bubble_size(measured),
    })
}

fn rounded_box(center: Point, size: Size, corner_radius: f64, style: Style) -> Primitive {
    Primitive::new(
        "bubble",
        Geometry::RoundedRect {
            center,
            width: size.width,
            height: size.height,
            corner_radius,
            rotation: 0.0,
        },
        style,
    )
}

/// Speech bubble above `speaker`: rounded box, tail, text.
///
/// The tail is built after the box and points from the box's bottom edge at the speaker's top.
pub fn speech_bubble(
    text: &str,
    speaker: &ShapeGroup,
    look: &BubbleText,
    measure: &mut dyn TextMeasure,
) -> SketchResult<ShapeGroup> {
    let Layout { text, center, size } = layout_text(text, speaker, look, measure)?;
    let style = Style::stroke(look.color, 3.0).filled(Color::WHITE, BUBBLE_FILL_OPACITY);
    let bubble = rounded_box(center, size, 0.2, style.clone());

    let bottom = Point::new(center.x, center.y - size.height * 0.5);
    let tail = Primitive::new(
        "tail",
        Geometry::Polygon {
            points: vec![
                bottom + LEFT * 0.1,
                bottom + RIGHT * 0.1,
                speaker.top() + UP * 0.1,
            ],
        },
        style,
    );

    Ok(ShapeGroup::new("speech_bubble")
        .with(bubble)
        .with(tail)
        .with(text))
}

/// Thought bubble above `thinker`: cloud box, three shrinking dots, text.
pub fn thought_bubble(
    text: &str,
    thinker: &ShapeGroup,
    look: &BubbleText,
    measure: &mut dyn TextMeasure,
) -> SketchResult<ShapeGroup> {
    let Layout { text, center, size } = layout_text(text, thinker, look, measure)?;
    let style = Style::stroke(look.color, 2.0)
        .with_stroke_opacity(0.8)
        .filled(Color::WHITE, BUBBLE_FILL_OPACITY);
    let mut g = ShapeGroup::new("thought_bubble").with(rounded_box(center, size, 0.4, style));

    let mut edge = center.y - size.height * 0.5;
    for (i, (radius, buff)) in THOUGHT_DOTS.into_iter().enumerate() {
        let dot_center = Point::new(center.x, edge) + DOWN * (buff + radius);
        g.push(Primitive::circle(
            format!("dot_{i}"),
            dot_center,
            radius,
            Style::stroke(look.color, 2.0),
        ));
        edge = dot_center.y - radius;
    }

    g.push(text);
    Ok(g)
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/bubble.rs"]
mod tests;
