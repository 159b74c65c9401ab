use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::color::Color,
    foundation::core::{Point, Size},
    foundation::error::{SketchError, SketchResult},
    shapes::primitive::{Geometry, Primitive, Style},
};

/// Family requested for every caption and bubble.
pub const DEFAULT_FONT: &str = "Comic Sans MS";
/// Pixels per scene unit used to convert measured text into scene space.
pub const TEXT_PX_PER_UNIT: f64 = 100.0;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextStyle {
    pub font_size: f64,
    pub bold: bool,
    pub font: String,
}

impl TextStyle {
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            bold: false,
            font: DEFAULT_FONT.to_string(),
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn validate(&self) -> SketchResult<()> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(SketchError::text("font size must be finite and > 0"));
        }
        Ok(())
    }
}

/// Measures rendered text extents in scene units.
///
/// Bubble builders size their backgrounds from this, never from a fixed constant.
pub trait TextMeasure {
    fn measure(&mut self, text: &str, style: &TextStyle) -> SketchResult<Size>;
}

/// Font-free estimate: fixed advance per glyph and a fixed line height, both in em.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproxTextMeasure {
    pub advance_em: f64,
    pub bold_advance_em: f64,
    pub line_height_em: f64,
    pub px_per_unit: f64,
}

impl Default for ApproxTextMeasure {
    fn default() -> Self {
        Self {
            advance_em: 0.55,
            bold_advance_em: 0.6,
            line_height_em: 1.2,
            px_per_unit: TEXT_PX_PER_UNIT,
        }
    }
}

impl TextMeasure for ApproxTextMeasure {
    fn measure(&mut self, text: &str, style: &TextStyle) -> SketchResult<Size> {
        style.validate()?;
        let advance = if style.bold {
            self.bold_advance_em
        } else {
            self.advance_em
        };
        let lines: Vec<&str> = text.split('\n').collect();
        let widest = lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        let em = style.font_size / self.px_per_unit;
        Ok(Size::new(
            widest as f64 * advance * em,
            lines.len() as f64 * self.line_height_em * em,
        ))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextBrush;

/// Shaped measurement through Parley with one registered font.
pub struct ParleyTextMeasure {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    family_name: String,
    px_per_unit: f64,
}

impl ParleyTextMeasure {
    /// Register `font_bytes` and measure everything with its first family.
    pub fn from_font_bytes(font_bytes: &[u8]) -> SketchResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| SketchError::text("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| SketchError::text("registered font family has no name"))?
            .to_string();
        tracing::debug!(family = %family_name, "registered measurement font");

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            px_per_unit: TEXT_PX_PER_UNIT,
        })
    }

    pub fn from_path(path: &Path) -> SketchResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read font file '{}'", path.display()))?;
        Self::from_font_bytes(&bytes)
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }
}

impl TextMeasure for ParleyTextMeasure {
    fn measure(&mut self, text: &str, style: &TextStyle) -> SketchResult<Size> {
        style.validate()?;
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(
            style.font_size as f32,
        ));
        if style.bold {
            builder.push_default(parley::style::StyleProperty::FontWeight(
                parley::style::FontWeight::BOLD,
            ));
        }
        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);

        Ok(Size::new(
            f64::from(layout.width()) / self.px_per_unit,
            f64::from(layout.height()) / self.px_per_unit,
        ))
    }
}

/// Measured text primitive centered on `center`.
pub fn text_primitive(
    label: &str,
    text: &str,
    color: Color,
    center: Point,
    style: &TextStyle,
    measure: &mut dyn TextMeasure,
) -> SketchResult<Primitive> {
    let size = measure.measure(text, style)?;
    Ok(Primitive::new(
        label,
        Geometry::Text {
            text: text.to_string(),
            center,
            width: size.width,
            height: size.height,
            font_size: style.font_size,
            font: style.font.clone(),
            bold: style.bold,
            rotation: 0.0,
        },
        Style::stroke(color, 0.0).filled(color, 1.0),
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/text.rs"]
mod tests;
