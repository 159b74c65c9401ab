use std::collections::BTreeMap;

use crate::{
    foundation::core::{Affine, Point, Rect, Vec2},
    shapes::primitive::{Primitive, points_bounds},
};

/// Anchor names understood by the geometry helpers on [`ShapeGroup`].
pub mod anchor {
    pub const CENTER: &str = "center";
    pub const TOP: &str = "top";
    pub const BOTTOM: &str = "bottom";
    pub const LEFT: &str = "left";
    pub const RIGHT: &str = "right";
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// An ordered, named bundle of primitives animated as one unit.
///
/// Besides the drawable primitives a group carries named logical anchors. Anchors move with every
/// transform applied to the group but are never jittered, so attachment points (a weapon in a
/// hand, a bubble above a head) do not drift with the hand-drawn wiggle.
pub struct ShapeGroup {
    pub name: String,
    pub primitives: Vec<Primitive>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub anchors: BTreeMap<String, Point>,
}

impl ShapeGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primitives: Vec::new(),
            anchors: BTreeMap::new(),
        }
    }

    pub fn with(mut self, primitive: Primitive) -> Self {
        self.primitives.push(primitive);
        self
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn set_anchor(&mut self, name: impl Into<String>, at: Point) {
        self.anchors.insert(name.into(), at);
    }

    pub fn anchor(&self, name: &str) -> Option<Point> {
        self.anchors.get(name).copied()
    }

    /// Record the edge anchors and center from the current geometry.
    pub fn freeze_bounds(&mut self) {
        if let Some(b) = self.bounding_box() {
            let c = b.center();
            self.set_anchor(anchor::CENTER, c);
            self.set_anchor(anchor::TOP, Point::new(c.x, b.y1));
            self.set_anchor(anchor::BOTTOM, Point::new(c.x, b.y0));
            self.set_anchor(anchor::LEFT, Point::new(b.x0, c.y));
            self.set_anchor(anchor::RIGHT, Point::new(b.x1, c.y));
        }
    }

    pub fn primitive(&self, label: &str) -> Option<&Primitive> {
        self.primitives.iter().find(|p| p.label == label)
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Union of the primitives' bounds, `None` for an empty group.
    pub fn bounding_box(&self) -> Option<Rect> {
        let mut iter = self.primitives.iter().map(Primitive::bounding_box);
        let first = iter.next()?;
        Some(iter.fold(first, |acc, r| acc.union(r)))
    }

    /// Logical bounds: the edge anchors when present, the drawn bounds otherwise.
    pub fn bounds(&self) -> Rect {
        let edges = [
            anchor::TOP,
            anchor::BOTTOM,
            anchor::LEFT,
            anchor::RIGHT,
        ]
        .map(|name| self.anchor(name));
        if edges.iter().all(Option::is_some) {
            return points_bounds(edges.into_iter().flatten());
        }
        self.bounding_box()
            .unwrap_or_else(|| Rect::from_points(Point::ORIGIN, Point::ORIGIN))
    }

    pub fn center(&self) -> Point {
        self.anchor(anchor::CENTER)
            .unwrap_or_else(|| self.bounds().center())
    }

    pub fn top(&self) -> Point {
        self.anchor(anchor::TOP).unwrap_or_else(|| {
            let b = self.bounds();
            Point::new(b.center().x, b.y1)
        })
    }

    pub fn bottom(&self) -> Point {
        self.anchor(anchor::BOTTOM).unwrap_or_else(|| {
            let b = self.bounds();
            Point::new(b.center().x, b.y0)
        })
    }

    pub fn left(&self) -> Point {
        self.anchor(anchor::LEFT).unwrap_or_else(|| {
            let b = self.bounds();
            Point::new(b.x0, b.center().y)
        })
    }

    pub fn right(&self) -> Point {
        self.anchor(anchor::RIGHT).unwrap_or_else(|| {
            let b = self.bounds();
            Point::new(b.x1, b.center().y)
        })
    }

    pub fn width(&self) -> f64 {
        self.bounds().width()
    }

    pub fn height(&self) -> f64 {
        self.bounds().height()
    }

    pub fn transform(&mut self, a: Affine) {
        for p in &mut self.primitives {
            p.transform(a);
        }
        for at in self.anchors.values_mut() {
            *at = a * *at;
        }
    }

    pub fn shift(&mut self, by: Vec2) {
        self.transform(Affine::translate(by));
    }

    /// Shift so the group's center lands on `target`.
    pub fn move_to(&mut self, target: Point) {
        let by = target - self.center();
        self.shift(by);
    }

    pub fn rotate_about(&mut self, angle_rad: f64, about: Point) {
        self.transform(Affine::rotate_about(angle_rad, about));
    }

    pub fn scale_about(&mut self, factor: f64, about: Point) {
        self.transform(Affine::scale_about(factor, about));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/group.rs"]
mod tests;
