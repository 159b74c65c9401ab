//! Group mutations carried by timed `Animate` actions.

use crate::{
    foundation::core::{Affine, Point, Vec2},
    foundation::error::{SketchError, SketchResult},
    shapes::group::ShapeGroup,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Change {
    /// Translate so the group's center lands on `to`.
    MoveTo { to: Point },
    Shift { by: Vec2 },
    /// Rotate counter-clockwise. `about: None` pivots on the group's center at that point in the
    /// chain.
    Rotate {
        angle_rad: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        about: Option<Point>,
    },
    Scale {
        factor: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        about: Option<Point>,
    },
}

impl Change {
    pub fn move_to(to: Point) -> Self {
        Self::MoveTo { to }
    }

    pub fn shift(by: Vec2) -> Self {
        Self::Shift { by }
    }

    pub fn rotate(angle_rad: f64) -> Self {
        Self::Rotate {
            angle_rad,
            about: None,
        }
    }

    pub fn rotate_about(angle_rad: f64, about: Point) -> Self {
        Self::Rotate {
            angle_rad,
            about: Some(about),
        }
    }

    pub fn scale(factor: f64) -> Self {
        Self::Scale {
            factor,
            about: None,
        }
    }

    pub fn validate(&self) -> SketchResult<()> {
        let finite = match self {
            Self::MoveTo { to } => to.is_finite(),
            Self::Shift { by } => by.is_finite(),
            Self::Rotate { angle_rad, about } => {
                angle_rad.is_finite() && about.is_none_or(|p| p.is_finite())
            }
            Self::Scale { factor, about } => {
                if *factor <= 0.0 {
                    return Err(SketchError::validation(format!(
                        "scale factor must be > 0, got {factor}"
                    )));
                }
                factor.is_finite() && about.is_none_or(|p| p.is_finite())
            }
        };
        if !finite {
            return Err(SketchError::validation(format!(
                "change has non-finite parameters: {self:?}"
            )));
        }
        Ok(())
    }

    /// The map this change applies to `group` in its current state.
    pub fn affine_for(&self, group: &ShapeGroup) -> Affine {
        match *self {
            Self::MoveTo { to } => Affine::translate(to - group.center()),
            Self::Shift { by } => Affine::translate(by),
            Self::Rotate { angle_rad, about } => {
                Affine::rotate_about(angle_rad, about.unwrap_or_else(|| group.center()))
            }
            Self::Scale { factor, about } => {
                Affine::scale_about(factor, about.unwrap_or_else(|| group.center()))
            }
        }
    }
}

/// Compose `changes` in order against `group`, each one seeing the result of the previous ones.
pub fn resolve(changes: &[Change], group: &ShapeGroup) -> Affine {
    let mut probe = group.clone();
    let mut total = Affine::IDENTITY;
    for change in changes {
        let step = change.affine_for(&probe);
        probe.transform(step);
        total = step * total;
    }
    total
}

/// Partial map at eased progress `t`: every point travels the straight line to its end position.
pub fn partial(full: Affine, t: f64) -> Affine {
    let t = t.clamp(0.0, 1.0);
    let id = Affine::IDENTITY.as_coeffs();
    let end = full.as_coeffs();
    let mut coeffs = [0.0; 6];
    for (i, c) in coeffs.iter_mut().enumerate() {
        *c = id[i] + (end[i] - id[i]) * t;
    }
    Affine::new(coeffs)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/change.rs"]
mod tests;
