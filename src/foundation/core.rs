use crate::foundation::error::{SketchError, SketchResult};

pub use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Unit step toward the top of the frame (scene space is y-up).
pub const UP: Vec2 = Vec2::new(0.0, 1.0);
/// Unit step toward the bottom of the frame.
pub const DOWN: Vec2 = Vec2::new(0.0, -1.0);
/// Unit step toward the left edge of the frame.
pub const LEFT: Vec2 = Vec2::new(-1.0, 0.0);
/// Unit step toward the right edge of the frame.
pub const RIGHT: Vec2 = Vec2::new(1.0, 0.0);
/// Frame center.
pub const ORIGIN: Point = Point::new(0.0, 0.0);

/// Convert degrees to radians.
pub fn degrees(deg: f64) -> f64 {
    deg.to_radians()
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    pub start: FrameIndex,
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    pub fn new(start: FrameIndex, end: FrameIndex) -> SketchResult<Self> {
        if start.0 > end.0 {
            return Err(SketchError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> SketchResult<Self> {
        if den == 0 {
            return Err(SketchError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(SketchError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Nearest frame boundary for a point in time. Step boundaries use this so rounding never
    /// accumulates across many short steps.
    pub fn secs_to_frames_round(self, secs: f64) -> u64 {
        (secs * self.as_f64()).round().max(0.0) as u64
    }
}

/// Uniform scale factor and rotation angle carried by an affine map.
///
/// Non-uniform scales collapse to their geometric mean, which is what radii and text sizes need.
pub(crate) fn affine_parts(a: Affine) -> (f64, f64) {
    let [xx, yx, xy, yy, _, _] = a.as_coeffs();
    let scale = (xx * yy - xy * yx).abs().sqrt();
    let rotation = yx.atan2(xx);
    (scale, rotation)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
