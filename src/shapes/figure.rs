use std::fmt;

use crate::{
    foundation::color::Color,
    foundation::core::{Point, Vec2},
    shapes::group::ShapeGroup,
    shapes::jitter::RandomSource,
    shapes::primitive::{Primitive, Style},
};

/// Wiggle applied to every stick-figure vertex in hand-drawn mode.
pub const FIGURE_WIGGLE: f64 = 0.02;

const HEAD_RADIUS: f64 = 0.28;
const HEAD_OFFSET: Vec2 = Vec2::new(0.0, 1.2);
const NECK_OFFSET: Vec2 = Vec2::new(0.0, 0.9);
const SHOULDER_OFFSET: Vec2 = Vec2::new(0.0, 0.7);
const HIP_OFFSET: Vec2 = Vec2::new(0.0, -0.3);
const LEFT_FOOT_OFFSET: Vec2 = Vec2::new(-0.3, -0.9);
const RIGHT_FOOT_OFFSET: Vec2 = Vec2::new(0.3, -0.9);
const TORSO_STROKE: f64 = 6.0;
const LIMB_STROKE: f64 = 5.0;

/// Anchor recorded at the end of the right arm (where weapons are held).
pub const RIGHT_HAND: &str = "right_hand";
/// Anchor recorded at the end of the left arm.
pub const LEFT_HAND: &str = "left_hand";
/// Anchor recorded at the shoulder joint.
pub const SHOULDER: &str = "shoulder";

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
/// Limb layout of a stick figure.
pub enum Pose {
    /// Fighting stance, right hand forward holding a weapon.
    Ready,
    /// Relaxed, both hands loosely raised.
    Calm,
    /// Peace-sign selfie.
    Selfie,
    /// Arms hanging down. Also the layout for any unknown pose name.
    #[default]
    Neutral,
}

/// Hand positions relative to the figure anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArmLayout {
    pub left_hand: Vec2,
    pub right_hand: Vec2,
}

const POSE_TABLE: [(Pose, ArmLayout); 4] = [
    (
        Pose::Ready,
        ArmLayout {
            left_hand: Vec2::new(-0.6, 0.4),
            right_hand: Vec2::new(0.8, 0.2),
        },
    ),
    (
        Pose::Calm,
        ArmLayout {
            left_hand: Vec2::new(-0.4, 0.3),
            right_hand: Vec2::new(0.4, 0.3),
        },
    ),
    (
        Pose::Selfie,
        ArmLayout {
            left_hand: Vec2::new(-0.5, -0.1),
            right_hand: Vec2::new(0.6, 0.1),
        },
    ),
    (Pose::Neutral, DEFAULT_ARMS),
];

const DEFAULT_ARMS: ArmLayout = ArmLayout {
    left_hand: Vec2::new(-0.5, -0.1),
    right_hand: Vec2::new(0.5, -0.1),
};

impl Pose {
    pub const ALL: [Pose; 4] = [Pose::Ready, Pose::Calm, Pose::Selfie, Pose::Neutral];

    /// Resolve a pose by name. Unknown names select [`Pose::Neutral`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "ready" => Self::Ready,
            "calm" => Self::Calm,
            "selfie" => Self::Selfie,
            _ => Self::Neutral,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Calm => "calm",
            Self::Selfie => "selfie",
            Self::Neutral => "neutral",
        }
    }

    pub fn arms(self) -> ArmLayout {
        POSE_TABLE
            .iter()
            .find(|(pose, _)| *pose == self)
            .map(|(_, arms)| *arms)
            .unwrap_or(DEFAULT_ARMS)
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inputs for [`stick_figure`].
#[derive(Clone, Debug)]
pub struct FigureSpec {
    pub color: Color,
    pub position: Point,
    pub pose: Pose,
    pub name: String,
}

impl FigureSpec {
    pub fn new(color: Color, position: Point, pose: Pose) -> Self {
        Self {
            color,
            position,
            pose,
            name: String::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Build a stick figure: head, body, left arm, right arm, left leg, right leg, in that order.
///
/// Logical anchors (edges, center, hands, shoulder) are taken from the clean layout first; the
/// wiggle from `jitter` only touches the drawn vertices.
pub fn stick_figure(spec: &FigureSpec, jitter: &mut dyn RandomSource) -> ShapeGroup {
    let p = spec.position;
    let arms = spec.pose.arms();
    let torso = Style::stroke(spec.color, TORSO_STROKE);
    let limb = Style::stroke(spec.color, LIMB_STROKE);
    let shoulder = p + SHOULDER_OFFSET;
    let hip = p + HIP_OFFSET;

    let name = if spec.name.is_empty() {
        format!("stickman_{}", spec.pose)
    } else {
        spec.name.clone()
    };

    let mut group = ShapeGroup::new(name)
        .with(Primitive::circle(
            "head",
            p + HEAD_OFFSET,
            HEAD_RADIUS,
            torso.clone(),
        ))
        .with(Primitive::line("body", p + NECK_OFFSET, hip, torso))
        .with(Primitive::line(
            "left_arm",
            shoulder,
            p + arms.left_hand,
            limb.clone(),
        ))
        .with(Primitive::line(
            "right_arm",
            shoulder,
            p + arms.right_hand,
            limb.clone(),
        ))
        .with(Primitive::line(
            "left_leg",
            hip,
            p + LEFT_FOOT_OFFSET,
            limb.clone(),
        ))
        .with(Primitive::line("right_leg", hip, p + RIGHT_FOOT_OFFSET, limb));

    group.freeze_bounds();
    group.set_anchor(SHOULDER, shoulder);
    group.set_anchor(LEFT_HAND, p + arms.left_hand);
    group.set_anchor(RIGHT_HAND, p + arms.right_hand);

    for prim in &mut group.primitives {
        prim.jitter(jitter, FIGURE_WIGGLE);
    }
    group
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/figure.rs"]
mod tests;
