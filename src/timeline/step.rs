use std::{fmt, path::Path};

use anyhow::Context as _;

use crate::{
    animation::change::Change,
    animation::ease::Ease,
    audio::sfx::SoundEffect,
    foundation::core::{Fps, FrameIndex, FrameRange},
    foundation::error::{SketchError, SketchResult},
    shapes::group::ShapeGroup,
    timeline::scene::Scene,
};

/// Identity of a group inside one [`Timeline`]: its index in the group table.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct GroupId(pub u32);

impl GroupId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Zero-duration action applied in order at the start of a step.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Instant {
    Add { id: GroupId },
    Remove { id: GroupId },
    Clear,
}

/// Action spread over the whole step; every timed action ends exactly at the step boundary.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Timed {
    /// Stroke-by-stroke drawing entrance.
    Create { id: GroupId },
    /// Handwriting entrance, used for text and bubbles.
    Write { id: GroupId },
    FadeIn { id: GroupId },
    Animate { id: GroupId, changes: Vec<Change> },
    /// Fade to transparent; the group leaves the scene when the step ends.
    FadeOut { id: GroupId },
}

impl Timed {
    pub fn id(&self) -> GroupId {
        match self {
            Self::Create { id }
            | Self::Write { id }
            | Self::FadeIn { id }
            | Self::Animate { id, .. }
            | Self::FadeOut { id } => *id,
        }
    }

    pub fn is_entrance(&self) -> bool {
        matches!(
            self,
            Self::Create { .. } | Self::Write { .. } | Self::FadeIn { .. }
        )
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instant: Vec<Instant>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub timed: Vec<Timed>,
    pub duration_secs: f64,
    #[serde(default)]
    pub ease: Ease,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<SoundEffect>,
    /// Groups taken off the scene once the step ends.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remove_after: Vec<GroupId>,
}

impl AnimationStep {
    pub fn new(duration_secs: f64) -> Self {
        Self {
            label: None,
            instant: Vec::new(),
            timed: Vec::new(),
            duration_secs,
            ease: Ease::default(),
            sound: None,
            remove_after: Vec::new(),
        }
    }

    /// Every group id the step mentions, in declaration order.
    pub fn referenced(&self) -> impl Iterator<Item = GroupId> + '_ {
        let instant = self.instant.iter().filter_map(|a| match a {
            Instant::Add { id } | Instant::Remove { id } => Some(*id),
            Instant::Clear => None,
        });
        instant
            .chain(self.timed.iter().map(Timed::id))
            .chain(self.remove_after.iter().copied())
    }
}

/// The authoritative script: a group table plus the ordered steps that drive it.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// Initial state of every group; [`GroupId`] indexes into this table.
    pub groups: Vec<ShapeGroup>,
    pub steps: Vec<AnimationStep>,
}

impl Timeline {
    pub fn group(&self, id: GroupId) -> SketchResult<&ShapeGroup> {
        self.groups
            .get(id.index())
            .ok_or_else(|| SketchError::timeline(format!("unknown group {id}")))
    }

    pub fn total_secs(&self) -> f64 {
        self.steps.iter().map(|s| s.duration_secs).sum()
    }

    /// Frame span of every step at `fps`, from cumulative seconds rounded to the nearest frame.
    pub fn frame_ranges(&self, fps: Fps) -> Vec<FrameRange> {
        let mut out = Vec::with_capacity(self.steps.len());
        let mut elapsed = 0.0;
        let mut start = 0u64;
        for step in &self.steps {
            elapsed += step.duration_secs;
            let end = fps.secs_to_frames_round(elapsed).max(start);
            out.push(FrameRange {
                start: FrameIndex(start),
                end: FrameIndex(end),
            });
            start = end;
        }
        out
    }

    pub fn total_frames(&self, fps: Fps) -> u64 {
        self.frame_ranges(fps).last().map_or(0, |r| r.end.0)
    }

    /// Check durations, group references and the per-group lifecycle by dry-running the script.
    pub fn validate(&self) -> SketchResult<()> {
        let mut scene = Scene::new();
        for (index, step) in self.steps.iter().enumerate() {
            let ctx = |e: SketchError| {
                let what = step.label.as_deref().unwrap_or("unlabeled");
                SketchError::timeline(format!("step {index} ({what}): {}", strip(&e)))
            };
            if !step.duration_secs.is_finite() || step.duration_secs <= 0.0 {
                return Err(ctx(SketchError::timeline(format!(
                    "duration must be finite and > 0, got {}",
                    step.duration_secs
                ))));
            }
            for id in step.referenced() {
                self.group(id).map_err(ctx)?;
            }

            for action in &step.instant {
                match action {
                    Instant::Add { id } => scene.introduce(*id).map_err(ctx)?,
                    Instant::Remove { id } => {
                        scene.remove(*id);
                    }
                    Instant::Clear => {
                        scene.clear();
                    }
                }
            }

            let mut fading = Vec::new();
            for action in &step.timed {
                match action {
                    Timed::Create { id } | Timed::Write { id } | Timed::FadeIn { id } => {
                        scene.introduce(*id).map_err(ctx)?;
                    }
                    Timed::Animate { id, changes } => {
                        scene.mutate(*id).map_err(ctx)?;
                        for c in changes {
                            c.validate().map_err(ctx)?;
                        }
                    }
                    Timed::FadeOut { id } => {
                        if !scene.is_present(*id) {
                            return Err(ctx(SketchError::timeline(format!(
                                "group {id} is not present and cannot fade out"
                            ))));
                        }
                        fading.push(*id);
                    }
                }
            }
            for id in fading.into_iter().chain(step.remove_after.iter().copied()) {
                scene.remove(id);
            }
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> SketchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> SketchResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> SketchResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read timeline '{}'", path.display()))?;
        let timeline = Self::from_json(&text)?;
        timeline.validate()?;
        Ok(timeline)
    }
}

fn strip(e: &SketchError) -> String {
    match e {
        SketchError::Timeline(m) | SketchError::Validation(m) => m.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/step.rs"]
mod tests;
