//! Sequential execution of a [`Timeline`] against a rendering collaborator.

use crate::{
    animation::change::Change,
    animation::ease::Ease,
    audio::mix::{SoundCue, frame_to_sample},
    audio::sfx::{SoundBank, SoundEffect},
    audio::synth::SAMPLE_RATE,
    foundation::core::{Fps, FrameRange},
    foundation::error::SketchResult,
    shapes::group::ShapeGroup,
    timeline::scene::Scene,
    timeline::step::{AnimationStep, GroupId, Instant, Timed, Timeline},
};

/// How a group enters the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entrance {
    /// Appears at once at the step start.
    Cut,
    Create,
    Write,
    FadeIn,
}

/// The seam to whatever turns the script into pictures.
///
/// Calls arrive strictly in script order; any error aborts the run.
pub trait PlaybackDriver {
    fn begin_step(
        &mut self,
        index: usize,
        step: &AnimationStep,
        frames: FrameRange,
    ) -> SketchResult<()>;

    fn introduce(
        &mut self,
        id: GroupId,
        group: &ShapeGroup,
        entrance: Entrance,
    ) -> SketchResult<()>;

    fn mutate(&mut self, id: GroupId, changes: &[Change], ease: Ease) -> SketchResult<()>;

    fn fade_out(&mut self, id: GroupId) -> SketchResult<()>;

    fn remove(&mut self, id: GroupId) -> SketchResult<()>;

    fn attach_sound(&mut self, cue: &SoundCue) -> SketchResult<()>;

    fn end_step(&mut self, index: usize) -> SketchResult<()>;
}

#[derive(Clone, Debug)]
pub struct PlaybackSummary {
    pub steps: usize,
    pub total_frames: u64,
    pub total_secs: f64,
    pub cues: Vec<SoundCue>,
}

/// Run `timeline` step by step against `driver`.
///
/// The timeline is validated first. Step boundaries are frame-aligned at `fps`, and sound cues are
/// placed at their step's first frame.
#[tracing::instrument(skip(timeline, driver, bank), fields(steps = timeline.steps.len()))]
pub fn play<D: PlaybackDriver + ?Sized>(
    timeline: &Timeline,
    fps: Fps,
    driver: &mut D,
    bank: &mut SoundBank,
) -> SketchResult<PlaybackSummary> {
    timeline.validate()?;
    let ranges = timeline.frame_ranges(fps);
    let mut scene = Scene::new();
    let mut cues = Vec::new();

    for (index, (step, frames)) in timeline.steps.iter().zip(ranges.iter().copied()).enumerate() {
        tracing::debug!(
            index,
            label = step.label.as_deref().unwrap_or(""),
            start = frames.start.0,
            end = frames.end.0,
            "step"
        );
        driver.begin_step(index, step, frames)?;

        for action in &step.instant {
            match action {
                Instant::Add { id } => {
                    scene.introduce(*id)?;
                    driver.introduce(*id, timeline.group(*id)?, Entrance::Cut)?;
                }
                Instant::Remove { id } => {
                    if scene.remove(*id) {
                        driver.remove(*id)?;
                    }
                }
                Instant::Clear => {
                    for id in scene.clear() {
                        driver.remove(id)?;
                    }
                }
            }
        }

        let mut fading = Vec::new();
        for action in &step.timed {
            match action {
                Timed::Create { id } => enter(&mut scene, driver, timeline, *id, Entrance::Create)?,
                Timed::Write { id } => enter(&mut scene, driver, timeline, *id, Entrance::Write)?,
                Timed::FadeIn { id } => enter(&mut scene, driver, timeline, *id, Entrance::FadeIn)?,
                Timed::Animate { id, changes } => {
                    scene.mutate(*id)?;
                    driver.mutate(*id, changes, step.ease)?;
                }
                Timed::FadeOut { id } => {
                    driver.fade_out(*id)?;
                    fading.push(*id);
                }
            }
        }

        if let Some(effect) = step.sound {
            let cue = SoundCue {
                step: index,
                start_secs: fps.frames_to_secs(frames.start.0),
                start_sample: frame_to_sample(frames.start.0, fps, SAMPLE_RATE),
                effect,
                clip: bank.clip(effect)?,
            };
            driver.attach_sound(&cue)?;
            cues.push(cue);
        }

        for id in fading.into_iter().chain(step.remove_after.iter().copied()) {
            if scene.remove(id) {
                driver.remove(id)?;
            }
        }
        driver.end_step(index)?;
    }

    let total_frames = ranges.last().map_or(0, |r| r.end.0);
    Ok(PlaybackSummary {
        steps: timeline.steps.len(),
        total_frames,
        total_secs: fps.frames_to_secs(total_frames),
        cues,
    })
}

fn enter<D: PlaybackDriver + ?Sized>(
    scene: &mut Scene,
    driver: &mut D,
    timeline: &Timeline,
    id: GroupId,
    entrance: Entrance,
) -> SketchResult<()> {
    scene.introduce(id)?;
    driver.introduce(id, timeline.group(id)?, entrance)
}

/// One observed driver call.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PlaybackEvent {
    BeginStep {
        index: usize,
        frames: FrameRange,
    },
    Introduce {
        id: GroupId,
        name: String,
        entrance: Entrance,
    },
    Mutate {
        id: GroupId,
        changes: usize,
    },
    FadeOut {
        id: GroupId,
    },
    Remove {
        id: GroupId,
    },
    Sound {
        step: usize,
        effect: SoundEffect,
        start_secs: f64,
    },
    EndStep {
        index: usize,
    },
}

/// Driver that draws nothing and remembers every call. Used for dry runs.
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub events: Vec<PlaybackEvent>,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlaybackDriver for RecordingDriver {
    fn begin_step(
        &mut self,
        index: usize,
        _step: &AnimationStep,
        frames: FrameRange,
    ) -> SketchResult<()> {
        self.events.push(PlaybackEvent::BeginStep { index, frames });
        Ok(())
    }

    fn introduce(
        &mut self,
        id: GroupId,
        group: &ShapeGroup,
        entrance: Entrance,
    ) -> SketchResult<()> {
        self.events.push(PlaybackEvent::Introduce {
            id,
            name: group.name.clone(),
            entrance,
        });
        Ok(())
    }

    fn mutate(&mut self, id: GroupId, changes: &[Change], _ease: Ease) -> SketchResult<()> {
        self.events.push(PlaybackEvent::Mutate {
            id,
            changes: changes.len(),
        });
        Ok(())
    }

    fn fade_out(&mut self, id: GroupId) -> SketchResult<()> {
        self.events.push(PlaybackEvent::FadeOut { id });
        Ok(())
    }

    fn remove(&mut self, id: GroupId) -> SketchResult<()> {
        self.events.push(PlaybackEvent::Remove { id });
        Ok(())
    }

    fn attach_sound(&mut self, cue: &SoundCue) -> SketchResult<()> {
        self.events.push(PlaybackEvent::Sound {
            step: cue.step,
            effect: cue.effect,
            start_secs: cue.start_secs,
        });
        Ok(())
    }

    fn end_step(&mut self, index: usize) -> SketchResult<()> {
        self.events.push(PlaybackEvent::EndStep { index });
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/player.rs"]
mod tests;
