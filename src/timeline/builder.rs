use std::collections::BTreeSet;

use crate::{
    animation::change::{Change, resolve},
    animation::ease::Ease,
    audio::sfx::SoundEffect,
    foundation::error::{SketchError, SketchResult},
    shapes::group::ShapeGroup,
    timeline::step::{AnimationStep, GroupId, Instant, Timed, Timeline},
};

/// Authoring front end for [`Timeline`].
///
/// Keeps a mirror of every group's state as of the last committed step, so a script can ask where
/// something *is now* ("fire at blue's current center") instead of where it was built.
#[derive(Debug, Default)]
pub struct TimelineBuilder {
    groups: Vec<ShapeGroup>,
    live: Vec<ShapeGroup>,
    pending: Vec<Instant>,
    pending_adds: BTreeSet<GroupId>,
    steps: Vec<AnimationStep>,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `group` in the table without showing it. A later entrance action introduces it.
    pub fn register(&mut self, group: ShapeGroup) -> GroupId {
        let id = GroupId(self.groups.len() as u32);
        self.live.push(group.clone());
        self.groups.push(group);
        id
    }

    /// Register `group` and pop it onto the scene at the start of the next step.
    pub fn add(&mut self, group: ShapeGroup) -> GroupId {
        let id = self.register(group);
        self.pending.push(Instant::Add { id });
        self.pending_adds.insert(id);
        id
    }

    /// Group as it looks after the last committed step.
    pub fn current(&self, id: GroupId) -> SketchResult<&ShapeGroup> {
        self.live
            .get(id.index())
            .ok_or_else(|| SketchError::timeline(format!("unknown group {id}")))
    }

    /// Take `id` off the scene right after the last committed step.
    ///
    /// A group that is still waiting to be added is removed at the next step start instead, after
    /// its own add.
    pub fn remove(&mut self, id: GroupId) {
        match self.steps.last_mut() {
            Some(last) if !self.pending_adds.contains(&id) && self.pending.is_empty() => {
                last.remove_after.push(id);
            }
            _ => self.pending.push(Instant::Remove { id }),
        }
    }

    /// Empty the scene at the start of the next step.
    pub fn clear(&mut self) {
        self.pending.push(Instant::Clear);
    }

    /// Start a timed step of `duration_secs`.
    pub fn play(&mut self, duration_secs: f64) -> StepBuilder<'_> {
        StepBuilder {
            timeline: self,
            step: AnimationStep::new(duration_secs),
        }
    }

    /// Hold the current picture.
    pub fn wait(&mut self, duration_secs: f64) -> SketchResult<usize> {
        self.play(duration_secs).commit()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn build(self) -> SketchResult<Timeline> {
        if !self.pending.is_empty() {
            return Err(SketchError::timeline(format!(
                "{} instant action(s) queued after the last step",
                self.pending.len()
            )));
        }
        let timeline = Timeline {
            groups: self.groups,
            steps: self.steps,
        };
        timeline.validate()?;
        Ok(timeline)
    }
}

/// One step under construction. Nothing is recorded until [`StepBuilder::commit`].
#[must_use = "a step is only recorded by commit()"]
pub struct StepBuilder<'a> {
    timeline: &'a mut TimelineBuilder,
    step: AnimationStep,
}

impl StepBuilder<'_> {
    pub fn create(mut self, id: GroupId) -> Self {
        self.step.timed.push(Timed::Create { id });
        self
    }

    pub fn write(mut self, id: GroupId) -> Self {
        self.step.timed.push(Timed::Write { id });
        self
    }

    pub fn fade_in(mut self, id: GroupId) -> Self {
        self.step.timed.push(Timed::FadeIn { id });
        self
    }

    pub fn fade_out(mut self, id: GroupId) -> Self {
        self.step.timed.push(Timed::FadeOut { id });
        self
    }

    pub fn animate(mut self, id: GroupId, changes: impl IntoIterator<Item = Change>) -> Self {
        self.step.timed.push(Timed::Animate {
            id,
            changes: changes.into_iter().collect(),
        });
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.step.ease = ease;
        self
    }

    pub fn sound(mut self, effect: impl Into<Option<SoundEffect>>) -> Self {
        self.step.sound = effect.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.step.label = Some(label.into());
        self
    }

    /// Record the step, fold queued instant actions into its start, and advance the mirror to
    /// the step's end state. Returns the step index.
    pub fn commit(self) -> SketchResult<usize> {
        let Self { timeline, mut step } = self;
        if !step.duration_secs.is_finite() || step.duration_secs <= 0.0 {
            return Err(SketchError::timeline(format!(
                "step duration must be finite and > 0, got {}",
                step.duration_secs
            )));
        }
        for action in &step.timed {
            timeline.current(action.id())?;
        }

        for action in &step.timed {
            if let Timed::Animate { id, changes } = action {
                let group = &mut timeline.live[id.index()];
                let a = resolve(changes, group);
                group.transform(a);
            }
        }

        step.instant = std::mem::take(&mut timeline.pending);
        timeline.pending_adds.clear();
        let index = timeline.steps.len();
        tracing::trace!(index, label = ?step.label, "step recorded");
        timeline.steps.push(step);
        Ok(index)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/builder.rs"]
mod tests;
