use std::collections::BTreeMap;

use crate::{
    animation::change::{Change, partial, resolve},
    foundation::core::{Fps, FrameIndex},
    foundation::error::{SketchError, SketchResult},
    shapes::group::ShapeGroup,
    timeline::scene::Scene,
    timeline::step::{GroupId, Instant, Timed, Timeline},
};

#[derive(Clone, Debug, serde::Serialize)]
/// One visible group at a sampled frame.
pub struct EvaluatedGroup {
    /// Timeline identity.
    pub id: GroupId,
    /// Geometry with every change up to this frame applied.
    pub group: ShapeGroup,
    /// Group opacity in `[0, 1]` (fade in/out).
    pub opacity: f64,
    /// Fraction of the strokes drawn so far in `[0, 1]` (create/write entrances).
    pub reveal: f64,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Scene state at one frame, ready for a renderer.
pub struct EvaluatedFrame {
    pub frame: FrameIndex,
    /// Index of the step that owns the frame.
    pub step: usize,
    /// Eased progress through that step in `[0, 1)`.
    pub progress: f64,
    /// Visible groups in painter's order (first introduced is drawn first).
    pub groups: Vec<EvaluatedGroup>,
}

struct Visual {
    group: ShapeGroup,
    opacity: f64,
    reveal: f64,
}

impl Visual {
    fn shown(group: &ShapeGroup) -> Self {
        Self {
            group: group.clone(),
            opacity: 1.0,
            reveal: 1.0,
        }
    }
}

/// Sample `timeline` at `frame`: completed steps are replayed in full, the owning step is applied
/// at its eased progress.
#[tracing::instrument(skip(timeline), fields(steps = timeline.steps.len()))]
pub fn eval_frame(timeline: &Timeline, fps: Fps, frame: FrameIndex) -> SketchResult<EvaluatedFrame> {
    timeline.validate()?;
    let ranges = timeline.frame_ranges(fps);
    let total = ranges.last().map_or(0, |r| r.end.0);
    if frame.0 >= total {
        return Err(SketchError::validation(format!(
            "frame {} is out of bounds ({total} frames)",
            frame.0
        )));
    }

    let mut scene = Scene::new();
    let mut live = BTreeMap::<GroupId, Visual>::new();

    for (index, (step, range)) in timeline.steps.iter().zip(&ranges).enumerate() {
        let current = frame.0 < range.end.0;
        let progress = if current {
            let t = (frame.0 - range.start.0) as f64 / range.len_frames() as f64;
            step.ease.apply(t)
        } else {
            1.0
        };

        for action in &step.instant {
            match action {
                Instant::Add { id } => {
                    scene.introduce(*id)?;
                    live.insert(*id, Visual::shown(timeline.group(*id)?));
                }
                Instant::Remove { id } => {
                    scene.remove(*id);
                    live.remove(id);
                }
                Instant::Clear => {
                    for id in scene.clear() {
                        live.remove(&id);
                    }
                }
            }
        }

        let mut moves: Vec<(GroupId, Vec<Change>)> = Vec::new();
        let mut fading = Vec::new();
        for action in &step.timed {
            match action {
                Timed::Create { id } | Timed::Write { id } => {
                    scene.introduce(*id)?;
                    let mut v = Visual::shown(timeline.group(*id)?);
                    v.reveal = progress;
                    live.insert(*id, v);
                }
                Timed::FadeIn { id } => {
                    scene.introduce(*id)?;
                    let mut v = Visual::shown(timeline.group(*id)?);
                    v.opacity = progress;
                    live.insert(*id, v);
                }
                Timed::Animate { id, changes } => match moves.iter_mut().find(|(g, _)| g == id) {
                    Some((_, all)) => all.extend(changes.iter().cloned()),
                    None => moves.push((*id, changes.clone())),
                },
                Timed::FadeOut { id } => fading.push(*id),
            }
        }

        for (id, changes) in &moves {
            if let Some(v) = live.get_mut(id) {
                let full = resolve(changes, &v.group);
                v.group.transform(partial(full, progress));
            }
        }
        for id in &fading {
            if let Some(v) = live.get_mut(id) {
                v.opacity *= 1.0 - progress;
            }
        }

        if current {
            let groups = scene
                .present()
                .iter()
                .filter_map(|id| {
                    live.remove(id).map(|v| EvaluatedGroup {
                        id: *id,
                        group: v.group,
                        opacity: v.opacity,
                        reveal: v.reveal,
                    })
                })
                .collect();
            return Ok(EvaluatedFrame {
                frame,
                step: index,
                progress,
                groups,
            });
        }

        for id in fading.into_iter().chain(step.remove_after.iter().copied()) {
            scene.remove(id);
            live.remove(&id);
        }
    }

    Err(SketchError::timeline(format!(
        "no step owns frame {}",
        frame.0
    )))
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/eval.rs"]
mod tests;
