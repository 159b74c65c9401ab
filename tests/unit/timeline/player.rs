use pretty_assertions::assert_eq;

use super::*;
use crate::{
    audio::mix::build_soundtrack,
    audio::sfx::SoundEffect,
    foundation::color::Color,
    foundation::core::{FrameIndex, Point, Vec2},
    foundation::error::SketchError,
    shapes::primitive::{Primitive, Style},
    timeline::builder::TimelineBuilder,
};

fn dot(name: &str) -> ShapeGroup {
    ShapeGroup::new(name).with(Primitive::circle(
        "d",
        Point::ORIGIN,
        0.1,
        Style::stroke(Color::BLACK, 1.0),
    ))
}

fn fps() -> Fps {
    Fps::new(16, 1).unwrap()
}

fn two_step_script() -> (Timeline, GroupId, GroupId) {
    let mut b = TimelineBuilder::new();
    let a = b.add(dot("a"));
    let c = b.register(dot("c"));
    b.play(0.5)
        .create(c)
        .animate(a, [Change::shift(Vec2::new(1.0, 0.0))])
        .sound(SoundEffect::Ignite)
        .commit()
        .unwrap();
    b.remove(a);
    b.play(0.25).fade_out(c).commit().unwrap();
    (b.build().unwrap(), a, c)
}

#[test]
fn events_follow_authored_order() {
    let (t, a, c) = two_step_script();
    let mut driver = RecordingDriver::new();
    let summary = play(&t, fps(), &mut driver, &mut SoundBank::new()).unwrap();

    let frames = |s, e| FrameRange::new(FrameIndex(s), FrameIndex(e)).unwrap();
    assert_eq!(
        driver.events,
        vec![
            PlaybackEvent::BeginStep {
                index: 0,
                frames: frames(0, 8)
            },
            PlaybackEvent::Introduce {
                id: a,
                name: "a".into(),
                entrance: Entrance::Cut
            },
            PlaybackEvent::Introduce {
                id: c,
                name: "c".into(),
                entrance: Entrance::Create
            },
            PlaybackEvent::Mutate { id: a, changes: 1 },
            PlaybackEvent::Sound {
                step: 0,
                effect: SoundEffect::Ignite,
                start_secs: 0.0
            },
            PlaybackEvent::Remove { id: a },
            PlaybackEvent::EndStep { index: 0 },
            PlaybackEvent::BeginStep {
                index: 1,
                frames: frames(8, 12)
            },
            PlaybackEvent::FadeOut { id: c },
            PlaybackEvent::Remove { id: c },
            PlaybackEvent::EndStep { index: 1 },
        ]
    );
    assert_eq!(summary.steps, 2);
    assert_eq!(summary.total_frames, 12);
    assert_eq!(summary.cues.len(), 1);
}

#[test]
fn later_step_groups_never_appear_before_earlier_step_ends() {
    let (t, _, c) = two_step_script();
    let mut driver = RecordingDriver::new();
    play(&t, fps(), &mut driver, &mut SoundBank::new()).unwrap();
    let end0 = driver
        .events
        .iter()
        .position(|e| *e == PlaybackEvent::EndStep { index: 0 })
        .unwrap();
    let fade = driver
        .events
        .iter()
        .position(|e| *e == PlaybackEvent::FadeOut { id: c })
        .unwrap();
    assert!(fade > end0);
}

#[test]
fn removing_twice_emits_one_remove() {
    let mut b = TimelineBuilder::new();
    let a = b.add(dot("a"));
    b.wait(0.1).unwrap();
    b.remove(a);
    b.remove(a);
    b.wait(0.1).unwrap();
    let t = b.build().unwrap();

    let mut driver = RecordingDriver::new();
    play(&t, fps(), &mut driver, &mut SoundBank::new()).unwrap();
    let removes = driver
        .events
        .iter()
        .filter(|e| matches!(e, PlaybackEvent::Remove { .. }))
        .count();
    assert_eq!(removes, 1);
}

#[test]
fn clear_removes_everything_present() {
    let mut b = TimelineBuilder::new();
    let a = b.add(dot("a"));
    let c = b.add(dot("c"));
    b.wait(0.1).unwrap();
    b.clear();
    b.wait(0.1).unwrap();
    let t = b.build().unwrap();

    let mut driver = RecordingDriver::new();
    play(&t, fps(), &mut driver, &mut SoundBank::new()).unwrap();
    let tail: Vec<_> = driver.events.iter().rev().take(3).rev().cloned().collect();
    assert_eq!(
        tail,
        vec![
            PlaybackEvent::Remove { id: a },
            PlaybackEvent::Remove { id: c },
            PlaybackEvent::EndStep { index: 1 },
        ]
    );
}

#[test]
fn repeated_sounds_share_one_clip() {
    let mut b = TimelineBuilder::new();
    for _ in 0..3 {
        b.play(0.1).sound(SoundEffect::ArrowShot).commit().unwrap();
    }
    let t = b.build().unwrap();
    let mut bank = SoundBank::new();
    let summary = play(&t, fps(), &mut RecordingDriver::new(), &mut bank).unwrap();
    assert_eq!(bank.len(), 1);
    assert!(std::sync::Arc::ptr_eq(&summary.cues[0].clip, &summary.cues[2].clip));
    assert_eq!(summary.cues[1].start_secs, 0.125);
}

#[test]
fn cues_start_on_the_sample_of_their_first_frame() {
    let mut b = TimelineBuilder::new();
    b.wait(0.5).unwrap();
    b.play(0.1).sound(SoundEffect::Stick).commit().unwrap();
    let t = b.build().unwrap();
    let summary = play(&t, fps(), &mut RecordingDriver::new(), &mut SoundBank::new()).unwrap();
    let cue = &summary.cues[0];
    assert_eq!(cue.start_sample, 22_050);
    assert_eq!(cue.start_sample, frame_to_sample(8, fps(), SAMPLE_RATE));

    let track = build_soundtrack(&summary.cues, 1.0).unwrap();
    assert!(track[..22_050].iter().all(|s| *s == 0.0));
    assert_eq!(&track[22_050..22_050 + cue.clip.len()], cue.clip.samples());
}

struct FailOnMutate(RecordingDriver);

impl PlaybackDriver for FailOnMutate {
    fn begin_step(
        &mut self,
        index: usize,
        step: &AnimationStep,
        frames: FrameRange,
    ) -> SketchResult<()> {
        self.0.begin_step(index, step, frames)
    }
    fn introduce(
        &mut self,
        id: GroupId,
        group: &ShapeGroup,
        entrance: Entrance,
    ) -> SketchResult<()> {
        self.0.introduce(id, group, entrance)
    }
    fn mutate(&mut self, _id: GroupId, _changes: &[Change], _ease: Ease) -> SketchResult<()> {
        Err(SketchError::validation("renderer exploded"))
    }
    fn fade_out(&mut self, id: GroupId) -> SketchResult<()> {
        self.0.fade_out(id)
    }
    fn remove(&mut self, id: GroupId) -> SketchResult<()> {
        self.0.remove(id)
    }
    fn attach_sound(&mut self, cue: &SoundCue) -> SketchResult<()> {
        self.0.attach_sound(cue)
    }
    fn end_step(&mut self, index: usize) -> SketchResult<()> {
        self.0.end_step(index)
    }
}

#[test]
fn driver_error_aborts_the_run() {
    let (t, _, _) = two_step_script();
    let mut driver = FailOnMutate(RecordingDriver::new());
    let err = play(&t, fps(), &mut driver, &mut SoundBank::new()).unwrap_err();
    assert!(err.to_string().contains("renderer exploded"));
    assert!(
        !driver
            .0
            .events
            .iter()
            .any(|e| matches!(e, PlaybackEvent::EndStep { .. }))
    );
}

#[test]
fn invalid_timeline_never_reaches_the_driver() {
    let t = Timeline {
        groups: vec![dot("a")],
        steps: vec![AnimationStep::new(-1.0)],
    };
    let mut driver = RecordingDriver::new();
    assert!(play(&t, fps(), &mut driver, &mut SoundBank::new()).is_err());
    assert!(driver.events.is_empty());
}
