use super::*;
use crate::{
    foundation::color::Color,
    foundation::core::{Point, Vec2},
    shapes::primitive::{Primitive, Style},
};

fn dot(name: &str, at: Point) -> ShapeGroup {
    ShapeGroup::new(name).with(Primitive::circle("d", at, 0.1, Style::stroke(Color::BLACK, 1.0)))
}

#[test]
fn mirror_tracks_committed_changes() {
    let mut b = TimelineBuilder::new();
    let a = b.add(dot("a", Point::ORIGIN));
    b.wait(0.5).unwrap();
    b.play(0.2)
        .animate(a, [Change::move_to(Point::new(2.0, 1.0))])
        .commit()
        .unwrap();
    assert!((b.current(a).unwrap().center() - Point::new(2.0, 1.0)).hypot() < 1e-12);

    let t = b.build().unwrap();
    assert_eq!(t.group(a).unwrap().center(), Point::ORIGIN);
}

#[test]
fn queued_adds_land_on_next_step_start() {
    let mut b = TimelineBuilder::new();
    let a = b.add(dot("a", Point::ORIGIN));
    let c = b.add(dot("c", Point::ORIGIN));
    b.wait(0.5).unwrap();
    let t = b.build().unwrap();
    assert_eq!(
        t.steps[0].instant,
        vec![Instant::Add { id: a }, Instant::Add { id: c }]
    );
}

#[test]
fn removal_attaches_to_previous_step() {
    let mut b = TimelineBuilder::new();
    let bubble = b.register(dot("bubble", Point::ORIGIN));
    b.play(0.5).write(bubble).commit().unwrap();
    b.wait(0.8).unwrap();
    b.remove(bubble);
    b.wait(0.1).unwrap();
    let t = b.build().unwrap();
    assert_eq!(t.steps[1].remove_after, vec![bubble]);
    assert!(t.steps[2].instant.is_empty());
}

#[test]
fn removal_of_pending_add_is_queued_after_it() {
    let mut b = TimelineBuilder::new();
    b.wait(0.1).unwrap();
    let a = b.add(dot("a", Point::ORIGIN));
    b.remove(a);
    b.wait(0.1).unwrap();
    let t = b.build().unwrap();
    assert_eq!(
        t.steps[1].instant,
        vec![Instant::Add { id: a }, Instant::Remove { id: a }]
    );
    assert!(t.steps[0].remove_after.is_empty());
}

#[test]
fn clear_then_add_builds_a_fresh_scene() {
    let mut b = TimelineBuilder::new();
    let old = b.add(dot("old", Point::ORIGIN));
    b.wait(0.2).unwrap();
    b.clear();
    let new = b.add(dot("new", Point::ORIGIN));
    b.wait(1.5).unwrap();
    let t = b.build().unwrap();
    assert_eq!(
        t.steps[1].instant,
        vec![Instant::Clear, Instant::Add { id: new }]
    );
    assert_ne!(old, new);
}

#[test]
fn trailing_instant_actions_are_rejected() {
    let mut b = TimelineBuilder::new();
    b.add(dot("a", Point::ORIGIN));
    assert!(b.build().is_err());
}

#[test]
fn non_positive_duration_is_rejected_at_commit() {
    let mut b = TimelineBuilder::new();
    assert!(b.wait(0.0).is_err());
    assert!(b.wait(-0.1).is_err());
    assert!(b.wait(f64::NAN).is_err());
    assert!(b.is_empty());
}

#[test]
fn unknown_group_is_rejected_at_commit() {
    let mut b = TimelineBuilder::new();
    let err = b.play(0.1).create(GroupId(42)).commit().unwrap_err();
    assert!(err.to_string().contains("unknown group"));
}

#[test]
fn two_animations_on_one_group_compose() {
    let mut b = TimelineBuilder::new();
    let a = b.add(dot("a", Point::ORIGIN));
    b.play(0.3)
        .animate(a, [Change::shift(Vec2::new(0.0, -0.1))])
        .animate(a, [Change::shift(Vec2::new(1.0, 0.0))])
        .sound(SoundEffect::Whoosh)
        .ease(Ease::Linear)
        .label("slide")
        .commit()
        .unwrap();
    assert!((b.current(a).unwrap().center() - Point::new(1.0, -0.1)).hypot() < 1e-12);
    let t = b.build().unwrap();
    assert_eq!(t.steps[0].sound, Some(SoundEffect::Whoosh));
    assert_eq!(t.steps[0].label.as_deref(), Some("slide"));
}

#[test]
fn build_runs_lifecycle_validation() {
    let mut b = TimelineBuilder::new();
    let a = b.register(dot("a", Point::ORIGIN));
    b.play(0.1).animate(a, [Change::scale(2.0)]).commit().unwrap();
    let err = b.build().unwrap_err();
    assert!(err.to_string().contains("not present"));
}
