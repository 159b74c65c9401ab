use crate::{
    animation::change::Change,
    audio::sfx::SoundEffect,
    foundation::color::Color,
    foundation::core::{DOWN, LEFT, ORIGIN, Point, RIGHT, UP, Vec2, degrees},
    foundation::error::SketchResult,
    shapes::bubble::{BubbleText, speech_bubble, thought_bubble},
    shapes::effects::{dust, impact, motion_lines},
    shapes::figure::{FigureSpec, Pose, stick_figure},
    shapes::group::ShapeGroup,
    shapes::jitter::{RandomSource, Seeded, ThreadEntropy},
    shapes::props::{
        arrow, caption, ground, light_stick, peace_sign, phone_frame, suction_arrow, title_card,
    },
    shapes::text::TextMeasure,
    story::StoryOptions,
    timeline::builder::TimelineBuilder,
    timeline::step::{GroupId, Timeline},
};

/// Royal blue, the light-stick wielder.
pub const BLUE: Color = Color::rgb(0x41, 0x69, 0xe1);
/// Orange, the archer.
pub const YELLOW: Color = Color::rgb(0xff, 0xa5, 0x00);

const ARROW_OFFSET: Vec2 = Vec2::new(0.8, 0.0);
const PULLS: usize = 4;
const PULL_HEIGHT: f64 = 0.15;

/// Build "The Light Stick vs. The Bow": eight scenes, a title card and the selfie.
#[tracing::instrument(skip(measure))]
pub fn build_story(opts: &StoryOptions, measure: &mut dyn TextMeasure) -> SketchResult<Timeline> {
    let mut rng: Box<dyn RandomSource> = match opts.seed {
        Some(seed) => Box::new(Seeded::new(seed)),
        None => Box::new(ThreadEntropy),
    };
    let mut s = Script {
        b: TimelineBuilder::new(),
        measure,
        rng: rng.as_mut(),
        sound: opts.sound_effects,
    };

    let cast = s.standoff()?;
    s.first_shot(&cast)?;
    s.rapid_fire(&cast)?;
    s.final_stance(&cast)?;
    let suction = s.suction_reveal(&cast)?;
    s.thwip(&cast, suction)?;
    s.defeat(&cast)?;
    s.acceptance(&cast, suction)?;
    s.title()?;
    s.selfie()?;

    let timeline = s.b.build()?;
    tracing::debug!(
        steps = timeline.steps.len(),
        groups = timeline.groups.len(),
        secs = timeline.total_secs(),
        "story built"
    );
    Ok(timeline)
}

struct Cast {
    blue: GroupId,
    yellow: GroupId,
    stick: GroupId,
}

struct Script<'a> {
    b: TimelineBuilder,
    measure: &'a mut dyn TextMeasure,
    rng: &'a mut dyn RandomSource,
    sound: bool,
}

impl Script<'_> {
    fn center(&self, id: GroupId) -> SketchResult<Point> {
        Ok(self.b.current(id)?.center())
    }

    fn top(&self, id: GroupId) -> SketchResult<Point> {
        Ok(self.b.current(id)?.top())
    }

    /// Write a bubble, hold it, then take it away.
    fn line(
        &mut self,
        bubble: ShapeGroup,
        write_secs: f64,
        hold_secs: f64,
        label: &str,
    ) -> SketchResult<()> {
        let id = self.b.register(bubble);
        self.b.play(write_secs).write(id).label(label).commit()?;
        self.b.wait(hold_secs)?;
        self.b.remove(id);
        Ok(())
    }

    fn say(
        &mut self,
        text: &str,
        who: GroupId,
        look: BubbleText,
        secs: (f64, f64),
    ) -> SketchResult<()> {
        let bubble = speech_bubble(text, self.b.current(who)?, &look, self.measure)?;
        self.line(bubble, secs.0, secs.1, text)
    }

    fn think(
        &mut self,
        text: &str,
        who: GroupId,
        color: Color,
        secs: (f64, f64),
    ) -> SketchResult<()> {
        let look = BubbleText::thought().color(color);
        let bubble = thought_bubble(text, self.b.current(who)?, &look, self.measure)?;
        self.line(bubble, secs.0, secs.1, text)
    }

    /// Fly an arrow from beside yellow to blue, then swat it away with the light stick.
    fn volley(
        &mut self,
        cast: &Cast,
        lift: f64,
        swing_deg: f64,
        (fly_secs, swat_secs): (f64, f64),
    ) -> SketchResult<()> {
        let mut shot = arrow(YELLOW);
        shot.move_to(self.center(cast.yellow)? + ARROW_OFFSET + UP * lift);
        let shot = self.b.add(shot);
        let target = self.center(cast.blue)? + UP * lift;
        self.b
            .play(fly_secs)
            .animate(shot, [Change::move_to(target)])
            .sound(self.sound.then_some(SoundEffect::ArrowShot))
            .label("arrow flies")
            .commit()?;

        let hit = self.center(shot)?;
        let burst = self.b.register(impact(hit));
        self.b
            .play(swat_secs)
            .animate(cast.stick, [Change::rotate(degrees(swing_deg))])
            .fade_out(shot)
            .create(burst)
            .sound(self.sound.then_some(SoundEffect::Deflect))
            .label("deflect")
            .commit()?;
        self.b.remove(burst);
        Ok(())
    }

    fn standoff(&mut self) -> SketchResult<Cast> {
        let blue = stick_figure(
            &FigureSpec::new(BLUE, ORIGIN + LEFT * 3.5 + DOWN * 0.5, Pose::Ready).named("Blue"),
            self.rng,
        );
        let yellow = stick_figure(
            &FigureSpec::new(YELLOW, ORIGIN + RIGHT * 3.5 + DOWN * 0.5, Pose::Calm).named("Yellow"),
            self.rng,
        );
        let stick = light_stick(&blue, self.rng);
        let marks = dust(ORIGIN + LEFT * 2.0, self.rng);

        self.b.add(ground());
        self.b.add(marks);
        let blue = self.b.add(blue);
        let yellow = self.b.add(yellow);
        self.b.wait(0.5)?;

        let stick = self.b.register(stick);
        self.b
            .play(0.2)
            .create(stick)
            .sound(self.sound.then_some(SoundEffect::Ignite))
            .label("ignite")
            .commit()?;

        self.say("This ends now.", blue, BubbleText::speech().color(BLUE), (0.5, 0.8))?;
        self.say("Agreed.", yellow, BubbleText::speech().color(YELLOW), (0.4, 0.5))?;
        Ok(Cast {
            blue,
            yellow,
            stick,
        })
    }

    fn first_shot(&mut self, cast: &Cast) -> SketchResult<()> {
        self.volley(cast, 0.3, 90.0, (0.15, 0.1))?;
        self.think("Too slow.", cast.blue, BLUE, (0.3, 0.3))
    }

    fn rapid_fire(&mut self, cast: &Cast) -> SketchResult<()> {
        let lines = motion_lines(self.b.current(cast.blue)?, RIGHT);
        let lines = self.b.add(lines);
        self.b
            .play(0.4)
            .animate(cast.blue, [Change::move_to(ORIGIN + RIGHT * 0.5 + DOWN * 0.5)])
            .sound(self.sound.then_some(SoundEffect::Whoosh))
            .label("charge")
            .commit()?;
        self.b.remove(lines);

        for i in 0..3 {
            self.volley(cast, 0.2 + i as f64 * 0.15, -60.0, (0.1, 0.08))?;
        }

        self.b
            .play(0.15)
            .animate(cast.yellow, [Change::shift(LEFT * 0.3)])
            .sound(self.sound.then_some(SoundEffect::Surprise))
            .label("step back")
            .commit()?;
        self.think("...Okay.", cast.yellow, YELLOW, (0.2, 0.3))
    }

    fn final_stance(&mut self, cast: &Cast) -> SketchResult<()> {
        self.b
            .play(0.3)
            .animate(cast.blue, [Change::shift(UP * 0.2)])
            .animate(cast.stick, [Change::scale(1.2)])
            .label("raise weapon")
            .commit()?;
        self.say(
            "Any last words?",
            cast.blue,
            BubbleText::speech().color(BLUE),
            (0.4, 0.5),
        )
    }

    fn suction_reveal(&mut self, cast: &Cast) -> SketchResult<GroupId> {
        let pivot = self.center(cast.yellow)?;
        self.b
            .play(0.5)
            .animate(cast.yellow, [Change::rotate_about(degrees(-10.0), pivot)])
            .label("reach back")
            .commit()?;

        let mut cup = suction_arrow();
        cup.move_to(self.center(cast.yellow)? + RIGHT * 0.6 + UP * 0.2);
        let cup = self.b.register(cup);
        self.b.play(0.2).create(cup).label("reveal").commit()?;

        self.say(
            "One.",
            cast.yellow,
            BubbleText::speech().color(YELLOW).bold(),
            (0.3, 0.4),
        )?;
        Ok(cup)
    }

    fn thwip(&mut self, cast: &Cast, cup: GroupId) -> SketchResult<()> {
        let approach = self.top(cast.blue)? + UP * 0.3;
        self.b
            .play(0.15)
            .animate(cup, [Change::move_to(approach)])
            .sound(self.sound.then_some(SoundEffect::Thwip))
            .label("thwip")
            .commit()?;

        let landing = self.top(cast.blue)? + UP * 0.1;
        self.b
            .play(0.08)
            .animate(cup, [Change::move_to(landing)])
            .animate(cast.blue, [Change::shift(DOWN * 0.1)])
            .sound(self.sound.then_some(SoundEffect::Stick))
            .label("stick")
            .commit()?;

        self.think("...What.", cast.blue, BLUE, (0.2, 0.4))?;

        for _ in 0..PULLS {
            for dir in [UP, DOWN] {
                let by = dir * PULL_HEIGHT;
                self.b
                    .play(0.08)
                    .animate(cast.blue, [Change::shift(by)])
                    .animate(cup, [Change::shift(by)])
                    .sound(self.sound.then_some(SoundEffect::Strain))
                    .label("pull")
                    .commit()?;
            }
        }
        Ok(())
    }

    fn defeat(&mut self, cast: &Cast) -> SketchResult<()> {
        self.b
            .play(0.2)
            .animate(cast.stick, [Change::scale(0.5), Change::shift(DOWN * 0.5)])
            .fade_out(cast.stick)
            .sound(self.sound.then_some(SoundEffect::Clatter))
            .label("drop")
            .commit()?;

        let lines = motion_lines(self.b.current(cast.yellow)?, RIGHT);
        let lines = self.b.add(lines);
        let exit = ORIGIN + RIGHT * 6.0 + DOWN * 0.5;
        self.b
            .play(1.0)
            .animate(cast.yellow, [Change::move_to(exit)])
            .animate(lines, [Change::move_to(exit)])
            .sound(self.sound.then_some(SoundEffect::Whoosh))
            .label("walk away")
            .commit()?;
        self.b.remove(lines);

        self.say(
            "Suction cup.\nNon-lethal.\nVery effective.",
            cast.yellow,
            BubbleText::speech().color(YELLOW).font_size(24.0),
            (0.8, 0.8),
        )
    }

    fn acceptance(&mut self, cast: &Cast, cup: GroupId) -> SketchResult<()> {
        let pivot = self.center(cast.blue)?;
        self.b
            .play(0.3)
            .animate(cast.blue, [Change::shift(DOWN * 0.1)])
            .animate(cast.blue, [Change::rotate_about(degrees(-5.0), pivot)])
            .label("slump")
            .commit()?;

        for dir in [UP, DOWN] {
            self.b
                .play(0.08)
                .animate(cup, [Change::shift(dir * 0.1)])
                .sound(self.sound.then_some(SoundEffect::Strain))
                .label("last pull")
                .commit()?;
        }

        self.think("...I can work with this.", cast.blue, BLUE, (0.5, 0.8))
    }

    fn title(&mut self) -> SketchResult<()> {
        self.b.clear();
        let card = title_card("NEW AESTHETIC UNLOCKED", BLUE, YELLOW, self.measure, self.rng)?;
        let card = self.b.register(card);
        self.b
            .play(0.8)
            .write(card)
            .sound(self.sound.then_some(SoundEffect::Fanfare))
            .label("title card")
            .commit()?;
        self.b.wait(1.0)?;
        Ok(())
    }

    fn selfie(&mut self) -> SketchResult<()> {
        self.b.clear();
        let phone = phone_frame();
        let me = stick_figure(
            &FigureSpec::new(BLUE, ORIGIN + DOWN * 0.5, Pose::Selfie),
            self.rng,
        );
        let mut hat = suction_arrow();
        hat.move_to(me.top() + UP * 0.1);
        let peace = peace_sign(BLUE, me.center() + RIGHT * 0.5 + UP * 0.2);
        let tag = caption("#newaesthetic #worthit", &phone, 0.3, self.measure)?;

        self.b.add(phone);
        self.b.add(me);
        self.b.add(hat);
        self.b.add(peace);
        self.b.add(tag);
        self.b.play(1.5).label("selfie").commit()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/story/stickfight.rs"]
mod tests;
