#![forbid(unsafe_code)]

pub mod animation;
pub mod audio;
pub mod config;
pub mod foundation;
pub mod publish;
pub mod shapes;
pub mod story;
pub mod timeline;

pub use animation::change::Change;
pub use animation::ease::Ease;
pub use audio::mix::{SoundCue, build_soundtrack, write_mix_to_f32le_file};
pub use audio::sfx::{SoundBank, SoundEffect};
pub use audio::synth::{SAMPLE_RATE, SoundClip, synthesize};
pub use config::RenderConfig;
pub use foundation::color::Color;
pub use foundation::core::{Affine, Fps, FrameIndex, FrameRange, Point, Rect, Size, Vec2};
pub use foundation::error::{SketchError, SketchResult};
pub use publish::{DownloadPage, Published, publish};
pub use shapes::figure::{FigureSpec, Pose, stick_figure};
pub use shapes::group::ShapeGroup;
pub use shapes::jitter::{Midpoint, RandomSource, Seeded, ThreadEntropy};
pub use shapes::primitive::{Geometry, Primitive, Style};
pub use shapes::text::{ApproxTextMeasure, ParleyTextMeasure, TextMeasure, TextStyle};
pub use story::{StoryOptions, build_story};
pub use timeline::builder::TimelineBuilder;
pub use timeline::eval::{EvaluatedFrame, EvaluatedGroup, eval_frame};
pub use timeline::player::{
    Entrance, PlaybackDriver, PlaybackEvent, PlaybackSummary, RecordingDriver, play,
};
pub use timeline::step::{AnimationStep, GroupId, Instant, Timed, Timeline};
