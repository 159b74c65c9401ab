use std::{collections::HashMap, fmt, sync::Arc};

use crate::{
    audio::synth::{SoundClip, synthesize},
    foundation::error::{SketchError, SketchResult},
};

/// Named sound presets used by the fight.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SoundEffect {
    /// Light stick powering on.
    Ignite,
    /// Bowstring release.
    ArrowShot,
    /// Arrow bouncing off the light stick.
    Deflect,
    /// Fast run or walk.
    Whoosh,
    /// Surprised step back.
    Surprise,
    /// Suction arrow release.
    Thwip,
    /// Suction cup landing.
    Stick,
    /// Tugging at a stuck arrow.
    Strain,
    /// Dropped weapon.
    Clatter,
    /// Title card flourish.
    Fanfare,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 10] = [
        Self::Ignite,
        Self::ArrowShot,
        Self::Deflect,
        Self::Whoosh,
        Self::Surprise,
        Self::Thwip,
        Self::Stick,
        Self::Strain,
        Self::Clatter,
        Self::Fanfare,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Ignite => "ignite",
            Self::ArrowShot => "arrow_shot",
            Self::Deflect => "deflect",
            Self::Whoosh => "whoosh",
            Self::Surprise => "surprise",
            Self::Thwip => "thwip",
            Self::Stick => "stick",
            Self::Strain => "strain",
            Self::Clatter => "clatter",
            Self::Fanfare => "fanfare",
        }
    }

    pub fn from_name(name: &str) -> SketchResult<Self> {
        let wanted = name.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|e| e.name() == wanted)
            .ok_or_else(|| SketchError::validation(format!("unknown sound effect '{name}'")))
    }

    pub fn frequencies(self) -> &'static [f64] {
        match self {
            Self::Ignite => &[220.0, 440.0, 880.0],
            Self::ArrowShot => &[900.0, 700.0],
            Self::Deflect => &[1400.0, 1100.0, 1600.0],
            Self::Whoosh => &[180.0, 140.0, 110.0],
            Self::Surprise => &[500.0, 750.0],
            Self::Thwip => &[300.0, 600.0, 1200.0],
            Self::Stick => &[160.0, 90.0],
            Self::Strain => &[200.0, 230.0],
            Self::Clatter => &[420.0, 310.0, 380.0, 260.0],
            Self::Fanfare => &[523.25, 659.25, 783.99, 1046.5],
        }
    }

    pub fn duration_secs(self) -> f64 {
        match self {
            Self::Ignite => 0.2,
            Self::ArrowShot => 0.15,
            Self::Deflect => 0.1,
            Self::Whoosh => 0.4,
            Self::Surprise => 0.15,
            Self::Thwip => 0.15,
            Self::Stick => 0.08,
            Self::Strain => 0.08,
            Self::Clatter => 0.2,
            Self::Fanfare => 0.8,
        }
    }
}

impl fmt::Display for SoundEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lazily synthesized clips, one per preset, shared by every timeline position that plays it.
#[derive(Debug, Default)]
pub struct SoundBank {
    clips: HashMap<SoundEffect, Arc<SoundClip>>,
}

impl SoundBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clip(&mut self, effect: SoundEffect) -> SketchResult<Arc<SoundClip>> {
        if let Some(clip) = self.clips.get(&effect) {
            return Ok(clip.clone());
        }
        tracing::debug!(%effect, "synthesizing sound effect");
        let clip = Arc::new(synthesize(effect.frequencies(), effect.duration_secs())?);
        self.clips.insert(effect, clip.clone());
        Ok(clip)
    }

    /// Number of presets synthesized so far.
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/audio/sfx.rs"]
mod tests;
