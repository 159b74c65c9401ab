//! The stickman fight script.

mod stickfight;

pub use stickfight::{BLUE, YELLOW, build_story};

/// Knobs for [`build_story`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StoryOptions {
    /// Attach sound cues to the steps that have one.
    pub sound_effects: bool,
    /// Seed for the hand-drawn wiggle. `None` draws from thread entropy, so every build differs.
    pub seed: Option<u64>,
}

impl Default for StoryOptions {
    fn default() -> Self {
        Self {
            sound_effects: true,
            seed: None,
        }
    }
}

impl StoryOptions {
    pub fn silent(mut self) -> Self {
        self.sound_effects = false;
        self
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
