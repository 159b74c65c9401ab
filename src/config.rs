//! Settings handed to the rendering collaborator.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    foundation::color::Color,
    foundation::core::Fps,
    foundation::error::{SketchError, SketchResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub frame_rate: u32,
    pub pixel_width: u32,
    pub pixel_height: u32,
    /// Scene units per frame height are `pixel_height / pixels_per_unit`.
    pub pixels_per_unit: f64,
    pub background: Color,
    /// Base name (no extension) offered to downloaders.
    pub output_file: String,
    pub scene_name: String,
    /// Name of the script module; one directory level of the output path.
    pub module_name: String,
    pub media_dir: PathBuf,
    pub disable_caching: bool,
    pub save_last_frame: bool,
    pub save_pngs: bool,
    pub show_progress: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            frame_rate: 16,
            pixel_width: 720,
            pixel_height: 1280,
            pixels_per_unit: 160.0,
            background: Color::rgb(0xf0, 0xf0, 0xf0),
            output_file: "stickman_fight".to_string(),
            scene_name: "StickmanFight".to_string(),
            module_name: "main".to_string(),
            media_dir: PathBuf::from("media"),
            disable_caching: true,
            save_last_frame: false,
            save_pngs: false,
            show_progress: false,
        }
    }
}

impl RenderConfig {
    pub fn from_path(path: &Path) -> SketchResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read render config '{}'", path.display()))?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SketchResult<()> {
        if self.frame_rate == 0 {
            return Err(SketchError::validation("frame_rate must be > 0"));
        }
        if self.pixel_width == 0 || self.pixel_height == 0 {
            return Err(SketchError::validation(
                "pixel_width/pixel_height must be > 0",
            ));
        }
        if !self.pixels_per_unit.is_finite() || self.pixels_per_unit <= 0.0 {
            return Err(SketchError::validation(
                "pixels_per_unit must be finite and > 0",
            ));
        }
        for (field, value) in [
            ("output_file", &self.output_file),
            ("scene_name", &self.scene_name),
            ("module_name", &self.module_name),
        ] {
            if value.trim().is_empty() {
                return Err(SketchError::validation(format!("{field} must be non-empty")));
            }
            if value.contains(['/', '\\']) {
                return Err(SketchError::validation(format!(
                    "{field} must not contain path separators"
                )));
            }
        }
        Ok(())
    }

    pub fn fps(&self) -> SketchResult<Fps> {
        Fps::new(self.frame_rate, 1)
    }

    /// Quality directory name, e.g. `720p16`.
    pub fn quality_dir(&self) -> String {
        format!(
            "{}p{}",
            self.pixel_width.min(self.pixel_height),
            self.frame_rate
        )
    }

    /// Where the renderer writes the finished video:
    /// `{media_dir}/videos/{module}/{quality}/{scene}.mp4`.
    pub fn video_path(&self) -> PathBuf {
        self.media_dir
            .join("videos")
            .join(&self.module_name)
            .join(self.quality_dir())
            .join(format!("{}.mp4", self.scene_name))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
