use std::{path::Path, sync::Arc};

use crate::{
    audio::sfx::SoundEffect,
    audio::synth::{SAMPLE_RATE, SoundClip},
    foundation::core::Fps,
    foundation::error::{SketchError, SketchResult},
};

/// A clip placed at an absolute time on the soundtrack.
#[derive(Clone, Debug)]
pub struct SoundCue {
    /// Index of the step that attached the sound.
    pub step: usize,
    pub start_secs: f64,
    /// First sample of the clip, aligned to the frame the step starts on.
    pub start_sample: u64,
    pub effect: SoundEffect,
    pub clip: Arc<SoundClip>,
}

/// Nearest sample for a point in time.
pub fn secs_to_sample(secs: f64, sample_rate: u32) -> u64 {
    (secs * f64::from(sample_rate)).round().max(0.0) as u64
}

/// Sample index of `frame_delta` frames, rounded to nearest.
pub fn frame_to_sample(frame_delta: u64, fps: Fps, sample_rate: u32) -> u64 {
    let num = u128::from(frame_delta) * u128::from(sample_rate) * u128::from(fps.den);
    let den = u128::from(fps.num);
    ((num + (den / 2)) / den) as u64
}

/// Mix `cues` onto one mono track of `total_secs`.
///
/// Overlapping clips are summed, the result is clamped to `[-1, 1]`, and anything past the end is
/// cut off.
#[tracing::instrument(level = "debug", skip(cues), fields(cues = cues.len()))]
pub fn build_soundtrack(cues: &[SoundCue], total_secs: f64) -> SketchResult<Vec<f32>> {
    if !total_secs.is_finite() || total_secs < 0.0 {
        return Err(SketchError::audio(format!(
            "soundtrack length must be finite and >= 0, got {total_secs}"
        )));
    }
    let total = secs_to_sample(total_secs, SAMPLE_RATE) as usize;
    let mut out = vec![0.0f32; total];

    for cue in cues {
        if cue.clip.sample_rate() != SAMPLE_RATE {
            return Err(SketchError::audio(format!(
                "cue '{}' has sample rate {}, expected {SAMPLE_RATE}",
                cue.effect,
                cue.clip.sample_rate()
            )));
        }
        let start = cue.start_sample as usize;
        if start >= total {
            tracing::debug!(effect = %cue.effect, start, "cue starts after the end, dropped");
            continue;
        }
        for (dst, &s) in out[start..].iter_mut().zip(cue.clip.samples()) {
            *dst += s;
        }
    }

    for s in &mut out {
        *s = s.clamp(-1.0, 1.0);
    }
    Ok(out)
}

pub fn write_mix_to_f32le_file(samples: &[f32], out_path: &Path) -> SketchResult<()> {
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            SketchError::audio(format!(
                "failed to create soundtrack output directory '{}': {e}",
                parent.display()
            ))
        })?;
    }

    let mut bytes = Vec::<u8>::with_capacity(samples.len() * 4);
    for &sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    std::fs::write(out_path, bytes).map_err(|e| {
        SketchError::audio(format!(
            "failed to write soundtrack file '{}': {e}",
            out_path.display()
        ))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/audio/mix.rs"]
mod tests;
