use std::f64::consts::TAU;

use crate::foundation::error::{SketchError, SketchResult};

/// Output rate of every synthesized clip.
pub const SAMPLE_RATE: u32 = 44_100;
/// Peak level of the generated sine.
pub const AMPLITUDE: f64 = 0.3;
/// Longest clip [`synthesize`] will render.
pub const MAX_DURATION_SECS: f64 = 600.0;

/// Immutable mono sample buffer plus the parameters it was generated from.
#[derive(Clone, Debug, PartialEq)]
pub struct SoundClip {
    frequencies: Vec<f64>,
    duration_secs: f64,
    sample_rate: u32,
    samples: Vec<f32>,
}

impl SoundClip {
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Raw little-endian f32 PCM.
    pub fn to_f32le_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::<u8>::with_capacity(self.samples.len() * 4);
        for &s in &self.samples {
            bytes.extend_from_slice(&s.to_le_bytes());
        }
        bytes
    }
}

/// Sample count for a duration at [`SAMPLE_RATE`].
pub fn sample_count(duration_secs: f64) -> u64 {
    (f64::from(SAMPLE_RATE) * duration_secs).round().max(0.0) as u64
}

/// Render `frequencies` back to back as pure sine segments filling `duration_secs`.
///
/// Segment `i` of `n` covers samples `[total*i/n, total*(i+1)/n)`, so the clip length only depends
/// on the duration. Each segment starts at phase zero and segments are joined without a cross-fade.
#[tracing::instrument(level = "debug", skip(frequencies), fields(n = frequencies.len()))]
pub fn synthesize(frequencies: &[f64], duration_secs: f64) -> SketchResult<SoundClip> {
    if frequencies.is_empty() {
        return Err(SketchError::audio("frequency list must be non-empty"));
    }
    if let Some(bad) = frequencies.iter().find(|f| !f.is_finite() || **f <= 0.0) {
        return Err(SketchError::audio(format!(
            "frequency must be finite and > 0, got {bad}"
        )));
    }
    if !duration_secs.is_finite() || duration_secs <= 0.0 {
        return Err(SketchError::audio(format!(
            "duration must be finite and > 0, got {duration_secs}"
        )));
    }
    if duration_secs > MAX_DURATION_SECS {
        return Err(SketchError::audio(format!(
            "duration must be at most {MAX_DURATION_SECS}s, got {duration_secs}"
        )));
    }

    let total = sample_count(duration_secs);
    let n = frequencies.len() as u64;
    let rate = f64::from(SAMPLE_RATE);
    let mut samples = Vec::<f32>::with_capacity(total as usize);
    for (i, &freq) in (0u64..).zip(frequencies) {
        let start = total * i / n;
        let end = total * (i + 1) / n;
        for k in 0..(end - start) {
            let t = k as f64 / rate;
            samples.push(((TAU * freq * t).sin() * AMPLITUDE) as f32);
        }
    }

    Ok(SoundClip {
        frequencies: frequencies.to_vec(),
        duration_secs,
        sample_rate: SAMPLE_RATE,
        samples,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/audio/synth.rs"]
mod tests;
