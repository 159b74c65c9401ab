use super::*;
use crate::audio::sfx::SoundBank;

fn cue(bank: &mut SoundBank, effect: SoundEffect, start_secs: f64) -> SoundCue {
    SoundCue {
        step: 0,
        start_secs,
        start_sample: secs_to_sample(start_secs, SAMPLE_RATE),
        effect,
        clip: bank.clip(effect).unwrap(),
    }
}

#[test]
fn frame_to_sample_rounds_at_sixteen_fps() {
    let fps = Fps::new(16, 1).unwrap();
    assert_eq!(frame_to_sample(1, fps, 44_100), 2756);
    assert_eq!(frame_to_sample(16, fps, 44_100), 44_100);
}

#[test]
fn cue_lands_at_its_start_sample() {
    let mut bank = SoundBank::new();
    let c = cue(&mut bank, SoundEffect::Stick, 0.5);
    let track = build_soundtrack(std::slice::from_ref(&c), 1.0).unwrap();
    assert_eq!(track.len(), 44_100);
    let start = 22_050;
    assert!(track[..start].iter().all(|s| *s == 0.0));
    assert_eq!(&track[start..start + c.clip.len()], c.clip.samples());
}

#[test]
fn overlapping_cues_sum_and_clamp() {
    let mut bank = SoundBank::new();
    let cues: Vec<_> = (0..5)
        .map(|_| cue(&mut bank, SoundEffect::Clatter, 0.0))
        .collect();
    let track = build_soundtrack(&cues, 0.2).unwrap();
    let single = bank.clip(SoundEffect::Clatter).unwrap();
    let expected = (single.samples()[10] * 5.0).clamp(-1.0, 1.0);
    assert!((track[10] - expected).abs() < 1e-6);
    assert!(track.iter().all(|s| (-1.0..=1.0).contains(s)));
}

#[test]
fn cues_past_the_end_are_truncated() {
    let mut bank = SoundBank::new();
    let cues = [
        cue(&mut bank, SoundEffect::Fanfare, 0.9),
        cue(&mut bank, SoundEffect::Fanfare, 5.0),
    ];
    let track = build_soundtrack(&cues, 1.0).unwrap();
    assert_eq!(track.len(), 44_100);
}

#[test]
fn negative_length_is_rejected() {
    assert!(build_soundtrack(&[], -1.0).is_err());
    assert!(build_soundtrack(&[], 0.0).unwrap().is_empty());
}

#[test]
fn writes_little_endian_floats() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/out.f32le");
    write_mix_to_f32le_file(&[0.5, -1.0], &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), 8);
    assert_eq!(&bytes[..4], &0.5f32.to_le_bytes());
    assert_eq!(&bytes[4..], &(-1.0f32).to_le_bytes());
}
