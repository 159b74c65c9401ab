pub mod mix;
pub mod sfx;
pub mod synth;
