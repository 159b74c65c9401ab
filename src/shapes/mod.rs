pub mod bubble;
pub mod effects;
pub mod figure;
pub mod group;
pub mod jitter;
pub mod primitive;
pub mod props;
pub mod text;
