pub mod builder;
pub mod eval;
pub mod player;
pub mod scene;
pub mod step;
