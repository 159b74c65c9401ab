pub mod change;
pub mod ease;
