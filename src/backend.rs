pub mod band;
pub mod frequency;
