//! Core data types for the conversion pipeline.

mod animation;

pub use animation::{Animation, AnimationSet, Region};
