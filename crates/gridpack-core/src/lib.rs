#![forbid(unsafe_code)]

//! Core: pixel geometry and the size constraints a host hands to a layout pass.

pub mod geometry;
pub mod sizing;

pub use geometry::{Rect, Sides, Size};
pub use sizing::SizeConstraint;
