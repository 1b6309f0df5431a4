//! Spriterot - Library for rotating sprite strips
//!
//! This library provides functionality to:
//! - Validate the geometry of fixed-cell sprite strips
//! - Pair every cell with a 90°-rotated copy on a fresh canvas
//! - Scrub decorative border colors against a background fill

pub mod cli;
pub mod codec;
pub mod color;
pub mod compose;
pub mod config;
pub mod geometry;
pub mod presets;
pub mod processor;
pub mod rotate;
