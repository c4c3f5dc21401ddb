//! # Config Crate
//!
//! Centralized configuration constants for the enclosure mesh generator.
//! Tessellation counts, the quantization grid and the command-line defaults
//! are defined here so the mesh library and the CLI agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{arc_segments, QUARTER_ARC_SEGMENTS, FULL_ARC_SEGMENTS};
//!
//! assert_eq!(arc_segments(false), QUARTER_ARC_SEGMENTS);
//! assert_eq!(arc_segments(true), FULL_ARC_SEGMENTS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Grid Aligned**: Full-circle tessellation is a multiple of the quarter arc
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
