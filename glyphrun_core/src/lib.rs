//! Core geometry and glyph data types.
//!
//! This crate provides the plain data produced by the shaping pipeline:
//! points, drawing paths, positioned glyphs and font metrics. It contains
//! no font parsing, shaping, or platform-specific code.

#![deny(unsafe_code)]

pub mod glyph;
pub mod path;
pub mod point;

pub use glyph::{Metrics, PositionedGlyph};
pub use path::{Path, PathCommand};
pub use point::Point;
