//! Shape text into positioned glyph outlines.
//!
//! Load a [`Font`] from a file, bytes, or a family name resolved through the
//! platform [`FontRepository`], then call [`Font::shape`] to turn a string
//! into [`PositionedGlyph`]s: glyph IDs with their outline paths, pen
//! positions, advances and source clusters, all in a 1000-units-per-em
//! working space.
//!
//! ```no_run
//! use glyphrun::{Font, FontFeature};
//!
//! let font = Font::from_family("Inter", Some("Bold"))?;
//! for glyph in font.shape("office", &[FontFeature::standard_ligatures(false)]) {
//!     println!("{} at {}: {}", glyph.glyph_id, glyph.position, glyph.positioned_path());
//! }
//! # Ok::<(), glyphrun::FontError>(())
//! ```

pub mod config;
pub mod error;
pub mod features;
pub mod font;
pub mod outline;
pub mod repository;
pub mod shaper;
pub mod variation;

#[cfg(test)]
pub(crate) mod testing;

pub use glyphrun_core::{Metrics, Path, PathCommand, Point, PositionedGlyph};
pub use rustybuzz::ttf_parser::Tag;

pub use config::Config;
pub use error::{ErrorKind, FontError, LoadOrigin, Result};
pub use features::FontFeature;
pub use font::{FaceInfo, Font, WORKING_UNITS_PER_EM};
pub use outline::{GlyphOutlines, OutlineExtractor};
pub use repository::{
    FontFamily, FontMatch, FontRepository, FontSource, MemorySource, StyleDescriptor, SystemSource,
    UnsupportedSource,
};
pub use shaper::{Direction, ShapeOptions, ShapedGlyph};
pub use variation::{NamedInstance, VariationAxis, VariationCoordinator, VariationSetting};
