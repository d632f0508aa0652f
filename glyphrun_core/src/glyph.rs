//! Positioned glyphs and font metrics.

use crate::{Path, Point};

/// One shaped glyph with its outline and pen geometry.
///
/// `path` is untranslated (glyph origin at 0,0). `position` is the pen
/// position including the shaper's per-glyph offset; `advance` is the
/// distance to the next pen position.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedGlyph {
    /// Glyph ID within the font face (not a Unicode codepoint).
    pub glyph_id: u16,
    /// Outline in working units, not translated.
    pub path: Path,
    /// Where to place the glyph origin.
    pub position: Point,
    /// Pen movement to the next glyph.
    pub advance: Point,
    /// Byte offset into the source UTF-8 text of the cluster this glyph
    /// belongs to. Glyphs sharing a cluster came from the same characters.
    pub cluster: u32,
}

impl PositionedGlyph {
    /// The outline translated to `position`.
    pub fn positioned_path(&self) -> Path {
        self.path.translated(self.position)
    }
}

/// Vertical font metrics.
///
/// `descender` is negative for fonts that place it below the baseline
/// (the common case). `line_height` is `ascender - descender + line_gap`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub units_per_em: u16,
    pub ascender: f64,
    pub descender: f64,
    pub line_gap: f64,
    pub line_height: f64,
}

impl Metrics {
    /// Build metrics from raw design-unit values.
    pub fn new(units_per_em: u16, ascender: f64, descender: f64, line_gap: f64) -> Self {
        Self {
            units_per_em,
            ascender,
            descender,
            line_gap,
            line_height: ascender - descender + line_gap,
        }
    }

    /// Multiply every length by `factor`. `units_per_em` is kept as declared.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            units_per_em: self.units_per_em,
            ascender: self.ascender * factor,
            descender: self.descender * factor,
            line_gap: self.line_gap * factor,
            line_height: self.line_height * factor,
        }
    }
}
