//! Turns shaped glyphs into positioned outlines.

use glyphrun_core::{Point, PositionedGlyph};

use super::ShapedGlyph;
use crate::outline::GlyphOutlines;

/// Walk the shaped stream with a pen starting at the origin.
///
/// Each glyph lands at `pen + offset`, then the pen moves by its advance.
/// Glyphs without an outline still move the pen but produce no output.
pub fn assemble(shaped: &[ShapedGlyph], outlines: &impl GlyphOutlines) -> Vec<PositionedGlyph> {
    let mut pen = Point::ZERO;
    let mut out = Vec::with_capacity(shaped.len());

    for glyph in shaped {
        let advance = Point::new(glyph.x_advance, glyph.y_advance);
        if let Some(path) = outlines.glyph_outline(glyph.glyph_id) {
            out.push(PositionedGlyph {
                glyph_id: glyph.glyph_id,
                path,
                position: pen + Point::new(glyph.x_offset, glyph.y_offset),
                advance,
                cluster: glyph.cluster,
            });
        }
        pen += advance;
    }

    out
}
