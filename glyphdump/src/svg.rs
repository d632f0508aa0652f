//! Output formats.

use std::io::{self, Write};

use glyphrun::{Metrics, PositionedGlyph};

/// One line per glyph: id, cluster, pen position, advance, path data.
pub fn write_glyph_lines(out: &mut impl Write, glyphs: &[PositionedGlyph]) -> io::Result<()> {
    for glyph in glyphs {
        writeln!(
            out,
            "gid={} cluster={} pos={} adv={} d=\"{}\"",
            glyph.glyph_id,
            glyph.cluster,
            glyph.position,
            glyph.advance,
            glyph.path.to_svg_data()
        )?;
    }
    Ok(())
}

/// A standalone SVG document with one `<path>` per glyph.
///
/// Outlines are y-up, so the group flips them; the view box spans the run
/// width and the ascender-to-descender band of `metrics`.
pub fn write_document(
    out: &mut impl Write,
    glyphs: &[PositionedGlyph],
    metrics: &Metrics,
    width: f64,
) -> io::Result<()> {
    let height = metrics.ascender - metrics.descender;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 {} {} {}">"#,
        -metrics.ascender,
        width.max(0.0),
        height
    )?;
    writeln!(out, r#"  <g transform="scale(1 -1)">"#)?;
    for glyph in glyphs {
        writeln!(
            out,
            r#"    <path data-gid="{}" data-cluster="{}" d="{}"/>"#,
            glyph.glyph_id,
            glyph.cluster,
            glyph.positioned_path().to_svg_data()
        )?;
    }
    writeln!(out, "  </g>")?;
    writeln!(out, "</svg>")
}

#[cfg(test)]
mod tests;
