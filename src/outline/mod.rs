//! Glyph outline extraction.
//!
//! Walks a glyph's contours through the rasterizer's `OutlineBuilder`
//! callbacks and records them as a [`Path`] in working units. Glyphs that
//! have no vector outline (empty glyphs such as space, bitmap-only glyphs,
//! IDs past the end of the font) yield `None`.

use glyphrun_core::{Path, PathCommand, Point};
use rustybuzz::ttf_parser::{self, GlyphId, OutlineBuilder};

/// Source of glyph outlines for the assembler.
pub trait GlyphOutlines {
    /// Outline of `glyph_id` in working units, or `None` when it has none.
    fn glyph_outline(&self, glyph_id: u16) -> Option<Path>;
}

/// Extracts scaled outlines from one rasterizer face.
///
/// The face must already carry the variation coordinates the caller wants;
/// the extractor reads whatever instance the face is set to.
pub struct OutlineExtractor<'a> {
    face: &'a ttf_parser::Face<'a>,
    scale: f64,
}

impl<'a> OutlineExtractor<'a> {
    /// `scale` converts font design units to working units.
    pub fn new(face: &'a ttf_parser::Face<'a>, scale: f64) -> Self {
        Self { face, scale }
    }

    /// Decompose `glyph_id` into a closed-contour path.
    pub fn extract(&self, glyph_id: u16) -> Option<Path> {
        let mut sink = PathSink::new(self.scale);
        if self
            .face
            .outline_glyph(GlyphId(glyph_id), &mut sink)
            .is_none()
        {
            log::trace!("glyph {glyph_id} has no outline");
            return None;
        }
        sink.finish()
    }
}

impl GlyphOutlines for OutlineExtractor<'_> {
    fn glyph_outline(&self, glyph_id: u16) -> Option<Path> {
        self.extract(glyph_id)
    }
}

/// `OutlineBuilder` that records path commands.
///
/// Every contour ends in exactly one `Close`: starting a new contour closes
/// the previous one if the font left it open, and `finish` closes the last.
pub(crate) struct PathSink {
    commands: Vec<PathCommand>,
    scale: f64,
    /// The current contour has at least one segment after its `MoveTo`.
    has_segments: bool,
}

impl PathSink {
    pub(crate) fn new(scale: f64) -> Self {
        Self {
            commands: Vec::new(),
            scale,
            has_segments: false,
        }
    }

    fn point(&self, x: f32, y: f32) -> Point {
        Point::new(f64::from(x) * self.scale, f64::from(y) * self.scale)
    }

    fn close_open_contour(&mut self) {
        if self.has_segments && !matches!(self.commands.last(), Some(PathCommand::Close)) {
            self.commands.push(PathCommand::Close);
        }
        self.has_segments = false;
    }

    fn segment(&mut self, cmd: PathCommand) {
        self.commands.push(cmd);
        self.has_segments = true;
    }

    /// Close the final contour. `None` if nothing was drawn.
    pub(crate) fn finish(mut self) -> Option<Path> {
        self.close_open_contour();
        // A trailing MoveTo with no segments draws nothing.
        if matches!(self.commands.last(), Some(PathCommand::MoveTo(_))) {
            self.commands.pop();
        }
        if self.commands.is_empty() {
            None
        } else {
            Some(Path::from(self.commands))
        }
    }
}

impl OutlineBuilder for PathSink {
    fn move_to(&mut self, x: f32, y: f32) {
        self.close_open_contour();
        let p = self.point(x, y);
        match self.commands.last_mut() {
            // Consecutive moves: only the last one starts a contour.
            Some(PathCommand::MoveTo(prev)) => *prev = p,
            _ => self.commands.push(PathCommand::MoveTo(p)),
        }
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.segment(PathCommand::LineTo(p));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let ctrl = self.point(x1, y1);
        let end = self.point(x, y);
        self.segment(PathCommand::QuadTo(ctrl, end));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let c1 = self.point(x1, y1);
        let c2 = self.point(x2, y2);
        let end = self.point(x, y);
        self.segment(PathCommand::CubicTo(c1, c2, end));
    }

    fn close(&mut self) {
        if self.has_segments {
            self.commands.push(PathCommand::Close);
            self.has_segments = false;
        }
    }
}
