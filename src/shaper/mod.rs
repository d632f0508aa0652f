//! Text shaping via `rustybuzz`.
//!
//! Converts a string into a stream of glyph IDs with clusters, advances and
//! offsets. Script, direction and language are guessed from the text unless
//! [`ShapeOptions`] overrides them. Positions come back from the shaper in
//! font units and are scaled to working units here, so the assembler and the
//! outline extractor agree on one coordinate space.

mod assembler;

use std::fmt;
use std::str::FromStr;

use crate::features::FontFeature;

pub use assembler::assemble;

/// One glyph out of the shaper, in working units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapedGlyph {
    pub glyph_id: u16,
    /// Byte offset of the first source character this glyph came from.
    pub cluster: u32,
    pub x_advance: f64,
    pub y_advance: f64,
    pub x_offset: f64,
    pub y_offset: f64,
}

/// Text direction override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

impl Direction {
    fn to_shaping(self) -> rustybuzz::Direction {
        match self {
            Self::LeftToRight => rustybuzz::Direction::LeftToRight,
            Self::RightToLeft => rustybuzz::Direction::RightToLeft,
            Self::TopToBottom => rustybuzz::Direction::TopToBottom,
            Self::BottomToTop => rustybuzz::Direction::BottomToTop,
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    /// Accepts `ltr`, `rtl`, `ttb`, `btt` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ltr" => Ok(Self::LeftToRight),
            "rtl" => Ok(Self::RightToLeft),
            "ttb" => Ok(Self::TopToBottom),
            "btt" => Ok(Self::BottomToTop),
            other => Err(format!("unknown direction {other:?}")),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LeftToRight => "ltr",
            Self::RightToLeft => "rtl",
            Self::TopToBottom => "ttb",
            Self::BottomToTop => "btt",
        })
    }
}

/// Segment property overrides. The default overrides nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapeOptions {
    pub direction: Option<Direction>,
    /// BCP 47 language tag, e.g. `"tr"` or `"sr-Latn"`.
    pub language: Option<String>,
}

impl ShapeOptions {
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// Shape `text` with `face`.
///
/// Features apply to the whole string. `scale` maps font units to working
/// units. Empty text yields an empty stream.
pub fn shape_text(
    face: &rustybuzz::Face<'_>,
    text: &str,
    features: &[FontFeature],
    options: &ShapeOptions,
    scale: f64,
) -> Vec<ShapedGlyph> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut buffer = rustybuzz::UnicodeBuffer::new();
    buffer.push_str(text);
    if let Some(direction) = options.direction {
        buffer.set_direction(direction.to_shaping());
    }
    if let Some(lang) = &options.language {
        match lang.parse::<rustybuzz::Language>() {
            Ok(language) => buffer.set_language(language),
            Err(e) => log::warn!("ignoring language {lang:?}: {e}"),
        }
    }
    // Fills in only what was not set above.
    buffer.guess_segment_properties();

    let features: Vec<rustybuzz::Feature> = features.iter().map(|f| f.to_shaping()).collect();
    let output = rustybuzz::shape(face, &features, buffer);

    output
        .glyph_infos()
        .iter()
        .zip(output.glyph_positions())
        .map(|(info, pos)| ShapedGlyph {
            glyph_id: info.glyph_id as u16,
            cluster: info.cluster,
            x_advance: f64::from(pos.x_advance) * scale,
            y_advance: f64::from(pos.y_advance) * scale,
            x_offset: f64::from(pos.x_offset) * scale,
            y_offset: f64::from(pos.y_offset) * scale,
        })
        .collect()
}
