//! Style names to weight / slant / width descriptors.
//!
//! Descriptor-based backends (fontconfig, DirectWrite) query by numeric
//! properties rather than by style name. [`StyleDescriptor::parse`] reads the
//! usual words out of a style string: "Bold Italic", "SemiBold Condensed",
//! "ExtraLight", "BoldOblique". Unrecognised words are ignored.

use std::fmt;

/// Upright, italic or oblique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Slant {
    #[default]
    Normal,
    Italic,
    Oblique,
}

/// Numeric style properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleDescriptor {
    /// CSS / OpenType weight, 100 (thin) to 900 (black).
    pub weight: u16,
    pub slant: Slant,
    /// OpenType width class, 1 (ultra-condensed) to 9 (ultra-expanded).
    pub width: u16,
}

pub const WEIGHT_REGULAR: u16 = 400;
pub const WEIGHT_BOLD: u16 = 700;
pub const WIDTH_NORMAL: u16 = 5;

impl Default for StyleDescriptor {
    fn default() -> Self {
        Self {
            weight: WEIGHT_REGULAR,
            slant: Slant::Normal,
            width: WIDTH_NORMAL,
        }
    }
}

/// Longer words first so "extrabold" is not read as "bold".
const WEIGHTS: &[(&str, u16)] = &[
    ("extralight", 200),
    ("ultralight", 200),
    ("extrabold", 800),
    ("ultrabold", 800),
    ("extrablack", 950),
    ("ultrablack", 950),
    ("semibold", 600),
    ("demibold", 600),
    ("semilight", 350),
    ("hairline", 100),
    ("regular", 400),
    ("normal", 400),
    ("medium", 500),
    ("heavy", 900),
    ("black", 900),
    ("light", 300),
    ("thin", 100),
    ("book", 400),
    ("bold", 700),
];

const WIDTHS: &[(&str, u16)] = &[
    ("ultracondensed", 1),
    ("extracondensed", 2),
    ("semicondensed", 4),
    ("condensed", 3),
    ("ultraexpanded", 9),
    ("extraexpanded", 8),
    ("semiexpanded", 6),
    ("expanded", 7),
];

impl StyleDescriptor {
    /// Read a style string. Missing words keep the regular defaults.
    pub fn parse(style: &str) -> Self {
        let mut text: String = style
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        let mut desc = Self::default();

        if let Some(&(word, width)) = WIDTHS.iter().find(|(w, _)| text.contains(w)) {
            desc.width = width;
            text = text.replacen(word, "", 1);
        }
        if text.contains("italic") {
            desc.slant = Slant::Italic;
        } else if text.contains("oblique") {
            desc.slant = Slant::Oblique;
        }
        if let Some(&(_, weight)) = WEIGHTS.iter().find(|(w, _)| text.contains(w)) {
            desc.weight = weight;
        }
        desc
    }

    /// Parse an optional style; `None` is regular.
    pub fn from_style(style: Option<&str>) -> Self {
        style.map(Self::parse).unwrap_or_default()
    }

    /// How far apart two styles are. Slant dominates, then width, then weight.
    pub fn distance(&self, other: &Self) -> u32 {
        let slant = if self.slant == other.slant { 0 } else { 10_000 };
        let width = u32::from(self.width.abs_diff(other.width)) * 1_000;
        slant + width + u32::from(self.weight.abs_diff(other.weight))
    }

    /// Conventional style name, e.g. "SemiBold Condensed Italic".
    pub fn style_name(&self) -> String {
        self.to_string()
    }
}

fn weight_word(weight: u16) -> Option<&'static str> {
    Some(match weight {
        0..=149 => "Thin",
        150..=249 => "ExtraLight",
        250..=349 => "Light",
        350..=449 => return None,
        450..=549 => "Medium",
        550..=649 => "SemiBold",
        650..=749 => "Bold",
        750..=849 => "ExtraBold",
        _ => "Black",
    })
}

fn width_word(width: u16) -> Option<&'static str> {
    Some(match width {
        0 | 1 => "UltraCondensed",
        2 => "ExtraCondensed",
        3 => "Condensed",
        4 => "SemiCondensed",
        5 => return None,
        6 => "SemiExpanded",
        7 => "Expanded",
        8 => "ExtraExpanded",
        _ => "UltraExpanded",
    })
}

impl fmt::Display for StyleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slant = match self.slant {
            Slant::Normal => None,
            Slant::Italic => Some("Italic"),
            Slant::Oblique => Some("Oblique"),
        };
        let words: Vec<&str> = [weight_word(self.weight), width_word(self.width), slant]
            .into_iter()
            .flatten()
            .collect();
        if words.is_empty() {
            f.write_str("Regular")
        } else {
            f.write_str(&words.join(" "))
        }
    }
}
