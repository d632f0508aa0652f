//! OpenType feature toggles passed to the shaper.
//!
//! A `FontFeature` is a tag plus an integer value, always applied to the
//! whole text. Value 1 enables, 0 disables, larger values pick an alternate
//! (e.g. `salt=2`). Tags are not validated against the font: the shaper
//! ignores what it does not recognise.

use std::fmt;
use std::str::FromStr;

use rustybuzz::ttf_parser::Tag;

/// One OpenType feature setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontFeature {
    pub tag: Tag,
    pub value: u32,
}

impl FontFeature {
    pub fn new(tag: Tag, value: u32) -> Self {
        Self { tag, value }
    }

    /// Build from a raw 4-byte tag.
    pub fn from_bytes(tag: &[u8; 4], value: u32) -> Self {
        Self::new(Tag::from_bytes(tag), value)
    }

    fn toggle(tag: &[u8; 4], on: bool) -> Self {
        Self::from_bytes(tag, u32::from(on))
    }

    /// Whether the setting turns the feature on (any non-zero value).
    pub fn is_enabled(&self) -> bool {
        self.value != 0
    }

    /// Standard ligatures (`liga`). `standard_ligatures(false)` is the
    /// usual way to stop "fi" from becoming one glyph.
    pub fn standard_ligatures(on: bool) -> Self {
        Self::toggle(b"liga", on)
    }

    /// Discretionary ligatures (`dlig`).
    pub fn discretionary_ligatures(on: bool) -> Self {
        Self::toggle(b"dlig", on)
    }

    /// Contextual ligatures (`clig`).
    pub fn contextual_ligatures(on: bool) -> Self {
        Self::toggle(b"clig", on)
    }

    /// Historical ligatures (`hlig`).
    pub fn historical_ligatures(on: bool) -> Self {
        Self::toggle(b"hlig", on)
    }

    /// Contextual alternates (`calt`).
    pub fn contextual_alternates(on: bool) -> Self {
        Self::toggle(b"calt", on)
    }

    /// Pair kerning (`kern`).
    pub fn kerning(on: bool) -> Self {
        Self::toggle(b"kern", on)
    }

    /// Lowercase to small capitals (`smcp`).
    pub fn small_caps(on: bool) -> Self {
        Self::toggle(b"smcp", on)
    }

    /// Uppercase to small capitals (`c2sc`).
    pub fn capitals_to_small_caps(on: bool) -> Self {
        Self::toggle(b"c2sc", on)
    }

    /// Tabular (fixed-width) figures (`tnum`).
    pub fn tabular_figures(on: bool) -> Self {
        Self::toggle(b"tnum", on)
    }

    /// Proportional figures (`pnum`).
    pub fn proportional_figures(on: bool) -> Self {
        Self::toggle(b"pnum", on)
    }

    /// Old-style figures (`onum`).
    pub fn oldstyle_figures(on: bool) -> Self {
        Self::toggle(b"onum", on)
    }

    /// Lining figures (`lnum`).
    pub fn lining_figures(on: bool) -> Self {
        Self::toggle(b"lnum", on)
    }

    /// Diagonal fractions (`frac`).
    pub fn fractions(on: bool) -> Self {
        Self::toggle(b"frac", on)
    }

    /// Slashed zero (`zero`).
    pub fn slashed_zero(on: bool) -> Self {
        Self::toggle(b"zero", on)
    }

    /// Ordinals (`ordn`).
    pub fn ordinals(on: bool) -> Self {
        Self::toggle(b"ordn", on)
    }

    /// Superscript (`sups`).
    pub fn superscript(on: bool) -> Self {
        Self::toggle(b"sups", on)
    }

    /// Subscript (`subs`).
    pub fn subscript(on: bool) -> Self {
        Self::toggle(b"subs", on)
    }

    /// Stylistic alternates (`salt`). `index` 0 disables, 1.. picks an alternate.
    pub fn stylistic_alternates(index: u32) -> Self {
        Self::from_bytes(b"salt", index)
    }

    /// Stylistic set `ss01`..`ss20`. Returns `None` outside 1..=20.
    pub fn stylistic_set(set: u8, on: bool) -> Option<Self> {
        if !(1..=20).contains(&set) {
            return None;
        }
        Some(Self::toggle(&numbered_tag(*b"ss", set), on))
    }

    /// Character variant `cv01`..`cv99`. `value` selects the variant (0 disables).
    pub fn character_variant(variant: u8, value: u32) -> Option<Self> {
        if !(1..=99).contains(&variant) {
            return None;
        }
        Some(Self::from_bytes(&numbered_tag(*b"cv", variant), value))
    }

    /// Convert to the shaper's feature type with a global range.
    pub(crate) fn to_shaping(self) -> rustybuzz::Feature {
        rustybuzz::Feature::new(self.tag, self.value, ..)
    }
}

/// Two-letter prefix plus a two-digit number, e.g. `ss` + 3 = `ss03`.
fn numbered_tag(prefix: [u8; 2], n: u8) -> [u8; 4] {
    [prefix[0], prefix[1], b'0' + n / 10, b'0' + n % 10]
}

/// Error returned when a feature string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFeatureError(String);

impl fmt::Display for ParseFeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid feature setting {:?}", self.0)
    }
}

impl std::error::Error for ParseFeatureError {}

/// Parse a 4-character printable ASCII tag.
pub(crate) fn parse_tag(s: &str) -> Option<Tag> {
    let bytes: [u8; 4] = s.as_bytes().try_into().ok()?;
    if bytes.iter().all(|b| (0x20..=0x7e).contains(b)) {
        Some(Tag::from_bytes(&bytes))
    } else {
        None
    }
}

impl FromStr for FontFeature {
    type Err = ParseFeatureError;

    /// Accepts `"liga"`, `"+liga"` (enable), `"-liga"` (disable) and
    /// `"salt=2"` (explicit value).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseFeatureError(s.to_owned());
        let trimmed = s.trim();

        let (tag_str, value) = if let Some(rest) = trimmed.strip_prefix('-') {
            (rest, 0)
        } else if let Some((tag, value)) = trimmed.split_once('=') {
            let value = value.trim().parse::<u32>().ok().ok_or_else(err)?;
            (tag.trim(), value)
        } else {
            (trimmed.strip_prefix('+').unwrap_or(trimmed), 1)
        };

        let tag = parse_tag(tag_str).ok_or_else(err)?;
        Ok(Self::new(tag, value))
    }
}

impl fmt::Display for FontFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            0 => write!(f, "-{}", self.tag),
            1 => write!(f, "{}", self.tag),
            v => write!(f, "{}={v}", self.tag),
        }
    }
}
