//! fontconfig backend (Linux / BSD).
//!
//! `fontdb` reads the fontconfig configuration for its font directories and
//! indexes every face it finds there. Matching goes through `fontdb`'s CSS
//! style best-match, so a missing weight or slant falls back to the nearest
//! face of the same family the way fontconfig's own matching would.

use std::sync::{Arc, OnceLock};

use super::style::{Slant, StyleDescriptor};
use super::{FontFamily, FontMatch, FontSource, group_families};
use crate::error::Result;

/// System fonts from the fontconfig font directories.
pub struct FontconfigSource {
    db: OnceLock<fontdb::Database>,
}

impl FontconfigSource {
    pub fn new() -> Self {
        Self {
            db: OnceLock::new(),
        }
    }

    /// The font index, built on first use.
    fn database(&self) -> &fontdb::Database {
        self.db.get_or_init(|| {
            let mut db = fontdb::Database::new();
            db.load_system_fonts();
            log::debug!("fontconfig: indexed {} faces", db.len());
            if db.is_empty() {
                log::warn!("fontconfig: no fonts found in the configured directories");
            }
            db
        })
    }
}

impl Default for FontconfigSource {
    fn default() -> Self {
        Self::new()
    }
}

fn to_fontdb_style(slant: Slant) -> fontdb::Style {
    match slant {
        Slant::Normal => fontdb::Style::Normal,
        Slant::Italic => fontdb::Style::Italic,
        Slant::Oblique => fontdb::Style::Oblique,
    }
}

fn from_fontdb_style(style: fontdb::Style) -> Slant {
    match style {
        fontdb::Style::Normal => Slant::Normal,
        fontdb::Style::Italic => Slant::Italic,
        fontdb::Style::Oblique => Slant::Oblique,
    }
}

fn to_fontdb_stretch(width: u16) -> fontdb::Stretch {
    match width {
        0 | 1 => fontdb::Stretch::UltraCondensed,
        2 => fontdb::Stretch::ExtraCondensed,
        3 => fontdb::Stretch::Condensed,
        4 => fontdb::Stretch::SemiCondensed,
        5 => fontdb::Stretch::Normal,
        6 => fontdb::Stretch::SemiExpanded,
        7 => fontdb::Stretch::Expanded,
        8 => fontdb::Stretch::ExtraExpanded,
        _ => fontdb::Stretch::UltraExpanded,
    }
}

/// Style name for an indexed face. `fontdb` keeps numeric properties only.
fn face_style_name(face: &fontdb::FaceInfo) -> String {
    StyleDescriptor {
        weight: face.weight.0,
        slant: from_fontdb_style(face.style),
        width: face.stretch.to_number(),
    }
    .style_name()
}

/// The indexed spelling of `family`. fontdb compares names exactly, while
/// lookups here ignore case; an exact spelling wins over a folded one.
fn canonical_family<'a>(db: &'a fontdb::Database, family: &str) -> Option<&'a str> {
    let mut folded = None;
    for face in db.faces() {
        for (name, _) in &face.families {
            if name == family {
                return Some(name);
            }
            if folded.is_none() && name.eq_ignore_ascii_case(family) {
                folded = Some(name.as_str());
            }
        }
    }
    folded
}

/// Best face of `family` for the requested style.
fn find_face<'a>(
    db: &'a fontdb::Database,
    family: &str,
    style: Option<&str>,
) -> Option<&'a fontdb::FaceInfo> {
    let canonical = canonical_family(db, family)?;
    let desc = StyleDescriptor::from_style(style);
    let families = [fontdb::Family::Name(canonical)];
    let query = fontdb::Query {
        families: &families,
        weight: fontdb::Weight(desc.weight),
        stretch: to_fontdb_stretch(desc.width),
        style: to_fontdb_style(desc.slant),
    };
    db.query(&query).and_then(|id| db.face(id))
}

impl FontSource for FontconfigSource {
    fn match_font(&self, family: &str, style: Option<&str>) -> Result<Option<FontMatch>> {
        let Some(face) = find_face(self.database(), family, style) else {
            return Ok(None);
        };

        let found = match &face.source {
            fontdb::Source::File(path) | fontdb::Source::SharedFile(path, _) => {
                log::debug!("fontconfig: {family:?} -> {}", path.display());
                FontMatch::from_file(path, face.index)?
            }
            fontdb::Source::Binary(data) => {
                let bytes = AsRef::<[u8]>::as_ref(&**data);
                FontMatch::from_data(Arc::from(bytes), face.index)?
            }
        };
        Ok(Some(found))
    }

    fn available_fonts(&self) -> Result<Vec<FontFamily>> {
        let db = self.database();
        Ok(group_families(db.faces().filter_map(|face| {
            let (family, _) = face.families.first()?;
            Some((family.clone(), face_style_name(face)))
        })))
    }
}

#[cfg(test)]
mod tests;
