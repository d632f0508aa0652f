//! `name` table lookups.

use rustybuzz::ttf_parser::{self, PlatformId, name_id};

use crate::repository::DEFAULT_STYLE;

/// Family reported for faces whose `name` table carries none.
pub(crate) const UNKNOWN_FAMILY: &str = "Unknown";

/// Windows language ID for US English.
const ENGLISH_US: u16 = 0x0409;

/// The string for `id`, preferring the Windows US English record and
/// falling back to any other decodable one. Empty strings count as missing.
pub(crate) fn lookup(face: &ttf_parser::Face<'_>, id: u16) -> Option<String> {
    let mut fallback = None;
    for name in face.names() {
        if name.name_id != id {
            continue;
        }
        let Some(text) = name.to_string().filter(|s| !s.is_empty()) else {
            continue;
        };
        if name.platform_id == PlatformId::Windows && name.language_id == ENGLISH_US {
            return Some(text);
        }
        fallback.get_or_insert(text);
    }
    fallback
}

/// Typographic family (ID 16), else the legacy family (ID 1).
pub(crate) fn family_name(face: &ttf_parser::Face<'_>) -> Option<String> {
    lookup(face, name_id::TYPOGRAPHIC_FAMILY).or_else(|| lookup(face, name_id::FAMILY))
}

/// Typographic subfamily (ID 17), else the legacy subfamily (ID 2).
pub(crate) fn style_name(face: &ttf_parser::Face<'_>) -> Option<String> {
    lookup(face, name_id::TYPOGRAPHIC_SUBFAMILY).or_else(|| lookup(face, name_id::SUBFAMILY))
}

/// [`family_name`], or [`UNKNOWN_FAMILY`].
pub(crate) fn family_or_unknown(face: &ttf_parser::Face<'_>) -> String {
    family_name(face).unwrap_or_else(|| UNKNOWN_FAMILY.to_owned())
}

/// [`style_name`], or [`DEFAULT_STYLE`].
pub(crate) fn style_or_default(face: &ttf_parser::Face<'_>) -> String {
    style_name(face).unwrap_or_else(|| DEFAULT_STYLE.to_owned())
}
