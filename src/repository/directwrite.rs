//! DirectWrite backend (Windows).
//!
//! Lookups build a weight / stretch / style descriptor and let the system
//! font collection pick its best match, then read the face's backing file,
//! or its bytes through the file loader when it has no local path.

use super::style::{Slant, StyleDescriptor};
use super::{FontFamily, FontMatch, FontSource, group_families};
use crate::error::{FontError, Result};

/// System fonts from the DirectWrite system collection.
#[derive(Debug, Default)]
pub struct DirectWriteSource;

impl DirectWriteSource {
    pub fn new() -> Self {
        Self
    }
}

fn to_dwrite_style(slant: Slant) -> dwrote::FontStyle {
    match slant {
        Slant::Normal => dwrote::FontStyle::Normal,
        Slant::Italic => dwrote::FontStyle::Italic,
        Slant::Oblique => dwrote::FontStyle::Oblique,
    }
}

impl FontSource for DirectWriteSource {
    fn match_font(&self, family: &str, style: Option<&str>) -> Result<Option<FontMatch>> {
        let desc = StyleDescriptor::from_style(style);
        let collection = dwrote::FontCollection::system();
        let descriptor = dwrote::FontDescriptor {
            family_name: family.to_string(),
            weight: dwrote::FontWeight::from_u32(u32::from(desc.weight)),
            stretch: dwrote::FontStretch::from_u32(u32::from(desc.width)),
            style: to_dwrite_style(desc.slant),
        };
        let font = match collection.font_from_descriptor(&descriptor) {
            Ok(Some(font)) => font,
            Ok(None) => return Ok(None),
            Err(hr) => {
                return Err(FontError::Initialization(format!(
                    "DirectWrite lookup failed (HRESULT {hr:#x})"
                )));
            }
        };

        let face = font.create_font_face();
        let index = face.get_index();
        let files = face.files().map_err(|hr| {
            FontError::unreadable(family, format!("DirectWrite face files (HRESULT {hr:#x})"))
        })?;
        let Some(file) = files.first() else {
            return Err(FontError::unreadable(family, "DirectWrite face has no font file"));
        };
        if let Ok(path) = file.font_file_path() {
            log::debug!("directwrite: {family:?} -> {}", path.display());
            return FontMatch::from_file(&path, index).map(Some);
        }

        // Not a local file (e.g. a cloud or memory font): ask its loader.
        log::debug!("directwrite: {family:?} has no local path, reading through its loader");
        let data = file.font_file_bytes().map_err(|hr| {
            FontError::unreadable(family, format!("DirectWrite font file bytes (HRESULT {hr:#x})"))
        })?;
        FontMatch::from_data(data.into(), index).map(Some)
    }

    fn available_fonts(&self) -> Result<Vec<FontFamily>> {
        let collection = dwrote::FontCollection::system();
        let mut pairs = Vec::new();
        for family in collection.families_iter() {
            let Ok(name) = family.family_name() else {
                continue;
            };
            for i in 0..family.get_font_count() {
                let Ok(font) = family.font(i) else {
                    continue;
                };
                pairs.push((name.clone(), font.face_name()));
            }
        }
        Ok(group_families(pairs))
    }
}
