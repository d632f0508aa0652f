//! CoreText backend (macOS).
//!
//! Family lookups go through a CoreText font collection for the family.
//! The face whose style name equals the request wins; otherwise the one
//! whose style is nearest by weight, slant and width.

use core_text::font_descriptor::CTFontDescriptor;
use rustybuzz::ttf_parser::{self, name_id};

use super::style::StyleDescriptor;
use super::{DEFAULT_STYLE, FontFamily, FontMatch, FontSource, group_families};
use crate::error::{FontError, Result};
use crate::font::names;

/// System fonts known to CoreText.
#[derive(Debug, Default)]
pub struct CoreTextSource;

impl CoreTextSource {
    pub fn new() -> Self {
        Self
    }
}

/// Index of the face with `postscript_name` inside a (possibly collection)
/// file. Plain fonts are always face 0.
fn face_index_for(data: &[u8], postscript_name: &str) -> u32 {
    let count = ttf_parser::fonts_in_collection(data).unwrap_or(1);
    (0..count)
        .find(|&index| {
            ttf_parser::Face::parse(data, index).is_ok_and(|face| {
                names::lookup(&face, name_id::POST_SCRIPT_NAME).as_deref()
                    == Some(postscript_name)
            })
        })
        .unwrap_or(0)
}

fn pick<'a>(
    descriptors: &'a [CTFontDescriptor],
    style: Option<&str>,
) -> Option<&'a CTFontDescriptor> {
    let wanted_name = style.unwrap_or(DEFAULT_STYLE);
    if let Some(exact) = descriptors
        .iter()
        .find(|d| d.style_name().eq_ignore_ascii_case(wanted_name))
    {
        return Some(exact);
    }
    let wanted = StyleDescriptor::from_style(style);
    descriptors
        .iter()
        .min_by_key(|d| wanted.distance(&StyleDescriptor::parse(&d.style_name())))
}

impl FontSource for CoreTextSource {
    fn match_font(&self, family: &str, style: Option<&str>) -> Result<Option<FontMatch>> {
        let Some(collection) = core_text::font_collection::create_for_family(family) else {
            return Ok(None);
        };
        let Some(found) = collection.get_descriptors() else {
            return Ok(None);
        };
        let descriptors: Vec<CTFontDescriptor> = found.iter().map(|d| (*d).clone()).collect();

        let Some(descriptor) = pick(&descriptors, style) else {
            return Ok(None);
        };
        let Some(path) = descriptor.font_path() else {
            return Err(FontError::unreadable(family, "CoreText descriptor has no file URL"));
        };
        log::debug!("coretext: {family:?} -> {}", path.display());

        let data = std::fs::read(&path).map_err(|source| FontError::Read {
            path: path.clone(),
            source,
        })?;
        let face_index = face_index_for(&data, &descriptor.font_name());
        FontMatch::from_data(data.into(), face_index).map(Some)
    }

    fn available_fonts(&self) -> Result<Vec<FontFamily>> {
        let collection = core_text::font_collection::create_for_all_families();
        let Some(descriptors) = collection.get_descriptors() else {
            return Ok(Vec::new());
        };
        Ok(group_families(
            descriptors
                .iter()
                .map(|d| (d.family_name(), d.style_name())),
        ))
    }
}
