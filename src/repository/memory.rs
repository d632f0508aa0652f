//! Lookup over fonts held in memory (embedded fonts, tests).

use std::sync::Arc;

use rustybuzz::ttf_parser;

use super::style::StyleDescriptor;
use super::{DEFAULT_STYLE, FontFamily, FontMatch, FontSource, group_families};
use crate::error::Result;
use crate::font::names;

struct Entry {
    data: Arc<[u8]>,
    face_index: u32,
    family: String,
    style: String,
}

/// A [`FontSource`] over in-memory font blobs.
///
/// Family names compare case-insensitively. An exact style name wins;
/// otherwise the face whose parsed style is nearest to the request.
pub struct MemorySource {
    entries: Vec<Entry>,
}

impl MemorySource {
    /// Index every face of every blob. Blobs that are not fonts are skipped.
    pub fn new<I, D>(blobs: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Arc<[u8]>>,
    {
        let mut entries = Vec::new();
        for blob in blobs {
            let data: Arc<[u8]> = blob.into();
            let count = ttf_parser::fonts_in_collection(&data).unwrap_or(1);
            for face_index in 0..count {
                let face = match ttf_parser::Face::parse(&data, face_index) {
                    Ok(face) => face,
                    Err(e) => {
                        log::warn!("skipping in-memory face {face_index}: {e}");
                        continue;
                    }
                };
                let Some(family) = names::family_name(&face) else {
                    continue;
                };
                let style =
                    names::style_name(&face).unwrap_or_else(|| DEFAULT_STYLE.to_owned());
                entries.push(Entry {
                    data: Arc::clone(&data),
                    face_index,
                    family,
                    style,
                });
            }
        }
        Self { entries }
    }

    /// Number of indexed faces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FontSource for MemorySource {
    fn match_font(&self, family: &str, style: Option<&str>) -> Result<Option<FontMatch>> {
        let candidates: Vec<&Entry> = self
            .entries
            .iter()
            .filter(|e| e.family.eq_ignore_ascii_case(family))
            .collect();
        let wanted_name = style.unwrap_or(DEFAULT_STYLE);

        let exact = candidates
            .iter()
            .find(|e| e.style.eq_ignore_ascii_case(wanted_name));
        let chosen = exact.or_else(|| {
            let wanted = StyleDescriptor::from_style(style);
            candidates
                .iter()
                .min_by_key(|e| wanted.distance(&StyleDescriptor::parse(&e.style)))
        });

        Ok(chosen.map(|e| FontMatch {
            data: Arc::clone(&e.data),
            face_index: e.face_index,
            family_name: e.family.clone(),
            style_name: e.style.clone(),
        }))
    }

    fn available_fonts(&self) -> Result<Vec<FontFamily>> {
        Ok(group_families(
            self.entries
                .iter()
                .map(|e| (e.family.clone(), e.style.clone())),
        ))
    }
}
