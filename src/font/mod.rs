//! Font handle: owns font bytes and runs the shaping pipeline.
//!
//! A [`Font`] keeps the raw file bytes in an `Arc<[u8]>` plus everything
//! resolved at load time (names, metrics, layout feature tags, variation
//! axes). Engine views of the face (`rustybuzz::Face` for shaping,
//! `ttf_parser::Face` for outlines) are created per call and borrow the
//! bytes, so they can never outlive them. The variation coordinator's
//! position is pushed into both views every time they are created.

pub(crate) mod names;

use std::fmt;
use std::path::Path as FsPath;
use std::sync::Arc;

use glyphrun_core::{Metrics, Path, PositionedGlyph};
use rustybuzz::ttf_parser::{self, FaceParsingError, Tag};

use crate::error::{FontError, LoadOrigin, Result};
use crate::features::FontFeature;
use crate::outline::{GlyphOutlines, OutlineExtractor};
use crate::repository::{FontMatch, FontRepository, FontSource};
use crate::shaper::{self, ShapeOptions, ShapedGlyph};
use crate::variation::{
    self, NamedInstance, VariationAxis, VariationCoordinator, VariationSetting,
};

/// Units per em of the shared coordinate space for advances and outlines.
pub const WORKING_UNITS_PER_EM: f64 = 1000.0;

/// One face of a font file or collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceInfo {
    pub index: u32,
    pub family_name: String,
    pub style_name: String,
}

/// A loaded font face.
#[derive(Clone)]
pub struct Font {
    data: Arc<[u8]>,
    face_index: u32,
    family_name: String,
    style_name: String,
    metrics: Metrics,
    feature_tags: Vec<Tag>,
    named_instances: Vec<NamedInstance>,
    variations: VariationCoordinator,
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("family_name", &self.family_name)
            .field("style_name", &self.style_name)
            .field("face_index", &self.face_index)
            .field("bytes", &self.data.len())
            .field("coordinates", &self.variations.design_coordinates())
            .finish_non_exhaustive()
    }
}

impl Font {
    /// Load face 0 of a font file.
    pub fn from_path(path: impl AsRef<FsPath>) -> Result<Self> {
        Self::from_path_with_index(path, 0)
    }

    /// Load one face of a font file or collection.
    pub fn from_path_with_index(path: impl AsRef<FsPath>, face_index: u32) -> Result<Self> {
        let path = path.as_ref();
        let origin = LoadOrigin::Path(path.to_path_buf());
        let data = std::fs::read(path).map_err(|e| FontError::load(origin.clone(), e.to_string()))?;
        Self::load(data.into(), face_index, &origin)
    }

    /// Load face 0 from bytes.
    pub fn from_bytes(data: impl Into<Arc<[u8]>>) -> Result<Self> {
        Self::from_bytes_with_index(data, 0)
    }

    /// Load one face of an in-memory font or collection.
    pub fn from_bytes_with_index(data: impl Into<Arc<[u8]>>, face_index: u32) -> Result<Self> {
        Self::load(data.into(), face_index, &LoadOrigin::Memory)
    }

    /// Resolve `family` / `style` through the platform font repository.
    pub fn from_family(family: &str, style: Option<&str>) -> Result<Self> {
        Self::from_family_in(&FontRepository::system(), family, style)
    }

    /// Resolve `family` / `style` through `source`.
    ///
    /// A lookup that finds nothing is reported as
    /// [`FontError::FamilyNotFound`].
    pub fn from_family_in(
        source: &(impl FontSource + ?Sized),
        family: &str,
        style: Option<&str>,
    ) -> Result<Self> {
        match source.match_font(family, style)? {
            Some(found) => Self::from_match(found),
            None => Err(FontError::FamilyNotFound {
                family: family.to_owned(),
                style: style.map(str::to_owned),
            }),
        }
    }

    /// Load the face a repository lookup resolved to.
    pub fn from_match(found: FontMatch) -> Result<Self> {
        log::debug!(
            "loading {} / {} (face {})",
            found.family_name,
            found.style_name,
            found.face_index
        );
        Self::load(found.data, found.face_index, &LoadOrigin::Memory)
    }

    /// Load the face of a collection whose family and style names both
    /// equal the requested pair.
    pub fn from_collection(
        data: impl Into<Arc<[u8]>>,
        family: &str,
        style: &str,
    ) -> Result<Self> {
        let data = data.into();
        let face = Self::faces(&data)?
            .into_iter()
            .find(|f| f.family_name == family && f.style_name == style)
            .ok_or_else(|| FontError::FaceNotFound {
                family: family.to_owned(),
                style: style.to_owned(),
            })?;
        Self::load(data, face.index, &LoadOrigin::Memory)
    }

    /// Load a face already moved to one of its named instances.
    pub fn from_named_instance(
        data: impl Into<Arc<[u8]>>,
        face_index: u32,
        instance_index: usize,
    ) -> Result<Self> {
        let mut font = Self::from_bytes_with_index(data, face_index)?;
        font.set_named_instance(instance_index)?;
        Ok(font)
    }

    /// List the faces in font data: one entry for a plain font, one per
    /// member for a collection.
    pub fn faces(data: &[u8]) -> Result<Vec<FaceInfo>> {
        let count = face_count(data);
        (0..count)
            .map(|index| {
                let face = parse_face(data, index, &LoadOrigin::Memory)?;
                Ok(FaceInfo {
                    index,
                    family_name: names::family_or_unknown(&face),
                    style_name: names::style_or_default(&face),
                })
            })
            .collect()
    }

    /// [`Font::faces`] for a file on disk.
    pub fn faces_at_path(path: impl AsRef<FsPath>) -> Result<Vec<FaceInfo>> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .map_err(|e| FontError::load(LoadOrigin::Path(path.to_path_buf()), e.to_string()))?;
        Self::faces(&data)
    }

    fn load(data: Arc<[u8]>, face_index: u32, origin: &LoadOrigin) -> Result<Self> {
        let face = parse_face(&data, face_index, origin)?;
        if rustybuzz::Face::from_slice(&data, face_index).is_none() {
            return Err(FontError::load(origin.clone(), "shaper rejected the face"));
        }

        let metrics = Metrics::new(
            face.units_per_em(),
            f64::from(face.ascender()),
            f64::from(face.descender()),
            f64::from(face.line_gap()),
        );
        let family_name = names::family_or_unknown(&face);
        let style_name = names::style_or_default(&face);
        let feature_tags = layout_feature_tags(&face);
        let axes = variation::read_axes(&face);
        let named_instances = variation::read_instances(&data, face_index, &face);
        log::debug!(
            "loaded {family_name} / {style_name} from {origin} (face {face_index}, {} axes, {} instances)",
            axes.len(),
            named_instances.len()
        );

        Ok(Self {
            face_index,
            family_name,
            style_name,
            metrics,
            feature_tags,
            named_instances,
            variations: VariationCoordinator::new(axes),
            data,
        })
    }

    // Shaping

    /// Shape `text` into positioned outlines.
    ///
    /// Glyphs without an outline (spaces, bitmap-only glyphs) are left out
    /// of the result; their advance still moves the following glyphs.
    pub fn shape(&self, text: &str, features: &[FontFeature]) -> Vec<PositionedGlyph> {
        self.shape_with(text, features, &ShapeOptions::default())
    }

    /// [`Font::shape`] with explicit direction / language overrides.
    pub fn shape_with(
        &self,
        text: &str,
        features: &[FontFeature],
        options: &ShapeOptions,
    ) -> Vec<PositionedGlyph> {
        let (Some(shaping), Some(raster)) = (self.shaping_face(), self.raster_face()) else {
            return Vec::new();
        };
        let scale = self.scale();
        let shaped = shaper::shape_text(&shaping, text, features, options, scale);
        shaper::assemble(&shaped, &OutlineExtractor::new(&raster, scale))
    }

    /// The raw shaper output in working units, before outlines are attached.
    pub fn shape_glyphs(
        &self,
        text: &str,
        features: &[FontFeature],
        options: &ShapeOptions,
    ) -> Vec<ShapedGlyph> {
        match self.shaping_face() {
            Some(face) => shaper::shape_text(&face, text, features, options, self.scale()),
            None => Vec::new(),
        }
    }

    /// One glyph's outline in working units at the current variation.
    pub fn glyph_outline(&self, glyph_id: u16) -> Option<Path> {
        let face = self.raster_face()?;
        OutlineExtractor::new(&face, self.scale()).extract(glyph_id)
    }

    /// Shaping view with the current variation applied.
    pub(crate) fn shaping_face(&self) -> Option<rustybuzz::Face<'_>> {
        let Some(mut face) = rustybuzz::Face::from_slice(&self.data, self.face_index) else {
            log::error!("face {} no longer parses for shaping", self.face_index);
            return None;
        };
        self.variations.apply_to_shaping(&mut face);
        Some(face)
    }

    /// Outline view with the current variation applied.
    pub(crate) fn raster_face(&self) -> Option<ttf_parser::Face<'_>> {
        let mut face = match ttf_parser::Face::parse(&self.data, self.face_index) {
            Ok(face) => face,
            Err(e) => {
                log::error!("face {} no longer parses: {e}", self.face_index);
                return None;
            }
        };
        self.variations.apply_to_outlines(&mut face);
        Some(face)
    }

    // Metrics

    /// Vertical metrics in design units.
    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    /// Vertical metrics in working units.
    pub fn working_metrics(&self) -> Metrics {
        self.metrics.scaled(self.scale())
    }

    pub fn units_per_em(&self) -> u16 {
        self.metrics.units_per_em
    }

    /// Factor from design units to working units.
    pub fn scale(&self) -> f64 {
        WORKING_UNITS_PER_EM / f64::from(self.metrics.units_per_em)
    }

    /// Feature tags declared by GSUB and GPOS, sorted and deduplicated.
    pub fn feature_tags(&self) -> &[Tag] {
        &self.feature_tags
    }

    // Variations

    pub fn variation_axes(&self) -> &[VariationAxis] {
        self.variations.axes()
    }

    pub fn named_instances(&self) -> &[NamedInstance] {
        &self.named_instances
    }

    /// Current design coordinates, one per axis in axis order.
    pub fn variation_coordinates(&self) -> &[f32] {
        self.variations.design_coordinates()
    }

    /// Move the face to `settings` (see [`VariationCoordinator::apply`]).
    pub fn set_variations(&mut self, settings: &[VariationSetting]) {
        self.variations.apply(settings);
    }

    /// Move the face to the named instance at `index`.
    pub fn set_named_instance(&mut self, index: usize) -> Result<()> {
        let instance = self.named_instances.get(index).ok_or(
            FontError::NamedInstanceOutOfRange {
                index,
                count: self.named_instances.len(),
            },
        )?;
        log::debug!("selecting instance {index} ({})", instance.name);
        self.variations.select_instance(instance);
        Ok(())
    }

    // Names and data

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub fn style_name(&self) -> &str {
        &self.style_name
    }

    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    /// The raw font file bytes (the whole collection for `.ttc` files).
    pub fn data(&self) -> &Arc<[u8]> {
        &self.data
    }
}

impl GlyphOutlines for Font {
    fn glyph_outline(&self, glyph_id: u16) -> Option<Path> {
        Self::glyph_outline(self, glyph_id)
    }
}

/// Number of faces: the collection size, or 1 for a plain font.
fn face_count(data: &[u8]) -> u32 {
    ttf_parser::fonts_in_collection(data).unwrap_or(1)
}

fn parse_face<'a>(
    data: &'a [u8],
    index: u32,
    origin: &LoadOrigin,
) -> Result<ttf_parser::Face<'a>> {
    let out_of_range = || FontError::FaceIndexOutOfRange {
        index,
        count: face_count(data),
    };
    // Plain fonts have exactly one face; the parser would ignore the index.
    if index >= face_count(data) {
        return Err(out_of_range());
    }
    ttf_parser::Face::parse(data, index).map_err(|e| match e {
        FaceParsingError::FaceIndexOutOfBounds => out_of_range(),
        other => FontError::load(origin.clone(), other.to_string()),
    })
}

fn layout_feature_tags(face: &ttf_parser::Face<'_>) -> Vec<Tag> {
    let tables = face.tables();
    let mut tags: Vec<Tag> = [tables.gsub, tables.gpos]
        .into_iter()
        .flatten()
        .flat_map(|table| table.features.into_iter().map(|feature| feature.tag))
        .collect();
    tags.sort();
    tags.dedup();
    tags
}
