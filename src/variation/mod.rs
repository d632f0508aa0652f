//! Variable font support.
//!
//! A variable font's shape depends on a position along each of its axes.
//! Two engines read the font independently (the shaper for advances and
//! substitutions, the rasterizer for outlines), so both must be moved to
//! the same position or advances and outlines drift apart. The
//! [`VariationCoordinator`] holds the one authoritative position and pushes
//! it to each engine.

use std::fmt;
use std::str::FromStr;

use rustybuzz::ttf_parser::{self, Tag};
use skrifa::MetadataProvider;

use crate::features::parse_tag;
use crate::font::names;

/// One design axis declared by the font.
#[derive(Debug, Clone, PartialEq)]
pub struct VariationAxis {
    pub tag: Tag,
    /// Display name from the `name` table, or the tag when absent.
    pub name: String,
    pub min: f32,
    pub default: f32,
    pub max: f32,
    /// The font asks for this axis not to be shown in user interfaces.
    pub hidden: bool,
}

impl VariationAxis {
    /// Clamp `value` into `[min, max]`.
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min.min(self.max), self.max.max(self.min))
    }
}

/// A preset axis position published by the font (e.g. "Bold Condensed").
#[derive(Debug, Clone, PartialEq)]
pub struct NamedInstance {
    pub index: usize,
    pub name: String,
    pub postscript_name: Option<String>,
    /// One design coordinate per axis, in axis order.
    pub coordinates: Vec<f32>,
}

/// An axis position request, `tag = value` in design units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariationSetting {
    pub tag: Tag,
    pub value: f32,
}

impl VariationSetting {
    pub fn new(tag: Tag, value: f32) -> Self {
        Self { tag, value }
    }

    pub fn from_bytes(tag: &[u8; 4], value: f32) -> Self {
        Self::new(Tag::from_bytes(tag), value)
    }
}

/// Error returned when a variation string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVariationError(String);

impl fmt::Display for ParseVariationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid variation setting {:?} (expected tag=value)", self.0)
    }
}

impl std::error::Error for ParseVariationError {}

impl FromStr for VariationSetting {
    type Err = ParseVariationError;

    /// Parses `"wght=700"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseVariationError(s.to_owned());
        let (tag, value) = s.split_once('=').ok_or_else(err)?;
        let tag = parse_tag(tag.trim()).ok_or_else(err)?;
        let value = value.trim().parse::<f32>().ok().ok_or_else(err)?;
        if !value.is_finite() {
            return Err(err());
        }
        Ok(Self::new(tag, value))
    }
}

impl fmt::Display for VariationSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.tag, self.value)
    }
}

/// Read the axis list of a face. Empty for static fonts.
pub(crate) fn read_axes(face: &ttf_parser::Face<'_>) -> Vec<VariationAxis> {
    face.variation_axes()
        .into_iter()
        .map(|axis| VariationAxis {
            tag: axis.tag,
            name: names::lookup(face, axis.name_id).unwrap_or_else(|| axis.tag.to_string()),
            min: axis.min_value,
            default: axis.def_value,
            max: axis.max_value,
            hidden: axis.hidden,
        })
        .collect()
}

/// Read the named instances of face `face_index` in `data`. Empty for
/// static fonts. Names resolve through `face`'s `name` table.
pub(crate) fn read_instances(
    data: &[u8],
    face_index: u32,
    face: &ttf_parser::Face<'_>,
) -> Vec<NamedInstance> {
    let font = match skrifa::raw::FontRef::from_index(data, face_index) {
        Ok(font) => font,
        Err(e) => {
            log::warn!("face {face_index}: cannot read named instances: {e}");
            return Vec::new();
        }
    };
    font.named_instances()
        .iter()
        .enumerate()
        .map(|(index, instance)| NamedInstance {
            index,
            name: names::lookup(face, instance.subfamily_name_id().to_u16())
                .unwrap_or_else(|| format!("Instance {index}")),
            postscript_name: instance
                .postscript_name_id()
                .and_then(|id| names::lookup(face, id.to_u16())),
            coordinates: instance.user_coords().collect(),
        })
        .collect()
}

/// Single source of truth for a face's axis position.
///
/// Holds one design coordinate per axis in the font's axis order. Starts at
/// every axis default.
#[derive(Debug, Clone, PartialEq)]
pub struct VariationCoordinator {
    axes: Vec<VariationAxis>,
    coordinates: Vec<f32>,
}

impl VariationCoordinator {
    pub fn new(axes: Vec<VariationAxis>) -> Self {
        let coordinates = axes.iter().map(|a| a.default).collect();
        Self { axes, coordinates }
    }

    pub fn axes(&self) -> &[VariationAxis] {
        &self.axes
    }

    /// Whether the face has any axes at all.
    pub fn is_variable(&self) -> bool {
        !self.axes.is_empty()
    }

    /// Current design coordinates, in axis order.
    pub fn design_coordinates(&self) -> &[f32] {
        &self.coordinates
    }

    /// Move every axis back to its default.
    pub fn reset(&mut self) {
        for (coord, axis) in self.coordinates.iter_mut().zip(&self.axes) {
            *coord = axis.default;
        }
    }

    /// Replace the position with `settings`.
    ///
    /// Axes not mentioned return to their default. Values are clamped to
    /// the axis range. Tags the font does not declare are dropped for both
    /// engines; the last setting wins when a tag repeats.
    pub fn apply(&mut self, settings: &[VariationSetting]) {
        self.reset();
        for setting in settings {
            match self.axes.iter().position(|a| a.tag == setting.tag) {
                Some(i) => {
                    let axis = &self.axes[i];
                    if !(axis.min..=axis.max).contains(&setting.value) {
                        log::debug!(
                            "{} out of range {}..{}, clamping",
                            setting,
                            axis.min,
                            axis.max
                        );
                    }
                    self.coordinates[i] = axis.clamp(setting.value);
                }
                None => log::warn!("font has no {} axis, ignoring variation", setting.tag),
            }
        }
    }

    /// Move to a named instance's coordinates.
    pub fn select_instance(&mut self, instance: &NamedInstance) {
        self.reset();
        for ((coord, axis), value) in self
            .coordinates
            .iter_mut()
            .zip(&self.axes)
            .zip(&instance.coordinates)
        {
            *coord = axis.clamp(*value);
        }
    }

    /// The position as one `tag = value` setting per axis.
    pub fn shaping_variations(&self) -> Vec<VariationSetting> {
        self.axes
            .iter()
            .zip(&self.coordinates)
            .map(|(axis, &value)| VariationSetting::new(axis.tag, value))
            .collect()
    }

    /// Push the position into a shaping face.
    pub fn apply_to_shaping(&self, face: &mut rustybuzz::Face<'_>) {
        if !self.is_variable() {
            return;
        }
        let variations: Vec<rustybuzz::Variation> = self
            .shaping_variations()
            .into_iter()
            .map(|s| rustybuzz::Variation {
                tag: s.tag,
                value: s.value,
            })
            .collect();
        face.set_variations(&variations);
    }

    /// Push the position into a rasterizer face, one axis at a time.
    pub fn apply_to_outlines(&self, face: &mut ttf_parser::Face<'_>) {
        for (axis, &value) in self.axes.iter().zip(&self.coordinates) {
            if face.set_variation(axis.tag, value).is_none() {
                log::debug!("rasterizer rejected {}={value}", axis.tag);
            }
        }
    }
}
