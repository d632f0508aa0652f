//! Font repository: resolves "family + style" to font bytes.
//!
//! One backend is compiled in per platform:
//!
//! - macOS: CoreText font collections.
//! - Windows: the DirectWrite system font collection.
//! - Other Unix: fontconfig-configured directories indexed by `fontdb`.
//! - Anything else: every lookup fails with [`FontError::NotSupported`].
//!
//! A backend that finds nothing returns `Ok(None)`. Errors are reserved for
//! a font subsystem that cannot start and a match whose file cannot be read.

pub mod style;

mod memory;
mod unsupported;

#[cfg(target_os = "macos")]
mod coretext;
#[cfg(target_os = "windows")]
mod directwrite;
#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "ios", target_os = "android"))
))]
mod fontconfig;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use rustybuzz::ttf_parser;

use crate::error::{FontError, LoadOrigin, Result};
use crate::font::names;

pub use memory::MemorySource;
pub use style::{Slant, StyleDescriptor};
pub use unsupported::UnsupportedSource;

#[cfg(target_os = "macos")]
pub use coretext::CoreTextSource as SystemSource;
#[cfg(target_os = "windows")]
pub use directwrite::DirectWriteSource as SystemSource;
#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "ios", target_os = "android"))
))]
pub use fontconfig::FontconfigSource as SystemSource;
#[cfg(not(any(
    target_os = "macos",
    target_os = "windows",
    all(
        unix,
        not(any(target_os = "macos", target_os = "ios", target_os = "android"))
    )
)))]
pub use unsupported::UnsupportedSource as SystemSource;

/// Style assumed when a lookup names none.
pub const DEFAULT_STYLE: &str = "Regular";

/// A font lookup backend.
pub trait FontSource: Send + Sync {
    /// Find the best face for `family` in `style` (`None` means "Regular").
    ///
    /// `Ok(None)` when the backend has no such family. A match whose bytes
    /// cannot be obtained is an error of kind [`ErrorKind::Read`].
    ///
    /// [`ErrorKind::Read`]: crate::ErrorKind::Read
    fn match_font(&self, family: &str, style: Option<&str>) -> Result<Option<FontMatch>>;

    /// Every installed family with its style names, sorted by name.
    fn available_fonts(&self) -> Result<Vec<FontFamily>>;
}

/// Bytes and names of one resolved face.
#[derive(Clone)]
pub struct FontMatch {
    /// The whole font file (the whole collection for `.ttc`).
    pub data: Arc<[u8]>,
    pub face_index: u32,
    pub family_name: String,
    pub style_name: String,
}

impl fmt::Debug for FontMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontMatch")
            .field("family_name", &self.family_name)
            .field("style_name", &self.style_name)
            .field("face_index", &self.face_index)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl FontMatch {
    /// Build a match from font bytes, reading the names from the face.
    pub fn from_data(data: Arc<[u8]>, face_index: u32) -> Result<Self> {
        Self::with_origin(data, face_index, &LoadOrigin::Memory)
    }

    /// Read a matched file from disk.
    ///
    /// An unreadable file is a [`FontError::Read`], not a missing match.
    pub fn from_file(path: &Path, face_index: u32) -> Result<Self> {
        let data = std::fs::read(path).map_err(|source| FontError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::with_origin(data.into(), face_index, &LoadOrigin::Path(path.to_path_buf()))
    }

    fn with_origin(data: Arc<[u8]>, face_index: u32, origin: &LoadOrigin) -> Result<Self> {
        let face = ttf_parser::Face::parse(&data, face_index)
            .map_err(|e| FontError::load(origin.clone(), e.to_string()))?;
        let family_name = names::family_or_unknown(&face);
        let style_name = names::style_or_default(&face);
        Ok(Self {
            face_index,
            family_name,
            style_name,
            data,
        })
    }
}

/// One installed family and the style names it offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFamily {
    pub name: String,
    pub styles: BTreeSet<String>,
}

/// Group `(family, style)` pairs into sorted families.
pub(crate) fn group_families(
    pairs: impl IntoIterator<Item = (String, String)>,
) -> Vec<FontFamily> {
    let mut families: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for (family, style) in pairs {
        if family.is_empty() {
            continue;
        }
        families.entry(family).or_default().insert(style);
    }
    families
        .into_iter()
        .map(|(name, styles)| FontFamily { name, styles })
        .collect()
}

/// The font lookup front end.
///
/// Wraps the platform backend by default; any other [`FontSource`] can be
/// injected with [`FontRepository::with_source`].
pub struct FontRepository {
    source: Box<dyn FontSource>,
}

impl fmt::Debug for FontRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontRepository").finish_non_exhaustive()
    }
}

impl FontRepository {
    /// The platform backend.
    pub fn system() -> Self {
        Self::with_source(SystemSource::new())
    }

    pub fn with_source(source: impl FontSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Whether this build has a system lookup backend.
    pub const fn is_available() -> bool {
        cfg!(any(
            target_os = "macos",
            target_os = "windows",
            all(
                unix,
                not(any(target_os = "macos", target_os = "ios", target_os = "android"))
            )
        ))
    }
}

impl FontSource for FontRepository {
    /// An empty family name never matches.
    fn match_font(&self, family: &str, style: Option<&str>) -> Result<Option<FontMatch>> {
        let family = family.trim();
        if family.is_empty() {
            return Ok(None);
        }
        let style = style.map(str::trim).filter(|s| !s.is_empty());
        let found = self.source.match_font(family, style)?;
        match &found {
            Some(m) => log::debug!(
                "matched {family:?} / {:?} to {} / {} (face {})",
                style.unwrap_or(DEFAULT_STYLE),
                m.family_name,
                m.style_name,
                m.face_index
            ),
            None => log::debug!("no match for {family:?} / {style:?}"),
        }
        Ok(found)
    }

    fn available_fonts(&self) -> Result<Vec<FontFamily>> {
        self.source.available_fonts()
    }
}
