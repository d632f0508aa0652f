//! Configuration structures and loading logic.

mod io;

pub use io::{ConfigError, config_dir, config_path};

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::features::{FontFeature, parse_tag};
use crate::shaper::{Direction, ShapeOptions};
use crate::variation::VariationSetting;

/// Top-level configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub font: FontConfig,
    pub shaping: ShapingConfig,
}

/// Which font to load.
///
/// `path` wins over `family` when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub path: Option<PathBuf>,
    pub family: Option<String>,
    pub style: Option<String>,
    /// Face index within a collection file.
    pub index: u32,
}

/// Shaping input beyond the text itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapingConfig {
    /// OpenType features to enable/disable during text shaping.
    ///
    /// Each string is a 4-character feature tag, optionally prefixed with `-`
    /// to disable or suffixed with `=N` for a value. Examples: `"calt"`,
    /// `"-liga"`, `"salt=2"`.
    pub features: Vec<String>,
    /// Named instance index; applied instead of `variations` when set.
    pub named_instance: Option<usize>,
    /// `ltr`, `rtl`, `ttb` or `btt`. Guessed from the text when unset.
    pub direction: Option<String>,
    /// BCP 47 language tag. Guessed when unset.
    pub language: Option<String>,
    /// Variation axis positions, e.g. `wght = 700.0`.
    pub variations: BTreeMap<String, f32>,
}

impl Config {
    /// Parse a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Feature settings, skipping (and logging) invalid strings.
    pub fn parsed_features(&self) -> Vec<FontFeature> {
        self.shaping
            .features
            .iter()
            .filter_map(|s| match s.parse::<FontFeature>() {
                Ok(f) => Some(f),
                Err(e) => {
                    log::warn!("config: {e}");
                    None
                }
            })
            .collect()
    }

    /// Variation settings, skipping (and logging) invalid tags.
    pub fn variation_settings(&self) -> Vec<VariationSetting> {
        self.shaping
            .variations
            .iter()
            .filter_map(|(tag, &value)| match parse_tag(tag) {
                Some(tag) => Some(VariationSetting::new(tag, value)),
                None => {
                    log::warn!("config: invalid variation tag {tag:?}");
                    None
                }
            })
            .collect()
    }

    /// Direction and language overrides. An unknown direction is logged
    /// and left to auto-detection.
    pub fn shape_options(&self) -> ShapeOptions {
        let direction = self
            .shaping
            .direction
            .as_deref()
            .and_then(|s| match s.parse::<Direction>() {
                Ok(d) => Some(d),
                Err(e) => {
                    log::warn!("config: {e}");
                    None
                }
            });
        ShapeOptions {
            direction,
            language: self.shaping.language.clone(),
        }
    }
}
