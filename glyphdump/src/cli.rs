//! Command-line arguments and how they override the config file.

use std::path::PathBuf;

use clap::Parser;
use glyphrun::{Config, VariationSetting};

#[derive(Parser, Debug)]
#[command(
    name = "glyphdump",
    version,
    about = "Shape text and print the positioned glyph outlines",
    long_about = "Shape TEXT with a font file or an installed family and print one line per \
                  glyph (id, cluster, pen position, advance, SVG path data), or a complete \
                  SVG document with --svg. Flags override the config file."
)]
pub struct Args {
    /// Text to shape.
    pub text: Option<String>,

    /// Config file to read instead of the default location.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Font file (.ttf, .otf, .ttc).
    #[arg(short, long, value_name = "FILE", conflicts_with = "family")]
    pub font: Option<PathBuf>,

    /// Installed family name, resolved through the system font repository.
    #[arg(long, value_name = "NAME")]
    pub family: Option<String>,

    /// Style within the family, e.g. "Bold Italic".
    #[arg(short, long, value_name = "NAME")]
    pub style: Option<String>,

    /// Face index within a collection file.
    #[arg(long, value_name = "N")]
    pub index: Option<u32>,

    /// OpenType feature: `liga`, `-kern`, `salt=2`. Repeatable.
    #[arg(long = "feature", value_name = "FEATURE", allow_hyphen_values = true)]
    pub features: Vec<String>,

    /// Variation axis position: `wght=700`. Repeatable.
    #[arg(long = "variation", value_name = "TAG=VALUE")]
    pub variations: Vec<String>,

    /// Named instance index; replaces any axis positions.
    #[arg(long, value_name = "N")]
    pub instance: Option<usize>,

    /// Text direction: ltr, rtl, ttb or btt.
    #[arg(long)]
    pub direction: Option<String>,

    /// BCP 47 language tag.
    #[arg(long)]
    pub language: Option<String>,

    /// List installed families and their styles.
    #[arg(long)]
    pub list: bool,

    /// List the faces of the font file.
    #[arg(long)]
    pub faces: bool,

    /// Print metrics, feature tags, axes and named instances.
    #[arg(long)]
    pub info: bool,

    /// Emit an SVG document instead of per-glyph lines.
    #[arg(long)]
    pub svg: bool,
}

impl Args {
    /// Layer the flags over `config`.
    pub fn apply(&self, config: &mut Config) -> Result<(), String> {
        if let Some(path) = &self.font {
            config.font.path = Some(path.clone());
            config.font.family = None;
        }
        if let Some(family) = &self.family {
            config.font.family = Some(family.clone());
            config.font.path = None;
        }
        if let Some(style) = &self.style {
            config.font.style = Some(style.clone());
        }
        if let Some(index) = self.index {
            config.font.index = index;
        }

        config.shaping.features.extend(self.features.iter().cloned());
        for raw in &self.variations {
            let setting: VariationSetting = raw.parse().map_err(|e| format!("--variation: {e}"))?;
            config
                .shaping
                .variations
                .insert(setting.tag.to_string(), setting.value);
        }
        if self.instance.is_some() {
            config.shaping.named_instance = self.instance;
        }
        if let Some(direction) = &self.direction {
            config.shaping.direction = Some(direction.clone());
        }
        if let Some(language) = &self.language {
            config.shaping.language = Some(language.clone());
        }
        Ok(())
    }
}
