//! `glyphdump`: shape a string and print its glyph outlines.

mod cli;
mod svg;

use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use glyphrun::{Config, Font, FontRepository, FontSource, shaper};

use cli::Args;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("glyphdump: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    if args.list {
        return list_families();
    }

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default(),
    };
    args.apply(&mut config)?;

    if args.faces {
        return list_faces(&config);
    }

    let font = load_font(&config)?;
    if args.info {
        return print_info(&font);
    }

    let Some(text) = args.text.as_deref() else {
        return Err("no text given (pass TEXT, or one of --list, --faces, --info)".into());
    };
    let features = config.parsed_features();
    let options = config.shape_options();
    let shaped = font.shape_glyphs(text, &features, &options);
    let glyphs = shaper::assemble(&shaped, &font);
    log::info!(
        "shaped {} chars into {} outlined glyphs with {} {}",
        text.chars().count(),
        glyphs.len(),
        font.family_name(),
        font.style_name()
    );

    let mut out = io::stdout().lock();
    if args.svg {
        let width = shaped.iter().map(|g| g.x_advance).sum::<f64>();
        svg::write_document(&mut out, &glyphs, &font.working_metrics(), width)?;
    } else {
        svg::write_glyph_lines(&mut out, &glyphs)?;
    }
    Ok(())
}

/// Open the configured font and move it to the configured axis position.
fn load_font(config: &Config) -> Result<Font, Box<dyn Error>> {
    let mut font = if let Some(path) = &config.font.path {
        if config.font.style.is_some() {
            log::warn!("--style is ignored when loading a font file; use --index");
        }
        Font::from_path_with_index(path, config.font.index)?
    } else if let Some(family) = &config.font.family {
        Font::from_family(family, config.font.style.as_deref())?
    } else {
        return Err("no font given (pass --font or --family, or set [font] in the config)".into());
    };

    if let Some(index) = config.shaping.named_instance {
        font.set_named_instance(index)?;
    } else {
        let settings = config.variation_settings();
        if !settings.is_empty() {
            font.set_variations(&settings);
        }
    }
    Ok(font)
}

fn list_families() -> Result<(), Box<dyn Error>> {
    let repo = FontRepository::system();
    let mut out = io::stdout().lock();
    for family in repo.available_fonts()? {
        let styles: Vec<&str> = family.styles.iter().map(String::as_str).collect();
        writeln!(out, "{}: {}", family.name, styles.join(", "))?;
    }
    Ok(())
}

fn list_faces(config: &Config) -> Result<(), Box<dyn Error>> {
    let Some(path) = &config.font.path else {
        return Err("--faces needs a font file (--font)".into());
    };
    let mut out = io::stdout().lock();
    for face in Font::faces_at_path(path)? {
        writeln!(out, "{}: {} {}", face.index, face.family_name, face.style_name)?;
    }
    Ok(())
}

fn print_info(font: &Font) -> Result<(), Box<dyn Error>> {
    let mut out = io::stdout().lock();
    let metrics = font.working_metrics();
    writeln!(
        out,
        "{} {} (face {})",
        font.family_name(),
        font.style_name(),
        font.face_index()
    )?;
    writeln!(out, "units per em: {}", font.units_per_em())?;
    writeln!(
        out,
        "ascender {} descender {} line gap {} line height {}",
        metrics.ascender, metrics.descender, metrics.line_gap, metrics.line_height
    )?;

    let tags: Vec<String> = font.feature_tags().iter().map(ToString::to_string).collect();
    writeln!(out, "features: {}", tags.join(" "))?;

    for (axis, value) in font
        .variation_axes()
        .iter()
        .zip(font.variation_coordinates())
    {
        writeln!(
            out,
            "axis {} ({}): {} .. {} .. {}, now {}{}",
            axis.tag,
            axis.name,
            axis.min,
            axis.default,
            axis.max,
            value,
            if axis.hidden { " [hidden]" } else { "" }
        )?;
    }
    for instance in font.named_instances() {
        let coords: Vec<String> = instance.coordinates.iter().map(ToString::to_string).collect();
        writeln!(
            out,
            "instance {}: {} [{}]",
            instance.index,
            instance.name,
            coords.join(", ")
        )?;
    }
    Ok(())
}
