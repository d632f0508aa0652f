//! Synthetic fonts for tests.
//!
//! Builds small but well-formed TrueType fonts in memory with `write-fonts`
//! so tests never depend on what is installed on the machine. Every font
//! shares one glyph set (below) at 1000 units per em.

use write_fonts::read::tables::glyf::CurvePoint;
use write_fonts::read::tables::head::MacStyle;
use write_fonts::tables::cmap::Cmap;
use write_fonts::tables::fvar::{Fvar, InstanceRecord, VariationAxisRecord};
use write_fonts::tables::glyf::{Contour, GlyfLocaBuilder, SimpleGlyph};
use write_fonts::tables::gpos::Gpos;
use write_fonts::tables::gsub::{
    Gsub, Ligature, LigatureSet, LigatureSubstFormat1, SubstitutionLookup,
};
use write_fonts::tables::head::Head;
use write_fonts::tables::hhea::Hhea;
use write_fonts::tables::hmtx::{Hmtx, LongMetric};
use write_fonts::tables::layout::{
    CoverageTable, Feature, FeatureList, FeatureRecord, LangSys, Lookup, LookupFlag, LookupList,
    Script, ScriptList, ScriptRecord,
};
use write_fonts::tables::maxp::Maxp;
use write_fonts::tables::name::{Name, NameRecord};
use write_fonts::types::{FWord, Fixed, GlyphId, GlyphId16, NameId, Tag, UfWord};
use write_fonts::{FontBuilder, NullableOffsetMarker, OffsetMarker};

pub(crate) const FAMILY: &str = "Glyphrun Test";
pub(crate) const VARIABLE_FAMILY: &str = "Glyphrun Variable";

pub(crate) const GID_SPACE: u16 = 1;
pub(crate) const GID_H: u16 = 2;
pub(crate) const GID_E: u16 = 3;
pub(crate) const GID_L: u16 = 4;
pub(crate) const GID_O_LOWER: u16 = 5;
pub(crate) const GID_O: u16 = 6;
pub(crate) const GID_F: u16 = 7;
pub(crate) const GID_I: u16 = 8;
pub(crate) const GID_FI: u16 = 9;
pub(crate) const GID_ALEF: u16 = 10;
pub(crate) const GID_BET: u16 = 11;

const ASCENDER: i16 = 800;
const DESCENDER: i16 = -200;
const LINE_GAP: i16 = 90;

/// Advance widths (design units) of the shared glyph set, indexed by glyph ID.
const ADVANCES: [u16; 12] = [500, 250, 700, 550, 250, 550, 750, 300, 250, 550, 600, 600];

const CHAR_MAP: &[(char, u16)] = &[
    (' ', GID_SPACE),
    ('H', GID_H),
    ('O', GID_O),
    ('e', GID_E),
    ('f', GID_F),
    ('i', GID_I),
    ('l', GID_L),
    ('o', GID_O_LOWER),
    ('\u{05D0}', GID_ALEF),
    ('\u{05D1}', GID_BET),
];

fn rect(x0: i16, y0: i16, x1: i16, y1: i16) -> Contour {
    Contour::from(vec![
        CurvePoint::on_curve(x0, y0),
        CurvePoint::on_curve(x0, y1),
        CurvePoint::on_curve(x1, y1),
        CurvePoint::on_curve(x1, y0),
    ])
}

/// A quadratic "O": outer curved contour plus a rectangular counter.
fn ring(x0: i16, y0: i16, x1: i16, y1: i16) -> Vec<Contour> {
    let cx = (x0 + x1) / 2;
    let cy = (y0 + y1) / 2;
    let outer = Contour::from(vec![
        CurvePoint::on_curve(cx, y0),
        CurvePoint::off_curve(x1, y0),
        CurvePoint::on_curve(x1, cy),
        CurvePoint::off_curve(x1, y1),
        CurvePoint::on_curve(cx, y1),
        CurvePoint::off_curve(x0, y1),
        CurvePoint::on_curve(x0, cy),
        CurvePoint::off_curve(x0, y0),
    ]);
    let inset = (x1 - x0) / 4;
    vec![outer, rect(x0 + inset, y0 + inset, x1 - inset, y1 - inset)]
}

/// The shared glyph set in glyph order.
fn glyphs() -> Vec<SimpleGlyph> {
    let outlines = vec![
        vec![rect(50, 0, 450, 700)], // .notdef
        vec![],                      // space
        vec![rect(50, 0, 650, 700)], // H
        vec![rect(40, 0, 510, 500)], // e
        vec![rect(60, 0, 190, 750)], // l
        ring(40, 0, 510, 500),       // o
        ring(50, 0, 700, 700),       // O
        vec![rect(40, 0, 260, 750)], // f
        vec![rect(60, 0, 190, 600)], // i
        vec![rect(40, 0, 510, 750)], // fi
        vec![rect(50, 0, 550, 600)], // alef
        vec![rect(50, 0, 550, 550)], // bet
    ];
    outlines
        .into_iter()
        .map(|contours| {
            let mut glyph = SimpleGlyph {
                contours,
                ..Default::default()
            };
            glyph.recompute_bounding_box();
            glyph
        })
        .collect()
}

/// Knobs for one face.
pub(crate) struct FaceDef<'a> {
    pub family: &'a str,
    pub style: &'a str,
    pub bold: bool,
    /// Add GSUB (`calt`, `liga` f+i) and GPOS (`calt`, `kern`) tables.
    pub layout: bool,
    /// Add an `fvar` table with `wght` and `wdth` axes and two instances.
    pub variable: bool,
}

impl Default for FaceDef<'_> {
    fn default() -> Self {
        Self {
            family: FAMILY,
            style: "Regular",
            bold: false,
            layout: true,
            variable: false,
        }
    }
}

/// "Glyphrun Test" Regular with layout tables.
pub(crate) fn basic_font() -> Vec<u8> {
    build_font(&FaceDef::default())
}

/// A font with `family`/`style` names and no layout tables.
pub(crate) fn named_font(family: &str, style: &str) -> Vec<u8> {
    build_font(&FaceDef {
        family,
        style,
        bold: style.contains("Bold"),
        layout: false,
        ..FaceDef::default()
    })
}

/// "Glyphrun Variable" with `wght` 100..400..900 and `wdth` 50..100..200.
///
/// Named instances: 0 = "Bold" (700, 100), 1 = "Light Condensed" (300, 75).
pub(crate) fn variable_font() -> Vec<u8> {
    build_font(&FaceDef {
        family: VARIABLE_FAMILY,
        variable: true,
        ..FaceDef::default()
    })
}

/// Two-face collection: "Glyphrun Test" Regular (0) and Bold (1).
pub(crate) fn collection() -> Vec<u8> {
    let regular = build_font(&FaceDef::default());
    let bold = build_font(&FaceDef {
        style: "Bold",
        bold: true,
        ..FaceDef::default()
    });
    pack_collection(&[regular, bold])
}

pub(crate) fn build_font(def: &FaceDef<'_>) -> Vec<u8> {
    let glyphs = glyphs();
    let num_glyphs = u16::try_from(glyphs.len()).expect("glyph count");

    let mut glyf_loca = GlyfLocaBuilder::new();
    for glyph in &glyphs {
        glyf_loca.add_glyph(glyph).expect("glyph compiles");
    }
    let (glyf, loca, loca_format) = glyf_loca.build();

    let h_metrics = glyphs
        .iter()
        .zip(ADVANCES)
        .map(|(glyph, advance)| LongMetric {
            advance,
            side_bearing: if glyph.contours.is_empty() { 0 } else { glyph.bbox.x_min },
        })
        .collect();

    let head = Head {
        units_per_em: 1000,
        mac_style: if def.bold { MacStyle::BOLD } else { MacStyle::empty() },
        index_to_loc_format: loca_format as i16,
        ..Default::default()
    };
    let hhea = Hhea {
        ascender: FWord::new(ASCENDER),
        descender: FWord::new(DESCENDER),
        line_gap: FWord::new(LINE_GAP),
        advance_width_max: UfWord::new(750),
        min_left_side_bearing: FWord::new(0),
        min_right_side_bearing: FWord::new(0),
        x_max_extent: FWord::new(700),
        caret_slope_rise: 1,
        caret_slope_run: 0,
        caret_offset: 0,
        number_of_h_metrics: num_glyphs,
    };
    let cmap = Cmap::from_mappings(
        CHAR_MAP
            .iter()
            .map(|&(c, gid)| (c, GlyphId::new(u32::from(gid)))),
    )
    .expect("cmap has no conflicts");

    let mut builder = FontBuilder::new();
    builder
        .add_table(&head)
        .and_then(|b| b.add_table(&hhea))
        .and_then(|b| {
            b.add_table(&Maxp {
                num_glyphs,
                ..Default::default()
            })
        })
        .and_then(|b| {
            b.add_table(&Hmtx {
                h_metrics,
                left_side_bearings: Vec::new(),
            })
        })
        .and_then(|b| b.add_table(&cmap))
        .and_then(|b| b.add_table(&glyf))
        .and_then(|b| b.add_table(&loca))
        .and_then(|b| b.add_table(&name(def)))
        .expect("core tables compile");
    if def.layout {
        builder
            .add_table(&gsub())
            .and_then(|b| b.add_table(&gpos()))
            .expect("layout tables compile");
    }
    if def.variable {
        builder.add_table(&fvar()).expect("fvar compiles");
    }
    builder.build()
}

fn name(def: &FaceDef<'_>) -> Name {
    let mut strings = vec![
        (1, def.family.to_owned()),
        (2, def.style.to_owned()),
        (4, format!("{} {}", def.family, def.style)),
        (6, format!("{}-{}", def.family, def.style).replace(' ', "")),
    ];
    if def.variable {
        strings.extend([
            (256, "Weight".to_owned()),
            (257, "Width".to_owned()),
            (258, "Bold".to_owned()),
            (259, "Light Condensed".to_owned()),
            (260, "GlyphrunVariable-Bold".to_owned()),
            (261, "GlyphrunVariable-LightCondensed".to_owned()),
        ]);
    }

    let mut name_record: Vec<NameRecord> = strings
        .into_iter()
        .map(|(id, string)| NameRecord {
            platform_id: 3,
            encoding_id: 1,
            language_id: 0x0409,
            name_id: NameId::new(id),
            string: string.into(),
        })
        .collect();
    name_record.sort();
    Name {
        name_record,
        ..Default::default()
    }
}

/// A `DFLT` script whose default language system enables every feature.
/// Each feature lists the lookup indices given with it.
fn layout_lists(features: &[(&[u8; 4], Vec<u16>)]) -> (ScriptList, FeatureList) {
    let feature_indices = (0..features.len())
        .map(|i| u16::try_from(i).expect("feature index"))
        .collect();
    let scripts = ScriptList {
        script_records: vec![ScriptRecord {
            script_tag: Tag::new(b"DFLT"),
            script: OffsetMarker::new(Script {
                default_lang_sys: NullableOffsetMarker::new(Some(LangSys {
                    required_feature_index: 0xFFFF,
                    feature_indices,
                })),
                lang_sys_records: Vec::new(),
            }),
        }],
    };
    let features = FeatureList {
        feature_records: features
            .iter()
            .map(|(tag, lookups)| FeatureRecord {
                feature_tag: Tag::new(tag),
                feature: OffsetMarker::new(Feature {
                    feature_params: NullableOffsetMarker::new(None),
                    lookup_list_indices: lookups.clone(),
                }),
            })
            .collect(),
    };
    (scripts, features)
}

/// `calt` (no lookups) and `liga` replacing f + i with the fi ligature.
fn gsub() -> Gsub {
    let (scripts, features) = layout_lists(&[(b"calt", vec![]), (b"liga", vec![0])]);
    let fi = LigatureSubstFormat1::new(
        CoverageTable::format_1(vec![GlyphId16::new(GID_F)]),
        vec![LigatureSet::new(vec![Ligature::new(
            GlyphId16::new(GID_FI),
            vec![GlyphId16::new(GID_I)],
        )])],
    );
    let lookups = LookupList::new(vec![SubstitutionLookup::Ligature(Lookup::new(
        LookupFlag::default(),
        vec![fi],
    ))]);
    Gsub::new(scripts, features, lookups)
}

/// `calt` and `kern`, both without lookups.
fn gpos() -> Gpos {
    let (scripts, features) = layout_lists(&[(b"calt", vec![]), (b"kern", vec![])]);
    Gpos::new(scripts, features, LookupList::new(Vec::new()))
}

fn fvar() -> Fvar {
    let axes = [
        (b"wght", 100.0, 400.0, 900.0, 256),
        (b"wdth", 50.0, 100.0, 200.0, 257),
    ];
    let instances = [(258, 260, [700.0, 100.0]), (259, 261, [300.0, 75.0])];

    let mut fvar = Fvar::default();
    for (tag, min, default, max, name_id) in axes {
        fvar.axis_instance_arrays.axes.push(VariationAxisRecord {
            axis_tag: Tag::new(tag),
            min_value: Fixed::from_f64(min),
            default_value: Fixed::from_f64(default),
            max_value: Fixed::from_f64(max),
            axis_name_id: NameId::new(name_id),
            ..Default::default()
        });
    }
    for (subfamily, postscript, coords) in instances {
        fvar.axis_instance_arrays.instances.push(InstanceRecord {
            subfamily_name_id: NameId::new(subfamily),
            coordinates: coords.into_iter().map(Fixed::from_f64).collect(),
            post_script_name_id: Some(NameId::new(postscript)),
            ..Default::default()
        });
    }
    fvar
}

/// Join standalone fonts into a `ttcf` collection.
///
/// `write-fonts` only writes single fonts, so each one is appended whole and
/// its table offsets are rebased onto the collection file.
fn pack_collection(fonts: &[Vec<u8>]) -> Vec<u8> {
    let count = u32::try_from(fonts.len()).expect("font count");
    let mut out = Vec::new();
    out.extend_from_slice(b"ttcf");
    out.extend_from_slice(&0x0001_0000u32.to_be_bytes());
    out.extend_from_slice(&count.to_be_bytes());

    let mut base = 12 + 4 * fonts.len();
    let mut bases = Vec::with_capacity(fonts.len());
    for font in fonts {
        out.extend_from_slice(&u32::try_from(base).expect("offset").to_be_bytes());
        bases.push(base);
        base += font.len().next_multiple_of(4);
    }

    for (font, base) in fonts.iter().zip(bases) {
        let start = out.len();
        out.extend_from_slice(font);
        out.resize(start + font.len().next_multiple_of(4), 0);

        let num_tables = usize::from(u16::from_be_bytes([font[4], font[5]]));
        for record in 0..num_tables {
            let at = start + 12 + 16 * record + 8;
            let offset = u32::from_be_bytes([out[at], out[at + 1], out[at + 2], out[at + 3]]);
            let rebased = offset + u32::try_from(base).expect("offset");
            out[at..at + 4].copy_from_slice(&rebased.to_be_bytes());
        }
    }
    out
}
