use glyphrun::{Metrics, Path, PathCommand, Point, PositionedGlyph};

use super::{write_document, write_glyph_lines};

fn square_at(x: f64) -> PositionedGlyph {
    let path = Path::from(vec![
        PathCommand::MoveTo(Point::new(0.0, 0.0)),
        PathCommand::LineTo(Point::new(100.0, 0.0)),
        PathCommand::LineTo(Point::new(100.0, 100.0)),
        PathCommand::Close,
    ]);
    PositionedGlyph {
        glyph_id: 7,
        path,
        position: Point::new(x, 0.0),
        advance: Point::new(500.0, 0.0),
        cluster: 2,
    }
}

fn render(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
    let mut out = Vec::new();
    f(&mut out).expect("write to memory");
    String::from_utf8(out).expect("utf-8")
}

#[test]
fn glyph_lines_list_every_glyph() {
    let glyphs = [square_at(0.0), square_at(500.0)];
    let text = render(|out| write_glyph_lines(out, &glyphs));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("gid=7 cluster=2 pos=0,0 adv=500,0"));
    assert!(lines[1].contains("pos=500,0"));
}

#[test]
fn document_places_paths_and_view_box() {
    let metrics = Metrics::new(1000, 800.0, -200.0, 0.0);
    let glyphs = [square_at(500.0)];
    let text = render(|out| write_document(out, &glyphs, &metrics, 1000.0));
    assert!(text.starts_with("<svg "));
    assert!(text.contains(r#"viewBox="0 -800 1000 1000""#));
    assert!(text.contains(r#"data-gid="7""#));
    // Translated by the pen position.
    assert!(text.contains("M500"));
    assert!(text.trim_end().ends_with("</svg>"));
}

#[test]
fn empty_run_is_a_valid_document() {
    let metrics = Metrics::new(1000, 800.0, -200.0, 0.0);
    let text = render(|out| write_document(out, &[], &metrics, 0.0));
    assert!(!text.contains("<path"));
    assert!(text.contains("</g>"));
}
