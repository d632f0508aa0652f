use std::fmt;

use super::{Path, PathCommand};
use crate::Point;

fn triangle() -> Path {
    Path::from(vec![
        PathCommand::MoveTo(Point::new(0.0, 0.0)),
        PathCommand::LineTo(Point::new(10.0, 0.0)),
        PathCommand::QuadTo(Point::new(10.0, 10.0), Point::new(5.0, 10.0)),
        PathCommand::CubicTo(
            Point::new(3.0, 10.0),
            Point::new(1.0, 5.0),
            Point::new(0.0, 0.0),
        ),
        PathCommand::Close,
    ])
}

#[test]
fn translated_shifts_every_point() {
    let shifted = triangle().translated(Point::new(100.0, -20.0));
    assert_eq!(
        shifted.commands(),
        &[
            PathCommand::MoveTo(Point::new(100.0, -20.0)),
            PathCommand::LineTo(Point::new(110.0, -20.0)),
            PathCommand::QuadTo(Point::new(110.0, -10.0), Point::new(105.0, -10.0)),
            PathCommand::CubicTo(
                Point::new(103.0, -10.0),
                Point::new(101.0, -15.0),
                Point::new(100.0, -20.0),
            ),
            PathCommand::Close,
        ]
    );
}

#[test]
fn translated_leaves_original_untouched() {
    let path = triangle();
    let _ = path.translated(Point::new(1.0, 1.0));
    assert_eq!(path, triangle());
}

#[test]
fn translated_by_zero_is_identity() {
    assert_eq!(triangle().translated(Point::ZERO), triangle());
}

#[test]
fn close_is_unaffected_by_translation() {
    assert_eq!(
        PathCommand::Close.translated(Point::new(3.0, 4.0)),
        PathCommand::Close
    );
}

#[test]
fn end_points() {
    assert_eq!(
        PathCommand::QuadTo(Point::new(1.0, 1.0), Point::new(2.0, 3.0)).end_point(),
        Some(Point::new(2.0, 3.0))
    );
    assert_eq!(PathCommand::Close.end_point(), None);
}

#[test]
fn contour_count_counts_move_to() {
    let mut cmds = triangle().commands().to_vec();
    cmds.push(PathCommand::MoveTo(Point::new(2.0, 2.0)));
    cmds.push(PathCommand::LineTo(Point::new(3.0, 2.0)));
    cmds.push(PathCommand::Close);
    let path = Path::from(cmds);
    assert_eq!(path.contour_count(), 2);
    assert_eq!(path.len(), 8);
}

#[test]
fn empty_path() {
    let path = Path::new();
    assert!(path.is_empty());
    assert_eq!(path.contour_count(), 0);
    assert_eq!(path.to_svg_data(), "");
}

#[test]
fn svg_data() {
    assert_eq!(
        triangle().to_svg_data(),
        "M0 0 L10 0 Q10 10 5 10 C3 10 1 5 0 0 Z"
    );
    assert_eq!(triangle().to_string(), triangle().to_svg_data());
}

#[test]
fn collect_from_iterator() {
    let path: Path = triangle().iter().copied().take(2).collect();
    assert_eq!(path.len(), 2);
}

#[test]
fn command_display() {
    assert_eq!(PathCommand::MoveTo(Point::new(1.5, -2.0)).to_string(), "M1.5 -2");
    assert_eq!(PathCommand::Close.to_string(), "Z");
}

/// Sink that refuses every write.
struct Refusing;

impl fmt::Write for Refusing {
    fn write_str(&mut self, _: &str) -> fmt::Result {
        Err(fmt::Error)
    }
}

#[test]
fn display_reports_writer_errors() {
    use std::fmt::Write as _;

    assert!(write!(Refusing, "{}", triangle()).is_err());
    // An empty path writes nothing, so nothing can fail.
    assert!(write!(Refusing, "{}", Path::new()).is_ok());
}
