//! Vector path made of move/line/curve/close commands.
//!
//! Paths are produced by outline decomposition and never mutated after
//! construction. `translated()` returns a shifted copy.

use std::fmt;

use crate::Point;

/// A single drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new contour at the point.
    MoveTo(Point),
    /// Straight segment to the point.
    LineTo(Point),
    /// Quadratic Bézier with one control point, then the end point.
    QuadTo(Point, Point),
    /// Cubic Bézier with two control points, then the end point.
    CubicTo(Point, Point, Point),
    /// Close the current contour.
    Close,
}

impl PathCommand {
    /// Shift every point carried by this command. `Close` is returned unchanged.
    #[must_use]
    pub fn translated(self, offset: Point) -> Self {
        match self {
            Self::MoveTo(p) => Self::MoveTo(p + offset),
            Self::LineTo(p) => Self::LineTo(p + offset),
            Self::QuadTo(c, p) => Self::QuadTo(c + offset, p + offset),
            Self::CubicTo(c1, c2, p) => Self::CubicTo(c1 + offset, c2 + offset, p + offset),
            Self::Close => Self::Close,
        }
    }

    /// The on-curve point this command ends at, if any.
    pub fn end_point(self) -> Option<Point> {
        match self {
            Self::MoveTo(p) | Self::LineTo(p) | Self::QuadTo(_, p) | Self::CubicTo(_, _, p) => {
                Some(p)
            }
            Self::Close => None,
        }
    }
}

/// An ordered sequence of drawing commands.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands in traversal order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Iterate over the commands.
    pub fn iter(&self) -> std::slice::Iter<'_, PathCommand> {
        self.commands.iter()
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the path holds no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of contours (one per `MoveTo`).
    pub fn contour_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo(_)))
            .count()
    }

    /// Return a copy with every point-bearing command shifted by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Point) -> Self {
        self.commands.iter().map(|c| c.translated(offset)).collect()
    }

    /// Render as SVG path data (`M x y L x y ... Z`).
    ///
    /// Coordinates are emitted as-is; font space is y-up, so callers
    /// drawing into y-down SVG space flip with a transform.
    pub fn to_svg_data(&self) -> String {
        self.to_string()
    }
}

impl From<Vec<PathCommand>> for Path {
    fn from(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }
}

impl FromIterator<PathCommand> for Path {
    fn from_iter<I: IntoIterator<Item = PathCommand>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathCommand;
    type IntoIter = std::slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

/// One SVG path command, e.g. `Q10 0 20 10`.
impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::MoveTo(p) => write!(f, "M{} {}", p.x, p.y),
            Self::LineTo(p) => write!(f, "L{} {}", p.x, p.y),
            Self::QuadTo(c, p) => write!(f, "Q{} {} {} {}", c.x, c.y, p.x, p.y),
            Self::CubicTo(c1, c2, p) => {
                write!(f, "C{} {} {} {} {} {}", c1.x, c1.y, c2.x, c2.y, p.x, p.y)
            }
            Self::Close => f.write_str("Z"),
        }
    }
}

/// SVG path data: the commands separated by single spaces.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            cmd.fmt(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
