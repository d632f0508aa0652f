//! Error types for font loading and lookup.
//!
//! Glyph-level problems (a glyph without an outline, a failed decomposition,
//! an unknown feature tag) are not errors: they degrade silently and never
//! reach this type.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Where a font was being loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOrigin {
    /// A file on disk.
    Path(PathBuf),
    /// An in-memory buffer.
    Memory,
}

impl fmt::Display for LoadOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Memory => f.write_str("memory"),
        }
    }
}

/// Broad error category, independent of which operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An engine or font backend failed to start.
    Initialization,
    /// A file or buffer is not a readable font.
    Load,
    /// A family, style, face index or named instance does not exist.
    NotFound,
    /// A repository match was found but its bytes could not be read.
    Read,
    /// No font lookup backend exists on this platform.
    NotSupported,
}

/// Errors raised by font construction and repository lookups.
#[derive(Debug)]
pub enum FontError {
    /// The platform font subsystem could not be initialised.
    Initialization(String),
    /// The data is not a valid font.
    Load { origin: LoadOrigin, reason: String },
    /// No installed font matches the requested family and style.
    FamilyNotFound { family: String, style: Option<String> },
    /// No face in a collection carries the requested family/style pair.
    FaceNotFound { family: String, style: String },
    /// The face index is past the end of the collection.
    FaceIndexOutOfRange { index: u32, count: u32 },
    /// The named instance index is past the end of the `fvar` instance list.
    NamedInstanceOutOfRange { index: usize, count: usize },
    /// A matched font file could not be read.
    Read { path: PathBuf, source: io::Error },
    /// The backend matched a face but could not hand over its bytes.
    Unreadable { family: String, reason: String },
    /// This build has no font lookup backend.
    NotSupported,
}

impl FontError {
    /// Shorthand for a [`FontError::Load`] error.
    pub fn load(origin: LoadOrigin, reason: impl Into<String>) -> Self {
        Self::Load {
            origin,
            reason: reason.into(),
        }
    }

    /// Shorthand for a [`FontError::Unreadable`] error.
    pub fn unreadable(family: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unreadable {
            family: family.into(),
            reason: reason.into(),
        }
    }

    /// The category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Initialization(_) => ErrorKind::Initialization,
            Self::Load { .. } => ErrorKind::Load,
            Self::FamilyNotFound { .. }
            | Self::FaceNotFound { .. }
            | Self::FaceIndexOutOfRange { .. }
            | Self::NamedInstanceOutOfRange { .. } => ErrorKind::NotFound,
            Self::Read { .. } | Self::Unreadable { .. } => ErrorKind::Read,
            Self::NotSupported => ErrorKind::NotSupported,
        }
    }

    /// Whether this is an absence result rather than a failure.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initialization(msg) => write!(f, "font system failed to initialize: {msg}"),
            Self::Load { origin, reason } => write!(f, "failed to load font from {origin}: {reason}"),
            Self::FamilyNotFound { family, style } => match style {
                Some(style) => write!(f, "no font found for family {family:?} style {style:?}"),
                None => write!(f, "no font found for family {family:?}"),
            },
            Self::FaceNotFound { family, style } => {
                write!(f, "no face named {family:?} / {style:?} in font data")
            }
            Self::FaceIndexOutOfRange { index, count } => {
                write!(f, "face index {index} out of range ({count} faces)")
            }
            Self::NamedInstanceOutOfRange { index, count } => {
                write!(f, "named instance {index} out of range ({count} instances)")
            }
            Self::Read { path, source } => {
                write!(f, "failed to read font file {}: {source}", path.display())
            }
            Self::Unreadable { family, reason } => {
                write!(f, "matched font for family {family:?} could not be read: {reason}")
            }
            Self::NotSupported => f.write_str("font lookup is not supported on this platform"),
        }
    }
}

impl std::error::Error for FontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result alias for font operations.
pub type Result<T> = std::result::Result<T, FontError>;
