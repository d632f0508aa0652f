//! Backend for platforms without a font lookup service.

use super::{FontFamily, FontMatch, FontSource};
use crate::error::{FontError, Result};

/// Every lookup fails with [`FontError::NotSupported`].
#[derive(Debug, Default)]
pub struct UnsupportedSource;

impl UnsupportedSource {
    pub fn new() -> Self {
        Self
    }
}

impl FontSource for UnsupportedSource {
    fn match_font(&self, _family: &str, _style: Option<&str>) -> Result<Option<FontMatch>> {
        Err(FontError::NotSupported)
    }

    fn available_fonts(&self) -> Result<Vec<FontFamily>> {
        Err(FontError::NotSupported)
    }
}
