//! Label font loading.

use std::path::Path;

use rusttype::{Font, Scale};
use tracing::debug;

use crate::error::{RenderError, RenderResult};

/// A font bound to a single size, shared by every label draw.
pub struct LabelFont {
    font: Font<'static>,
    size: f32,
}

impl LabelFont {
    /// Load a TrueType/OpenType font file at the given pixel size.
    pub fn load(path: impl AsRef<Path>, size: f32) -> RenderResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| RenderError::FontLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let font = Font::try_from_vec(data)
            .ok_or_else(|| RenderError::FontParse(path.to_path_buf()))?;

        debug!(path = %path.display(), size, "Loaded label font");
        Ok(Self { font, size })
    }

    pub fn font(&self) -> &Font<'static> {
        &self.font
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn scale(&self) -> Scale {
        Scale::uniform(self.size)
    }
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelFont")
            .field("glyphs", &self.font.glyph_count())
            .field("size", &self.size)
            .finish()
    }
}
