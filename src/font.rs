use crate::{metrics::GlyphMetrics, Result};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace, Rect};

/// A parsed font object. Fonts can be TTF or OTF fonts. The font is only used to measure
/// text; the generated SVG refers to it by family name and never embeds it.
///
/// A `Font` is immutable once loaded, so a single instance can be shared between any
/// number of concurrent renders.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Read and load a font file from disk
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Font> {
        let bytes = std::fs::read(path)?;
        Font::load(bytes)
    }

    /// Obtain the family name of the font, if the font carries one
    pub fn family(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }
}

impl GlyphMetrics for Font {
    fn units_per_em(&self) -> u16 {
        self.face.as_face_ref().units_per_em()
    }

    fn glyph_index(&self, ch: char) -> Option<GlyphId> {
        self.face.as_face_ref().glyph_index(ch)
    }

    fn glyph_advance(&self, glyph: GlyphId) -> Option<u16> {
        self.face.as_face_ref().glyph_hor_advance(glyph)
    }

    fn glyph_bounds(&self, glyph: GlyphId) -> Option<Rect> {
        self.face.as_face_ref().glyph_bounding_box(glyph)
    }
}
