//! A stand-in typeface with Helvetica-like proportions, so tests don't depend on a font
//! file being installed.

use label_gen::owned_ttf_parser::{GlyphId, Rect};
use label_gen::GlyphMetrics;

pub struct FakeSans;

impl FakeSans {
    fn advance_of(ch: char) -> u16 {
        match ch {
            ' ' => 278,
            'i' | 'j' | 'l' | '.' | ',' | '\'' => 222,
            'f' | 't' | 'r' | 'I' => 300,
            'm' | 'M' => 833,
            'w' | 'W' => 944,
            'A'..='Z' => 667,
            _ => 556,
        }
    }
}

impl GlyphMetrics for FakeSans {
    fn units_per_em(&self) -> u16 {
        1000
    }

    /// Glyph 0 is `.notdef`; printable ASCII maps to `code - 31`; everything else is
    /// missing
    fn glyph_index(&self, ch: char) -> Option<GlyphId> {
        (' '..='~').contains(&ch).then(|| GlyphId(ch as u16 - 31))
    }

    fn glyph_advance(&self, glyph: GlyphId) -> Option<u16> {
        let ch = char::from_u32(glyph.0 as u32 + 31)?;
        Some(FakeSans::advance_of(ch))
    }

    fn glyph_bounds(&self, glyph: GlyphId) -> Option<Rect> {
        let ch = char::from_u32(glyph.0 as u32 + 31)?;
        let (y_min, y_max) = match ch {
            ' ' => return None,
            'g' | 'j' | 'p' | 'q' | 'y' => (-210, 523),
            'b' | 'd' | 'f' | 'h' | 'k' | 'l' | 't' => (0, 718),
            'A'..='Z' | '0'..='9' => (0, 718),
            _ => (0, 523),
        };
        Some(Rect {
            x_min: 0,
            y_min,
            x_max: FakeSans::advance_of(ch) as i16,
            y_max,
        })
    }
}
