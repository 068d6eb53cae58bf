//! Measuring strings against a typeface at a fixed reference size.

use owned_ttf_parser::{GlyphId, Rect};

/// The size, in units per em, that all measurements are scaled to before fitting.
/// [fit_font_size](crate::layout::fit_font_size) divides by measurements taken at this
/// size, so the two must always agree.
pub const REFERENCE_SIZE: f64 = 1024.0;

/// Read-only access to the glyph data needed to measure text. [Font](crate::Font)
/// is the usual implementation; anything else that can answer these questions (a
/// cached metrics table, a test double) can be measured just the same.
pub trait GlyphMetrics {
    /// The number of font design units in one em
    fn units_per_em(&self) -> u16;

    /// Map a character to its glyph, if the typeface has one
    fn glyph_index(&self, ch: char) -> Option<GlyphId>;

    /// Horizontal advance of a glyph, in font units
    fn glyph_advance(&self, glyph: GlyphId) -> Option<u16>;

    /// Outline bounds of a glyph, in font units. Glyphs without an outline (such as
    /// spaces) have no bounds
    fn glyph_bounds(&self, glyph: GlyphId) -> Option<Rect>;
}

/// The size of a string at [REFERENCE_SIZE], rounded to whole units
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct TextMetrics {
    /// Sum of the advances of every glyph in the string
    pub advance_width: u32,
    /// The tallest glyph outline in the string
    pub max_glyph_height: u32,
}

/// Measure `text` at [REFERENCE_SIZE].
///
/// Advances are summed glyph by glyph with no kerning applied. Characters the typeface
/// has no glyph for (including those mapped to `.notdef`) are skipped: they add neither
/// width nor height. An empty string, or one made only of such characters, measures zero.
pub fn measure<M: GlyphMetrics + ?Sized>(font: &M, text: &str) -> TextMetrics {
    let units_per_em = font.units_per_em();
    if units_per_em == 0 {
        log::warn!("typeface reports 0 units per em, treating {text:?} as empty");
        return TextMetrics::default();
    }
    let scaling = REFERENCE_SIZE / units_per_em as f64;

    let mut advance = 0.0;
    let mut height: f64 = 0.0;
    for ch in text.chars() {
        let Some(gid) = font.glyph_index(ch).filter(|gid| gid.0 > 0) else {
            log::trace!("no glyph for {ch:?}, skipping");
            continue;
        };
        let Some(h_advance) = font.glyph_advance(gid) else {
            continue;
        };

        advance += h_advance as f64 * scaling;
        if let Some(bbox) = font.glyph_bounds(gid) {
            let extent = (bbox.y_max as f64 - bbox.y_min as f64).max(0.0);
            height = height.max(extent * scaling);
        }
    }

    let metrics = TextMetrics {
        advance_width: advance.round() as u32,
        max_glyph_height: height.round() as u32,
    };
    log::debug!(
        "measured {text:?}: length {}, height {}",
        metrics.advance_width,
        metrics.max_glyph_height
    );
    metrics
}
