use crate::metrics::{TextMetrics, REFERENCE_SIZE};
use crate::text_box::TextBox;

/// Converts an advance measured at [REFERENCE_SIZE] back into a font size. Measurements
/// are scaled to `REFERENCE_SIZE` units per em, so a string measuring `advance` renders
/// `advance * size / REFERENCE_SIZE` wide at `size`.
pub const FIT_SCALE: f64 = REFERENCE_SIZE;

/// Calculates the largest font size at which text with the given `metrics` spans no more
/// than the width of `bounds`, capped at the height of `bounds`.
///
/// Text that measured no width at all (an empty string, or one with no glyphs in the
/// font) would divide by zero; it gets the box height instead. A box with no width gets
/// a font size of zero. The result is never negative.
pub fn fit_font_size(bounds: &TextBox, metrics: &TextMetrics) -> f64 {
    let height = bounds.height.non_negative().get();
    if metrics.advance_width == 0 {
        return height;
    }

    let width = bounds.width.non_negative().get();
    let size = FIT_SCALE * width / metrics.advance_width as f64;
    size.min(height)
}
