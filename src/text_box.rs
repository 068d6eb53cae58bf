use crate::units::*;
use serde::{Deserialize, Serialize};

/// The placement and footprint of one text field on a label.
///
/// `x` and `y` are the anchor of the rendered text: text is centred horizontally on `x`
/// and sits on a baseline at `y`. `width` and `height` bound how large the text may grow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBox {
    /// Horizontal centre of the text
    pub x: Mm,
    /// Baseline of the text
    pub y: Mm,
    /// The widest the text may be
    pub width: Mm,
    /// The tallest the text may be; also the largest font size used
    pub height: Mm,
    /// Name of the field whose value is drawn in this box
    pub field: String,
}

impl TextBox {
    /// Create a box for `field`, anchored at `x`, `y` and bounded by `width` × `height`
    pub fn new<S: Into<String>>(field: S, x: Mm, y: Mm, width: Mm, height: Mm) -> TextBox {
        TextBox {
            x,
            y,
            width,
            height,
            field: field.into(),
        }
    }

    /// Left edge of the box footprint, given that `x` is its centre
    pub fn left(&self) -> Mm {
        self.x - self.width / 2.0
    }

    /// Top edge of the box footprint, given that `y` is the text baseline
    pub fn top(&self) -> Mm {
        self.y - self.height
    }
}
